//! The Mover: turns a menu choice at the current location into an action.

use super::data::menu_options;
use super::render::show_status;
use super::types::{Location, MenuAction};
use crate::combat::{resolve_encounter, CombatOutcome, Monster};
use crate::core::game_state::{Session, SessionStatus};
use crate::help::show_help;
use crate::input::{parse_choice, ChoiceError};
use crate::io::Console;
use crate::items::{check_inventory, use_item};
use crate::shop::visit_shop;

/// What a single menu choice led to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MoveOutcome {
    /// Choice rejected, nothing changed
    Invalid(ChoiceError),
    /// A sub-menu ran (shop, status, use item, help); location unchanged
    Stayed,
    Moved { from: Location, to: Location },
    /// The lair gate turned the player away
    Blocked,
    /// A fight happened; `location` is where the player ended up
    Encounter {
        outcome: CombatOutcome,
        location: Location,
    },
    Quit,
}

impl MoveOutcome {
    /// True when the player changed location or entered a fight.
    pub fn is_movement(&self) -> bool {
        matches!(self, MoveOutcome::Moved { .. } | MoveOutcome::Encounter { .. })
    }
}

/// Dispatches one raw menu choice for the player's current location.
pub fn move_player(session: &mut Session, input: &str, io: &mut impl Console) -> MoveOutcome {
    let location = session.player.location;
    let options = menu_options(location);

    // parse_choice bounds the number to 1..=options.len()
    let action = match parse_choice(input, options.len()) {
        Ok(choice) => options[choice - 1].action,
        Err(e) => return reject(e, io),
    };

    tracing::debug!(%location, ?action, "menu choice");
    match action {
        MenuAction::Travel { to, message } => {
            session.player.location = to;
            io.write_line(&format!("\n{}", message));
            tracing::info!(from = %location, %to, "moved");
            MoveOutcome::Moved { from: location, to }
        }
        MenuAction::EnterForest => enter_forest(session, io),
        MenuAction::EnterLair => enter_lair(session, io),
        MenuAction::Shop(kind) => {
            visit_shop(kind, session, io);
            MoveOutcome::Stayed
        }
        MenuAction::Status => {
            show_status(&session.player, io);
            check_inventory(&session.player, io);
            MoveOutcome::Stayed
        }
        MenuAction::UseItem => {
            use_item(&mut session.player, io);
            MoveOutcome::Stayed
        }
        MenuAction::Help => {
            show_help(io);
            MoveOutcome::Stayed
        }
        MenuAction::Quit => {
            session.status = SessionStatus::Quit;
            tracing::info!("player quit");
            MoveOutcome::Quit
        }
    }
}

fn reject(e: ChoiceError, io: &mut impl Console) -> MoveOutcome {
    io.write_line(&format!("Invalid choice: {}. No action taken.", e));
    tracing::debug!(error = %e, "rejected menu choice");
    MoveOutcome::Invalid(e)
}

/// Arriving in the forest always starts a fight. Anything but a win sends
/// the player back to the village.
fn enter_forest(session: &mut Session, io: &mut impl Console) -> MoveOutcome {
    session.player.location = Location::Forest;
    io.write_line("\nYou venture into the forest...");
    io.write_line("\nA monster appears!");

    let outcome = resolve_encounter(session, Monster::regular(), io);
    if !outcome.is_victory() {
        session.player.location = Location::Village;
    }
    MoveOutcome::Encounter {
        outcome,
        location: session.player.location,
    }
}

fn enter_lair(session: &mut Session, io: &mut impl Console) -> MoveOutcome {
    let top_tier = session.config.top_tier_weapon();
    if !session.player.has_dragon_gear(top_tier) {
        let weapon = top_tier.map_or("better weapon", |w| w.name.as_str());
        io.write_line(&format!(
            "You feel unprepared. You need a {} and some armor to face the dragon!",
            weapon
        ));
        tracing::debug!("lair gate blocked entry");
        return MoveOutcome::Blocked;
    }

    io.write_line("\nYou enter the dragon's lair...");
    let outcome = resolve_encounter(session, Monster::dragon(), io);
    if !outcome.is_victory() && session.player.is_alive() {
        session.player.location = Location::Village;
        io.write_line("\nYou barely escape the dragon and flee to the village!");
    }
    MoveOutcome::Encounter {
        outcome,
        location: session.player.location,
    }
}
