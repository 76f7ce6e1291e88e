use super::types::{damage_after_armor, CombatOutcome, Monster};
use crate::core::constants::{MAX_HEALTH, MIN_HEALTH};
use crate::core::game_state::{PlayerState, Session, SessionStatus};
use crate::io::OutputSink;

/// Applies a signed health change, clamped to [0, 100]. Returns the new health.
pub fn update_health(player: &mut PlayerState, delta: i64, out: &mut impl OutputSink) -> u32 {
    let raw = i64::from(player.health).saturating_add(delta);

    if raw > i64::from(MAX_HEALTH) {
        out.write_line("You're at full health!");
    }
    if raw < i64::from(MIN_HEALTH) {
        out.write_line("You're gravely wounded!");
    }

    player.health = raw.clamp(i64::from(MIN_HEALTH), i64::from(MAX_HEALTH)) as u32;
    out.write_line(&format!("Health is now: {}", player.health));
    player.health
}

fn announce_equipment(player: &PlayerState, out: &mut impl OutputSink) {
    match &player.equipment.weapon {
        Some(weapon) => out.write_line(&format!(
            "You wield your {} (damage: {})!",
            weapon.name, weapon.effect
        )),
        None => out.write_line("You have no weapon!"),
    }
    match &player.equipment.armor {
        Some(armor) => out.write_line(&format!(
            "You brace with your {} (protection: {})!",
            armor.name, armor.effect
        )),
        None => out.write_line("You have no armor!"),
    }
}

/// Fights one encounter to its end.
///
/// Equipment is re-derived first. The player strikes once; a surviving
/// monster strikes back once. A dragon met without the top-tier weapon and
/// armor gets a free hit and no strike is made. Routing the player afterwards
/// is left to the caller.
pub fn resolve_encounter(
    session: &mut Session,
    mut monster: Monster,
    out: &mut impl OutputSink,
) -> CombatOutcome {
    let player = &mut session.player;
    player.refresh_equipment();
    announce_equipment(player, out);

    let protection = player.equipment.protection();

    if monster.is_dragon() {
        // Compared by effect, as in the lair gate
        let wields_top = session.config.top_tier_weapon().is_some_and(|top| {
            player
                .equipment
                .weapon
                .as_ref()
                .is_some_and(|w| w.effect >= top.effect)
        });
        if !wields_top || player.equipment.armor.is_none() {
            out.write_line("The dragon shrugs off your feeble attack! You are not well-equipped!");
            let damage_taken = damage_after_armor(monster.damage, protection);
            out.write_line(&format!(
                "The dragon deals {} damage. Your armor blocks {}. You take {} damage!",
                monster.damage, protection, damage_taken
            ));
            update_health(player, -i64::from(damage_taken), out);
            if !player.is_alive() {
                session.status = SessionStatus::Defeated;
            }
            tracing::info!(damage_taken, "unprepared for the dragon");
            return CombatOutcome::Unprepared { damage_taken };
        }
    }

    let attack = player.equipment.attack();
    if attack > 0 {
        out.write_line(&format!("You attack the {} for {} damage!", monster.name, attack));
        monster.take_damage(attack);
    } else {
        out.write_line(&format!("You can't hurt the {} without a weapon!", monster.name));
    }

    if !monster.is_alive() {
        let gold_reward = monster.gold_reward();
        player.gold = player.gold.saturating_add(gold_reward);
        if monster.is_dragon() {
            out.write_line("You have slain the DRAGON! You win the game!");
            session.status = SessionStatus::Won;
        } else {
            out.write_line(&format!("Victory! You found {} gold!", gold_reward));
        }
        tracing::info!(monster = %monster.name, gold_reward, "monster defeated");
        return CombatOutcome::Victory { gold_reward };
    }

    let damage_taken = damage_after_armor(monster.damage, protection);
    out.write_line(&format!(
        "{} attacks! It deals {} damage. Your armor blocks {}. You take {} damage!",
        monster.name, monster.damage, protection, damage_taken
    ));
    update_health(player, -i64::from(damage_taken), out);

    if player.is_alive() {
        out.write_line("You barely escape with your life!");
        tracing::info!(monster = %monster.name, damage_taken, "retreated");
        CombatOutcome::Retreat { damage_taken }
    } else {
        out.write_line("You have been defeated in battle!");
        session.status = SessionStatus::Defeated;
        tracing::info!(monster = %monster.name, damage_taken, "player defeated");
        CombatOutcome::Defeat { damage_taken }
    }
}
