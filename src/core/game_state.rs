use crate::config::GameConfig;
use crate::core::constants::DEFAULT_PLAYER_NAME;
use crate::io::OutputSink;
use crate::items::{Equipment, Inventory, ItemKind, ItemTemplate};
use crate::locations::Location;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Everything about the player that changes during a game.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerState {
    pub name: String,
    /// Always within [0, 100]. Change it through `combat::update_health`.
    pub health: u32,
    pub gold: u32,
    pub location: Location,
    pub inventory: Inventory,
    /// Derived from `inventory`; see [`PlayerState::refresh_equipment`].
    pub equipment: Equipment,
    pub has_potion: bool,
}

impl PlayerState {
    /// Creates a player with the configured starting stats in the village.
    pub fn new(name: Option<&str>, config: &GameConfig) -> Self {
        Self {
            name: resolve_name(name),
            health: config.starting_health,
            gold: config.starting_gold,
            location: Location::Village,
            inventory: Inventory::new(),
            equipment: Equipment::new(),
            has_potion: false,
        }
    }

    pub fn is_alive(&self) -> bool {
        self.health > 0
    }

    /// Re-derives equipped weapon and armor from what is owned.
    pub fn refresh_equipment(&mut self) {
        self.equipment = Equipment::from_inventory(&self.inventory);
    }

    /// Adds a copy of `item` to the inventory and re-derives equipment.
    pub fn add_item(&mut self, item: ItemTemplate) {
        if item.kind == ItemKind::Potion {
            self.has_potion = true;
        }
        self.inventory.add(item);
        self.refresh_equipment();
    }

    /// The lair gate: owns a weapon as strong as the top-tier one, and any armor.
    pub fn has_dragon_gear(&self, top_tier_weapon: Option<&ItemTemplate>) -> bool {
        let has_weapon = top_tier_weapon.is_some_and(|top| {
            self.inventory
                .best_of_kind(ItemKind::Weapon)
                .is_some_and(|weapon| weapon.effect >= top.effect)
        });
        has_weapon && self.inventory.has_kind(ItemKind::Armor)
    }
}

/// Blank or missing names become "Player".
pub fn resolve_name(name: Option<&str>) -> String {
    match name.map(str::trim) {
        Some(name) if !name.is_empty() => name.to_string(),
        _ => DEFAULT_PLAYER_NAME.to_string(),
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SessionStatus {
    Running,
    /// The dragon is dead
    Won,
    /// Health reached 0
    Defeated,
    Quit,
}

impl SessionStatus {
    pub fn is_over(&self) -> bool {
        !matches!(self, SessionStatus::Running)
    }
}

/// One playthrough. Independent sessions share nothing.
#[derive(Debug, Clone)]
pub struct Session {
    pub id: Uuid,
    pub started_at: DateTime<Utc>,
    pub player: PlayerState,
    pub status: SessionStatus,
    pub config: GameConfig,
}

impl Session {
    /// Starts a fresh game and prints the introductory banner.
    pub fn new_game(name: Option<&str>, config: GameConfig, out: &mut impl OutputSink) -> Self {
        let player = PlayerState::new(name, &config);
        let session = Self {
            id: Uuid::new_v4(),
            started_at: Utc::now(),
            player,
            status: SessionStatus::Running,
            config,
        };
        tracing::info!(session = %session.id, player = %session.player.name, "new game");
        session.show_banner(out);
        session
    }

    /// Throws away all progress and starts over under a new session id.
    pub fn restart(&mut self, name: Option<&str>, out: &mut impl OutputSink) {
        let config = self.config.clone();
        *self = Self::new_game(name, config, out);
    }

    pub fn is_running(&self) -> bool {
        !self.status.is_over()
    }

    pub fn catalog(&self) -> &[ItemTemplate] {
        &self.config.catalog
    }

    fn show_banner(&self, out: &mut impl OutputSink) {
        out.write_line("=================================");
        out.write_line("       The Dragon's Quest        ");
        out.write_line("=================================");
        out.write_line("\nYour quest: Defeat the dragon in the mountains!");
        out.write_line(&format!("\nWelcome, {}!", self.player.name));
        out.write_line(&format!("You start with {} gold.", self.player.gold));
    }
}
