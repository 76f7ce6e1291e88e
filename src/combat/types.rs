use crate::core::constants::*;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MonsterKind {
    /// Lurks in the forest
    Regular,
    /// Guards the mountain lair
    Dragon,
}

/// An opponent built fresh for each encounter.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Monster {
    pub name: String,
    pub kind: MonsterKind,
    pub health: u32,
    pub damage: u32,
}

impl Monster {
    pub fn new(name: &str, kind: MonsterKind, health: u32, damage: u32) -> Self {
        Self {
            name: name.to_string(),
            kind,
            health,
            damage,
        }
    }

    pub fn regular() -> Self {
        Self::new(MONSTER_NAME, MonsterKind::Regular, MONSTER_HEALTH, MONSTER_DAMAGE)
    }

    pub fn dragon() -> Self {
        Self::new(DRAGON_NAME, MonsterKind::Dragon, DRAGON_HEALTH, DRAGON_DAMAGE)
    }

    pub fn is_dragon(&self) -> bool {
        self.kind == MonsterKind::Dragon
    }

    pub fn is_alive(&self) -> bool {
        self.health > 0
    }

    pub fn take_damage(&mut self, amount: u32) {
        self.health = self.health.saturating_sub(amount);
    }

    /// Gold granted for killing this monster.
    pub fn gold_reward(&self) -> u32 {
        match self.kind {
            MonsterKind::Regular => MONSTER_GOLD_REWARD,
            MonsterKind::Dragon => DRAGON_GOLD_REWARD,
        }
    }
}

/// How a single encounter ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CombatOutcome {
    /// First strike killed the monster
    Victory { gold_reward: u32 },
    /// Monster survived and hit back, player still standing
    Retreat { damage_taken: u32 },
    /// Monster's counter-attack brought health to 0
    Defeat { damage_taken: u32 },
    /// Faced the dragon without the right gear; no strike was made
    Unprepared { damage_taken: u32 },
}

impl CombatOutcome {
    pub fn is_victory(&self) -> bool {
        matches!(self, CombatOutcome::Victory { .. })
    }

    pub fn damage_taken(&self) -> u32 {
        match *self {
            CombatOutcome::Victory { .. } => 0,
            CombatOutcome::Retreat { damage_taken }
            | CombatOutcome::Defeat { damage_taken }
            | CombatOutcome::Unprepared { damage_taken } => damage_taken,
        }
    }
}

/// Damage that gets through armor. Never less than [`MIN_DAMAGE_TAKEN`].
pub fn damage_after_armor(damage: u32, protection: u32) -> u32 {
    damage.saturating_sub(protection).max(MIN_DAMAGE_TAKEN)
}
