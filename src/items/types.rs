use serde::{Deserialize, Serialize};
use std::fmt;

/// What an item does when owned or used.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ItemKind {
    /// `effect` is damage dealt per strike.
    Weapon,
    /// `effect` is damage blocked per hit.
    Armor,
    /// `effect` is health restored when drunk.
    Potion,
}

impl ItemKind {
    /// Returns the lowercase display name for this kind.
    pub fn name(&self) -> &'static str {
        match self {
            ItemKind::Weapon => "weapon",
            ItemKind::Armor => "armor",
            ItemKind::Potion => "potion",
        }
    }

    /// Whether items of this kind occupy an equipment slot.
    pub fn is_equippable(&self) -> bool {
        matches!(self, ItemKind::Weapon | ItemKind::Armor)
    }
}

impl fmt::Display for ItemKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Immutable catalog definition. Inventory entries are clones of these.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ItemTemplate {
    pub name: String,
    #[serde(rename = "type")]
    pub kind: ItemKind,
    /// Price in gold
    pub cost: u32,
    /// Damage, protection, or healing depending on `kind`
    pub effect: u32,
    pub description: String,
}

impl ItemTemplate {
    pub fn new(name: &str, kind: ItemKind, cost: u32, effect: u32, description: &str) -> Self {
        Self {
            name: name.to_string(),
            kind,
            cost,
            effect,
            description: description.to_string(),
        }
    }
}
