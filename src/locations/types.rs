use crate::shop::ShopKind;
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Location {
    Village,
    Blacksmith,
    Market,
    Forest,
    Mountain,
}

impl Location {
    pub const ALL: [Location; 5] = [
        Location::Village,
        Location::Blacksmith,
        Location::Market,
        Location::Forest,
        Location::Mountain,
    ];

    /// Lowercase name, as shown in the status block.
    pub fn name(&self) -> &'static str {
        match self {
            Location::Village => "village",
            Location::Blacksmith => "blacksmith",
            Location::Market => "market",
            Location::Forest => "forest",
            Location::Mountain => "mountain",
        }
    }
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// What picking a menu option does.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuAction {
    /// Walk somewhere safe, printing `message` on arrival
    Travel {
        to: Location,
        message: &'static str,
    },
    /// Walk into the forest and meet its monster
    EnterForest,
    /// Try the lair gate, then face the dragon
    EnterLair,
    Shop(ShopKind),
    /// Status block followed by the inventory listing
    Status,
    UseItem,
    Help,
    Quit,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MenuOption {
    pub label: &'static str,
    pub action: MenuAction,
}
