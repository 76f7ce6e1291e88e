use super::inventory::Inventory;
use super::types::{ItemKind, ItemTemplate};
use serde::{Deserialize, Serialize};

/// What the player fights with. Always derived from the inventory via
/// [`Equipment::from_inventory`]; there is no manual equip.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Equipment {
    pub weapon: Option<ItemTemplate>,
    pub armor: Option<ItemTemplate>,
}

impl Equipment {
    pub fn new() -> Self {
        Self {
            weapon: None,
            armor: None,
        }
    }

    /// Picks the highest-effect weapon and armor currently owned.
    pub fn from_inventory(inventory: &Inventory) -> Self {
        Self {
            weapon: inventory.best_of_kind(ItemKind::Weapon).cloned(),
            armor: inventory.best_of_kind(ItemKind::Armor).cloned(),
        }
    }

    pub fn get(&self, kind: ItemKind) -> Option<&ItemTemplate> {
        match kind {
            ItemKind::Weapon => self.weapon.as_ref(),
            ItemKind::Armor => self.armor.as_ref(),
            ItemKind::Potion => None,
        }
    }

    /// Damage dealt per strike, 0 when unarmed.
    pub fn attack(&self) -> u32 {
        self.weapon.as_ref().map_or(0, |w| w.effect)
    }

    /// Damage blocked per hit, 0 without armor.
    pub fn protection(&self) -> u32 {
        self.armor.as_ref().map_or(0, |a| a.effect)
    }
}
