use crate::input::ChoiceError;
use crate::items::{ItemKind, ItemTemplate};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ShopKind {
    /// Weapons and armor
    Blacksmith,
    /// Potions
    Market,
}

impl ShopKind {
    pub fn sells(&self, kind: ItemKind) -> bool {
        match self {
            ShopKind::Blacksmith => kind.is_equippable(),
            ShopKind::Market => kind == ItemKind::Potion,
        }
    }

    /// Items on offer, in catalog order.
    pub fn stock<'a>(&self, catalog: &'a [ItemTemplate]) -> Vec<&'a ItemTemplate> {
        catalog.iter().filter(|item| self.sells(item.kind)).collect()
    }

    pub fn greeting(&self) -> &'static str {
        match self {
            ShopKind::Blacksmith => "\nBlacksmith: 'Welcome! What would you like to buy?'",
            ShopKind::Market => "\nMerchant: 'Welcome! Here are my wares:'",
        }
    }

    pub fn sold_out_message(&self) -> &'static str {
        match self {
            ShopKind::Blacksmith => "The blacksmith has nothing for sale.",
            ShopKind::Market => "No potions available at the market.",
        }
    }

    /// One numbered stock line. The market also shows descriptions.
    pub fn listing(&self, number: usize, item: &ItemTemplate) -> String {
        match self {
            ShopKind::Blacksmith => format!("{}: {} ({} gold)", number, item.name, item.cost),
            ShopKind::Market => format!(
                "{}: {} ({} gold) - {}",
                number, item.name, item.cost, item.description
            ),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PurchaseResult {
    Purchased(ItemTemplate),
    InsufficientGold { cost: u32, gold: u32 },
    Cancelled,
    Invalid(ChoiceError),
    SoldOut,
}

impl PurchaseResult {
    pub fn is_purchase(&self) -> bool {
        matches!(self, PurchaseResult::Purchased(_))
    }
}
