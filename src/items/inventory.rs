use super::catalog::best_by_effect;
use super::types::{ItemKind, ItemTemplate};
use serde::{Deserialize, Serialize};

/// Items the player owns, in the order they were acquired. Duplicates allowed.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Inventory {
    items: Vec<ItemTemplate>,
}

impl Inventory {
    pub fn new() -> Self {
        Self { items: Vec::new() }
    }

    pub fn add(&mut self, item: ItemTemplate) {
        self.items.push(item);
    }

    pub fn items(&self) -> &[ItemTemplate] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn items_of_kind(&self, kind: ItemKind) -> impl Iterator<Item = &ItemTemplate> {
        self.items.iter().filter(move |item| item.kind == kind)
    }

    pub fn count_of_kind(&self, kind: ItemKind) -> usize {
        self.items_of_kind(kind).count()
    }

    pub fn has_kind(&self, kind: ItemKind) -> bool {
        self.items_of_kind(kind).next().is_some()
    }

    /// Highest-effect owned item of `kind`, earliest acquired on ties.
    pub fn best_of_kind(&self, kind: ItemKind) -> Option<&ItemTemplate> {
        best_by_effect(self.items_of_kind(kind))
    }

    /// Removes and returns the earliest acquired item of `kind`.
    pub fn take_first_of_kind(&mut self, kind: ItemKind) -> Option<ItemTemplate> {
        let index = self.items.iter().position(|item| item.kind == kind)?;
        Some(self.items.remove(index))
    }
}
