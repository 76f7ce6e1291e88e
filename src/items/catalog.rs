//! The fixed item catalog and lookups over any slice of templates.

use super::types::{ItemKind, ItemTemplate};
use crate::core::constants::HEALING_POTION_VALUE;

/// Returns the catalog every new game starts with, in shop display order.
pub fn default_catalog() -> Vec<ItemTemplate> {
    vec![
        ItemTemplate::new(
            "Sword",
            ItemKind::Weapon,
            10,
            10,
            "A basic sword. Increases your attack power.",
        ),
        ItemTemplate::new(
            "Steel Sword",
            ItemKind::Weapon,
            25,
            20,
            "A sharp steel sword. Deals more damage than a basic sword.",
        ),
        ItemTemplate::new(
            "Wooden Shield",
            ItemKind::Armor,
            8,
            5,
            "Reduces damage taken in combat.",
        ),
        ItemTemplate::new(
            "Iron Shield",
            ItemKind::Armor,
            18,
            10,
            "A sturdy iron shield. Offers better protection.",
        ),
        ItemTemplate::new(
            "Health Potion",
            ItemKind::Potion,
            5,
            HEALING_POTION_VALUE,
            "Restores 30 health.",
        ),
    ]
}

/// Picks the highest-effect item. Ties go to the earliest item.
pub fn best_by_effect<'a, I>(items: I) -> Option<&'a ItemTemplate>
where
    I: IntoIterator<Item = &'a ItemTemplate>,
{
    items
        .into_iter()
        .reduce(|best, item| if item.effect > best.effect { item } else { best })
}

pub fn items_of_kind(catalog: &[ItemTemplate], kind: ItemKind) -> Vec<&ItemTemplate> {
    catalog.iter().filter(|item| item.kind == kind).collect()
}

pub fn find_item<'a>(catalog: &'a [ItemTemplate], name: &str) -> Option<&'a ItemTemplate> {
    catalog.iter().find(|item| item.name == name)
}

/// The weapon required to face the dragon: the strongest one on sale.
pub fn top_tier_weapon(catalog: &[ItemTemplate]) -> Option<&ItemTemplate> {
    best_by_effect(catalog.iter().filter(|item| item.kind == ItemKind::Weapon))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_catalog_contents() {
        let catalog = default_catalog();
        assert_eq!(catalog.len(), 5);
        assert_eq!(items_of_kind(&catalog, ItemKind::Weapon).len(), 2);
        assert_eq!(items_of_kind(&catalog, ItemKind::Armor).len(), 2);
        assert_eq!(items_of_kind(&catalog, ItemKind::Potion).len(), 1);
    }

    #[test]
    fn test_default_catalog_names_unique() {
        let catalog = default_catalog();
        for (i, item) in catalog.iter().enumerate() {
            assert!(
                catalog[i + 1..].iter().all(|other| other.name != item.name),
                "{} appears twice",
                item.name
            );
        }
    }

    #[test]
    fn test_top_tier_weapon_is_steel_sword() {
        let catalog = default_catalog();
        assert_eq!(top_tier_weapon(&catalog).unwrap().name, "Steel Sword");
    }

    #[test]
    fn test_top_tier_weapon_none_without_weapons() {
        let catalog: Vec<ItemTemplate> = default_catalog()
            .into_iter()
            .filter(|item| item.kind != ItemKind::Weapon)
            .collect();
        assert!(top_tier_weapon(&catalog).is_none());
    }

    #[test]
    fn test_best_by_effect_prefers_first_on_tie() {
        let a = ItemTemplate::new("A", ItemKind::Armor, 1, 5, "");
        let b = ItemTemplate::new("B", ItemKind::Armor, 1, 5, "");
        let items = [a, b];
        assert_eq!(best_by_effect(items.iter()).unwrap().name, "A");
    }

    #[test]
    fn test_best_by_effect_empty() {
        let items: [ItemTemplate; 0] = [];
        assert!(best_by_effect(items.iter()).is_none());
    }

    #[test]
    fn test_find_item() {
        let catalog = default_catalog();
        assert_eq!(find_item(&catalog, "Iron Shield").unwrap().effect, 10);
        assert!(find_item(&catalog, "Mithril Axe").is_none());
    }
}
