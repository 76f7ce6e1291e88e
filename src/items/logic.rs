//! Using and listing owned items.

use super::types::ItemKind;
use crate::combat::update_health;
use crate::core::constants::HEALING_POTION_VALUE;
use crate::core::game_state::PlayerState;
use crate::io::OutputSink;

/// Drinks a potion if one is ready. Returns whether anything was used.
pub fn use_item(player: &mut PlayerState, out: &mut impl OutputSink) -> bool {
    if !player.has_potion {
        out.write_line("You don't have any usable items!");
        return false;
    }

    let potion = player.inventory.take_first_of_kind(ItemKind::Potion);
    let (name, healing) = potion.map_or_else(
        || ("healing potion".to_string(), HEALING_POTION_VALUE),
        |p| (p.name.to_lowercase(), p.effect),
    );

    out.write_line(&format!("You drink the {}.", name));
    update_health(player, i64::from(healing), out);
    player.has_potion = false;
    player.refresh_equipment();
    tracing::info!(healing, health = player.health, "potion used");
    true
}

/// Read-only listing of owned items and what is equipped.
pub fn inventory_lines(player: &PlayerState) -> Vec<String> {
    let mut lines = vec!["\n=== INVENTORY ===".to_string()];
    if player.inventory.is_empty() && !player.has_potion {
        lines.push("Your inventory is empty!".to_string());
        return lines;
    }

    lines.extend(
        player
            .inventory
            .items()
            .iter()
            .map(|item| format!("- {} ({}, effect: {})", item.name, item.kind, item.effect)),
    );
    if player.has_potion {
        lines.push("* Potion ready to drink".to_string());
    }
    if let Some(weapon) = &player.equipment.weapon {
        lines.push(format!("* Equipped Weapon: {}", weapon.name));
    }
    if let Some(armor) = &player.equipment.armor {
        lines.push(format!("* Equipped Armor: {}", armor.name));
    }
    lines
}

pub fn check_inventory(player: &PlayerState, out: &mut impl OutputSink) {
    for line in inventory_lines(player) {
        out.write_line(&line);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::GameConfig;
    use crate::items::find_item;

    fn player_with(names: &[&str]) -> PlayerState {
        let config = GameConfig::default();
        let mut player = PlayerState::new(None, &config);
        for name in names {
            player.add_item(find_item(&config.catalog, name).unwrap().clone());
        }
        player
    }

    #[test]
    fn test_use_item_without_potion() {
        let mut player = player_with(&[]);
        player.health = 50;
        let mut out: Vec<String> = Vec::new();

        assert!(!use_item(&mut player, &mut out));
        assert_eq!(player.health, 50);
        assert_eq!(out, vec!["You don't have any usable items!"]);
    }

    #[test]
    fn test_use_potion_heals_and_consumes() {
        let mut player = player_with(&["Sword", "Health Potion"]);
        player.health = 50;
        let mut out: Vec<String> = Vec::new();

        assert!(use_item(&mut player, &mut out));
        assert_eq!(player.health, 80);
        assert!(!player.has_potion);
        assert!(!player.inventory.has_kind(ItemKind::Potion));
        assert_eq!(player.inventory.len(), 1);
        assert!(out.contains(&"You drink the health potion.".to_string()));
        assert!(out.contains(&"Health is now: 80".to_string()));
    }

    #[test]
    fn test_use_potion_at_full_health_clamps() {
        let mut player = player_with(&["Health Potion"]);
        let mut out: Vec<String> = Vec::new();
        assert!(use_item(&mut player, &mut out));
        assert_eq!(player.health, 100);
        assert!(out.contains(&"You're at full health!".to_string()));
    }

    #[test]
    fn test_use_item_removes_only_one_potion() {
        let mut player = player_with(&["Health Potion", "Health Potion"]);
        player.health = 10;
        assert!(use_item(&mut player, &mut Vec::<String>::new()));
        assert_eq!(player.inventory.count_of_kind(ItemKind::Potion), 1);
        assert!(!player.has_potion);
    }

    #[test]
    fn test_inventory_empty() {
        let player = player_with(&[]);
        assert_eq!(
            inventory_lines(&player),
            vec!["\n=== INVENTORY ===", "Your inventory is empty!"]
        );
    }

    #[test]
    fn test_inventory_listing() {
        let player = player_with(&["Sword", "Iron Shield", "Steel Sword"]);
        let lines = inventory_lines(&player);
        assert_eq!(lines[1], "- Sword (weapon, effect: 10)");
        assert_eq!(lines[2], "- Iron Shield (armor, effect: 10)");
        assert_eq!(lines[3], "- Steel Sword (weapon, effect: 20)");
        assert!(lines.contains(&"* Equipped Weapon: Steel Sword".to_string()));
        assert!(lines.contains(&"* Equipped Armor: Iron Shield".to_string()));
    }

    #[test]
    fn test_check_inventory_is_read_only() {
        let player = player_with(&["Health Potion", "Wooden Shield"]);
        let before = player.clone();
        let mut out: Vec<String> = Vec::new();
        check_inventory(&player, &mut out);
        assert_eq!(player, before);
        assert!(out.contains(&"* Potion ready to drink".to_string()));
    }
}
