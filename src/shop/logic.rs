use super::types::{PurchaseResult, ShopKind};
use crate::core::constants::SHOP_PROMPT;
use crate::core::game_state::{PlayerState, Session};
use crate::input::{parse_choice, ChoiceError};
use crate::io::Console;
use crate::items::ItemTemplate;

/// Buys one copy of `item` if the player can afford it.
///
/// On success gold is deducted, the copy is added and equipment re-derived.
/// Otherwise nothing changes.
pub fn purchase(player: &mut PlayerState, item: &ItemTemplate) -> PurchaseResult {
    if player.gold < item.cost {
        tracing::debug!(item = %item.name, cost = item.cost, gold = player.gold, "cannot afford");
        return PurchaseResult::InsufficientGold {
            cost: item.cost,
            gold: player.gold,
        };
    }

    player.gold -= item.cost;
    player.add_item(item.clone());
    tracing::info!(item = %item.name, cost = item.cost, gold_left = player.gold, "purchased");
    PurchaseResult::Purchased(item.clone())
}

/// Resolves a typed selection against a shop's stock without touching state.
/// The option after the last item is Cancel, returned as `Ok(None)`.
pub fn select_item<'a>(
    kind: ShopKind,
    catalog: &'a [ItemTemplate],
    input: &str,
) -> Result<Option<&'a ItemTemplate>, ChoiceError> {
    let stock = kind.stock(catalog);
    let choice = parse_choice(input, stock.len() + 1)?;
    Ok(stock.get(choice - 1).copied())
}

/// Shows the shop menu, reads one selection, and attempts the purchase.
pub fn visit_shop(kind: ShopKind, session: &mut Session, io: &mut impl Console) -> PurchaseResult {
    let stock = kind.stock(&session.config.catalog);
    if stock.is_empty() {
        io.write_line(kind.sold_out_message());
        return PurchaseResult::SoldOut;
    }

    io.write_line(kind.greeting());
    for (i, item) in stock.iter().enumerate() {
        io.write_line(&kind.listing(i + 1, item));
    }
    io.write_line(&format!("{}: Cancel", stock.len() + 1));

    let input = io.read_line(SHOP_PROMPT);
    let selected = match select_item(kind, &session.config.catalog, &input) {
        Ok(Some(item)) => item.clone(),
        Ok(None) => return PurchaseResult::Cancelled,
        Err(e) => {
            io.write_line("Invalid choice.");
            tracing::debug!(error = %e, "rejected shop selection");
            return PurchaseResult::Invalid(e);
        }
    };

    let result = purchase(&mut session.player, &selected);
    match &result {
        PurchaseResult::Purchased(item) => {
            io.write_line(&format!("You bought a {} for {} gold!", item.name, item.cost));
            io.write_line(&format!("Gold remaining: {}", session.player.gold));
        }
        PurchaseResult::InsufficientGold { .. } => io.write_line("Not enough gold!"),
        _ => {}
    }
    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::GameConfig;
    use crate::io::ScriptedIo;
    use crate::items::{find_item, ItemKind};

    fn new_session() -> Session {
        Session::new_game(None, GameConfig::default(), &mut Vec::<String>::new())
    }

    #[test]
    fn test_purchase_deducts_and_equips() {
        let mut session = new_session();
        let sword = find_item(session.catalog(), "Sword").unwrap().clone();

        let result = purchase(&mut session.player, &sword);
        assert_eq!(result, PurchaseResult::Purchased(sword.clone()));
        assert_eq!(session.player.gold, 10);
        assert_eq!(session.player.inventory.count_of_kind(ItemKind::Weapon), 1);
        assert_eq!(session.player.equipment.weapon, Some(sword));
    }

    #[test]
    fn test_purchase_exact_gold() {
        let mut session = new_session();
        session.player.gold = 8;
        let shield = find_item(session.catalog(), "Wooden Shield").unwrap().clone();
        assert!(purchase(&mut session.player, &shield).is_purchase());
        assert_eq!(session.player.gold, 0);
    }

    #[test]
    fn test_purchase_insufficient_gold_changes_nothing() {
        let mut session = new_session();
        let steel = find_item(session.catalog(), "Steel Sword").unwrap().clone();
        let before = session.player.clone();

        let result = purchase(&mut session.player, &steel);
        assert_eq!(result, PurchaseResult::InsufficientGold { cost: 25, gold: 20 });
        assert_eq!(session.player, before);
    }

    #[test]
    fn test_weaker_purchase_keeps_best_equipped() {
        let mut session = new_session();
        session.player.gold = 100;
        let steel = find_item(session.catalog(), "Steel Sword").unwrap().clone();
        let sword = find_item(session.catalog(), "Sword").unwrap().clone();
        purchase(&mut session.player, &steel);
        purchase(&mut session.player, &sword);
        assert_eq!(session.player.equipment.weapon, Some(steel));
    }

    #[test]
    fn test_potion_purchase_sets_flag() {
        let mut session = new_session();
        let potion = find_item(session.catalog(), "Health Potion").unwrap().clone();
        purchase(&mut session.player, &potion);
        assert!(session.player.has_potion);
        assert_eq!(session.player.gold, 15);
    }

    #[test]
    fn test_select_item() {
        let catalog = GameConfig::default().catalog;
        let steel = select_item(ShopKind::Blacksmith, &catalog, "2").unwrap();
        assert_eq!(steel.unwrap().name, "Steel Sword");
        assert_eq!(select_item(ShopKind::Blacksmith, &catalog, "5"), Ok(None));
        assert_eq!(select_item(ShopKind::Market, &catalog, "2"), Ok(None));
        assert_eq!(
            select_item(ShopKind::Market, &catalog, "3"),
            Err(ChoiceError::OutOfRange { choice: 3, max: 2 })
        );
    }

    #[test]
    fn test_visit_blacksmith_buys_sword() {
        let mut session = new_session();
        let mut io = ScriptedIo::new(["1"]);
        let result = visit_shop(ShopKind::Blacksmith, &mut session, &mut io);

        assert!(result.is_purchase());
        assert_eq!(session.player.gold, 10);
        assert!(io.contains("1: Sword (10 gold)"));
        assert!(io.contains("5: Cancel"));
        assert!(io.contains("You bought a Sword for 10 gold!"));
        assert!(io.contains("Gold remaining: 10"));
        assert_eq!(io.prompts, vec![SHOP_PROMPT]);
    }

    #[test]
    fn test_visit_blacksmith_not_enough_gold() {
        let mut session = new_session();
        let mut io = ScriptedIo::new(["2"]);
        let result = visit_shop(ShopKind::Blacksmith, &mut session, &mut io);
        assert!(matches!(result, PurchaseResult::InsufficientGold { .. }));
        assert!(io.contains("Not enough gold!"));
        assert_eq!(session.player.gold, 20);
        assert!(session.player.inventory.is_empty());
    }

    #[test]
    fn test_visit_shop_invalid_and_cancel_leave_state() {
        for input in ["", "abc", "0", "9", "5"] {
            let mut session = new_session();
            let before = session.player.clone();
            let mut io = ScriptedIo::new([input]);
            let result = visit_shop(ShopKind::Blacksmith, &mut session, &mut io);
            assert!(!result.is_purchase(), "input {input:?}");
            assert_eq!(session.player, before, "input {input:?}");
        }
    }

    #[test]
    fn test_visit_market_lists_descriptions() {
        let mut session = new_session();
        let mut io = ScriptedIo::new(["1"]);
        visit_shop(ShopKind::Market, &mut session, &mut io);
        assert!(io.contains("1: Health Potion (5 gold) - Restores 30 health."));
        assert!(io.contains("2: Cancel"));
        assert!(session.player.has_potion);
    }

    #[test]
    fn test_market_without_potions() {
        let mut config = GameConfig::default();
        config.catalog.retain(|item| item.kind != ItemKind::Potion);
        let mut session = Session::new_game(None, config, &mut Vec::<String>::new());
        let mut io = ScriptedIo::new(["1"]);

        let result = visit_shop(ShopKind::Market, &mut session, &mut io);
        assert_eq!(result, PurchaseResult::SoldOut);
        assert!(io.contains("No potions available at the market."));
        assert_eq!(io.remaining_inputs(), 1, "no selection should be read");
    }
}
