//! Location descriptions and the (location, option) -> action table.

use super::types::{Location, MenuAction, MenuOption};
use crate::shop::ShopKind;

const fn option(label: &'static str, action: MenuAction) -> MenuOption {
    MenuOption { label, action }
}

const RETURN_TO_VILLAGE: MenuOption = option(
    "Return to village",
    MenuAction::Travel {
        to: Location::Village,
        message: "You return to the village center.",
    },
);
const CHECK_STATUS: MenuOption = option("Check status", MenuAction::Status);
const USE_ITEM: MenuOption = option("Use item", MenuAction::UseItem);
const HELP: MenuOption = option("Help", MenuAction::Help);
const QUIT: MenuOption = option("Quit game", MenuAction::Quit);

static VILLAGE_OPTIONS: [MenuOption; 8] = [
    option(
        "Go to blacksmith",
        MenuAction::Travel {
            to: Location::Blacksmith,
            message: "You enter the blacksmith's shop.",
        },
    ),
    option(
        "Go to market",
        MenuAction::Travel {
            to: Location::Market,
            message: "You enter the market.",
        },
    ),
    option("Enter forest", MenuAction::EnterForest),
    option(
        "Climb the mountain",
        MenuAction::Travel {
            to: Location::Mountain,
            message: "You approach the mountain path...",
        },
    ),
    CHECK_STATUS,
    USE_ITEM,
    HELP,
    QUIT,
];

static BLACKSMITH_OPTIONS: [MenuOption; 6] = [
    option(
        "Shop for weapons/armor",
        MenuAction::Shop(ShopKind::Blacksmith),
    ),
    RETURN_TO_VILLAGE,
    CHECK_STATUS,
    USE_ITEM,
    HELP,
    QUIT,
];

static MARKET_OPTIONS: [MenuOption; 6] = [
    option("Shop for potions", MenuAction::Shop(ShopKind::Market)),
    RETURN_TO_VILLAGE,
    CHECK_STATUS,
    USE_ITEM,
    HELP,
    QUIT,
];

static FOREST_OPTIONS: [MenuOption; 5] = [
    option(
        "Return to village",
        MenuAction::Travel {
            to: Location::Village,
            message: "You hurry back to the safety of the village.",
        },
    ),
    CHECK_STATUS,
    USE_ITEM,
    HELP,
    QUIT,
];

static MOUNTAIN_OPTIONS: [MenuOption; 6] = [
    option("Enter the dragon's lair", MenuAction::EnterLair),
    option(
        "Return to village",
        MenuAction::Travel {
            to: Location::Village,
            message: "You return to the village, the mountain looming behind you.",
        },
    ),
    CHECK_STATUS,
    USE_ITEM,
    HELP,
    QUIT,
];

pub fn description(location: Location) -> &'static str {
    match location {
        Location::Village => {
            "You're in a bustling village. The blacksmith, market, and a path to the mountains are nearby."
        }
        Location::Blacksmith => {
            "The heat from the forge fills the air. Weapons and armor line the walls."
        }
        Location::Market => {
            "Merchants sell their wares from colorful stalls. A potion seller catches your eye."
        }
        Location::Forest => {
            "The forest is dark and foreboding. You hear strange noises all around you."
        }
        Location::Mountain => {
            "You stand at the foot of the mountain. The dragon's lair is near. The air is thick with danger."
        }
    }
}

/// Menu for `location`, in display order. Option N is `menu_options(..)[N - 1]`.
pub fn menu_options(location: Location) -> &'static [MenuOption] {
    match location {
        Location::Village => &VILLAGE_OPTIONS,
        Location::Blacksmith => &BLACKSMITH_OPTIONS,
        Location::Market => &MARKET_OPTIONS,
        Location::Forest => &FOREST_OPTIONS,
        Location::Mountain => &MOUNTAIN_OPTIONS,
    }
}

/// Action for a 1-based option number, if it exists.
pub fn action_for(location: Location, choice: usize) -> Option<MenuAction> {
    let index = choice.checked_sub(1)?;
    menu_options(location).get(index).map(|opt| opt.action)
}
