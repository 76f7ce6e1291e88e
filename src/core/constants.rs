// Player bounds and new-game defaults
pub const MIN_HEALTH: u32 = 0;
pub const MAX_HEALTH: u32 = 100;
pub const STARTING_HEALTH: u32 = 100;
pub const STARTING_GOLD: u32 = 20;
pub const DEFAULT_PLAYER_NAME: &str = "Player";

// Regular forest monster
pub const MONSTER_NAME: &str = "Monster";
pub const MONSTER_HEALTH: u32 = 20;
pub const MONSTER_DAMAGE: u32 = 10;
pub const MONSTER_GOLD_REWARD: u32 = 10;

// The dragon in the mountain lair
pub const DRAGON_NAME: &str = "Dragon";
pub const DRAGON_HEALTH: u32 = 50;
pub const DRAGON_DAMAGE: u32 = 20;
pub const DRAGON_GOLD_REWARD: u32 = 100;

// Armor can never reduce a hit below this
pub const MIN_DAMAGE_TAKEN: u32 = 1;

// Healing applied by the default Health Potion
pub const HEALING_POTION_VALUE: u32 = 30;

pub const CHOICE_PROMPT: &str = "\nEnter your choice (number): ";
pub const SHOP_PROMPT: &str = "Choose item to buy (number): ";
