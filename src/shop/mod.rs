//! Buying equipment at the blacksmith and potions at the market.

pub mod logic;
pub mod types;

pub use logic::*;
pub use types::*;
