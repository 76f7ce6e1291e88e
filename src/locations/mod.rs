//! The five places the player can be, what each offers, and moving between them.

mod data;
pub mod movement;
pub mod render;
mod types;

pub use data::*;
pub use movement::{move_player, MoveOutcome};
pub use render::*;
pub use types::*;
