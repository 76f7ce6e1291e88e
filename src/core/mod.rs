//! Core game state, constants, and the turn loop.

pub mod constants;
pub mod game_loop;
pub mod game_state;

pub use constants::*;
pub use game_loop::*;
pub use game_state::*;
