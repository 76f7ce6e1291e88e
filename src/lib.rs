//! The Dragon's Quest - a turn-based text adventure.
//!
//! The game runs entirely through the [`io::InputProvider`] and
//! [`io::OutputSink`] traits, so a [`core::Session`] can be driven by a
//! terminal or by a scripted test harness.

pub mod build_info;
pub mod combat;
pub mod config;
pub mod core;
pub mod help;
pub mod input;
pub mod io;
pub mod items;
pub mod locations;
pub mod shop;
pub mod utils;

pub use crate::config::{ConfigError, GameConfig};
pub use crate::core::game_loop::{play_turn, run};
pub use crate::core::game_state::{PlayerState, Session, SessionStatus};
pub use crate::io::{Console, InputProvider, OutputSink, ScriptedIo, TerminalConsole};
