//! Utility modules: config file location and loading.

pub mod persistence;

pub use persistence::*;
