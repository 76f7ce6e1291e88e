//! Item system: templates, the catalog, inventory, and equipment.

pub mod catalog;
pub mod equipment;
pub mod inventory;
pub mod logic;
pub mod types;

pub use catalog::*;
pub use equipment::*;
pub use inventory::*;
pub use logic::*;
pub use types::*;
