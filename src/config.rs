//! Game settings: starting stats and the item catalog.
//!
//! Settings are read from `--config PATH` or `~/.dragons_quest/config.json`.
//! Every field is optional in the file; omitted fields take the new-game
//! defaults.

use crate::core::constants::{MAX_HEALTH, STARTING_GOLD, STARTING_HEALTH};
use crate::items::{default_catalog, top_tier_weapon, ItemKind, ItemTemplate};
use crate::utils::persistence::{default_config_path, read_if_exists};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("could not read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("malformed config: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("invalid config: {0}")]
    Invalid(String),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    pub starting_health: u32,
    pub starting_gold: u32,
    /// Items on sale, in shop display order
    pub catalog: Vec<ItemTemplate>,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            starting_health: STARTING_HEALTH,
            starting_gold: STARTING_GOLD,
            catalog: default_catalog(),
        }
    }
}

impl GameConfig {
    /// Parses and validates settings from JSON text.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: GameConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Loads settings from `path`. A missing file yields the defaults.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let contents = read_if_exists(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        match contents {
            Some(json) => {
                tracing::info!(path = %path.display(), "loaded config file");
                Self::from_json(&json)
            }
            None => {
                tracing::debug!(path = %path.display(), "no config file, using defaults");
                Ok(Self::default())
            }
        }
    }

    /// Loads from an explicit path, or from the default location if none is given.
    pub fn load_or_default(path: Option<&Path>) -> Result<Self, ConfigError> {
        if let Some(path) = path {
            return Self::load(path);
        }
        match default_config_path() {
            Ok(path) => Self::load(&path),
            // No home directory means no settings file
            Err(_) => Ok(Self::default()),
        }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.starting_health == 0 || self.starting_health > MAX_HEALTH {
            return Err(ConfigError::Invalid(format!(
                "starting_health must be between 1 and {}, got {}",
                MAX_HEALTH, self.starting_health
            )));
        }

        let mut names = HashSet::new();
        for item in &self.catalog {
            if item.name.trim().is_empty() {
                return Err(ConfigError::Invalid("item names cannot be empty".into()));
            }
            if !names.insert(item.name.as_str()) {
                return Err(ConfigError::Invalid(format!(
                    "duplicate item name '{}'",
                    item.name
                )));
            }
            if item.cost == 0 || item.effect == 0 {
                return Err(ConfigError::Invalid(format!(
                    "'{}' must have a positive cost and effect",
                    item.name
                )));
            }
        }

        if !self.catalog.iter().any(|item| item.kind == ItemKind::Weapon) {
            return Err(ConfigError::Invalid(
                "the catalog needs at least one weapon".into(),
            ));
        }
        Ok(())
    }

    pub fn top_tier_weapon(&self) -> Option<&ItemTemplate> {
        top_tier_weapon(&self.catalog)
    }
}
