//! Locating and reading JSON files under ~/.dragons_quest/.
//!
//! Nothing about a game in progress is ever written here; the directory only
//! holds optional settings.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

pub const APP_DIR_NAME: &str = ".dragons_quest";
pub const CONFIG_FILE_NAME: &str = "config.json";

/// Get the ~/.dragons_quest/ directory path. Does not create it.
pub fn app_dir() -> io::Result<PathBuf> {
    let home_dir = dirs::home_dir().ok_or_else(|| {
        io::Error::new(
            io::ErrorKind::NotFound,
            "Could not determine home directory",
        )
    })?;
    Ok(home_dir.join(APP_DIR_NAME))
}

/// Default location of the settings file.
pub fn default_config_path() -> io::Result<PathBuf> {
    Ok(app_dir()?.join(CONFIG_FILE_NAME))
}

/// Reads a file to a string, treating a missing file as `None`.
pub fn read_if_exists(path: &Path) -> io::Result<Option<String>> {
    match fs::read_to_string(path) {
        Ok(contents) => Ok(Some(contents)),
        Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(None),
        Err(e) => Err(e),
    }
}
