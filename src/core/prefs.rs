//! # Preferences
//!
//! The one piece of state Atlas remembers between runs: whether dark mode
//! is on. Stored as JSON under a single key in `~/.atlas/prefs.json`, read
//! at startup and rewritten on every toggle.
//!
//! Writes use atomic rename (write `.tmp`, then `rename()`).

use std::fmt;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use log::{debug, warn};
use serde::{Deserialize, Serialize};

use crate::core::config::atlas_dir;

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub struct Prefs {
    #[serde(rename = "isDarkMode")]
    pub is_dark_mode: bool,
}

#[derive(Debug)]
pub enum PrefsError {
    Io(io::Error),
    Json(serde_json::Error),
}

impl fmt::Display for PrefsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PrefsError::Io(e) => write!(f, "prefs I/O error: {e}"),
            PrefsError::Json(e) => write!(f, "prefs JSON error: {e}"),
        }
    }
}

impl std::error::Error for PrefsError {}

/// Returns `~/.atlas/prefs.json`.
pub fn prefs_path() -> Option<PathBuf> {
    atlas_dir().map(|d| d.join("prefs.json"))
}

/// Reads the saved dark-mode flag. Missing or unreadable files yield `None`.
pub fn load_dark_mode(path: &Path) -> Option<bool> {
    let contents = match fs::read_to_string(path) {
        Ok(c) => c,
        Err(e) if e.kind() == io::ErrorKind::NotFound => return None,
        Err(e) => {
            warn!("Failed to read {}: {}", path.display(), e);
            return None;
        }
    };

    match serde_json::from_str::<Prefs>(&contents) {
        Ok(prefs) => {
            debug!("Loaded prefs from {}: {:?}", path.display(), prefs);
            Some(prefs.is_dark_mode)
        }
        Err(e) => {
            warn!("Ignoring malformed prefs file {}: {}", path.display(), e);
            None
        }
    }
}

pub fn save_dark_mode(path: &Path, is_dark_mode: bool) -> Result<(), PrefsError> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).map_err(PrefsError::Io)?;
    }

    let json = serde_json::to_string(&Prefs { is_dark_mode }).map_err(PrefsError::Json)?;
    let tmp = path.with_extension("json.tmp");
    fs::write(&tmp, json).map_err(PrefsError::Io)?;
    fs::rename(&tmp, path).map_err(PrefsError::Io)?;
    debug!("Saved dark mode = {} to {}", is_dark_mode, path.display());
    Ok(())
}
