//! Configuration for linesink.
//!
//! Settings load from an optional `linesink.toml` (explicit path, current
//! directory, or home directory) and may be overridden by CLI arguments.
//! Running with no config file and no arguments reproduces the reference
//! behavior exactly.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::sink::DEFAULT_NUMBER_WIDTH;
use crate::{Error, Result};

/// Config file name searched for in the current and home directories.
const CONFIG_FILE_NAME: &str = "linesink.toml";

/// Default primary input file, read in full before the session starts.
pub const DEFAULT_INPUT: &str = "linesink.dat";

/// Get the user's home directory
fn dirs_home() -> Option<PathBuf> {
    if let Ok(home) = std::env::var("HOME") {
        return Some(PathBuf::from(home));
    }
    // Fallback for Windows
    if let Ok(userprofile) = std::env::var("USERPROFILE") {
        return Some(PathBuf::from(userprofile));
    }
    None
}

// Serde default functions
fn default_input() -> PathBuf {
    PathBuf::from(DEFAULT_INPUT)
}
fn default_number_width() -> usize {
    DEFAULT_NUMBER_WIDTH
}

/// Main configuration struct for linesink
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Primary input file (default: `linesink.dat`)
    #[serde(default = "default_input")]
    pub input: PathBuf,

    /// Field width for the numbered stage prefix (default: 5)
    #[serde(default = "default_number_width")]
    pub number_width: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            input: default_input(),
            number_width: default_number_width(),
        }
    }
}

impl Config {
    /// Load configuration from a TOML file.
    pub fn from_toml_file(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path)
            .map_err(|e| Error::Config(format!("cannot read {}: {e}", path.display())))?;
        toml::from_str(&contents)
            .map_err(|e| Error::Config(format!("cannot parse {}: {e}", path.display())))
    }

    /// Find a config file to load: `linesink.toml` in the current directory,
    /// then in the home directory. Absence is not an error.
    #[must_use]
    pub fn discover() -> Option<PathBuf> {
        let local = PathBuf::from(CONFIG_FILE_NAME);
        if local.is_file() {
            return Some(local);
        }
        if let Some(home) = dirs_home() {
            let candidate = home.join(CONFIG_FILE_NAME);
            if candidate.is_file() {
                return Some(candidate);
            }
        }
        None
    }

    /// Validate configuration values, returning a message for the first
    /// violation found.
    #[must_use]
    pub fn validate(&self) -> Option<String> {
        if self.number_width == 0 {
            return Some("number_width must be at least 1".to_string());
        }
        None
    }
}
