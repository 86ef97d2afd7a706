//! Centralized path definitions for relnag
//!
//! ```text
//! ~/.relnag/
//! ├── config.toml     # Policy, schedule, SMTP settings
//! └── people.json     # Phonebook (conventional location)
//! ```

use std::path::PathBuf;

/// Global config directory name
const GLOBAL_DIR: &str = ".relnag";

/// Global config filename
const GLOBAL_CONFIG_FILE: &str = "config.toml";

/// Conventional phonebook filename
const PHONEBOOK_FILE: &str = "people.json";

/// Get the global relnag directory.
///
/// Returns `~/.relnag/`.
#[must_use]
pub fn global_config_dir() -> PathBuf {
    dirs::home_dir().unwrap_or_else(|| PathBuf::from("~")).join(GLOBAL_DIR)
}

/// Get the global config file path.
///
/// Returns `~/.relnag/config.toml`.
#[must_use]
pub fn global_config() -> PathBuf {
    global_config_dir().join(GLOBAL_CONFIG_FILE)
}

/// Get the default phonebook path.
///
/// Returns `~/.relnag/people.json`; used when the config names none.
#[must_use]
pub fn default_phonebook() -> PathBuf {
    global_config_dir().join(PHONEBOOK_FILE)
}
