//! Centralized path definitions for mathpix
//!
//! ## Layout
//!
//! ```text
//! $XDG_CONFIG_HOME/mathpix/
//! └── config.toml               # Credentials and client settings
//! ```
//!
//! `MATHPIX_CONFIG` points at a different settings file.

use std::path::PathBuf;

/// Environment variable overriding the settings file location
pub const CONFIG_ENV: &str = "MATHPIX_CONFIG";

/// Config directory name under the platform config dir
const CONFIG_DIR: &str = "mathpix";

/// Settings filename
const CONFIG_FILE: &str = "config.toml";

/// Get the mathpix config directory.
///
/// Returns `~/.config/mathpix/` on Linux, the platform equivalent elsewhere.
#[must_use]
pub fn config_dir() -> PathBuf {
    dirs::config_dir()
        .or_else(|| dirs::home_dir().map(|home| home.join(".config")))
        .unwrap_or_else(|| PathBuf::from("."))
        .join(CONFIG_DIR)
}

/// Get the settings file path.
///
/// Honors `MATHPIX_CONFIG` when it is set and non-empty.
#[must_use]
pub fn config_file() -> PathBuf {
    match std::env::var_os(CONFIG_ENV) {
        Some(path) if !path.is_empty() => PathBuf::from(path),
        _ => config_dir().join(CONFIG_FILE),
    }
}
