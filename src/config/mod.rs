//! Configuration module for SearchDigest
//!
//! Handles loading settings from YAML files and environment variables, and
//! resolving the per-request provider credentials.

mod settings;

pub use settings::*;

use anyhow::Result;
use std::path::PathBuf;
use tracing::info;

/// Locate and load settings, then apply the environment overlay.
///
/// `SEARCHDIGEST_SETTINGS_PATH` wins over the default search paths; when no
/// file is found the built-in defaults are used.
pub fn load() -> Result<Settings> {
    let mut candidates = Vec::new();
    if let Ok(path) = std::env::var("SEARCHDIGEST_SETTINGS_PATH") {
        candidates.push(PathBuf::from(path));
    }
    candidates.push(PathBuf::from("settings.yml"));
    candidates.push(PathBuf::from("config/settings.yml"));
    candidates.push(PathBuf::from("/etc/searchdigest/settings.yml"));
    if let Some(dir) = dirs::config_dir() {
        candidates.push(dir.join("searchdigest/settings.yml"));
    }

    let mut settings = match candidates.iter().find(|p| p.exists()) {
        Some(path) => {
            info!("Loading settings from: {}", path.display());
            Settings::from_file(path)?
        }
        None => {
            info!("No settings file found, using defaults");
            Settings::default()
        }
    };

    settings.merge_env();
    Ok(settings)
}
