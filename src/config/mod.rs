//! Configuration module for Photo-Search
//!
//! Handles loading and validating settings from YAML files and environment variables.

mod settings;

pub use settings::*;

use anyhow::Result;
use std::path::{Path, PathBuf};
use tracing::info;

/// Load settings from an explicit path, the known default locations, or defaults.
///
/// The `.env` file and process environment are merged on top in every case.
pub fn load(explicit: Option<&Path>) -> Result<Settings> {
    let mut settings = match locate(explicit) {
        Some(path) => {
            info!("Loading settings from: {}", path.display());
            Settings::from_file(&path)?
        }
        None => {
            info!("No settings file found, using defaults");
            Settings::default()
        }
    };

    settings.merge_env();
    settings.validate()?;
    Ok(settings)
}

fn locate(explicit: Option<&Path>) -> Option<PathBuf> {
    if let Some(path) = explicit {
        return Some(path.to_path_buf());
    }

    if let Ok(path) = std::env::var("PHOTO_SEARCH_SETTINGS_PATH") {
        let path = PathBuf::from(path);
        if path.exists() {
            return Some(path);
        }
    }

    let mut paths = vec![
        PathBuf::from("settings.yml"),
        PathBuf::from("config/settings.yml"),
    ];
    if let Some(dir) = dirs::config_dir() {
        paths.push(dir.join("photo-search/settings.yml"));
    }

    paths.into_iter().find(|p| p.exists())
}
