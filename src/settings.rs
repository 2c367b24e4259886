//! Player settings persistence.
//!
//! Stores the preferred difficulty (plus a last-played stamp for the
//! start-scene footer) as JSON in the platform config directory. A
//! missing, unreadable, or corrupt file silently yields defaults so a bad
//! value can never reach sequence generation.

use chrono::Utc;
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::fs;
use std::io;
use std::path::PathBuf;

use crate::constants::SETTINGS_FILE;
use crate::game::Level;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Settings {
    #[serde(default)]
    pub preferred_level: Level,
    /// Unix timestamp of the last finished game, if any.
    #[serde(default)]
    pub last_played: Option<i64>,
}

/// Manages the settings file in the platform config directory.
pub struct SettingsManager {
    settings_path: PathBuf,
}

impl SettingsManager {
    pub fn new() -> io::Result<Self> {
        let project_dirs = ProjectDirs::from("", "", "mimic").ok_or_else(|| {
            io::Error::new(
                io::ErrorKind::NotFound,
                "Could not determine config directory",
            )
        })?;

        let config_dir = project_dirs.config_dir();
        fs::create_dir_all(config_dir)?;

        Ok(Self {
            settings_path: config_dir.join(SETTINGS_FILE),
        })
    }

    /// Load settings, falling back to defaults on any failure.
    pub fn load(&self) -> Settings {
        match fs::read_to_string(&self.settings_path) {
            Ok(json) => serde_json::from_str(&json).unwrap_or_default(),
            Err(_) => Settings::default(),
        }
    }

    pub fn save(&self, settings: &Settings) -> io::Result<()> {
        let json = serde_json::to_string_pretty(settings)
            .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?;
        fs::write(&self.settings_path, json)
    }

    /// Persist the chosen difficulty and stamp the session.
    pub fn remember_level(&self, level: Level) -> io::Result<()> {
        let mut settings = self.load();
        settings.preferred_level = level;
        settings.last_played = Some(Utc::now().timestamp());
        self.save(&settings)
    }
}
