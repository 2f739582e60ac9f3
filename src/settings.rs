//! Runtime preferences
//!
//! Only input bindings and logging are adjustable; the game rules are fixed
//! in `consts`.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::input::KeyBindings;

/// Game settings/preferences
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Key code for each action
    pub bindings: KeyBindings,
    /// `log` level filter name (error, warn, info, debug, trace)
    pub log_level: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            bindings: KeyBindings::default(),
            log_level: "info".to_string(),
        }
    }
}

impl Settings {
    /// Parse settings JSON; missing fields take their defaults
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    pub fn to_json(&self) -> String {
        serde_json::to_string_pretty(self).unwrap_or_default()
    }

    /// Parsed log level, falling back to Info for unknown names
    pub fn level_filter(&self) -> log::LevelFilter {
        self.log_level.parse().unwrap_or(log::LevelFilter::Info)
    }

    /// Load settings from a JSON file, using defaults if it can't be read
    pub fn load_or_default(path: &Path) -> Self {
        match std::fs::read_to_string(path) {
            Ok(json) => match Self::from_json(&json) {
                Ok(settings) => {
                    log::info!("Loaded settings from {}", path.display());
                    settings
                }
                Err(e) => {
                    log::warn!("Invalid settings in {}: {} - using defaults", path.display(), e);
                    Self::default()
                }
            },
            Err(e) => {
                log::warn!("Can't read {}: {} - using defaults", path.display(), e);
                Self::default()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partial_json_keeps_defaults() {
        let settings =
            Settings::from_json(r#"{ "bindings": { "pause": "KeyP" } }"#).expect("valid json");
        assert_eq!(settings.bindings.pause, "KeyP");
        assert_eq!(settings.bindings.left_up, "KeyW");
        assert_eq!(settings.log_level, "info");
    }

    #[test]
    fn test_invalid_json_is_error() {
        assert!(Settings::from_json("{ nope").is_err());
    }

    #[test]
    fn test_level_filter() {
        let mut settings = Settings::default();
        assert_eq!(settings.level_filter(), log::LevelFilter::Info);
        settings.log_level = "debug".to_string();
        assert_eq!(settings.level_filter(), log::LevelFilter::Debug);
        settings.log_level = "loud".to_string();
        assert_eq!(settings.level_filter(), log::LevelFilter::Info);
    }

    #[test]
    fn test_json_round_trip() {
        let settings = Settings::default();
        assert_eq!(Settings::from_json(&settings.to_json()).ok(), Some(settings));
    }

    #[test]
    fn test_missing_file_uses_defaults() {
        let settings = Settings::load_or_default(Path::new("/nonexistent/glow-pong.json"));
        assert_eq!(settings, Settings::default());
    }
}
