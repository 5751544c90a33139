//! TOML-based application configuration.
//!
//! Stores the completion-alert preferences: desktop notification
//! permission and the audio cue toggle. Stored at
//! `<data_dir>/config.toml`.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use super::data_dir;
use crate::error::ConfigError;

/// Desktop notification permission, mirrored from the platform
/// notification model: request-on-demand while undetermined.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NotifyPermission {
    Granted,
    Denied,
    Undetermined,
}

impl NotifyPermission {
    pub fn as_str(self) -> &'static str {
        match self {
            NotifyPermission::Granted => "granted",
            NotifyPermission::Denied => "denied",
            NotifyPermission::Undetermined => "undetermined",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "granted" => Some(NotifyPermission::Granted),
            "denied" => Some(NotifyPermission::Denied),
            "undetermined" => Some(NotifyPermission::Undetermined),
            _ => None,
        }
    }
}

/// Completion-alert configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NotificationsConfig {
    /// Desktop notification permission.
    #[serde(default = "default_permission")]
    pub desktop: NotifyPermission,
    /// Whether the completion tone plays.
    #[serde(default = "default_true")]
    pub sound: bool,
}

fn default_permission() -> NotifyPermission {
    NotifyPermission::Undetermined
}

fn default_true() -> bool {
    true
}

impl Default for NotificationsConfig {
    fn default() -> Self {
        Self {
            desktop: NotifyPermission::Undetermined,
            sound: true,
        }
    }
}

/// Application configuration.
///
/// Serialized to/from TOML at `<data_dir>/config.toml`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub notifications: NotificationsConfig,
}

impl Config {
    fn path() -> Result<PathBuf, ConfigError> {
        let dir = data_dir().map_err(|e| ConfigError::LoadFailed {
            path: PathBuf::from("<data_dir>"),
            message: e.to_string(),
        })?;
        Ok(dir.join("config.toml"))
    }

    /// Load from disk, writing the defaults on first run.
    ///
    /// # Errors
    /// Returns an error if the file exists but cannot be parsed, or if
    /// the defaults cannot be written.
    pub fn load() -> Result<Self, ConfigError> {
        let path = Self::path()?;
        match std::fs::read_to_string(&path) {
            Ok(content) => toml::from_str(&content).map_err(|e| ConfigError::LoadFailed {
                path,
                message: e.to_string(),
            }),
            Err(_) => {
                let cfg = Self::default();
                cfg.save()?;
                Ok(cfg)
            }
        }
    }

    /// Load from disk, returning defaults on any error.
    pub fn load_or_default() -> Self {
        Self::load().unwrap_or_default()
    }

    /// Persist to disk.
    pub fn save(&self) -> Result<(), ConfigError> {
        let path = Self::path()?;
        let content = toml::to_string_pretty(self).map_err(|e| ConfigError::SaveFailed {
            path: path.clone(),
            message: e.to_string(),
        })?;
        std::fs::write(&path, content).map_err(|e| ConfigError::SaveFailed {
            path,
            message: e.to_string(),
        })
    }

    /// Get a config value as a string by key.
    pub fn get(&self, key: &str) -> Option<String> {
        match key {
            "notifications.desktop" => Some(self.notifications.desktop.as_str().to_string()),
            "notifications.sound" => Some(self.notifications.sound.to_string()),
            _ => None,
        }
    }

    /// Apply a string value to a known key, without saving.
    ///
    /// # Errors
    /// Returns an error for unknown keys or unparseable values.
    pub fn apply(&mut self, key: &str, value: &str) -> Result<(), ConfigError> {
        match key {
            "notifications.desktop" => {
                self.notifications.desktop =
                    NotifyPermission::parse(value).ok_or_else(|| ConfigError::InvalidValue {
                        key: key.to_string(),
                        message: format!("expected granted|denied|undetermined, got '{value}'"),
                    })?;
            }
            "notifications.sound" => {
                self.notifications.sound =
                    value.parse::<bool>().map_err(|_| ConfigError::InvalidValue {
                        key: key.to_string(),
                        message: format!("expected true|false, got '{value}'"),
                    })?;
            }
            _ => return Err(ConfigError::UnknownKey(key.to_string())),
        }
        Ok(())
    }

    /// Set a config value by key and persist.
    pub fn set(&mut self, key: &str, value: &str) -> Result<(), ConfigError> {
        self.apply(key, value)?;
        self.save()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_round_trip() {
        let cfg = Config::default();
        let toml_str = toml::to_string_pretty(&cfg).unwrap();
        let parsed: Config = toml::from_str(&toml_str).unwrap();
        assert_eq!(parsed.notifications.desktop, NotifyPermission::Undetermined);
        assert!(parsed.notifications.sound);
    }

    #[test]
    fn get_known_keys() {
        let cfg = Config::default();
        assert_eq!(cfg.get("notifications.desktop").as_deref(), Some("undetermined"));
        assert_eq!(cfg.get("notifications.sound").as_deref(), Some("true"));
        assert!(cfg.get("notifications.volume").is_none());
    }

    #[test]
    fn apply_updates_permission() {
        let mut cfg = Config::default();
        cfg.apply("notifications.desktop", "granted").unwrap();
        assert_eq!(cfg.notifications.desktop, NotifyPermission::Granted);
        cfg.apply("notifications.sound", "false").unwrap();
        assert!(!cfg.notifications.sound);
    }

    #[test]
    fn apply_rejects_unknown_key() {
        let mut cfg = Config::default();
        assert!(matches!(
            cfg.apply("ui.dark_mode", "true"),
            Err(ConfigError::UnknownKey(_))
        ));
    }

    #[test]
    fn apply_rejects_bad_value() {
        let mut cfg = Config::default();
        assert!(matches!(
            cfg.apply("notifications.desktop", "maybe"),
            Err(ConfigError::InvalidValue { .. })
        ));
        assert!(matches!(
            cfg.apply("notifications.sound", "sometimes"),
            Err(ConfigError::InvalidValue { .. })
        ));
    }

    #[test]
    fn empty_toml_uses_defaults() {
        let parsed: Config = toml::from_str("").unwrap();
        assert_eq!(parsed.notifications.desktop, NotifyPermission::Undetermined);
        assert!(parsed.notifications.sound);
    }
}
