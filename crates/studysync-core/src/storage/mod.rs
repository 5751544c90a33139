mod config;
pub mod database;

pub use config::{Config, NotificationsConfig, NotifyPermission};
pub use database::{Database, Theme};

use std::path::PathBuf;

/// Returns `~/.config/studysync[-dev]/` based on STUDYSYNC_ENV.
///
/// Set STUDYSYNC_ENV=dev to use the development data directory, or
/// STUDYSYNC_DATA_DIR to point at an explicit directory (tests do).
///
/// # Errors
/// Returns an error if creating the directory fails.
pub fn data_dir() -> std::io::Result<PathBuf> {
    let dir = if let Ok(explicit) = std::env::var("STUDYSYNC_DATA_DIR") {
        PathBuf::from(explicit)
    } else {
        let base_dir = dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(".config");
        let env = std::env::var("STUDYSYNC_ENV").unwrap_or_else(|_| "production".to_string());
        if env == "dev" {
            base_dir.join("studysync-dev")
        } else {
            base_dir.join("studysync")
        }
    };

    std::fs::create_dir_all(&dir)?;
    Ok(dir)
}
