//! SQLite-backed durable key-value storage.
//!
//! One `kv` table holds every persisted entry: the subject collection
//! (serialized as a whole under its fixed key) and the theme
//! preference. Absence of a key is "empty", never an error.

use rusqlite::{params, Connection};
use serde::{Deserialize, Serialize};

use super::data_dir;
use crate::error::StorageError;

/// Key holding the theme preference string.
const THEME_KEY: &str = "theme";

/// UI theme preference, owned by the theme command.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    Dark,
    Light,
}

impl Theme {
    pub fn as_str(self) -> &'static str {
        match self {
            Theme::Dark => "dark",
            Theme::Light => "light",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "dark" => Some(Theme::Dark),
            "light" => Some(Theme::Light),
            _ => None,
        }
    }
}

/// Durable local key-value store, scoped to the current user.
pub struct Database {
    conn: Connection,
}

impl Database {
    /// Open the database at `<data_dir>/studysync.db`.
    ///
    /// Creates the file and schema if they don't exist.
    ///
    /// # Errors
    /// Returns an error if the database cannot be opened or migrated.
    pub fn open() -> Result<Self, StorageError> {
        let path = data_dir()?.join("studysync.db");
        Self::open_at(&path)
    }

    /// Open the database at an explicit path.
    pub fn open_at(path: &std::path::Path) -> Result<Self, StorageError> {
        let conn = Connection::open(path).map_err(|source| StorageError::OpenFailed {
            path: path.to_path_buf(),
            source,
        })?;
        let db = Self { conn };
        db.migrate()?;
        log::debug!("opened database at {}", path.display());
        Ok(db)
    }

    /// Open an in-memory database (for tests).
    pub fn open_memory() -> Result<Self, StorageError> {
        let conn = Connection::open_in_memory().map_err(StorageError::from)?;
        let db = Self { conn };
        db.migrate()?;
        Ok(db)
    }

    fn migrate(&self) -> Result<(), StorageError> {
        self.conn.execute_batch(
            "CREATE TABLE IF NOT EXISTS kv (
                key   TEXT PRIMARY KEY,
                value TEXT NOT NULL
            );",
        )?;
        Ok(())
    }

    /// Get a value from the kv store. Missing keys yield `None`.
    pub fn kv_get(&self, key: &str) -> Result<Option<String>, StorageError> {
        let mut stmt = self.conn.prepare("SELECT value FROM kv WHERE key = ?1")?;
        let result = stmt.query_row(params![key], |row| row.get::<_, String>(0));
        match result {
            Ok(v) => Ok(Some(v)),
            Err(rusqlite::Error::QueryReturnedNoRows) => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    /// Set a value in the kv store.
    pub fn kv_set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        self.conn.execute(
            "INSERT OR REPLACE INTO kv (key, value) VALUES (?1, ?2)",
            params![key, value],
        )?;
        Ok(())
    }

    /// The saved theme preference, if any.
    pub fn theme(&self) -> Result<Option<Theme>, StorageError> {
        Ok(self.kv_get(THEME_KEY)?.as_deref().and_then(Theme::parse))
    }

    pub fn set_theme(&self, theme: Theme) -> Result<(), StorageError> {
        self.kv_set(THEME_KEY, theme.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kv_store_round_trip() {
        let db = Database::open_memory().unwrap();
        assert!(db.kv_get("test").unwrap().is_none());
        db.kv_set("test", "hello").unwrap();
        assert_eq!(db.kv_get("test").unwrap().unwrap(), "hello");
        db.kv_set("test", "replaced").unwrap();
        assert_eq!(db.kv_get("test").unwrap().unwrap(), "replaced");
    }

    #[test]
    fn theme_defaults_to_absent() {
        let db = Database::open_memory().unwrap();
        assert!(db.theme().unwrap().is_none());
        db.set_theme(Theme::Dark).unwrap();
        assert_eq!(db.theme().unwrap(), Some(Theme::Dark));
        db.set_theme(Theme::Light).unwrap();
        assert_eq!(db.theme().unwrap(), Some(Theme::Light));
    }

    #[test]
    fn unknown_theme_value_reads_as_none() {
        let db = Database::open_memory().unwrap();
        db.kv_set("theme", "sepia").unwrap();
        assert!(db.theme().unwrap().is_none());
    }
}
