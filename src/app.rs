//! Application state

use std::path::PathBuf;

use crate::db::Database;

/// Application state shared across all handlers
pub struct AppState {
    /// Path of the SQLite file backing the store
    pub db_path: PathBuf,

    /// The todo store; its lock serializes every handler's statement
    pub db: Database,
}

impl AppState {
    pub fn new(db_path: PathBuf) -> anyhow::Result<Self> {
        if let Some(parent) = db_path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent)?;
        }

        let db = Database::new(&db_path)?;

        tracing::info!("Todo database: {:?}", db_path);

        Ok(Self { db_path, db })
    }
}
