//! Database module for the todo service
//!
//! Owns the single SQLite connection and the lock that serializes access to it

mod schema;
mod todos;

use std::path::Path;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use rusqlite::Connection;

/// Shared connection handle. Every clone points at the same connection,
/// and at most one statement runs against it at any instant.
pub struct Database {
    conn: Arc<Mutex<Connection>>,
}

impl Database {
    pub fn new(path: &Path) -> anyhow::Result<Self> {
        let conn = Connection::open(path)?;

        // Initialize schema
        schema::init_schema(&conn)?;

        Ok(Self {
            conn: Arc::new(Mutex::new(conn)),
        })
    }

    /// Acquire the exclusive lock on the connection.
    ///
    /// The guard is released when dropped. A poisoned lock is recovered since
    /// the connection holds no state a panicking holder could leave broken.
    pub fn conn(&self) -> MutexGuard<'_, Connection> {
        self.conn.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl Clone for Database {
    fn clone(&self) -> Self {
        Self {
            conn: Arc::clone(&self.conn),
        }
    }
}
