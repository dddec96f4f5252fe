//! Per-operation SQLite connection factory
//!
//! Hands out one fresh connection per call. Callers hold the connection for
//! exactly one statement and release it by dropping it; nothing here is
//! pooled or retried.

use std::path::Path;

use sqlx::sqlite::{SqliteConnectOptions, SqliteConnection};
use sqlx::ConnectOptions;

use crate::db::error::DbError;

/// Produces ready-to-use SQLite connections.
///
/// The connect options are fixed at construction. Cloning is cheap and
/// safe; clones open connections to the same database file.
#[derive(Debug, Clone)]
pub struct ConnectionFactory {
    options: SqliteConnectOptions,
}

impl ConnectionFactory {
    /// Create a factory for the database file at `path`.
    ///
    /// The file is created on first connect if it does not exist.
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self {
            options: SqliteConnectOptions::new()
                .filename(path)
                .create_if_missing(true),
        }
    }

    /// Open one new connection to the store.
    ///
    /// # Errors
    ///
    /// Returns `DbError::Connection` if the database cannot be opened.
    /// The failure is never retried here.
    pub async fn create_connection(&self) -> Result<SqliteConnection, DbError> {
        self.options.connect().await.map_err(DbError::Connection)
    }
}
