//! One-time schema bootstrap and seeding
//!
//! Runs before the server accepts traffic. Both steps are idempotent: the
//! schema statement is CREATE IF NOT EXISTS and the seed row is only
//! inserted when the well-known name is absent.

use uuid::Uuid;

use crate::db::connection::ConnectionFactory;
use crate::db::error::DbError;

/// Full name of the record guaranteed to exist after initialization.
pub const SEED_FULL_NAME: &str = "System Administrator";

pub(crate) const CREATE_USERS_TABLE: &str =
    "CREATE TABLE IF NOT EXISTS users (id TEXT PRIMARY KEY, full_name TEXT NOT NULL)";

/// Ensures the schema exists and the seed record is present.
pub struct DatabaseInitializer {
    factory: ConnectionFactory,
}

impl DatabaseInitializer {
    pub fn new(factory: ConnectionFactory) -> Self {
        Self { factory }
    }

    /// Create the users table if missing and seed the well-known record.
    ///
    /// Safe to run repeatedly, including against a store that persisted
    /// across restarts. Concurrent runs are only as safe as the store's own
    /// statement atomicity; no extra locking is taken.
    pub async fn initialize(&self) -> Result<(), DbError> {
        let mut conn = self.factory.create_connection().await?;

        sqlx::query(CREATE_USERS_TABLE).execute(&mut conn).await?;

        let seed = sqlx::query("SELECT id FROM users WHERE full_name = ?")
            .bind(SEED_FULL_NAME)
            .fetch_optional(&mut conn)
            .await?;

        if seed.is_none() {
            sqlx::query("INSERT INTO users (id, full_name) VALUES (?, ?)")
                .bind(Uuid::new_v4().to_string())
                .bind(SEED_FULL_NAME)
                .execute(&mut conn)
                .await?;
        }

        Ok(())
    }
}
