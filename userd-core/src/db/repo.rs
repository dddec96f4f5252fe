//! User repository
//!
//! Translates each CRUD operation into exactly one parameterized statement
//! and maps rows back to the entity. Ids are persisted in canonical string
//! form. No business logic lives here.

use async_trait::async_trait;
use sqlx::sqlite::SqliteRow;
use sqlx::Row;
use uuid::Uuid;

use crate::db::connection::ConnectionFactory;
use crate::db::error::DbError;
use crate::models::User;

/// Storage operations for users.
///
/// Production uses [`SqliteUserRepository`]; tests substitute their own
/// implementations.
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// All rows in natural store order; empty when there are none.
    async fn get_all(&self) -> Result<Vec<User>, DbError>;

    /// Zero-or-one row by primary key. `None` means not found.
    async fn get_by_id(&self, id: Uuid) -> Result<Option<User>, DbError>;

    /// Insert one row. True iff exactly one row was affected.
    ///
    /// There is no existence pre-check: an insert with an id that already
    /// exists hits the primary-key constraint and comes back as an error.
    async fn create(&self, user: &User) -> Result<bool, DbError>;

    /// Delete zero-or-one row by primary key. False means nothing matched,
    /// which is a legitimate outcome rather than an error.
    async fn delete_by_id(&self, id: Uuid) -> Result<bool, DbError>;
}

/// SQLite-backed repository. Owns nothing beyond the connection factory;
/// every call round-trips to the store on its own connection.
#[derive(Debug, Clone)]
pub struct SqliteUserRepository {
    factory: ConnectionFactory,
}

impl SqliteUserRepository {
    pub fn new(factory: ConnectionFactory) -> Self {
        Self { factory }
    }
}

fn map_user(row: &SqliteRow) -> Result<User, DbError> {
    let id: String = row.try_get("id")?;
    Ok(User {
        id: Uuid::parse_str(&id)?,
        full_name: row.try_get("full_name")?,
    })
}

#[async_trait]
impl UserRepository for SqliteUserRepository {
    async fn get_all(&self) -> Result<Vec<User>, DbError> {
        let mut conn = self.factory.create_connection().await?;

        let rows = sqlx::query("SELECT id, full_name FROM users")
            .fetch_all(&mut conn)
            .await?;

        rows.iter().map(map_user).collect()
    }

    async fn get_by_id(&self, id: Uuid) -> Result<Option<User>, DbError> {
        let mut conn = self.factory.create_connection().await?;

        let row = sqlx::query("SELECT id, full_name FROM users WHERE id = ?")
            .bind(id.to_string())
            .fetch_optional(&mut conn)
            .await?;

        match row {
            Some(row) => Ok(Some(map_user(&row)?)),
            None => Ok(None),
        }
    }

    async fn create(&self, user: &User) -> Result<bool, DbError> {
        let mut conn = self.factory.create_connection().await?;

        let result = sqlx::query("INSERT INTO users (id, full_name) VALUES (?, ?)")
            .bind(user.id.to_string())
            .bind(&user.full_name)
            .execute(&mut conn)
            .await?;

        Ok(result.rows_affected() == 1)
    }

    async fn delete_by_id(&self, id: Uuid) -> Result<bool, DbError> {
        let mut conn = self.factory.create_connection().await?;

        let result = sqlx::query("DELETE FROM users WHERE id = ?")
            .bind(id.to_string())
            .execute(&mut conn)
            .await?;

        Ok(result.rows_affected() > 0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::init::CREATE_USERS_TABLE;
    use tempfile::TempDir;

    // Build a store with the schema but no seed row, so empty-store
    // behavior stays observable. The TempDir must outlive the factory.
    async fn empty_store() -> (SqliteUserRepository, TempDir) {
        let dir = tempfile::tempdir().expect("tempdir");
        let factory = ConnectionFactory::new(dir.path().join("users.db"));

        let mut conn = factory.create_connection().await.expect("connect");
        sqlx::query(CREATE_USERS_TABLE)
            .execute(&mut conn)
            .await
            .expect("create table");

        (SqliteUserRepository::new(factory), dir)
    }

    fn jane() -> User {
        User {
            id: Uuid::new_v4(),
            full_name: "Jane Doe".into(),
        }
    }

    #[tokio::test]
    async fn get_all_on_empty_store_returns_empty_vec() {
        let (repo, _dir) = empty_store().await;

        let users = repo.get_all().await.expect("get_all failed");

        assert!(users.is_empty());
    }

    #[tokio::test]
    async fn create_then_get_by_id_round_trips() {
        let (repo, _dir) = empty_store().await;
        let user = jane();

        assert!(repo.create(&user).await.expect("create failed"));

        let found = repo
            .get_by_id(user.id)
            .await
            .expect("get_by_id failed")
            .expect("user missing");
        assert_eq!(found, user);
    }

    #[tokio::test]
    async fn get_by_id_on_unknown_id_returns_none() {
        let (repo, _dir) = empty_store().await;

        let found = repo.get_by_id(Uuid::new_v4()).await.expect("lookup failed");

        assert!(found.is_none());
    }

    #[tokio::test]
    async fn delete_by_id_on_unknown_id_returns_false() {
        let (repo, _dir) = empty_store().await;

        let deleted = repo
            .delete_by_id(Uuid::new_v4())
            .await
            .expect("delete failed");

        assert!(!deleted);
    }

    #[tokio::test]
    async fn delete_after_create_removes_the_row() {
        let (repo, _dir) = empty_store().await;
        let user = jane();
        repo.create(&user).await.expect("create failed");

        assert!(repo.delete_by_id(user.id).await.expect("delete failed"));
        assert!(repo
            .get_by_id(user.id)
            .await
            .expect("lookup failed")
            .is_none());
    }

    #[tokio::test]
    async fn duplicate_id_insert_propagates_a_constraint_error() {
        let (repo, _dir) = empty_store().await;
        let user = jane();
        repo.create(&user).await.expect("first create failed");

        let result = repo.create(&user).await;

        assert!(matches!(result, Err(DbError::Sqlx(sqlx::Error::Database(_)))));
    }

    #[tokio::test]
    async fn create_list_delete_scenario() {
        let (repo, _dir) = empty_store().await;
        let user = jane();

        assert!(repo.create(&user).await.expect("create failed"));

        let all = repo.get_all().await.expect("get_all failed");
        assert_eq!(all.len(), 1);
        assert_eq!(all[0].full_name, "Jane Doe");

        assert!(repo.delete_by_id(user.id).await.expect("delete failed"));
        assert!(repo.get_all().await.expect("get_all failed").is_empty());
    }
}
