//! User service - logging/timing wrapper over the repository
//!
//! The sole entry point the HTTP layer calls. Each operation logs a start
//! entry, times the repository call, and logs the elapsed duration on every
//! exit path; on failure it additionally logs the underlying error and
//! returns it unchanged. Errors are never swallowed, wrapped, or retried.

use std::sync::Arc;
use std::time::Instant;

use uuid::Uuid;

use crate::db::error::DbError;
use crate::db::repo::UserRepository;
use crate::models::User;

#[derive(Clone)]
pub struct UserService {
    repository: Arc<dyn UserRepository>,
}

impl UserService {
    pub fn new(repository: Arc<dyn UserRepository>) -> Self {
        Self { repository }
    }

    pub async fn get_all(&self) -> Result<Vec<User>, DbError> {
        tracing::info!("Retrieving all users");
        let started = Instant::now();

        let result = self.repository.get_all().await;
        let elapsed_ms = started.elapsed().as_millis();

        match result {
            Ok(users) => {
                tracing::info!("All users retrieved in {}ms", elapsed_ms);
                Ok(users)
            }
            Err(e) => {
                tracing::error!(error = %e, "Something went wrong while retrieving all users");
                tracing::info!("All users retrieved in {}ms", elapsed_ms);
                Err(e)
            }
        }
    }

    pub async fn get_by_id(&self, id: Uuid) -> Result<Option<User>, DbError> {
        tracing::info!("Retrieving user with id: {}", id);
        let started = Instant::now();

        let result = self.repository.get_by_id(id).await;
        let elapsed_ms = started.elapsed().as_millis();

        match result {
            Ok(user) => {
                tracing::info!("User with id {} retrieved in {}ms", id, elapsed_ms);
                Ok(user)
            }
            Err(e) => {
                tracing::error!(
                    error = %e,
                    "Something went wrong while retrieving user with id {}",
                    id
                );
                tracing::info!("User with id {} retrieved in {}ms", id, elapsed_ms);
                Err(e)
            }
        }
    }

    pub async fn create(&self, user: &User) -> Result<bool, DbError> {
        tracing::info!("Creating user with id {} and name: {}", user.id, user.full_name);
        let started = Instant::now();

        let result = self.repository.create(user).await;
        let elapsed_ms = started.elapsed().as_millis();

        match result {
            Ok(created) => {
                tracing::info!("User with id {} created in {}ms", user.id, elapsed_ms);
                Ok(created)
            }
            Err(e) => {
                tracing::error!(error = %e, "Something went wrong while creating a user");
                tracing::info!("User with id {} created in {}ms", user.id, elapsed_ms);
                Err(e)
            }
        }
    }

    pub async fn delete_by_id(&self, id: Uuid) -> Result<bool, DbError> {
        tracing::info!("Deleting user with id: {}", id);
        let started = Instant::now();

        let result = self.repository.delete_by_id(id).await;
        let elapsed_ms = started.elapsed().as_millis();

        match result {
            Ok(deleted) => {
                tracing::info!("User with id {} deleted in {}ms", id, elapsed_ms);
                Ok(deleted)
            }
            Err(e) => {
                tracing::error!(
                    error = %e,
                    "Something went wrong while deleting user with id {}",
                    id
                );
                tracing::info!("User with id {} deleted in {}ms", id, elapsed_ms);
                Err(e)
            }
        }
    }
}
