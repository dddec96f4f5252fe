//! userd-core: domain layer for the user directory service
//!
//! Connection factory, repository, startup initializer, and the
//! logging/timing service wrapper. HTTP lives in userd-server.

pub mod db;
pub mod models;
pub mod service;

pub use db::connection::ConnectionFactory;
pub use db::error::DbError;
pub use db::init::{DatabaseInitializer, SEED_FULL_NAME};
pub use db::repo::{SqliteUserRepository, UserRepository};
pub use models::User;
pub use service::UserService;
