//! Database layer - connection factory, repository, and startup initializer
//!
//! # Design Principles
//!
//! - One connection per logical operation, released at scope end on every
//!   exit path - no connection is shared across concurrent calls
//! - Rely on DB constraints, handle conflicts - no check-then-insert
//! - Not-found is a data-level result (`None` / `false`), never an error

pub mod connection;
pub mod error;
pub mod init;
pub mod repo;

pub use connection::ConnectionFactory;
pub use error::DbError;
pub use init::DatabaseInitializer;
pub use repo::{SqliteUserRepository, UserRepository};
