//! Domain entities

use uuid::Uuid;

/// A user record as exchanged between layers.
///
/// The id is assigned by the caller before the write and never changes;
/// the store's primary key enforces uniqueness.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    pub id: Uuid,
    pub full_name: String,
}
