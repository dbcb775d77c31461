//! Application state shared across all request handlers.
//!
//! Holds the database connection pool and the password hashing capability. The state is
//! built once during startup and cloned into each handler through Axum's state extraction.

use sea_orm::DatabaseConnection;

use crate::server::service::password::PasswordHasher;

/// Application state containing shared resources.
///
/// Both fields are cheap to clone: `DatabaseConnection` shares its pool between clones
/// and `PasswordHasher` is a `Copy` value holding only the bcrypt cost.
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool for accessing persistent storage.
    pub db: DatabaseConnection,

    /// Hashes passwords on add/update and verifies them on login.
    pub password_hasher: PasswordHasher,
}

impl AppState {
    pub fn new(db: DatabaseConnection, password_hasher: PasswordHasher) -> Self {
        Self {
            db,
            password_hasher,
        }
    }
}
