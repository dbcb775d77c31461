//! User service for business logic.
//!
//! This module provides the `UserService`, which runs the generic entity protocol over
//! the user collection, hashes passwords before they are stored and answers login
//! checks against the stored digests.

use sea_orm::DatabaseConnection;

use crate::server::{
    data::user::UserRepository,
    error::AppError,
    model::{outcome::Outcome, user::User},
    service::{entity::EntityService, password::PasswordHasher},
};

/// Service providing business logic for user management.
pub struct UserService<'a> {
    entities: EntityService<UserRepository<'a>>,
    hasher: &'a PasswordHasher,
}

impl<'a> UserService<'a> {
    /// Creates a new UserService instance.
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection
    /// - `hasher` - Password hasher used for stored digests and login checks
    ///
    /// # Returns
    /// - `UserService` - New service instance
    pub fn new(db: &'a DatabaseConnection, hasher: &'a PasswordHasher) -> Self {
        Self {
            entities: EntityService::new(UserRepository::new(db)),
            hasher,
        }
    }

    /// Retrieves every user.
    ///
    /// # Returns
    /// - `Ok(Vec<User>)` - All users (empty if none exist)
    /// - `Err(AppError::DbErr)` - Database error during query
    pub async fn find_all(&self) -> Result<Vec<User>, AppError> {
        self.entities.find_all().await
    }

    /// Retrieves a user by exact user name.
    ///
    /// # Returns
    /// - `Ok(Some(User))` - User found
    /// - `Ok(None)` - No user with that name
    /// - `Err(AppError::DbErr)` - Database error during query
    pub async fn find_by_user_name(&self, user_name: &str) -> Result<Option<User>, AppError> {
        self.entities.find_by_natural_key(user_name).await
    }

    /// Retrieves a user by id.
    pub async fn find_by_id(&self, id: &str) -> Result<Option<User>, AppError> {
        self.entities.find_by_id(id).await
    }

    /// Adds a new user, hashing the submitted password before it is stored.
    pub async fn add(&self, user: User) -> Outcome {
        let hasher = *self.hasher;
        self.entities
            .add_with(user, move |user| hash_password(hasher, user))
            .await
    }

    /// Replaces an existing user, hashing the submitted password before it is stored.
    ///
    /// The stored user is replaced wholesale; a user submitted without a password ends
    /// up without one.
    pub async fn update(&self, user: User) -> Outcome {
        let hasher = *self.hasher;
        self.entities
            .update_with(user, move |user| hash_password(hasher, user))
            .await
    }

    /// Removes the user with the given id.
    pub async fn remove(&self, id: &str) -> Outcome {
        self.entities.remove(id).await
    }

    /// Checks a login attempt.
    ///
    /// Looks the user up by user name and compares the submitted password against the
    /// stored bcrypt digest. Unknown users and users without a stored password never
    /// match.
    ///
    /// # Returns
    /// - `Ok(true)` - Password matches the stored digest
    /// - `Ok(false)` - Unknown user or wrong password
    /// - `Err(AppError::DbErr)` - Database error during lookup
    pub async fn valid_login(&self, user_name: &str, password: &str) -> Result<bool, AppError> {
        let user = self.entities.find_by_natural_key(user_name).await?;

        let valid = match user.and_then(|user| user.password) {
            Some(digest) => self.hasher.matches(password, &digest).await?,
            None => false,
        };

        if valid {
            tracing::debug!("Valid login attempt for {}", user_name);
        } else {
            tracing::debug!("Invalid login attempt for {}", user_name);
        }

        Ok(valid)
    }
}

/// Replaces a plaintext password with its digest.
async fn hash_password(hasher: PasswordHasher, mut user: User) -> Result<User, AppError> {
    if let Some(plaintext) = user.password.take() {
        user.password = Some(hasher.hash(&plaintext).await?);
    }

    Ok(user)
}
