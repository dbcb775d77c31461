//! User data repository for database operations.
//!
//! This module provides the `UserRepository` for managing user records in the database.
//! It backs the generic entity protocol through [`DocumentStore`] and handles conversion
//! between entity models and domain models at the infrastructure boundary.

use async_trait::async_trait;
use sea_orm::{
    sea_query::OnConflict, ActiveValue, ColumnTrait, DatabaseConnection, EntityTrait,
    QueryFilter,
};
use uuid::Uuid;

use crate::server::{data::store::DocumentStore, error::AppError, model::user::User};

/// Repository providing database operations for users.
///
/// This struct holds a reference to the database connection and provides methods
/// for creating, reading, replacing, and deleting user records.
pub struct UserRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> UserRepository<'a> {
    /// Creates a new UserRepository instance.
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection
    ///
    /// # Returns
    /// - `UserRepository` - New repository instance
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl<'a> DocumentStore for UserRepository<'a> {
    type Document = User;

    /// Gets all users.
    ///
    /// # Returns
    /// - `Ok(Vec<User>)` - Every stored user (empty if none exist)
    /// - `Err(AppError::DbErr)` - Database error during query
    async fn find_all(&self) -> Result<Vec<User>, AppError> {
        let entities = entity::prelude::User::find().all(self.db).await?;

        Ok(entities.into_iter().map(User::from_entity).collect())
    }

    /// Finds a user by id.
    ///
    /// # Arguments
    /// - `id` - Store-assigned user id
    ///
    /// # Returns
    /// - `Ok(Some(User))` - User found
    /// - `Ok(None)` - No user with that id
    /// - `Err(AppError::DbErr)` - Database error during query
    async fn find_by_id(&self, id: &str) -> Result<Option<User>, AppError> {
        let entity = entity::prelude::User::find_by_id(id.to_string())
            .one(self.db)
            .await?;

        Ok(entity.map(User::from_entity))
    }

    /// Finds a user by user name.
    ///
    /// User names are not unique at the database level; if duplicates slipped in, the
    /// first row the database yields is returned.
    ///
    /// # Arguments
    /// - `user_name` - Exact user name to match
    ///
    /// # Returns
    /// - `Ok(Some(User))` - User found
    /// - `Ok(None)` - No user with that name
    /// - `Err(AppError::DbErr)` - Database error during query
    async fn find_by_natural_key(&self, user_name: &str) -> Result<Option<User>, AppError> {
        let entity = entity::prelude::User::find()
            .filter(entity::user::Column::UserName.eq(user_name))
            .one(self.db)
            .await?;

        Ok(entity.map(User::from_entity))
    }

    /// Upserts a user.
    ///
    /// Inserts a new row or, when a row with the same id exists, replaces every column.
    /// Columns absent from `user` are written as NULL rather than preserved. A user
    /// without an id is assigned a fresh UUID.
    ///
    /// # Arguments
    /// - `user` - User to persist; the password must already be hashed
    ///
    /// # Returns
    /// - `Ok(User)` - The stored user including its id
    /// - `Err(AppError::DbErr)` - Database error during insert or update
    async fn save(&self, user: User) -> Result<User, AppError> {
        let id = user.id.unwrap_or_else(|| Uuid::new_v4().to_string());

        let entity = entity::prelude::User::insert(entity::user::ActiveModel {
            id: ActiveValue::Set(id),
            user_name: ActiveValue::Set(user.user_name),
            password: ActiveValue::Set(user.password),
        })
        .on_conflict(
            OnConflict::column(entity::user::Column::Id)
                .update_columns([
                    entity::user::Column::UserName,
                    entity::user::Column::Password,
                ])
                .to_owned(),
        )
        .exec_with_returning(self.db)
        .await?;

        Ok(User::from_entity(entity))
    }

    /// Deletes a user by id.
    ///
    /// # Returns
    /// - `Ok(())` - User deleted (or no matching user found)
    /// - `Err(AppError::DbErr)` - Database error during delete
    async fn delete(&self, id: &str) -> Result<(), AppError> {
        entity::prelude::User::delete_by_id(id.to_string())
            .exec(self.db)
            .await?;

        Ok(())
    }
}
