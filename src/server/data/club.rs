//! Club data repository for database operations.
//!
//! Clubs keep their member list in a single JSON text column, so every read goes through
//! [`Club::from_entity`] which can fail on malformed rows.

use async_trait::async_trait;
use sea_orm::{
    sea_query::OnConflict, ActiveValue, ColumnTrait, DatabaseConnection, EntityTrait,
    QueryFilter,
};
use uuid::Uuid;

use crate::server::{
    data::store::DocumentStore, error::AppError, model::club::Club,
    util::parse::encode_member_ids,
};

/// Repository providing database operations for clubs.
pub struct ClubRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> ClubRepository<'a> {
    /// Creates a new ClubRepository instance.
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection
    ///
    /// # Returns
    /// - `ClubRepository` - New repository instance
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl<'a> DocumentStore for ClubRepository<'a> {
    type Document = Club;

    async fn find_all(&self) -> Result<Vec<Club>, AppError> {
        let entities = entity::prelude::Club::find().all(self.db).await?;

        entities.into_iter().map(Club::from_entity).collect()
    }

    async fn find_by_id(&self, id: &str) -> Result<Option<Club>, AppError> {
        let entity = entity::prelude::Club::find_by_id(id.to_string())
            .one(self.db)
            .await?;

        entity.map(Club::from_entity).transpose()
    }

    /// Finds a club by club name.
    ///
    /// Club names are not unique at the database level; if duplicates slipped in, the
    /// first row the database yields is returned.
    async fn find_by_natural_key(&self, club_name: &str) -> Result<Option<Club>, AppError> {
        let entity = entity::prelude::Club::find()
            .filter(entity::club::Column::ClubName.eq(club_name))
            .one(self.db)
            .await?;

        entity.map(Club::from_entity).transpose()
    }

    /// Upserts a club, replacing every column of an existing row with the same id.
    ///
    /// # Returns
    /// - `Ok(Club)` - The stored club including its id
    /// - `Err(AppError::InternalErr)` - Member list could not be encoded
    /// - `Err(AppError::DbErr)` - Database error during insert or update
    async fn save(&self, club: Club) -> Result<Club, AppError> {
        let id = club.id.unwrap_or_else(|| Uuid::new_v4().to_string());
        let member_ids = encode_member_ids(&club.member_ids)?;

        let entity = entity::prelude::Club::insert(entity::club::ActiveModel {
            id: ActiveValue::Set(id),
            club_name: ActiveValue::Set(club.club_name),
            admin_id: ActiveValue::Set(club.admin_id),
            member_ids: ActiveValue::Set(member_ids),
        })
        .on_conflict(
            OnConflict::column(entity::club::Column::Id)
                .update_columns([
                    entity::club::Column::ClubName,
                    entity::club::Column::AdminId,
                    entity::club::Column::MemberIds,
                ])
                .to_owned(),
        )
        .exec_with_returning(self.db)
        .await?;

        Club::from_entity(entity)
    }

    async fn delete(&self, id: &str) -> Result<(), AppError> {
        entity::prelude::Club::delete_by_id(id.to_string())
            .exec(self.db)
            .await?;

        Ok(())
    }
}
