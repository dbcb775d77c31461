//! Club factory for creating test club entities.

use crate::factory::helpers::sequenced_id;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test clubs with customizable fields.
///
/// The member list defaults to just the admin, mirroring how clubs are created by the
/// application.
pub struct ClubFactory<'a> {
    db: &'a DatabaseConnection,
    id: String,
    club_name: Option<String>,
    admin_id: Option<String>,
    member_ids: Option<Vec<String>>,
    raw_member_ids: Option<String>,
}

impl<'a> ClubFactory<'a> {
    /// Creates a new ClubFactory with default values.
    ///
    /// Defaults:
    /// - id: `"club-{n}"` where n is auto-incremented
    /// - club_name: `"Club {n}"`
    /// - admin_id: `"admin-{n}"`
    /// - member_ids: `[admin_id]`
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let (id, n) = sequenced_id("club");
        Self {
            db,
            id,
            club_name: Some(format!("Club {}", n)),
            admin_id: Some(format!("admin-{}", n)),
            member_ids: None,
            raw_member_ids: None,
        }
    }

    pub fn id(mut self, id: impl Into<String>) -> Self {
        self.id = id.into();
        self
    }

    pub fn club_name(mut self, club_name: impl Into<String>) -> Self {
        self.club_name = Some(club_name.into());
        self
    }

    pub fn admin_id(mut self, admin_id: impl Into<String>) -> Self {
        self.admin_id = Some(admin_id.into());
        self
    }

    pub fn member_ids<I, S>(mut self, member_ids: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.member_ids = Some(member_ids.into_iter().map(Into::into).collect());
        self
    }

    /// Stores `value` in the member column verbatim, bypassing JSON encoding.
    ///
    /// Used to simulate rows written by something other than the application.
    pub fn raw_member_ids(mut self, value: impl Into<String>) -> Self {
        self.raw_member_ids = Some(value.into());
        self
    }

    /// Builds and inserts the club entity into the database.
    ///
    /// # Returns
    /// - `Ok(entity::club::Model)` - Created club entity
    /// - `Err(DbErr)` - Database error during insert or member encoding
    pub async fn build(self) -> Result<entity::club::Model, DbErr> {
        let member_ids = match self.raw_member_ids {
            Some(raw) => raw,
            None => {
                let ids = self
                    .member_ids
                    .unwrap_or_else(|| self.admin_id.iter().cloned().collect());
                serde_json::to_string(&ids).map_err(|e| DbErr::Custom(e.to_string()))?
            }
        };

        entity::club::ActiveModel {
            id: ActiveValue::Set(self.id),
            club_name: ActiveValue::Set(self.club_name),
            admin_id: ActiveValue::Set(self.admin_id),
            member_ids: ActiveValue::Set(member_ids),
        }
        .insert(self.db)
        .await
    }
}

/// Creates a club with default values.
pub async fn create_club(db: &DatabaseConnection) -> Result<entity::club::Model, DbErr> {
    ClubFactory::new(db).build().await
}
