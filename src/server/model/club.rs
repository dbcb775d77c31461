//! Club domain model.
//!
//! A club has a single admin and an ordered list of member user ids. Both are plain
//! references; nothing checks them against the user collection.

use crate::{
    model::club::ClubDto,
    server::{
        error::AppError,
        model::document::{normalize_id, Document},
        util::parse::parse_member_ids,
    },
};

#[derive(Debug, Clone, PartialEq)]
pub struct Club {
    /// Store-assigned id; `None` until first persisted.
    pub id: Option<String>,
    /// Natural key, unique among clubs as far as the existence check can tell.
    pub club_name: Option<String>,
    /// Id of the administering user.
    pub admin_id: Option<String>,
    /// Ids of member users, in insertion order.
    pub member_ids: Vec<String>,
}

impl Club {
    /// Creates a transient club whose only member is its admin.
    #[cfg(test)]
    pub fn new(club_name: impl Into<String>, admin_id: impl Into<String>) -> Self {
        let admin_id = admin_id.into();

        Self {
            id: None,
            club_name: Some(club_name.into()),
            member_ids: vec![admin_id.clone()],
            admin_id: Some(admin_id),
        }
    }

    pub fn into_dto(self) -> ClubDto {
        ClubDto {
            id: self.id,
            club_name: self.club_name,
            admin_id: self.admin_id,
            member_ids: self.member_ids,
        }
    }

    pub fn from_dto(dto: ClubDto) -> Self {
        Self {
            id: normalize_id(dto.id),
            club_name: dto.club_name,
            admin_id: dto.admin_id,
            member_ids: dto.member_ids,
        }
    }

    /// Converts an entity model to a club domain model at the repository boundary.
    ///
    /// # Returns
    /// - `Ok(Club)` - The converted club domain model
    /// - `Err(AppError::InternalErr(MalformedMemberIds))` - Stored member list is not a
    ///   JSON array of strings
    pub fn from_entity(entity: entity::club::Model) -> Result<Self, AppError> {
        let member_ids = parse_member_ids(&entity.id, entity.member_ids)?;

        Ok(Self {
            id: Some(entity.id),
            club_name: entity.club_name,
            admin_id: entity.admin_id,
            member_ids,
        })
    }
}

impl Document for Club {
    const LABEL: &'static str = "Club";
    const NOUN: &'static str = "club";
    const NATURAL_KEY: &'static str = "clubName";

    fn id(&self) -> Option<&str> {
        self.id.as_deref()
    }

    fn natural_key(&self) -> Option<&str> {
        self.club_name.as_deref()
    }

    fn with_id(mut self, id: String) -> Self {
        self.id = Some(id);
        self
    }
}
