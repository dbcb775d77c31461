//! User domain model.
//!
//! Provides the domain model for application users along with conversions to and from
//! the wire DTO and the database entity. The password field only ever holds a bcrypt
//! digest once the user has passed through the service layer.

use crate::{
    model::user::UserDto,
    server::model::document::{normalize_id, Document},
};

/// User identified by a store-assigned id and a unique user name.
#[derive(Debug, Clone, PartialEq)]
pub struct User {
    /// Store-assigned id; `None` until first persisted.
    pub id: Option<String>,
    /// Natural key, unique among users as far as the existence check can tell.
    pub user_name: Option<String>,
    /// Plaintext on the way in, bcrypt digest once stored.
    pub password: Option<String>,
}

impl User {
    /// Creates a transient user with only a user name.
    #[cfg(test)]
    pub fn new(user_name: impl Into<String>) -> Self {
        Self {
            id: None,
            user_name: Some(user_name.into()),
            password: None,
        }
    }

    /// Converts the user domain model to a DTO for API responses.
    ///
    /// The password is carried along but never serialized by the DTO.
    pub fn into_dto(self) -> UserDto {
        UserDto {
            id: self.id,
            user_name: self.user_name,
            password: self.password,
        }
    }

    /// Converts a request DTO into a domain model, treating a blank id as absent.
    pub fn from_dto(dto: UserDto) -> Self {
        Self {
            id: normalize_id(dto.id),
            user_name: dto.user_name,
            password: dto.password,
        }
    }

    /// Converts an entity model to a user domain model at the repository boundary.
    pub fn from_entity(entity: entity::user::Model) -> Self {
        Self {
            id: Some(entity.id),
            user_name: entity.user_name,
            password: entity.password,
        }
    }
}

impl Document for User {
    const LABEL: &'static str = "User";
    const NOUN: &'static str = "user";
    const NATURAL_KEY: &'static str = "userName";

    fn id(&self) -> Option<&str> {
        self.id.as_deref()
    }

    fn natural_key(&self) -> Option<&str> {
        self.user_name.as_deref()
    }

    fn with_id(mut self, id: String) -> Self {
        self.id = Some(id);
        self
    }
}
