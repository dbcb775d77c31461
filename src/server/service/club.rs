//! Club service for business logic.
//!
//! Clubs need nothing beyond the generic entity protocol; this service only binds it to
//! the club repository.

use sea_orm::DatabaseConnection;

use crate::server::{
    data::club::ClubRepository,
    error::AppError,
    model::{club::Club, outcome::Outcome},
    service::entity::EntityService,
};

pub struct ClubService<'a> {
    entities: EntityService<ClubRepository<'a>>,
}

impl<'a> ClubService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self {
            entities: EntityService::new(ClubRepository::new(db)),
        }
    }

    pub async fn find_all(&self) -> Result<Vec<Club>, AppError> {
        self.entities.find_all().await
    }

    pub async fn find_by_club_name(&self, club_name: &str) -> Result<Option<Club>, AppError> {
        self.entities.find_by_natural_key(club_name).await
    }

    pub async fn find_by_id(&self, id: &str) -> Result<Option<Club>, AppError> {
        self.entities.find_by_id(id).await
    }

    pub async fn add(&self, club: Club) -> Outcome {
        self.entities.add(club).await
    }

    pub async fn update(&self, club: Club) -> Outcome {
        self.entities.update(club).await
    }

    pub async fn remove(&self, id: &str) -> Outcome {
        self.entities.remove(id).await
    }
}
