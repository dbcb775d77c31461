//! Structured results of mutating entity operations.
//!
//! Add, update and remove never fail with an error. Every branch of the entity
//! protocol ends in an [`Outcome`] carrying the HTTP status class and the exact
//! message text clients match on.

use std::fmt;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};

use crate::{model::api::MessageDto, server::model::document::Document};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutcomeStatus {
    /// The write or delete landed.
    Success,
    /// Existence check rejected the request (duplicate on add, missing target otherwise).
    Conflict,
    /// The store failed while the operation was in progress.
    InternalError,
}

impl OutcomeStatus {
    pub fn status_code(self) -> StatusCode {
        match self {
            Self::Success => StatusCode::OK,
            Self::Conflict => StatusCode::BAD_REQUEST,
            Self::InternalError => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

/// Which write an outcome reports on. Rendered into messages as the action noun.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SaveAction {
    Addition,
    Update,
}

impl fmt::Display for SaveAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Addition => f.write_str("addition"),
            Self::Update => f.write_str("update"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Outcome {
    pub status: OutcomeStatus,
    pub message: String,
}

impl Outcome {
    /// `"<Entity> id Already exists"`, regardless of which field collided.
    pub fn already_exists<D: Document>() -> Self {
        Self {
            status: OutcomeStatus::Conflict,
            message: format!("{} id Already exists", D::LABEL),
        }
    }

    /// `"<Entity> Id does not exist"`, for update and remove on a missing target.
    pub fn does_not_exist<D: Document>() -> Self {
        Self {
            status: OutcomeStatus::Conflict,
            message: format!("{} Id does not exist", D::LABEL),
        }
    }

    pub fn saved<D: Document>(action: SaveAction) -> Self {
        Self {
            status: OutcomeStatus::Success,
            message: format!("{} {} was a success", D::LABEL, action),
        }
    }

    pub fn save_failed<D: Document>(action: SaveAction) -> Self {
        Self {
            status: OutcomeStatus::InternalError,
            message: format!("Issue while attempting {} of {}", action, D::NOUN),
        }
    }

    pub fn deleted<D: Document>() -> Self {
        Self {
            status: OutcomeStatus::Success,
            message: format!("{} deleted successfully", D::LABEL),
        }
    }

    pub fn delete_failed<D: Document>() -> Self {
        Self {
            status: OutcomeStatus::InternalError,
            message: format!("Issue while deleting {}", D::NOUN),
        }
    }

    #[cfg(test)]
    pub fn is_success(&self) -> bool {
        self.status == OutcomeStatus::Success
    }

    pub fn into_dto(self) -> MessageDto {
        MessageDto { msg: self.message }
    }
}

impl IntoResponse for Outcome {
    fn into_response(self) -> Response {
        (self.status.status_code(), Json(self.into_dto())).into_response()
    }
}
