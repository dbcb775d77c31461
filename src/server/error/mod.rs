//! Error types and HTTP response handling.
//!
//! This module provides the application's error hierarchy and conversion logic for
//! transforming errors into appropriate HTTP responses. The `AppError` enum serves
//! as the top-level error type that wraps domain-specific errors and implements
//! `IntoResponse` for automatic error handling in API endpoints.
//!
//! Mutating entity endpoints never surface an `AppError`; store failures on those
//! paths are folded into an [`Outcome`](crate::server::model::outcome::Outcome) by the
//! service layer. `AppError` reaches the client only from read endpoints, the login
//! check and startup.

pub mod config;
pub mod internal;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::{
    model::api::ErrorDto,
    server::error::{config::ConfigError, internal::InternalError},
};

/// Top-level application error type.
///
/// Aggregates all possible error types that can occur in the application and provides
/// automatic conversion to HTTP responses. All variants use `#[from]` for automatic
/// error conversion and map to 500 Internal Server Error.
#[derive(Error, Debug)]
pub enum AppError {
    /// Configuration error during startup or environment variable loading.
    #[error(transparent)]
    ConfigErr(#[from] ConfigError),

    /// Database operation error from SeaORM.
    ///
    /// Results in 500 Internal Server Error with error details logged server-side.
    #[error(transparent)]
    DbErr(#[from] sea_orm::DbErr),

    /// Stored data that could not be converted into a domain model.
    #[error(transparent)]
    InternalErr(#[from] InternalError),

    /// Password hashing failure from bcrypt.
    #[error(transparent)]
    BcryptErr(#[from] bcrypt::BcryptError),

    /// Socket or other I/O failure, typically while binding the listener.
    #[error(transparent)]
    IoErr(#[from] std::io::Error),

    /// A blocking task (password hashing) panicked or was cancelled.
    #[error(transparent)]
    JoinErr(#[from] tokio::task::JoinError),
}

/// Converts application errors into HTTP responses.
///
/// Every variant is an infrastructure failure, so the full error is logged and a
/// generic message is returned to avoid leaking implementation details.
impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        InternalServerError(self).into_response()
    }
}

/// Wrapper type for converting any displayable error into a 500 Internal Server Error response.
///
/// This struct logs the error message and returns a generic "Internal server error" message
/// to the client to avoid leaking implementation details.
pub struct InternalServerError<E>(pub E);

impl<E: std::fmt::Display> IntoResponse for InternalServerError<E> {
    fn into_response(self) -> Response {
        tracing::error!("{}", self.0);

        (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ErrorDto {
                error: "Internal server error".to_string(),
            }),
        )
            .into_response()
    }
}
