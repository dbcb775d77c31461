//! HTTP request handlers.
//!
//! Controllers convert between wire DTOs and domain models and delegate everything else
//! to the service layer. Read handlers return `Result<_, AppError>`; mutating handlers
//! return an [`Outcome`](crate::server::model::outcome::Outcome) directly.

pub mod club;
pub mod param;
pub mod user;
