//! Wire-level DTOs exchanged with API clients.

pub mod api;
pub mod club;
pub mod user;
