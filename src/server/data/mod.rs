//! Database repository layer for all domain entities.
//!
//! This module contains repository structs that handle database operations (CRUD) for each
//! entity in the application. Repositories use SeaORM entity models internally and return
//! domain models to maintain separation between the data layer and business logic layer.
//! Each repository implements [`store::DocumentStore`] so the service layer can drive it
//! through the generic entity protocol.

pub mod club;
pub mod store;
pub mod user;

#[cfg(test)]
mod test;
