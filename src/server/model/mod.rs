//! Domain models used by the service and data layers.
//!
//! Domain models sit between wire DTOs (`crate::model`) and SeaORM entities. Each
//! model owns its conversions in both directions so that neither the controllers
//! nor the repositories need to know about the other side.

pub mod club;
pub mod document;
pub mod outcome;
pub mod user;
