//! Factories for inserting test rows with sensible defaults.
//!
//! Each factory follows the same builder shape: construct with `new(db)`, override the
//! fields the test cares about, then `build()` to insert and return the entity model.

pub mod club;
pub mod helpers;
pub mod user;
