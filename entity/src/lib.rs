//! SeaORM entity definitions for the `user` and `club` collections.

pub mod prelude;

pub mod club;
pub mod user;
