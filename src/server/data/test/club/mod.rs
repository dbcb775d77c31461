use crate::server::{
    data::{club::ClubRepository, store::DocumentStore},
    error::{internal::InternalError, AppError},
    model::club::Club,
};
use test_utils::{builder::TestBuilder, factory::club::{create_club, ClubFactory}};

mod delete;
mod find_all;
mod find_by_id;
mod find_by_natural_key;
mod save;
