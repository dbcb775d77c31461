use crate::server::{
    data::{store::DocumentStore, user::UserRepository},
    error::AppError,
    model::user::User,
};
use test_utils::{builder::TestBuilder, factory::user::{create_user, UserFactory}};

mod delete;
mod find_all;
mod find_by_id;
mod find_by_natural_key;
mod save;
