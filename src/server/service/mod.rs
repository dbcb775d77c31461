//! Service layer for business logic and orchestration.
//!
//! This module contains the service layer of the application, which sits between the
//! controller (API) layer and the data (repository) layer. Services are responsible for:
//!
//! - **Entity protocol**: Existence checks, writes and outcome mapping (`entity`)
//! - **Credentials**: Password hashing and login checks (`password`, `user`)
//! - **Domain Models**: Working with domain models rather than DTOs or entity models

pub mod club;
pub mod entity;
pub mod password;
pub mod user;
