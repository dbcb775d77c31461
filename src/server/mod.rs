//! Server-side API backend and business logic.
//!
//! The backend uses Axum as the web framework and SeaORM for persistence. It exposes
//! users and clubs through the same existence-check/save/outcome protocol.
//!
//! # Architecture
//!
//! - **Controller Layer** (`controller/`) - HTTP request handlers and DTO conversion
//! - **Service Layer** (`service/`) - The entity protocol, password hashing and login checks
//! - **Data Layer** (`data/`) - `DocumentStore` repositories over SeaORM
//! - **Model Layer** (`model/`) - Domain models, the `Document` trait and `Outcome`
//! - **Error Layer** (`error/`) - Application error types and HTTP response mapping
//!
//! # Infrastructure
//!
//! - **Configuration** (`config`) - Environment-based application configuration
//! - **State** (`state`) - Shared application state (DB pool, password hasher)
//! - **Startup** (`startup`) - Tracing and database initialization
//! - **Router** (`router`) - Axum route configuration and API documentation
//!
//! # Request Flow
//!
//! 1. **Router** receives HTTP request and routes to appropriate controller
//! 2. **Controller** converts the DTO to a domain model and calls the service
//! 3. **Service** runs the existence check and decides the outcome
//! 4. **Data** queries the database and converts entities to domain models
//! 5. **Controller** returns the domain model as a DTO, or the outcome as `{"msg": ...}`

pub mod config;
pub mod controller;
pub mod data;
pub mod error;
pub mod model;
pub mod router;
pub mod service;
pub mod startup;
pub mod state;
pub mod util;
