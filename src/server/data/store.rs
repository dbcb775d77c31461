//! Persistence seam used by the entity protocol.
//!
//! [`DocumentStore`] describes one collection of documents in the vocabulary of a
//! document database: save (insert or replace by id), find by id, find by natural key,
//! find all and delete. Services are written against the trait so the protocol is
//! defined once for every entity type.

use async_trait::async_trait;

use crate::server::{error::AppError, model::document::Document};

#[async_trait]
pub trait DocumentStore: Send + Sync {
    type Document: Document;

    /// Returns every document in store order.
    async fn find_all(&self) -> Result<Vec<Self::Document>, AppError>;

    /// Returns the document with the given id, if any.
    async fn find_by_id(&self, id: &str) -> Result<Option<Self::Document>, AppError>;

    /// Returns the first document whose natural key equals `key` exactly.
    async fn find_by_natural_key(&self, key: &str) -> Result<Option<Self::Document>, AppError>;

    /// Inserts the document, or replaces every field of the stored document with the same
    /// id. A transient document is assigned a fresh id.
    async fn save(&self, document: Self::Document) -> Result<Self::Document, AppError>;

    /// Removes the document with the given id. Removing a missing id is not an error.
    async fn delete(&self, id: &str) -> Result<(), AppError>;
}
