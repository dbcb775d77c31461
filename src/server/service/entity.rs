//! Generic entity protocol shared by every collection.
//!
//! Every mutating operation follows the same sequence: an existence check against the
//! store, then a single write or delete, with every branch mapped to an [`Outcome`].
//! Store failures on these paths are logged and turned into an `InternalError` outcome;
//! they are never returned as errors.
//!
//! The existence check and the write are separate store calls, so two concurrent adds
//! with the same natural key can both pass the check. Natural-key uniqueness is best
//! effort.

use std::future::{self, Future};

use crate::server::{
    data::store::DocumentStore,
    error::AppError,
    model::{
        document::Document,
        outcome::{Outcome, SaveAction},
    },
};

/// Service applying the entity protocol to one [`DocumentStore`].
pub struct EntityService<S> {
    store: S,
}

impl<S: DocumentStore> EntityService<S> {
    /// Creates a new EntityService over the given store.
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// Returns every document in store order.
    pub async fn find_all(&self) -> Result<Vec<S::Document>, AppError> {
        self.store.find_all().await
    }

    /// Returns the document whose natural key equals `key`, if any.
    pub async fn find_by_natural_key(&self, key: &str) -> Result<Option<S::Document>, AppError> {
        self.store.find_by_natural_key(key).await
    }

    /// Returns the document with the given id, if any.
    pub async fn find_by_id(&self, id: &str) -> Result<Option<S::Document>, AppError> {
        self.store.find_by_id(id).await
    }

    /// Adds a new document.
    ///
    /// # Returns
    /// - `Success` - `"<Entity> addition was a success"`
    /// - `Conflict` - `"<Entity> id Already exists"` when either the id or the natural key
    ///   is already taken
    /// - `InternalError` - `"Issue while attempting addition of <entity>"` when the store
    ///   fails
    pub async fn add(&self, candidate: S::Document) -> Outcome {
        self.add_with(candidate, |document| future::ready(Ok(document))).await
    }

    /// Adds a new document, transforming it with `prepare` once the existence check passed.
    ///
    /// A `prepare` failure is reported the same way as a failed write.
    pub async fn add_with<F, Fut>(&self, candidate: S::Document, prepare: F) -> Outcome
    where
        F: FnOnce(S::Document) -> Fut + Send,
        Fut: Future<Output = Result<S::Document, AppError>> + Send,
    {
        let action = SaveAction::Addition;

        match exists(&self.store, &candidate).await {
            Ok(false) => {}
            Ok(true) => {
                tracing::error!(
                    "Attempting to save a new {} with existing id or {}, rejecting (id: {:?}, {}: {:?})",
                    S::Document::NOUN,
                    S::Document::NATURAL_KEY,
                    candidate.id(),
                    S::Document::NATURAL_KEY,
                    candidate.natural_key(),
                );
                return Outcome::already_exists::<S::Document>();
            }
            Err(err) => return save_failed::<S::Document>(action, err),
        }

        self.save(candidate, action, prepare).await
    }

    /// Replaces an existing document.
    ///
    /// The target is located by id when the candidate carries one, otherwise by natural
    /// key. An id that matches nothing is a conflict even if the natural key is taken,
    /// so an update never creates a document.
    ///
    /// # Returns
    /// - `Success` - `"<Entity> update was a success"`
    /// - `Conflict` - `"<Entity> Id does not exist"`
    /// - `InternalError` - `"Issue while attempting update of <entity>"`
    pub async fn update(&self, candidate: S::Document) -> Outcome {
        self.update_with(candidate, |document| future::ready(Ok(document))).await
    }

    /// Replaces an existing document, transforming it with `prepare` once the target
    /// has been found.
    pub async fn update_with<F, Fut>(&self, candidate: S::Document, prepare: F) -> Outcome
    where
        F: FnOnce(S::Document) -> Fut + Send,
        Fut: Future<Output = Result<S::Document, AppError>> + Send,
    {
        let action = SaveAction::Update;

        let target = match find_update_target(&self.store, &candidate).await {
            Ok(Some(target)) => target,
            Ok(None) => {
                tracing::error!(
                    "Id is null or {} not found (id: {:?}, {}: {:?})",
                    S::Document::NOUN,
                    candidate.id(),
                    S::Document::NATURAL_KEY,
                    candidate.natural_key(),
                );
                return Outcome::does_not_exist::<S::Document>();
            }
            Err(err) => return save_failed::<S::Document>(action, err),
        };

        // a candidate located by natural key takes over the stored id
        let candidate = match target.id() {
            Some(id) if candidate.id().is_none() => candidate.with_id(id.to_string()),
            _ => candidate,
        };

        self.save(candidate, action, prepare).await
    }

    /// Removes the document with the given id.
    ///
    /// # Returns
    /// - `Success` - `"<Entity> deleted successfully"`
    /// - `Conflict` - `"<Entity> Id does not exist"`
    /// - `InternalError` - `"Issue while deleting <entity>"`
    pub async fn remove(&self, id: &str) -> Outcome {
        match self.store.find_by_id(id).await {
            Ok(Some(_)) => {}
            Ok(None) => {
                tracing::error!("Id is null or {} not found (id: {})", S::Document::NOUN, id);
                return Outcome::does_not_exist::<S::Document>();
            }
            Err(err) => return delete_failed::<S::Document>(id, err),
        }

        match self.store.delete(id).await {
            Ok(()) => {
                tracing::info!("{} deleted successfully (id: {})", S::Document::LABEL, id);
                Outcome::deleted::<S::Document>()
            }
            Err(err) => delete_failed::<S::Document>(id, err),
        }
    }

    async fn save<F, Fut>(&self, candidate: S::Document, action: SaveAction, prepare: F) -> Outcome
    where
        F: FnOnce(S::Document) -> Fut + Send,
        Fut: Future<Output = Result<S::Document, AppError>> + Send,
    {
        let result = match prepare(candidate).await {
            Ok(document) => self.store.save(document).await,
            Err(err) => Err(err),
        };

        match result {
            Ok(saved) => {
                tracing::info!(
                    "{} {} was a success (id: {:?}, {}: {:?})",
                    S::Document::LABEL,
                    action,
                    saved.id(),
                    S::Document::NATURAL_KEY,
                    saved.natural_key(),
                );
                Outcome::saved::<S::Document>(action)
            }
            Err(err) => save_failed::<S::Document>(action, err),
        }
    }
}

/// Whether the candidate's id or natural key is already taken.
async fn exists<S: DocumentStore>(store: &S, candidate: &S::Document) -> Result<bool, AppError> {
    if let Some(id) = candidate.id() {
        if store.find_by_id(id).await?.is_some() {
            return Ok(true);
        }
    }

    match candidate.natural_key() {
        Some(key) => Ok(store.find_by_natural_key(key).await?.is_some()),
        None => Ok(false),
    }
}

async fn find_update_target<S: DocumentStore>(
    store: &S,
    candidate: &S::Document,
) -> Result<Option<S::Document>, AppError> {
    match (candidate.id(), candidate.natural_key()) {
        (Some(id), _) => store.find_by_id(id).await,
        (None, Some(key)) => store.find_by_natural_key(key).await,
        (None, None) => Ok(None),
    }
}

fn save_failed<D: Document>(action: SaveAction, err: AppError) -> Outcome {
    tracing::error!("Could not complete {} of {} | {}", action, D::NOUN, err);
    Outcome::save_failed::<D>(action)
}

fn delete_failed<D: Document>(id: &str, err: AppError) -> Outcome {
    tracing::error!("Could not remove existing {} (id: {}) | {}", D::NOUN, id, err);
    Outcome::delete_failed::<D>()
}
