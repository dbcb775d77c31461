//! Shared shape of every persisted entity.
//!
//! The entity protocol only ever needs three things from a record: its store-assigned
//! id, its natural key and the names used when reporting on it. [`Document`] captures
//! exactly that so the existence check can be written once.

/// An entity stored in its own collection, identified by an opaque id and
/// de-duplicated by an application-level natural key.
pub trait Document: Clone + Send + Sync + 'static {
    /// Capitalised entity name that starts outcome messages, e.g. `"User"`.
    const LABEL: &'static str;

    /// Lower-case entity name used inside outcome messages, e.g. `"user"`.
    const NOUN: &'static str;

    /// Wire name of the natural-key field, used in log lines.
    const NATURAL_KEY: &'static str;

    /// Store-assigned id, `None` while the entity is transient.
    fn id(&self) -> Option<&str>;

    /// Value of the natural-key field, if set.
    fn natural_key(&self) -> Option<&str>;

    /// Returns the entity carrying the given id.
    fn with_id(self, id: String) -> Self;
}

/// Treats a blank id the same as a missing one.
pub(crate) fn normalize_id(id: Option<String>) -> Option<String> {
    id.filter(|id| !id.trim().is_empty())
}
