//! Unique default values for factories.

use std::sync::atomic::{AtomicU64, Ordering};

static SEQUENCE: AtomicU64 = AtomicU64::new(1);

/// Returns a row id of the form `"<prefix>-<n>"` along with `n`.
///
/// `n` is unique across every factory in the test binary, so rows built in the same
/// database never collide on their default id or name.
pub fn sequenced_id(prefix: &str) -> (String, u64) {
    let n = SEQUENCE.fetch_add(1, Ordering::Relaxed);
    (format!("{}-{}", prefix, n), n)
}
