//! Password hashing capability.
//!
//! Wraps bcrypt behind a small value type so the work factor comes from configuration
//! and tests can run with the minimum cost. bcrypt is CPU bound, so hashing and
//! verification run on tokio's blocking pool instead of a runtime worker.

use tokio::task;

use crate::server::error::AppError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PasswordHasher {
    cost: u32,
}

impl PasswordHasher {
    /// Creates a hasher using the given bcrypt work factor.
    pub fn new(cost: u32) -> Self {
        Self { cost }
    }

    /// Hashes a plaintext password into a salted bcrypt digest.
    ///
    /// # Returns
    /// - `Ok(String)` - Digest in modular crypt format (`$2b$...`)
    /// - `Err(AppError::BcryptErr)` - Cost out of range or hashing failure
    /// - `Err(AppError::JoinErr)` - The blocking hash task did not complete
    pub async fn hash(&self, plaintext: &str) -> Result<String, AppError> {
        let cost = self.cost;
        let plaintext = plaintext.to_string();

        let digest = task::spawn_blocking(move || bcrypt::hash(plaintext, cost)).await??;

        Ok(digest)
    }

    /// Checks a plaintext password against a stored digest.
    ///
    /// A digest bcrypt cannot parse never matches.
    pub async fn matches(&self, plaintext: &str, digest: &str) -> Result<bool, AppError> {
        let plaintext = plaintext.to_string();
        let digest = digest.to_string();

        let matched =
            task::spawn_blocking(move || bcrypt::verify(plaintext, &digest).unwrap_or(false))
                .await?;

        Ok(matched)
    }
}
