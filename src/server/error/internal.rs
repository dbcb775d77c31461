use thiserror::Error;

/// Internal issues with the codebase indicating unexpected behavior & possible bugs
#[derive(Error, Debug)]
pub enum InternalError {
    /// Stored club membership list could not be decoded.
    ///
    /// The `member_ids` column holds a JSON array of user ids. Anything else in that
    /// column means the row was written outside of the repository. Results in a 500
    /// Internal Server Error with a generic message returned to client.
    #[error("Failed to decode member ids for club '{club_id}' from '{value}': {source}")]
    MalformedMemberIds {
        /// Id of the club row being decoded
        club_id: String,
        /// The raw column value that failed to decode
        value: String,
        /// The underlying decode error
        #[source]
        source: serde_json::Error,
    },

    /// Club membership list could not be encoded for storage.
    #[error("Failed to encode member ids: {0}")]
    EncodeMemberIds(#[source] serde_json::Error),
}
