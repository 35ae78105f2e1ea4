//! Error types for the store crate.

/// Errors that can occur during inbox store operations.
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum StoreError {
    /// Underlying database operation failed.
    #[error(transparent)]
    Database(#[from] sqlx::Error),

    /// A stored inbox payload could not be encoded or decoded.
    #[error("bad inbox payload for {email}: {source}")]
    Payload {
        email: String,
        source: serde_json::Error,
    },
}
