//! Store error types.

use thiserror::Error;

/// Snapshot retrieval errors.
#[derive(Debug, Error)]
pub enum StoreError {
    /// The backing store could not be reached or read.
    #[error("store unavailable: {0}")]
    Unavailable(String),

    /// The snapshot payload could not be decoded. Raised before any data
    /// reaches the engine; malformed dates are a caller-side concern.
    #[error("malformed snapshot: {0}")]
    Malformed(String),
}
