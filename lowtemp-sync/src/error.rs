//! Error types for the sync layer.

use thiserror::Error;

/// Result type for sync operations.
pub type SyncResult<T> = Result<T, SyncError>;

/// Errors that can occur in sync operations.
///
/// None of these reach the user-visible error slot — that is reserved
/// for range validation. Channel and store failures degrade to
/// best-effort local persistence.
#[derive(Debug, Error)]
pub enum SyncError {
    /// Channel absent, closed, or failed mid-send.
    #[error("channel error: {0}")]
    Channel(String),

    /// Invalid frame format.
    #[error("protocol error: {0}")]
    Protocol(String),

    /// Serialization error.
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Local cache failure.
    #[error("storage error: {0}")]
    Store(#[from] lowtemp_store::StoreError),
}
