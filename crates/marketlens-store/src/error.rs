use thiserror::Error;

/// Failures surfaced by the persistent store.
///
/// Read-side problems (absent keys, corrupt payloads) are never errors; they
/// degrade to a cache miss. Only write failures and serialization failures
/// reach callers.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("store write error: {0}")]
    Write(String),

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}
