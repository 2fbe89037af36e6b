use thiserror::Error;

/// Failures that escape an operation into the dispatcher's catch-all.
///
/// Validation and not-found outcomes never travel this path: each operation
/// folds them into an envelope locally.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("store error: {0}")]
    Store(#[from] taskdesk_store::StoreError),

    #[error("serialization error: {0}")]
    Serialize(#[from] serde_json::Error),
}
