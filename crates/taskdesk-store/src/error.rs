use thiserror::Error;

#[derive(Debug, Error)]
pub enum StoreError {
    /// The key does not exist. Reported by `update_fields` so callers can
    /// tell a missing record apart from a backend failure if they care to.
    #[error("no record for id: {0}")]
    NotFound(String),

    #[error("storage backend error: {0}")]
    Backend(String),
}
