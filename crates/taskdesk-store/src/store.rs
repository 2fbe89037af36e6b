use async_trait::async_trait;
use taskdesk_model::{Task, TaskId, TaskPatch};

use crate::error::StoreError;

/// Key-value contract over a single collection of task records, keyed by id.
///
/// This trait abstracts the persistence backend, allowing users to:
/// - Use the provided [`crate::MemoryStore`]
/// - Bridge to an external key-value service with the same primitives
#[async_trait]
pub trait RecordStore: Send + Sync + 'static {
    /// Fetch a record by id. `Ok(None)` when the key is absent.
    async fn get(&self, id: &TaskId) -> Result<Option<Task>, StoreError>;

    /// Full insert/replace, idempotent on `id`.
    async fn put(&self, task: Task) -> Result<(), StoreError>;

    /// Apply only the assignments carried by `patch`, leaving other fields
    /// untouched, and return the full updated record.
    ///
    /// Fails with [`StoreError::NotFound`] when the key does not exist.
    async fn update_fields(&self, id: &TaskId, patch: TaskPatch) -> Result<Task, StoreError>;

    /// Remove the record. Callers pre-check existence; removing a missing
    /// key is not required to be detectable.
    async fn delete(&self, id: &TaskId) -> Result<(), StoreError>;

    /// Every record in the collection, in no particular order.
    async fn scan_all(&self) -> Result<Vec<Task>, StoreError>;

    /// Records whose `date` field equals `date` literally. No index is
    /// assumed: this is a full-collection scan.
    async fn scan_by_date(&self, date: &str) -> Result<Vec<Task>, StoreError>;
}
