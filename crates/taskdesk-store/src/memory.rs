use std::{
    collections::HashMap,
    sync::{Arc, RwLock},
};

use async_trait::async_trait;
use taskdesk_model::{Task, TaskId, TaskPatch};
use tracing::trace;

use crate::{RecordStore, StoreError};

/// In-memory task record storage.
///
/// Concurrent updates to the same id race under last-write-wins, the same
/// policy a remote key-value backend would exhibit.
#[derive(Clone, Default)]
pub struct MemoryStore {
    inner: Arc<RwLock<HashMap<TaskId, Task>>>,
}

impl MemoryStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of records currently held.
    pub fn len(&self) -> usize {
        self.inner.read().unwrap().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[async_trait]
impl RecordStore for MemoryStore {
    async fn get(&self, id: &TaskId) -> Result<Option<Task>, StoreError> {
        let map = self.inner.read().unwrap();
        Ok(map.get(id).cloned())
    }

    async fn put(&self, task: Task) -> Result<(), StoreError> {
        let mut map = self.inner.write().unwrap();
        trace!(id = %task.id, "put record");
        map.insert(task.id.clone(), task);
        Ok(())
    }

    async fn update_fields(&self, id: &TaskId, patch: TaskPatch) -> Result<Task, StoreError> {
        let mut map = self.inner.write().unwrap();
        let task = map
            .get_mut(id)
            .ok_or_else(|| StoreError::NotFound(id.to_string()))?;
        patch.apply_to(task);
        trace!(%id, "record updated");
        Ok(task.clone())
    }

    async fn delete(&self, id: &TaskId) -> Result<(), StoreError> {
        let mut map = self.inner.write().unwrap();
        map.remove(id);
        trace!(%id, "record deleted");
        Ok(())
    }

    async fn scan_all(&self) -> Result<Vec<Task>, StoreError> {
        let map = self.inner.read().unwrap();
        Ok(map.values().cloned().collect())
    }

    async fn scan_by_date(&self, date: &str) -> Result<Vec<Task>, StoreError> {
        let map = self.inner.read().unwrap();
        Ok(map.values().filter(|t| t.date == date).cloned().collect())
    }
}
