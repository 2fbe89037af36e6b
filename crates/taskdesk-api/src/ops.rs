use std::collections::HashMap;
use std::sync::Arc;

use serde_json::Value;
use taskdesk_model::{Task, TaskDraft, TaskId, TaskPatch};
use taskdesk_store::RecordStore;
use tracing::debug;

use crate::{envelope::Envelope, error::ApiError};

/// The five task operations, bound to an injected record store.
///
/// Every operation resolves to an [`Envelope`]; validation and not-found
/// outcomes are folded in locally, and only unexpected store or
/// serialization failures bubble up to the dispatcher's catch-all.
pub struct TaskOps<S> {
    store: Arc<S>,
}

impl<S> TaskOps<S>
where
    S: RecordStore,
{
    pub fn new(store: Arc<S>) -> Self {
        Self { store }
    }

    /// Create a task: mint an id, default `description` to `""`, persist,
    /// return 201 with the stored record.
    pub async fn create(&self, draft: TaskDraft) -> Result<Envelope, ApiError> {
        let (Some(title), Some(date)) = (non_empty(draft.title), non_empty(draft.date)) else {
            return Ok(Envelope::message(400, "fields 'title' and 'date' are required"));
        };

        let task = Task {
            id: TaskId::mint(),
            title,
            description: draft.description.unwrap_or_default(),
            date,
        };

        self.store.put(task.clone()).await?;
        debug!(id = %task.id, "task created");
        Envelope::reply(201, &task)
    }

    /// Fetch a task by id: 200 with the record, or 404.
    pub async fn get(&self, id: &TaskId) -> Result<Envelope, ApiError> {
        match self.store.get(id).await? {
            Some(task) => Envelope::reply(200, &task),
            None => Ok(Envelope::message(404, "task not found")),
        }
    }

    /// Apply a partial update: 400 when the patch carries nothing, 200 with
    /// the full updated record on success.
    ///
    /// Adapter failures are reported uniformly as 500 carrying the store's
    /// message, a missing key included; this operation does not translate
    /// not-found into 404.
    pub async fn update(&self, id: &TaskId, patch: TaskPatch) -> Result<Envelope, ApiError> {
        if patch.is_empty() {
            return Ok(Envelope::message(400, "no fields to update"));
        }

        match self.store.update_fields(id, patch).await {
            Ok(task) => {
                debug!(%id, "task updated");
                Envelope::reply(200, &task)
            }
            Err(e) => Ok(Envelope::message(500, &format!("failed to update: {e}"))),
        }
    }

    /// Delete a task: existence is pre-checked, absent is 404, success is a
    /// bodiless 204.
    pub async fn delete(&self, id: &TaskId) -> Result<Envelope, ApiError> {
        if self.store.get(id).await?.is_none() {
            return Ok(Envelope::message(404, "task not found"));
        }

        self.store.delete(id).await?;
        debug!(%id, "task deleted");
        Envelope::reply(204, &Value::Null)
    }

    /// List tasks: with a `date` query key present the listing is filtered
    /// (an empty value is rejected, not ignored); with the key absent the
    /// whole collection is returned.
    pub async fn list(&self, query: &HashMap<String, String>) -> Result<Envelope, ApiError> {
        let tasks = match query.get("date").map(String::as_str) {
            Some("") => {
                return Ok(Envelope::message(
                    400,
                    "query parameter 'date' is required, e.g. /tasks?date=2025-12-04",
                ));
            }
            Some(date) => self.store.scan_by_date(date).await?,
            None => self.store.scan_all().await?,
        };

        debug!(count = tasks.len(), "tasks listed");
        Envelope::reply(200, &tasks)
    }
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|s| !s.is_empty())
}
