use std::sync::Arc;

use taskdesk_model::TaskId;
use taskdesk_store::RecordStore;
use tracing::{debug, error};

use crate::{
    envelope::Envelope,
    error::ApiError,
    ops::TaskOps,
    request::{Request, parse_body},
    route::Route,
};

/// Stateless request dispatcher over an injected record store.
///
/// One instance serves any number of independent requests; it holds no
/// per-request state.
pub struct Dispatcher<S> {
    ops: TaskOps<S>,
}

impl<S> Dispatcher<S>
where
    S: RecordStore,
{
    pub fn new(store: Arc<S>) -> Self {
        Self {
            ops: TaskOps::new(store),
        }
    }

    /// Dispatch one request. Never fails: every outcome, an internal error
    /// included, is folded into a well-formed envelope.
    pub async fn handle(&self, req: &Request) -> Envelope {
        debug!(method = %req.method, path = %req.path, "dispatching request");

        match self.dispatch(req).await {
            Ok(envelope) => envelope,
            Err(e) => {
                error!(error = %e, method = %req.method, path = %req.path, "request failed");
                Envelope::message(500, &format!("internal error: {e}"))
            }
        }
    }

    async fn dispatch(&self, req: &Request) -> Result<Envelope, ApiError> {
        let route = match Route::parse(&req.method, &req.path) {
            Ok(route) => route,
            Err(e) => return Ok(Envelope::message(e.status_code(), &e.to_string())),
        };

        let body = req.body.as_deref();
        match route {
            Route::CreateTask => self.ops.create(parse_body(body)).await,
            Route::GetTask { id } => self.ops.get(&TaskId::from(id)).await,
            Route::UpdateTask { id } => {
                self.ops.update(&TaskId::from(id), parse_body(body)).await
            }
            Route::DeleteTask { id } => self.ops.delete(&TaskId::from(id)).await,
            Route::ListTasks => self.ops.list(&req.query).await,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use taskdesk_model::{Task, TaskPatch};
    use taskdesk_store::{MemoryStore, StoreError};

    fn dispatcher() -> Dispatcher<MemoryStore> {
        Dispatcher::new(Arc::new(MemoryStore::new()))
    }

    /// Store whose every primitive reports a backend failure.
    struct BrokenStore;

    #[async_trait]
    impl taskdesk_store::RecordStore for BrokenStore {
        async fn get(&self, _id: &TaskId) -> Result<Option<Task>, StoreError> {
            Err(StoreError::Backend("connection reset".to_string()))
        }

        async fn put(&self, _task: Task) -> Result<(), StoreError> {
            Err(StoreError::Backend("connection reset".to_string()))
        }

        async fn update_fields(&self, _id: &TaskId, _patch: TaskPatch) -> Result<Task, StoreError> {
            Err(StoreError::Backend("connection reset".to_string()))
        }

        async fn delete(&self, _id: &TaskId) -> Result<(), StoreError> {
            Err(StoreError::Backend("connection reset".to_string()))
        }

        async fn scan_all(&self) -> Result<Vec<Task>, StoreError> {
            Err(StoreError::Backend("connection reset".to_string()))
        }

        async fn scan_by_date(&self, _date: &str) -> Result<Vec<Task>, StoreError> {
            Err(StoreError::Backend("connection reset".to_string()))
        }
    }

    #[tokio::test]
    async fn unknown_route_is_404() {
        let env = dispatcher()
            .handle(&Request::new("PATCH", "/tasks"))
            .await;
        assert_eq!(env.status_code, 404);
        assert_eq!(env.body, r#"{"message":"route not found"}"#);
    }

    #[tokio::test]
    async fn empty_id_segment_is_400() {
        let env = dispatcher().handle(&Request::new("GET", "/tasks/")).await;
        assert_eq!(env.status_code, 400);
        assert_eq!(env.body, r#"{"message":"path parameter 'id' is required"}"#);
    }

    #[tokio::test]
    async fn store_failure_folds_into_a_500_envelope() {
        let dispatcher = Dispatcher::new(Arc::new(BrokenStore));

        let env = dispatcher.handle(&Request::new("GET", "/tasks/t-1")).await;
        assert_eq!(env.status_code, 500);
        let body: serde_json::Value = serde_json::from_str(&env.body).unwrap();
        let msg = body["message"].as_str().unwrap();
        assert!(msg.starts_with("internal error:"), "got: {msg}");
        assert!(msg.contains("connection reset"), "got: {msg}");

        // Headers stay well-formed even on the failure path.
        assert_eq!(env.headers.content_type, "application/json");
        assert_eq!(env.headers.allow_origin, "*");
    }

    #[tokio::test]
    async fn malformed_create_body_counts_as_no_fields() {
        let env = dispatcher()
            .handle(&Request::new("POST", "/tasks").with_body("{oops"))
            .await;
        // Degrades to an empty draft, which create rejects as missing fields.
        assert_eq!(env.status_code, 400);
    }
}
