//! Full CRUD walk through the dispatcher, the way a transport would drive it.

use std::sync::Arc;

use serde_json::Value;
use taskdesk_api::{Dispatcher, Envelope, Request};
use taskdesk_store::MemoryStore;

fn body(envelope: &Envelope) -> Value {
    serde_json::from_str(&envelope.body).unwrap()
}

#[tokio::test]
async fn create_get_update_list_delete() {
    let dispatcher = Dispatcher::new(Arc::new(MemoryStore::new()));

    // POST /tasks
    let created = dispatcher
        .handle(
            &Request::new("POST", "/tasks")
                .with_body(r#"{"title":"Buy milk","date":"2025-12-04"}"#),
        )
        .await;
    assert_eq!(created.status_code, 201);
    let task = body(&created);
    assert_eq!(task["title"], "Buy milk");
    assert_eq!(task["description"], "");
    let id = task["id"].as_str().unwrap().to_string();

    // GET /tasks/{id} returns the identical record
    let fetched = dispatcher
        .handle(&Request::new("GET", format!("/tasks/{id}")))
        .await;
    assert_eq!(fetched.status_code, 200);
    assert_eq!(body(&fetched), task);

    // PUT /tasks/{id} changes only the supplied field
    let updated = dispatcher
        .handle(
            &Request::new("PUT", format!("/tasks/{id}")).with_body(r#"{"description":"2L"}"#),
        )
        .await;
    assert_eq!(updated.status_code, 200);
    let after = body(&updated);
    assert_eq!(after["description"], "2L");
    assert_eq!(after["title"], "Buy milk");
    assert_eq!(after["date"], "2025-12-04");

    // GET /tasks?date=... finds it
    let listed = dispatcher
        .handle(&Request::new("GET", "/tasks").with_query("date", "2025-12-04"))
        .await;
    assert_eq!(listed.status_code, 200);
    let hits = body(&listed);
    assert_eq!(hits.as_array().unwrap().len(), 1);
    assert_eq!(hits[0]["id"], id.as_str());

    // A non-matching date filter comes back empty, not an error
    let misses = dispatcher
        .handle(&Request::new("GET", "/tasks").with_query("date", "2026-01-01"))
        .await;
    assert_eq!(misses.status_code, 200);
    assert_eq!(body(&misses).as_array().unwrap().len(), 0);

    // DELETE /tasks/{id}, then the record is gone
    let deleted = dispatcher
        .handle(&Request::new("DELETE", format!("/tasks/{id}")))
        .await;
    assert_eq!(deleted.status_code, 204);
    assert_eq!(deleted.body, "");

    let gone = dispatcher
        .handle(&Request::new("GET", format!("/tasks/{id}")))
        .await;
    assert_eq!(gone.status_code, 404);
}

#[tokio::test]
async fn generated_ids_are_unique_across_creates() {
    let dispatcher = Dispatcher::new(Arc::new(MemoryStore::new()));
    let mut seen = std::collections::HashSet::new();

    for _ in 0..10 {
        let env = dispatcher
            .handle(
                &Request::new("POST", "/tasks")
                    .with_body(r#"{"title":"t","date":"2025-12-04"}"#),
            )
            .await;
        assert_eq!(env.status_code, 201);
        let id = body(&env)["id"].as_str().unwrap().to_string();
        assert!(seen.insert(id), "duplicate id minted");
    }
}
