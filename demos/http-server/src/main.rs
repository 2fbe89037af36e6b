//! Minimal HTTP front for the task dispatcher.
//!
//! The dispatcher does its own routing, so axum is used only as transport:
//! every request falls through to [`relay`], which rebuilds it as an
//! abstract [`Request`] and maps the resulting envelope back onto HTTP.

use std::collections::HashMap;
use std::sync::Arc;

use axum::{
    Router,
    body::Body,
    extract::State,
    http::{Request as HttpRequest, Response, StatusCode, header},
};
use tracing::{info, warn};

use taskdesk_api::{Dispatcher, Request};
use taskdesk_observe::{LoggerConfig, logger_init};
use taskdesk_store::MemoryStore;

const MAX_BODY_BYTES: usize = 1 << 20;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    logger_init(&LoggerConfig::default())?;

    let store = Arc::new(MemoryStore::new());
    let dispatcher = Arc::new(Dispatcher::new(store));

    let app = Router::new().fallback(relay).with_state(dispatcher);

    let listener = tokio::net::TcpListener::bind("127.0.0.1:8080").await?;
    info!("task API listening on {}", listener.local_addr()?);
    axum::serve(listener, app).await?;

    Ok(())
}

/// Translate one HTTP request into a dispatch and back.
async fn relay(
    State(dispatcher): State<Arc<Dispatcher<MemoryStore>>>,
    req: HttpRequest<Body>,
) -> Response<Body> {
    let (parts, body) = req.into_parts();

    let bytes = match axum::body::to_bytes(body, MAX_BODY_BYTES).await {
        Ok(bytes) => bytes,
        Err(e) => {
            warn!(error = %e, "failed to read request body");
            Default::default()
        }
    };
    let body = if bytes.is_empty() {
        None
    } else {
        Some(String::from_utf8_lossy(&bytes).into_owned())
    };

    let request = Request {
        method: parts.method.as_str().to_string(),
        path: parts.uri.path().to_string(),
        query: parts.uri.query().map(parse_query).unwrap_or_default(),
        body,
    };

    let envelope = dispatcher.handle(&request).await;

    Response::builder()
        .status(StatusCode::from_u16(envelope.status_code).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR))
        .header(header::CONTENT_TYPE, envelope.headers.content_type)
        .header(header::ACCESS_CONTROL_ALLOW_ORIGIN, envelope.headers.allow_origin)
        .body(Body::from(envelope.body))
        .unwrap_or_else(|_| Response::new(Body::empty()))
}

/// Split a raw query string into a key/value map. `?date=` yields a present
/// key with an empty value, which the list operation treats differently
/// from an absent key.
fn parse_query(raw: &str) -> HashMap<String, String> {
    raw.split('&')
        .filter(|pair| !pair.is_empty())
        .map(|pair| match pair.split_once('=') {
            Some((k, v)) => (k.to_string(), v.to_string()),
            None => (pair.to_string(), String::new()),
        })
        .collect()
}
