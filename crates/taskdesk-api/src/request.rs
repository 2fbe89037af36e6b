use std::collections::HashMap;

use serde::de::DeserializeOwned;

/// An abstract HTTP-like request, decoupled from any concrete transport.
///
/// Transports (an HTTP server, a function-invocation event, a test) build
/// one of these and hand it to [`crate::Dispatcher::handle`].
#[derive(Debug, Clone, Default)]
pub struct Request {
    /// HTTP method, e.g. `"GET"`. Matched case-insensitively.
    pub method: String,
    /// Concrete request path, e.g. `"/tasks/42"`.
    pub path: String,
    /// Query parameters. A key present with an empty value is distinct
    /// from an absent key, and the list operation relies on that.
    pub query: HashMap<String, String>,
    /// Raw request body, when one was sent.
    pub body: Option<String>,
}

impl Request {
    pub fn new(method: impl Into<String>, path: impl Into<String>) -> Self {
        Self {
            method: method.into(),
            path: path.into(),
            query: HashMap::new(),
            body: None,
        }
    }

    pub fn with_query(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.query.insert(key.into(), value.into());
        self
    }

    pub fn with_body(mut self, body: impl Into<String>) -> Self {
        self.body = Some(body.into());
        self
    }
}

/// Parse a request body under the permissive body policy: a missing body,
/// malformed JSON, or JSON of the wrong shape all degrade to `T::default()`,
/// meaning "no fields given". Parse failure is never a hard error.
pub fn parse_body<T>(body: Option<&str>) -> T
where
    T: DeserializeOwned + Default,
{
    body.and_then(|raw| serde_json::from_str(raw).ok())
        .unwrap_or_default()
}
