use serde::Serialize;
use serde_json::{Number, Value, json};

use crate::error::ApiError;

/// Uniform response envelope returned by every operation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Envelope {
    #[serde(rename = "statusCode")]
    pub status_code: u16,
    pub headers: Headers,
    /// Serialized JSON body; empty for 204 responses.
    pub body: String,
}

/// Headers attached to every envelope. The wildcard origin is deliberate:
/// the API is meant to be called from arbitrary browser origins.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Headers {
    #[serde(rename = "Content-Type")]
    pub content_type: &'static str,
    #[serde(rename = "Access-Control-Allow-Origin")]
    pub allow_origin: &'static str,
}

impl Default for Headers {
    fn default() -> Self {
        Self {
            content_type: "application/json",
            allow_origin: "*",
        }
    }
}

impl Envelope {
    /// Build an envelope with `value` as its serialized body.
    ///
    /// A 204 status sends an empty body regardless of the value passed.
    pub fn reply<T: Serialize>(status_code: u16, value: &T) -> Result<Self, ApiError> {
        let body = if status_code == 204 {
            String::new()
        } else {
            to_plain_numbers(serde_json::to_value(value)?).to_string()
        };

        Ok(Self {
            status_code,
            headers: Headers::default(),
            body,
        })
    }

    /// Build a `{"message": ...}` envelope. Infallible: a string-only body
    /// always serializes.
    pub fn message(status_code: u16, text: &str) -> Self {
        Self {
            status_code,
            headers: Headers::default(),
            body: json!({ "message": text }).to_string(),
        }
    }
}

/// Fold every number in the tree to f64 so fixed-point values coming back
/// from a store render as standard JSON numbers. Lossy and accepted as such;
/// a number with no f64 form degrades to null.
fn to_plain_numbers(value: Value) -> Value {
    match value {
        Value::Number(n) => n
            .as_f64()
            .and_then(Number::from_f64)
            .map(Value::Number)
            .unwrap_or(Value::Null),
        Value::Array(items) => Value::Array(items.into_iter().map(to_plain_numbers).collect()),
        Value::Object(map) => Value::Object(
            map.into_iter()
                .map(|(k, v)| (k, to_plain_numbers(v)))
                .collect(),
        ),
        other => other,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn headers_always_present() {
        let env = Envelope::message(404, "task not found");
        assert_eq!(env.headers.content_type, "application/json");
        assert_eq!(env.headers.allow_origin, "*");
        assert_eq!(env.body, r#"{"message":"task not found"}"#);
    }

    #[test]
    fn no_content_drops_the_body() {
        let env = Envelope::reply(204, &json!({"ignored": true})).unwrap();
        assert_eq!(env.status_code, 204);
        assert_eq!(env.body, "");
    }

    #[test]
    fn numbers_fold_to_f64() {
        let env = Envelope::reply(200, &json!({"count": 3u64, "nested": [1, 2]})).unwrap();
        let parsed: Value = serde_json::from_str(&env.body).unwrap();
        assert_eq!(parsed["count"], json!(3.0));
        assert_eq!(parsed["nested"][1], json!(2.0));
    }

    #[test]
    fn envelope_wire_shape() {
        let env = Envelope::message(200, "ok");
        let wire = serde_json::to_value(&env).unwrap();
        assert_eq!(wire["statusCode"], json!(200));
        assert_eq!(wire["headers"]["Content-Type"], json!("application/json"));
        assert_eq!(wire["headers"]["Access-Control-Allow-Origin"], json!("*"));
    }
}
