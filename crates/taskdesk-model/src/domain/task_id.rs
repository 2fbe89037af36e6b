use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Opaque unique identifier of a task record.
///
/// Minted server-side at creation time and immutable afterwards.
/// Doubles as the primary key in the record store.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TaskId(String);

impl TaskId {
    /// Mint a fresh random id (uuid v4; collisions treated as impossible).
    pub fn mint() -> Self {
        Self(Uuid::new_v4().to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<String> for TaskId {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl From<&str> for TaskId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl std::fmt::Display for TaskId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn minted_ids_are_distinct() {
        let a = TaskId::mint();
        let b = TaskId::mint();
        assert_ne!(a, b);
    }

    #[test]
    fn serializes_as_plain_string() {
        let id = TaskId::from("abc-123");
        let json = serde_json::to_string(&id).unwrap();
        assert_eq!(json, r#""abc-123""#);
    }
}
