use serde::Deserialize;

/// Fields accepted by the create operation, as parsed from a request body.
///
/// All fields are optional at the parsing stage; the create operation itself
/// rejects drafts whose `title` or `date` is missing or empty.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct TaskDraft {
    pub title: Option<String>,
    pub description: Option<String>,
    pub date: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn partial_body_deserializes() {
        let draft: TaskDraft = serde_json::from_str(r#"{"title":"Buy milk"}"#).unwrap();
        assert_eq!(draft.title.as_deref(), Some("Buy milk"));
        assert_eq!(draft.description, None);
        assert_eq!(draft.date, None);
    }
}
