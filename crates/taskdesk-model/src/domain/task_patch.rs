use serde::Deserialize;

use crate::Task;

/// Partial update for a task record.
///
/// Key presence, not truthiness, decides inclusion: a key present with an
/// empty-string value is still an assignment, while an absent key leaves the
/// field untouched. `id` is immutable and cannot appear in a patch.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct TaskPatch {
    pub title: Option<String>,
    pub description: Option<String>,
    pub date: Option<String>,
}

impl TaskPatch {
    /// Returns `true` when the patch carries no assignments at all.
    pub fn is_empty(&self) -> bool {
        self.title.is_none() && self.description.is_none() && self.date.is_none()
    }

    /// Apply the supplied assignments to `task`, leaving the rest alone.
    pub fn apply_to(&self, task: &mut Task) {
        if let Some(title) = &self.title {
            task.title = title.clone();
        }
        if let Some(description) = &self.description {
            task.description = description.clone();
        }
        if let Some(date) = &self.date {
            task.date = date.clone();
        }
    }
}
