use serde::{Deserialize, Serialize};

use crate::TaskId;

/// A persisted task record.
///
/// Every stored task carries a non-empty `title` and `date`; `description`
/// is always present once persisted, possibly as the empty string.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    /// Primary key in the record store.
    pub id: TaskId,
    /// Short human-readable summary. Required, non-empty.
    pub title: String,
    /// Free-form details. Defaults to `""` when omitted at creation.
    #[serde(default)]
    pub description: String,
    /// Day the task belongs to, `YYYY-MM-DD` by convention.
    ///
    /// Stored and compared as an opaque string: no calendar validation is
    /// performed, and date-filtered listing is literal string equality.
    pub date: String,
}
