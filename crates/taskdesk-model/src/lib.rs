//! Domain types for the task record API.
//!
//! The sole entity is [`Task`]; [`TaskDraft`] and [`TaskPatch`] are the
//! request-body shapes feeding the create and update operations.

mod domain;
pub use domain::*;
