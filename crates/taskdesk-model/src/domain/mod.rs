mod task_id;
pub use task_id::TaskId;

mod task;
pub use task::Task;

mod task_draft;
pub use task_draft::TaskDraft;

mod task_patch;
pub use task_patch::TaskPatch;
