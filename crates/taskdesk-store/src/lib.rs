//! Record store adapter for task records.
//!
//! [`RecordStore`] is the thin key-value contract the task operations are
//! written against; [`MemoryStore`] is the in-process implementation used by
//! the demos and tests. Any backend offering get/put/partial-update/delete
//! plus a full scan can stand in behind the trait.

mod error;
pub use error::StoreError;

mod store;
pub use store::RecordStore;

mod memory;
pub use memory::MemoryStore;
