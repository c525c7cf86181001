//! Core domain logic for `TermTodo`.
//!
//! Holds everything that is not terminal rendering: the ordered task
//! collection and its mutation rules ([`store`]), the persisted JSON
//! form ([`snapshot`]), the key-value persistence seam ([`storage`]),
//! and the search filter that derives the visible subset ([`filter`]).

pub mod filter;
pub mod snapshot;
pub mod storage;
pub mod store;
pub mod task;

pub use filter::ViewFilter;
pub use snapshot::SnapshotError;
pub use storage::{FileStorage, MemoryStorage, Storage, StorageError};
pub use store::{EditSession, TASKS_KEY, TaskStore};
pub use task::{Task, TaskId};
