//! Task types for the todo collection.
//!
//! A [`Task`] is one entry in the ordered collection: a stable id, the
//! display text, and a completion flag. This module holds plain data;
//! all mutation rules live in [`crate::store`].

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Unique identifier for a task.
///
/// Freshly created ids are random UUIDv4 strings, but the inner value is
/// kept as an opaque string so ids from older snapshots (whatever their
/// shape) restore verbatim. Serializes as a bare JSON string.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TaskId(String);

impl TaskId {
    /// Creates a new random task ID.
    #[must_use]
    pub fn new() -> Self {
        Self(Uuid::new_v4().to_string())
    }

    /// Wraps an existing id string without validating its shape.
    #[must_use]
    pub fn from_string(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Returns the id as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for TaskId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for TaskId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A single todo entry.
///
/// `text` holds whatever the user typed, untrimmed; blank-input checks
/// happen against the trimmed form at the store boundary, never here.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    /// Stable unique identifier, never reassigned.
    pub id: TaskId,
    /// Display text, raw as entered.
    pub text: String,
    /// Whether the task has been marked done.
    pub completed: bool,
}

impl Task {
    /// Creates a new incomplete task with a fresh id.
    #[must_use]
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            id: TaskId::new(),
            text: text.into(),
            completed: false,
        }
    }
}
