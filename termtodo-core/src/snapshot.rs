//! Serialization of the task collection for persistence.
//!
//! The persisted form is a single JSON array of task records in
//! collection order:
//!
//! ```json
//! [{"id":"550e8400-...","text":"Buy milk","completed":false}]
//! ```
//!
//! Decoding is strict: anything that is not exactly that shape is
//! rejected, and callers fall back to an empty collection.

use thiserror::Error;

use crate::task::Task;

/// Errors that can occur while encoding or decoding a snapshot.
#[derive(Debug, Error)]
pub enum SnapshotError {
    /// Serializing the collection failed.
    #[error("failed to serialize tasks: {0}")]
    Serialize(String),

    /// The persisted blob is not a well-formed task array.
    #[error("failed to parse stored tasks: {0}")]
    Parse(String),
}

/// Encodes the collection into its persisted JSON form.
///
/// # Errors
/// Returns [`SnapshotError::Serialize`] when serialization fails
/// (practically unreachable for this data shape).
pub fn encode(tasks: &[Task]) -> Result<String, SnapshotError> {
    serde_json::to_string(tasks).map_err(|e| SnapshotError::Serialize(e.to_string()))
}

/// Decodes a persisted blob back into a task collection.
///
/// Order, ids and completion flags are restored verbatim.
///
/// # Errors
/// Returns [`SnapshotError::Parse`] when `raw` is not a well-formed
/// array of task records.
pub fn decode(raw: &str) -> Result<Vec<Task>, SnapshotError> {
    serde_json::from_str(raw).map_err(|e| SnapshotError::Parse(e.to_string()))
}
