//! The task store: an ordered collection plus its mutation operations.
//!
//! [`TaskStore`] owns the collection, the single optional edit session,
//! and the storage handle it writes through after every successful
//! mutation. Domain-level failure is always a silent no-op, never an
//! error: blank text adds nothing, unknown ids change nothing, and a
//! reorder without a destination leaves the order untouched. Only the
//! storage seam can fail, and those failures are logged and swallowed;
//! the in-memory collection stays authoritative for the session.

use tracing::{debug, warn};

use crate::snapshot;
use crate::storage::Storage;
use crate::task::{Task, TaskId};

/// Storage key the serialized collection lives under.
pub const TASKS_KEY: &str = "tasks";

/// The in-progress edit of one task's text.
///
/// At most one session exists at a time; starting another replaces this
/// one and its draft is discarded. The id and draft live in one value so
/// there is no way to observe a draft without knowing which task it
/// belongs to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EditSession {
    /// Task being edited.
    pub task_id: TaskId,
    /// Unsaved draft text, raw as typed.
    pub draft: String,
}

/// Ordered task collection with write-through persistence.
pub struct TaskStore<S: Storage> {
    tasks: Vec<Task>,
    edit: Option<EditSession>,
    storage: S,
}

impl<S: Storage> TaskStore<S> {
    /// Restores a store from `storage`, or starts empty when nothing
    /// usable is persisted.
    ///
    /// A missing key, an unreadable backend and an unparsable blob all
    /// yield an empty collection; the failure is logged, never surfaced.
    pub fn load(storage: S) -> Self {
        let tasks = match storage.get(TASKS_KEY) {
            Ok(Some(raw)) => match snapshot::decode(&raw) {
                Ok(tasks) => {
                    debug!(count = tasks.len(), "restored tasks from storage");
                    tasks
                }
                Err(e) => {
                    warn!("ignoring unparsable task snapshot: {e}");
                    Vec::new()
                }
            },
            Ok(None) => Vec::new(),
            Err(e) => {
                warn!("could not read task snapshot: {e}");
                Vec::new()
            }
        };
        Self {
            tasks,
            edit: None,
            storage,
        }
    }

    /// All tasks in display order.
    #[must_use]
    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    /// Number of tasks in the collection.
    #[must_use]
    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    /// Whether the collection is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    /// Number of completed tasks.
    #[must_use]
    pub fn completed_count(&self) -> usize {
        self.tasks.iter().filter(|t| t.completed).count()
    }

    /// The in-progress edit session, if any.
    #[must_use]
    pub fn edit_session(&self) -> Option<&EditSession> {
        self.edit.as_ref()
    }

    /// Borrows the storage backend, mainly for test assertions.
    #[must_use]
    pub const fn storage(&self) -> &S {
        &self.storage
    }

    /// Consumes the store and returns the storage backend.
    #[must_use]
    pub fn into_storage(self) -> S {
        self.storage
    }

    /// Appends a new task unless `text` is blank after trimming.
    ///
    /// The stored text is the raw input, whitespace and all; only the
    /// blank check trims. Returns the new task's id, or `None` when the
    /// input was rejected (in which case nothing is persisted).
    pub fn add_task(&mut self, text: &str) -> Option<TaskId> {
        if text.trim().is_empty() {
            return None;
        }
        let task = Task::new(text);
        let id = task.id.clone();
        self.tasks.push(task);
        self.persist();
        Some(id)
    }

    /// Marks the matching task completed. Unknown ids are a no-op.
    ///
    /// Returns whether a task with that id exists. Re-completing an
    /// already-completed task reports `true` but skips the rewrite.
    pub fn complete_task(&mut self, id: &TaskId) -> bool {
        let Some(task) = self.tasks.iter_mut().find(|t| &t.id == id) else {
            return false;
        };
        if !task.completed {
            task.completed = true;
            self.persist();
        }
        true
    }

    /// Removes the matching task, preserving the order of the rest.
    /// Unknown ids are a no-op. Returns whether a task was removed.
    pub fn delete_task(&mut self, id: &TaskId) -> bool {
        let Some(index) = self.tasks.iter().position(|t| &t.id == id) else {
            return false;
        };
        self.tasks.remove(index);
        self.persist();
        true
    }

    /// Opens an edit session for `id`, seeding the draft with
    /// `current_text`. Any session already open is replaced and its
    /// draft discarded.
    pub fn start_edit(&mut self, id: &TaskId, current_text: &str) {
        self.edit = Some(EditSession {
            task_id: id.clone(),
            draft: current_text.to_string(),
        });
    }

    /// Replaces the open session's draft. Without a session this does
    /// nothing.
    pub fn set_edit_draft(&mut self, draft: &str) {
        if let Some(edit) = self.edit.as_mut() {
            draft.clone_into(&mut edit.draft);
        }
    }

    /// Discards the edit session without touching the collection.
    pub fn cancel_edit(&mut self) {
        self.edit = None;
    }

    /// Commits the open session's draft to the task matching `id`.
    ///
    /// A draft that trims to empty is rejected: the task keeps its text
    /// and the session stays open for further typing. A non-blank draft
    /// replaces the matching task's text (raw, untrimmed) and closes the
    /// session; the session closes even when `id` no longer matches any
    /// task. Returns whether the commit was accepted.
    pub fn commit_edit(&mut self, id: &TaskId) -> bool {
        match self.edit.take() {
            Some(edit) if !edit.draft.trim().is_empty() => {
                if let Some(task) = self.tasks.iter_mut().find(|t| &t.id == id) {
                    task.text = edit.draft;
                    self.persist();
                }
                true
            }
            // Blank draft or no session: put things back as they were,
            // including the still-open session.
            other => {
                self.edit = other;
                false
            }
        }
    }

    /// Moves the task at collection index `from` to index `to`.
    ///
    /// `to = None` models a drop with no destination and changes
    /// nothing, as do out-of-range indices and `from == to`. The moved
    /// task lands at exactly `to` in the resulting order. Returns
    /// whether the collection changed.
    pub fn reorder(&mut self, from: usize, to: Option<usize>) -> bool {
        let Some(to) = to else {
            return false;
        };
        if from >= self.tasks.len() || to >= self.tasks.len() || from == to {
            return false;
        }
        let task = self.tasks.remove(from);
        self.tasks.insert(to, task);
        self.persist();
        true
    }

    /// Removes every completed task, preserving the order of the rest.
    /// Returns how many were removed; zero removals skip the rewrite.
    pub fn clear_completed(&mut self) -> usize {
        let before = self.tasks.len();
        self.tasks.retain(|t| !t.completed);
        let removed = before - self.tasks.len();
        if removed > 0 {
            self.persist();
        }
        removed
    }

    /// Serializes the collection and writes it through to storage.
    ///
    /// Store-and-forget: failures are logged at warn level and the
    /// session carries on from memory.
    fn persist(&mut self) {
        let raw = match snapshot::encode(&self.tasks) {
            Ok(raw) => raw,
            Err(e) => {
                warn!("skipping persistence, could not serialize tasks: {e}");
                return;
            }
        };
        if let Err(e) = self.storage.set(TASKS_KEY, &raw) {
            warn!("task snapshot write failed: {e}");
        }
    }
}
