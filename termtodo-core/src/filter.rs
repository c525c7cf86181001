//! Derivation of the visible task list.
//!
//! Filtering is pure and stateless: the search term does a
//! case-insensitive substring match against task text, the empty term
//! matches everything, and output order always equals collection order.
//! The "show completed" checkbox is carried here so the presentation
//! layer can render its state, but it has no effect on matching (see
//! DESIGN.md).

use crate::task::Task;

/// Inputs for deriving the visible subset of the collection.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ViewFilter {
    /// Free-text search term; empty matches everything.
    pub search_term: String,
    /// Display-only checkbox state. Toggling never changes what
    /// [`ViewFilter::apply`] returns.
    pub show_completed: bool,
}

impl ViewFilter {
    /// Creates a filter that matches every task.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces the search term.
    pub fn set_search_term(&mut self, term: impl Into<String>) {
        self.search_term = term.into();
    }

    /// Flips the display-only "show completed" checkbox.
    pub fn toggle_show_completed(&mut self) {
        self.show_completed = !self.show_completed;
    }

    /// Whether one task matches the current search term.
    #[must_use]
    pub fn matches(&self, task: &Task) -> bool {
        if self.search_term.is_empty() {
            return true;
        }
        task.text
            .to_lowercase()
            .contains(&self.search_term.to_lowercase())
    }

    /// Derives the visible tasks, preserving collection order.
    #[must_use]
    pub fn apply<'a>(&self, tasks: &'a [Task]) -> Vec<&'a Task> {
        tasks.iter().filter(|t| self.matches(t)).collect()
    }
}
