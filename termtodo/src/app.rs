//! Application state and event handling.

use std::time::{Duration, Instant};

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use termtodo_core::{Storage, Task, TaskId, TaskStore, ViewFilter};

use crate::ui::theme::ThemeMode;

/// Notification shown after adding a task.
pub const MSG_ADDED: &str = "Task added successfully!";
/// Notification shown after completing a task.
pub const MSG_COMPLETED: &str = "Task marked as completed!";
/// Notification shown after deleting a task.
pub const MSG_DELETED: &str = "Task deleted successfully!";
/// Notification shown after committing an edit.
pub const MSG_UPDATED: &str = "Task updated successfully!";
/// Notification shown after clearing completed tasks.
pub const MSG_CLEARED: &str = "Completed tasks cleared successfully!";

/// Which panel is currently focused.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PanelFocus {
    /// "Add a new task" input box (default).
    Input,
    /// Search box.
    Search,
    /// Task list.
    Tasks,
}

/// An in-progress move of a grabbed task.
///
/// Only exists while the search term is empty, so both indices address
/// the collection directly.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MoveState {
    /// Collection index the task was grabbed from.
    pub from: usize,
    /// Collection index it would currently drop at.
    pub to: usize,
}

/// A transient status-bar message.
#[derive(Debug, Clone)]
pub struct Notification {
    /// Message text.
    pub text: String,
    /// When the message stops being shown.
    pub expires_at: Instant,
}

/// Main application state.
pub struct App<S: Storage> {
    /// Task collection with write-through persistence.
    pub store: TaskStore<S>,
    /// Search term plus the display-only "show completed" checkbox.
    pub filter: ViewFilter,
    /// Active theme mode.
    pub theme: ThemeMode,
    /// Text in the "Add a new task" input.
    pub input: String,
    /// Cursor position in the add input (character index).
    pub input_cursor: usize,
    /// Cursor position in the search box (character index).
    pub search_cursor: usize,
    /// Cursor position in the edit draft (character index).
    pub edit_cursor: usize,
    /// Which panel is focused.
    pub focus: PanelFocus,
    /// Selected row in the visible task list.
    pub selected: usize,
    /// In-progress move, if a task is grabbed.
    pub moving: Option<MoveState>,
    /// Transient success message, if one is live.
    pub notification: Option<Notification>,
    /// How long notifications stay visible.
    pub notification_ttl: Duration,
    /// Whether the app should quit.
    pub should_quit: bool,
}

impl<S: Storage> App<S> {
    /// Creates the application around a restored task store.
    #[must_use]
    pub fn new(store: TaskStore<S>) -> Self {
        Self {
            store,
            filter: ViewFilter::new(),
            theme: ThemeMode::default(),
            input: String::new(),
            input_cursor: 0,
            search_cursor: 0,
            edit_cursor: 0,
            focus: PanelFocus::Input,
            selected: 0,
            moving: None,
            notification: None,
            notification_ttl: Duration::from_secs(2),
            should_quit: false,
        }
    }

    /// Sets the starting theme mode.
    #[must_use]
    pub fn with_theme(mut self, theme: ThemeMode) -> Self {
        self.theme = theme;
        self
    }

    /// Overrides how long notifications stay visible.
    #[must_use]
    pub fn with_notification_ttl(mut self, ttl: Duration) -> Self {
        self.notification_ttl = ttl;
        self
    }

    /// Tasks visible under the active filter, in collection order.
    #[must_use]
    pub fn visible_tasks(&self) -> Vec<&Task> {
        self.filter.apply(self.store.tasks())
    }

    /// Whether an edit session or a move is consuming the keyboard.
    #[must_use]
    pub fn is_capturing_keys(&self) -> bool {
        self.store.edit_session().is_some() || self.moving.is_some()
    }

    /// Shows a transient success message for the configured lifetime.
    /// A newer message replaces the current one and restarts the clock.
    pub fn notify(&mut self, text: &str) {
        self.notification = Some(Notification {
            text: text.to_string(),
            expires_at: Instant::now() + self.notification_ttl,
        });
    }

    /// Clears the notification once its lifetime is over. Called every
    /// pass of the event loop.
    pub fn tick_notification(&mut self) {
        if let Some(n) = &self.notification
            && n.expires_at <= Instant::now()
        {
            self.notification = None;
        }
    }

    /// Handle a key event.
    pub fn handle_key_event(&mut self, key: KeyEvent) {
        // Ctrl-C quits from any state.
        if key.code == KeyCode::Char('c') && key.modifiers == KeyModifiers::CONTROL {
            self.should_quit = true;
            return;
        }

        // An open edit session or an in-progress move captures the
        // keyboard until it ends; global shortcuts stay out of drafts.
        if self.store.edit_session().is_some() {
            self.handle_edit_key(key);
            return;
        }
        if self.moving.is_some() {
            self.handle_move_key(key);
            return;
        }

        // Global shortcuts
        match (key.code, key.modifiers) {
            (KeyCode::Char('t'), KeyModifiers::CONTROL) => {
                self.theme = self.theme.toggled();
                return;
            }
            (KeyCode::Esc, _) => {
                self.should_quit = true;
                return;
            }
            (KeyCode::BackTab, _) | (KeyCode::Tab, KeyModifiers::SHIFT) => {
                self.cycle_focus_backward();
                return;
            }
            (KeyCode::Tab, _) => {
                self.cycle_focus_forward();
                return;
            }
            _ => {}
        }

        // Focus-specific shortcuts
        match self.focus {
            PanelFocus::Input => self.handle_input_key(key),
            PanelFocus::Search => self.handle_search_key(key),
            PanelFocus::Tasks => self.handle_tasks_key(key),
        }
    }

    /// Handle key event when the add input is focused.
    fn handle_input_key(&mut self, key: KeyEvent) {
        if key.code == KeyCode::Enter {
            self.submit_new_task();
            return;
        }
        edit_buffer(&mut self.input, &mut self.input_cursor, key.code);
    }

    /// Handle key event when the search box is focused.
    fn handle_search_key(&mut self, key: KeyEvent) {
        if edit_buffer(
            &mut self.filter.search_term,
            &mut self.search_cursor,
            key.code,
        ) {
            self.clamp_selection();
        }
    }

    /// Handle key event when the task list is focused.
    fn handle_tasks_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Up | KeyCode::Char('k') => self.select_prev(),
            KeyCode::Down | KeyCode::Char('j') => self.select_next(),
            KeyCode::Char('c') => self.complete_selected(),
            KeyCode::Char('d') => self.delete_selected(),
            KeyCode::Char('e') => self.start_edit_selected(),
            KeyCode::Char('g') => self.grab_selected(),
            KeyCode::Char('x') => self.clear_completed(),
            KeyCode::Char('f') => self.filter.toggle_show_completed(),
            _ => {}
        }
    }

    /// Handle key event while an edit session is open.
    fn handle_edit_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Enter => {
                let Some(session) = self.store.edit_session() else {
                    return;
                };
                let id = session.task_id.clone();
                if self.store.commit_edit(&id) {
                    self.notify(MSG_UPDATED);
                }
            }
            KeyCode::Esc => self.store.cancel_edit(),
            code => {
                let Some(session) = self.store.edit_session() else {
                    return;
                };
                let mut draft = session.draft.clone();
                if edit_buffer(&mut draft, &mut self.edit_cursor, code) {
                    self.store.set_edit_draft(&draft);
                }
            }
        }
    }

    /// Handle key event while a task is grabbed for moving.
    fn handle_move_key(&mut self, key: KeyEvent) {
        let Some(mv) = self.moving else {
            return;
        };
        match key.code {
            KeyCode::Up | KeyCode::Char('k') => {
                if mv.to > 0 {
                    self.moving = Some(MoveState {
                        to: mv.to - 1,
                        ..mv
                    });
                }
            }
            KeyCode::Down | KeyCode::Char('j') => {
                if mv.to + 1 < self.store.len() {
                    self.moving = Some(MoveState {
                        to: mv.to + 1,
                        ..mv
                    });
                }
            }
            KeyCode::Enter => {
                self.store.reorder(mv.from, Some(mv.to));
                self.selected = mv.to;
                self.moving = None;
            }
            KeyCode::Esc => {
                // A drop without a destination leaves the order as-is.
                self.store.reorder(mv.from, None);
                self.moving = None;
            }
            _ => {}
        }
    }

    /// Cycle focus forward: Input -> Search -> Tasks -> Input.
    fn cycle_focus_forward(&mut self) {
        self.focus = match self.focus {
            PanelFocus::Input => PanelFocus::Search,
            PanelFocus::Search => PanelFocus::Tasks,
            PanelFocus::Tasks => PanelFocus::Input,
        };
    }

    /// Cycle focus backward: Input -> Tasks -> Search -> Input.
    fn cycle_focus_backward(&mut self) {
        self.focus = match self.focus {
            PanelFocus::Input => PanelFocus::Tasks,
            PanelFocus::Tasks => PanelFocus::Search,
            PanelFocus::Search => PanelFocus::Input,
        };
    }

    /// Submit the add input as a new task.
    fn submit_new_task(&mut self) {
        if self.store.add_task(&self.input).is_some() {
            self.input.clear();
            self.input_cursor = 0;
            self.notify(MSG_ADDED);
        }
    }

    /// Id and text of the selected visible task, if any.
    fn selected_task(&self) -> Option<(TaskId, String)> {
        self.visible_tasks()
            .get(self.selected)
            .map(|t| (t.id.clone(), t.text.clone()))
    }

    fn complete_selected(&mut self) {
        if let Some((id, _)) = self.selected_task()
            && self.store.complete_task(&id)
        {
            self.notify(MSG_COMPLETED);
        }
    }

    fn delete_selected(&mut self) {
        if let Some((id, _)) = self.selected_task()
            && self.store.delete_task(&id)
        {
            self.notify(MSG_DELETED);
            self.clamp_selection();
        }
    }

    fn start_edit_selected(&mut self) {
        if let Some((id, text)) = self.selected_task() {
            self.edit_cursor = text.chars().count();
            self.store.start_edit(&id, &text);
        }
    }

    /// Grab the selected task for reordering.
    ///
    /// Only available with an empty search term, so that list rows and
    /// collection indices line up one-to-one.
    fn grab_selected(&mut self) {
        if !self.filter.search_term.is_empty() {
            return;
        }
        if self.selected < self.store.len() {
            self.moving = Some(MoveState {
                from: self.selected,
                to: self.selected,
            });
        }
    }

    fn clear_completed(&mut self) {
        self.store.clear_completed();
        self.notify(MSG_CLEARED);
        self.clamp_selection();
    }

    /// Select the previous visible task.
    fn select_prev(&mut self) {
        if self.selected > 0 {
            self.selected -= 1;
        }
    }

    /// Select the next visible task.
    fn select_next(&mut self) {
        if self.selected + 1 < self.visible_tasks().len() {
            self.selected += 1;
        }
    }

    /// Keep the selection inside the visible list after it shrinks.
    fn clamp_selection(&mut self) {
        let len = self.visible_tasks().len();
        if len == 0 {
            self.selected = 0;
        } else if self.selected >= len {
            self.selected = len - 1;
        }
    }
}

/// Byte offset of the `char_index`-th character, or the end of `text`.
fn byte_index(text: &str, char_index: usize) -> usize {
    text.char_indices()
        .map(|(i, _)| i)
        .nth(char_index)
        .unwrap_or(text.len())
}

/// Single-line editing over a (buffer, character-cursor) pair.
///
/// Returns whether the key was an editing key this function consumed.
fn edit_buffer(text: &mut String, cursor: &mut usize, code: KeyCode) -> bool {
    match code {
        KeyCode::Char(c) => {
            let at = byte_index(text, *cursor);
            text.insert(at, c);
            *cursor += 1;
            true
        }
        KeyCode::Backspace => {
            if *cursor > 0 {
                let start = byte_index(text, *cursor - 1);
                let end = byte_index(text, *cursor);
                text.replace_range(start..end, "");
                *cursor -= 1;
            }
            true
        }
        KeyCode::Left => {
            *cursor = cursor.saturating_sub(1);
            true
        }
        KeyCode::Right => {
            if *cursor < text.chars().count() {
                *cursor += 1;
            }
            true
        }
        KeyCode::Home => {
            *cursor = 0;
            true
        }
        KeyCode::End => {
            *cursor = text.chars().count();
            true
        }
        _ => false,
    }
}
