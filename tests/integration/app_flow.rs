//! Full keyboard-session tests.
//!
//! Each test drives the application the way a user would, key event by
//! key event, then checks what a fresh process would restore from the
//! same data directory.

#![allow(clippy::expect_used, clippy::unwrap_used)]

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use termtodo::app::{
    App, MSG_ADDED, MSG_CLEARED, MSG_COMPLETED, MSG_DELETED, MSG_UPDATED, PanelFocus,
};
use termtodo_core::{FileStorage, MemoryStorage, Storage, TaskStore};

fn key(code: KeyCode) -> KeyEvent {
    KeyEvent::new(code, KeyModifiers::NONE)
}

fn press<S: Storage>(app: &mut App<S>, code: KeyCode) {
    app.handle_key_event(key(code));
}

fn type_text<S: Storage>(app: &mut App<S>, text: &str) {
    for c in text.chars() {
        press(app, KeyCode::Char(c));
    }
}

/// Types `text` into the add input and submits it.
fn submit_task<S: Storage>(app: &mut App<S>, text: &str) {
    type_text(app, text);
    press(app, KeyCode::Enter);
}

/// Tabs from the add input to the task list.
fn focus_tasks<S: Storage>(app: &mut App<S>) {
    press(app, KeyCode::Tab);
    press(app, KeyCode::Tab);
    assert_eq!(app.focus, PanelFocus::Tasks);
}

fn notification_text<S: Storage>(app: &App<S>) -> Option<&str> {
    app.notification.as_ref().map(|n| n.text.as_str())
}

#[test]
fn full_session_round_trips_through_disk() {
    let dir = tempfile::tempdir().expect("temp dir");

    {
        let mut app = App::new(TaskStore::load(FileStorage::new(dir.path())));
        submit_task(&mut app, "Buy groceries");
        submit_task(&mut app, "Walk the dog");
        focus_tasks(&mut app);
        press(&mut app, KeyCode::Down);
        press(&mut app, KeyCode::Char('c'));
        assert_eq!(notification_text(&app), Some(MSG_COMPLETED));
    }

    let restored = TaskStore::load(FileStorage::new(dir.path()));
    assert_eq!(restored.len(), 2);
    assert_eq!(restored.tasks()[0].text, "Buy groceries");
    assert!(!restored.tasks()[0].completed);
    assert_eq!(restored.tasks()[1].text, "Walk the dog");
    assert!(restored.tasks()[1].completed);
}

#[test]
fn keyboard_edit_survives_restart() {
    let dir = tempfile::tempdir().expect("temp dir");

    {
        let mut app = App::new(TaskStore::load(FileStorage::new(dir.path())));
        submit_task(&mut app, "Buy milk");
        focus_tasks(&mut app);
        press(&mut app, KeyCode::Char('e'));
        type_text(&mut app, " today");
        press(&mut app, KeyCode::Enter);
        assert_eq!(notification_text(&app), Some(MSG_UPDATED));
    }

    let restored = TaskStore::load(FileStorage::new(dir.path()));
    assert_eq!(restored.len(), 1);
    assert_eq!(restored.tasks()[0].text, "Buy milk today");
}

#[test]
fn keyboard_move_survives_restart() {
    let dir = tempfile::tempdir().expect("temp dir");

    {
        let mut app = App::new(TaskStore::load(FileStorage::new(dir.path())));
        submit_task(&mut app, "first");
        submit_task(&mut app, "second");
        submit_task(&mut app, "third");
        focus_tasks(&mut app);
        press(&mut app, KeyCode::Char('g'));
        press(&mut app, KeyCode::Down);
        press(&mut app, KeyCode::Down);
        press(&mut app, KeyCode::Enter);
        assert_eq!(app.selected, 2);
    }

    let restored = TaskStore::load(FileStorage::new(dir.path()));
    let texts: Vec<&str> = restored.tasks().iter().map(|t| t.text.as_str()).collect();
    assert_eq!(texts, vec!["second", "third", "first"]);
}

#[test]
fn clear_completed_end_to_end() {
    let dir = tempfile::tempdir().expect("temp dir");

    {
        let mut app = App::new(TaskStore::load(FileStorage::new(dir.path())));
        submit_task(&mut app, "done soon");
        submit_task(&mut app, "stays open");
        focus_tasks(&mut app);
        press(&mut app, KeyCode::Char('c'));
        press(&mut app, KeyCode::Char('x'));
        assert_eq!(notification_text(&app), Some(MSG_CLEARED));
    }

    let restored = TaskStore::load(FileStorage::new(dir.path()));
    assert_eq!(restored.len(), 1);
    assert_eq!(restored.tasks()[0].text, "stays open");
    assert!(!restored.tasks()[0].completed);
}

#[test]
fn searching_and_toggling_the_checkbox_never_write_storage() {
    let mut app = App::new(TaskStore::load(MemoryStorage::new()));
    submit_task(&mut app, "Buy milk");
    submit_task(&mut app, "Walk dog");
    let writes_after_seeding = app.store.storage().write_count();

    press(&mut app, KeyCode::Tab);
    assert_eq!(app.focus, PanelFocus::Search);
    type_text(&mut app, "MILK");
    assert_eq!(app.visible_tasks().len(), 1);
    assert_eq!(app.visible_tasks()[0].text, "Buy milk");

    press(&mut app, KeyCode::Tab);
    press(&mut app, KeyCode::Char('f'));
    assert!(app.filter.show_completed);

    assert_eq!(app.store.storage().write_count(), writes_after_seeding);
}

#[test]
fn each_operation_raises_its_own_notification() {
    let mut app = App::new(TaskStore::load(MemoryStorage::new()));

    submit_task(&mut app, "alpha");
    assert_eq!(notification_text(&app), Some(MSG_ADDED));
    submit_task(&mut app, "beta");
    assert_eq!(notification_text(&app), Some(MSG_ADDED));

    focus_tasks(&mut app);
    press(&mut app, KeyCode::Char('c'));
    assert_eq!(notification_text(&app), Some(MSG_COMPLETED));

    press(&mut app, KeyCode::Down);
    press(&mut app, KeyCode::Char('e'));
    type_text(&mut app, "!");
    press(&mut app, KeyCode::Enter);
    assert_eq!(notification_text(&app), Some(MSG_UPDATED));

    press(&mut app, KeyCode::Char('d'));
    assert_eq!(notification_text(&app), Some(MSG_DELETED));

    press(&mut app, KeyCode::Char('x'));
    assert_eq!(notification_text(&app), Some(MSG_CLEARED));

    assert!(app.store.is_empty());
}
