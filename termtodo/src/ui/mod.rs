//! Terminal UI rendering.

pub mod input_bar;
pub mod search_bar;
pub mod status_bar;
pub mod task_list;
pub mod theme;

use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout},
    widgets::Block,
};
use termtodo_core::Storage;

use crate::app::App;

/// Main draw function for the entire UI.
pub fn draw<S: Storage>(frame: &mut Frame, app: &App<S>) {
    let palette = app.theme.palette();

    // Paint the theme background across the whole frame first.
    frame.render_widget(Block::default().style(palette.base()), frame.area());

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Add input
            Constraint::Length(3), // Search box
            Constraint::Min(3),    // Task list
            Constraint::Length(1), // Status bar
        ])
        .split(frame.area());

    input_bar::render(frame, chunks[0], app);
    search_bar::render(frame, chunks[1], app);
    task_list::render(frame, chunks[2], app);
    status_bar::render(frame, chunks[3], app);
}

/// Clone of `text` with a block cursor inserted at `cursor` (a character
/// index; past-the-end means "append").
pub(crate) fn with_cursor(text: &str, cursor: usize) -> String {
    let mut out = text.to_string();
    let at = out
        .char_indices()
        .map(|(i, _)| i)
        .nth(cursor)
        .unwrap_or(out.len());
    out.insert(at, '\u{2588}');
    out
}
