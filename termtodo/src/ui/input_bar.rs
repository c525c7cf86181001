//! "Add a new task" input rendering.

use ratatui::{
    Frame,
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};
use termtodo_core::Storage;

use super::with_cursor;
use crate::app::{App, PanelFocus};

/// Render the add-task input box.
pub fn render<S: Storage>(frame: &mut Frame, area: Rect, app: &App<S>) {
    let palette = app.theme.palette();
    let is_focused = app.focus == PanelFocus::Input && !app.is_capturing_keys();

    let input_line = if is_focused {
        Line::from(Span::styled(
            with_cursor(&app.input, app.input_cursor),
            palette.normal(),
        ))
    } else if app.input.is_empty() {
        Line::from(Span::styled("Add a new task...", palette.dimmed()))
    } else {
        Line::from(Span::styled(app.input.clone(), palette.normal()))
    };

    let block = Block::default()
        .title(Span::styled("Add", palette.panel_title()))
        .borders(Borders::ALL)
        .border_style(if is_focused {
            palette.highlighted()
        } else {
            palette.normal()
        });

    let paragraph = Paragraph::new(input_line).block(block);

    frame.render_widget(paragraph, area);
}
