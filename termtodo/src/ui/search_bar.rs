//! Search box rendering.

use ratatui::{
    Frame,
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};
use termtodo_core::Storage;

use super::with_cursor;
use crate::app::{App, PanelFocus};

/// Render the search box.
pub fn render<S: Storage>(frame: &mut Frame, area: Rect, app: &App<S>) {
    let palette = app.theme.palette();
    let is_focused = app.focus == PanelFocus::Search && !app.is_capturing_keys();
    let term = &app.filter.search_term;

    let search_line = if is_focused {
        Line::from(Span::styled(
            with_cursor(term, app.search_cursor),
            palette.normal(),
        ))
    } else if term.is_empty() {
        Line::from(Span::styled("Search tasks...", palette.dimmed()))
    } else {
        Line::from(Span::styled(term.clone(), palette.normal()))
    };

    let block = Block::default()
        .title(Span::styled("Search", palette.panel_title()))
        .borders(Borders::ALL)
        .border_style(if is_focused {
            palette.highlighted()
        } else {
            palette.normal()
        });

    let paragraph = Paragraph::new(search_line).block(block);

    frame.render_widget(paragraph, area);
}
