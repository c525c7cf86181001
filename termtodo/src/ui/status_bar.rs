//! Status bar rendering.

use ratatui::{
    Frame,
    layout::Rect,
    text::{Line, Span},
    widgets::Paragraph,
};
use termtodo_core::Storage;

use crate::app::{App, PanelFocus};

/// Render the status bar at the bottom of the screen.
///
/// A live notification takes the whole bar for its lifetime; otherwise
/// the bar shows task counters, the theme mode and key hints.
pub fn render<S: Storage>(frame: &mut Frame, area: Rect, app: &App<S>) {
    let palette = app.theme.palette();

    if let Some(notification) = &app.notification {
        let line = Line::from(Span::styled(
            notification.text.as_str(),
            palette.notification(),
        ));
        let paragraph = Paragraph::new(line).style(palette.status_bar_bg());
        frame.render_widget(paragraph, area);
        return;
    }

    let help_text = if app.store.edit_session().is_some() {
        "Enter: save | Esc: cancel edit"
    } else if app.moving.is_some() {
        "↑↓/jk: pick position | Enter: drop | Esc: cancel move"
    } else {
        match app.focus {
            PanelFocus::Input => "Enter: add | Tab: switch panel | Ctrl-T: theme | Esc: quit",
            PanelFocus::Search => "Type to filter | Tab: switch panel | Esc: quit",
            PanelFocus::Tasks => {
                "↑↓/jk: select | c: complete | e: edit | d: delete | g: move | x: clear done | f: show completed"
            }
        }
    };

    let status_line = Line::from(vec![
        Span::styled(
            format!("Total: {}", app.store.len()),
            palette.bold(),
        ),
        Span::raw(" | "),
        Span::styled(
            format!("Completed: {}", app.store.completed_count()),
            palette.bold(),
        ),
        Span::raw(" | "),
        Span::styled(format!("Theme: {}", app.theme.label()), palette.dimmed()),
        Span::raw(" | "),
        Span::styled(help_text, palette.dimmed()),
    ]);

    let paragraph = Paragraph::new(status_line).style(palette.status_bar_bg());
    frame.render_widget(paragraph, area);
}
