//! Task list rendering: checkboxes, selection, inline edit and move
//! markers.

use ratatui::{
    Frame,
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, Paragraph},
};
use termtodo_core::{Storage, Task};

use super::theme::Palette;
use super::with_cursor;
use crate::app::{App, PanelFocus};

/// Render the visible task list.
pub fn render<S: Storage>(frame: &mut Frame, area: Rect, app: &App<S>) {
    let palette = app.theme.palette();
    let is_focused = app.focus == PanelFocus::Tasks;
    let visible = app.visible_tasks();

    // The header carries the display-only "show completed" checkbox.
    let checkbox_state = if app.filter.show_completed {
        "[x]"
    } else {
        "[ ]"
    };
    let title = Line::from(vec![
        Span::styled("Todo List", palette.panel_title()),
        Span::raw(" "),
        Span::styled(
            format!("{checkbox_state} Show Completed Tasks"),
            palette.dimmed(),
        ),
    ]);

    let block = Block::default()
        .title(title)
        .borders(Borders::ALL)
        .border_style(if is_focused {
            palette.highlighted()
        } else {
            palette.normal()
        });

    if visible.is_empty() {
        let message = if app.store.is_empty() {
            "No tasks yet. Add one above!"
        } else {
            "No tasks match your search."
        };
        let paragraph =
            Paragraph::new(Line::from(Span::styled(message, palette.dimmed()))).block(block);
        frame.render_widget(paragraph, area);
        return;
    }

    let items: Vec<ListItem> = visible
        .iter()
        .enumerate()
        .map(|(row, task)| ListItem::new(task_line(app, palette, row, task)))
        .collect();

    let list = List::new(items).block(block);

    frame.render_widget(list, area);
}

/// Build the display line for one visible row.
fn task_line<'a, S: Storage>(
    app: &'a App<S>,
    palette: &Palette,
    row: usize,
    task: &'a Task,
) -> Line<'a> {
    // An open edit session replaces the row's text with the live draft.
    if let Some(session) = app.store.edit_session()
        && session.task_id == task.id
    {
        return Line::from(vec![
            Span::styled("[edit]", palette.highlighted()),
            Span::raw(" "),
            Span::styled(
                with_cursor(&session.draft, app.edit_cursor),
                palette.highlighted(),
            ),
        ]);
    }

    let checkbox = if task.completed {
        "[\u{2713}]"
    } else {
        "[ ]"
    };

    // While a task is grabbed, rows carry move markers instead of the
    // selection highlight.
    if let Some(mv) = app.moving {
        if mv.from == row {
            return Line::from(Span::styled(
                format!("\u{2195} {checkbox} {}", task.text),
                palette.highlighted(),
            ));
        }
        let marker = if mv.to == row { "\u{2192} " } else { "  " };
        return Line::from(vec![
            Span::styled(marker, palette.highlighted()),
            Span::styled(checkbox, row_checkbox_style(palette, task)),
            Span::raw(" "),
            Span::styled(task.text.as_str(), row_text_style(palette, task)),
        ]);
    }

    let is_selected =
        app.focus == PanelFocus::Tasks && !app.is_capturing_keys() && row == app.selected;
    if is_selected {
        return Line::from(Span::styled(
            format!("{checkbox} {}", task.text),
            palette.selected(),
        ));
    }

    Line::from(vec![
        Span::styled(checkbox, row_checkbox_style(palette, task)),
        Span::raw(" "),
        Span::styled(task.text.as_str(), row_text_style(palette, task)),
    ])
}

fn row_checkbox_style(palette: &Palette, task: &Task) -> ratatui::style::Style {
    if task.completed {
        palette.dimmed()
    } else {
        palette.normal()
    }
}

fn row_text_style(palette: &Palette, task: &Task) -> ratatui::style::Style {
    if task.completed {
        palette.completed()
    } else {
        palette.normal()
    }
}
