use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

use super::{pad_to_width, push_cursor_spans};
use crate::model::date_key;
use crate::tui::app::{App, Focus, Mode};
use crate::util::text::{display_width, truncate_to_width};

/// Render the task panel for the selected date.
///
/// Without a selected date the task section is left out and only a hint is shown.
pub fn render_task_list(frame: &mut Frame, app: &App, area: Rect) {
    let bg = app.theme.background;

    let Some(date) = app.planner.selected_date() else {
        let hint = Paragraph::new(vec![
            Line::from(""),
            Line::from(" Pick a date in the calendar and press Enter"),
        ])
        .style(Style::default().fg(app.theme.dim).bg(bg));
        frame.render_widget(hint, area);
        return;
    };

    let focused = app.focus == Focus::Tasks && app.mode != Mode::Move;
    let border_color = if focused {
        app.theme.highlight
    } else {
        app.theme.border
    };
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border_color).bg(bg))
        .title(Span::styled(
            format!(" Tasks for {} ", date_key(date)),
            Style::default()
                .fg(app.theme.text_bright)
                .bg(bg)
                .add_modifier(Modifier::BOLD),
        ))
        .style(Style::default().bg(bg));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let tasks = app.planner.visible_tasks();
    if tasks.is_empty() {
        let empty =
            Paragraph::new(" No tasks").style(Style::default().fg(app.theme.dim).bg(bg));
        frame.render_widget(empty, inner);
        return;
    }

    let width = inner.width as usize;
    let height = inner.height as usize;
    let scroll = if height > 0 && app.task_cursor >= height {
        app.task_cursor + 1 - height
    } else {
        0
    };

    let editing = app.planner.editing_id();
    let moving = app.move_source.map(|(_, id)| id);
    let mut lines: Vec<Line> = Vec::new();

    for (i, task) in tasks.iter().enumerate().skip(scroll).take(height) {
        let is_cursor = focused && i == app.task_cursor;
        let is_editing = editing == Some(task.id);
        let row_bg = if is_cursor || moving == Some(task.id) {
            app.theme.selection_bg
        } else {
            bg
        };
        let base = Style::default().bg(row_bg);

        let mut spans: Vec<Span> = Vec::new();
        let marker = if is_cursor { "\u{25B8} " } else { "  " };
        spans.push(Span::styled(marker, base.fg(app.theme.highlight)));
        spans.push(Span::styled(
            if task.done { "[x] " } else { "[ ] " },
            base.fg(app.theme.done_color(task.done)),
        ));

        let action = if is_editing { "Save" } else { "Edit" };
        let actions = format!("{}  Delete ", action);
        let used = display_width(marker) + 4;
        let room = width.saturating_sub(used + display_width(&actions) + 1);

        if is_editing {
            let field = base.fg(app.theme.text_bright).add_modifier(Modifier::UNDERLINED);
            if app.mode == Mode::Insert {
                push_cursor_spans(
                    &mut spans,
                    app.planner.draft(),
                    app.edit_cursor,
                    app.edit_h_scroll,
                    room,
                    field,
                    base.fg(app.theme.highlight),
                );
            } else {
                spans.push(Span::styled(
                    truncate_to_width(app.planner.draft(), room),
                    field,
                ));
            }
        } else {
            let text_style = if task.done {
                base.fg(app.theme.dim).add_modifier(Modifier::CROSSED_OUT)
            } else {
                base.fg(app.theme.text)
            };
            spans.push(Span::styled(truncate_to_width(&task.text, room), text_style));
        }

        if width > display_width(&actions) {
            pad_to_width(&mut spans, width - display_width(&actions), base);
            spans.push(Span::styled(
                format!("{}  ", action),
                base.fg(if is_editing {
                    app.theme.green
                } else {
                    app.theme.cyan
                }),
            ));
            spans.push(Span::styled("Delete ", base.fg(app.theme.red)));
        }
        lines.push(Line::from(spans));
    }

    let paragraph = Paragraph::new(lines).style(Style::default().bg(bg));
    frame.render_widget(paragraph, inner);
}
