use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

use super::{pad_to_width, push_cursor_spans};
use crate::tui::app::{App, Mode};
use crate::util::text::{display_width, truncate_to_width};

/// Render the shared add/edit text field with its action button
pub fn render_draft_bar(frame: &mut Frame, app: &App, area: Rect) {
    let bg = app.theme.background;
    let editing = app.planner.is_editing();
    let inserting = app.mode == Mode::Insert;

    let border_color = if inserting {
        app.theme.highlight
    } else {
        app.theme.border
    };
    let title = if editing { " Edit task " } else { " New task " };
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border_color).bg(bg))
        .title(Span::styled(title, Style::default().fg(app.theme.dim).bg(bg)))
        .style(Style::default().bg(bg));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let width = inner.width as usize;
    let button = if editing { "[Update Task] " } else { "[Add Task] " };
    let room = width.saturating_sub(3 + display_width(button) + 1);

    let mut spans = vec![Span::styled(" > ", Style::default().fg(app.theme.dim).bg(bg))];
    let text_style = Style::default().fg(app.theme.text_bright).bg(bg);
    let draft = app.planner.draft();

    if inserting {
        app.edit_width.set(room);
        push_cursor_spans(
            &mut spans,
            draft,
            app.edit_cursor,
            app.edit_h_scroll,
            room,
            text_style,
            Style::default().fg(app.theme.highlight).bg(bg),
        );
    } else if draft.is_empty() {
        spans.push(Span::styled(
            "Enter task",
            Style::default()
                .fg(app.theme.dim)
                .bg(bg)
                .add_modifier(Modifier::ITALIC),
        ));
    } else {
        spans.push(Span::styled(truncate_to_width(draft, room), text_style));
    }

    if width > display_width(button) {
        pad_to_width(&mut spans, width - display_width(button), Style::default().bg(bg));
        spans.push(Span::styled(
            button,
            Style::default()
                .fg(app.theme.highlight)
                .bg(bg)
                .add_modifier(Modifier::BOLD),
        ));
    }

    frame.render_widget(Paragraph::new(Line::from(spans)), inner);
}
