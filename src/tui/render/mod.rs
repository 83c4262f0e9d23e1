pub mod calendar;
pub mod draft_bar;
pub mod header;
pub mod help_overlay;
pub mod status_row;
pub mod task_list;

#[cfg(test)]
pub mod test_helpers;

use ratatui::Frame;
use ratatui::layout::{Constraint, Direction, Layout};
use ratatui::style::Style;
use ratatui::text::Span;
use ratatui::widgets::Block;

use super::app::App;
use crate::util::text::display_width;

/// Width of the calendar panel: 7 cells of 3 columns plus borders
pub const CALENDAR_WIDTH: u16 = 7 * 3 + 2 + 2;

/// Draw the whole screen
pub fn render(frame: &mut Frame, app: &App) {
    let area = frame.area();

    // Background fill
    let bg_style = Style::default().bg(app.theme.background);
    frame.render_widget(Block::default().style(bg_style), area);

    // Layout: header | calendar + tasks | draft bar | status row
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // title + clock
            Constraint::Min(3),    // body
            Constraint::Length(3), // draft bar
            Constraint::Length(1), // status row
        ])
        .split(area);

    header::render_header(frame, app, chunks[0]);

    let body = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Length(CALENDAR_WIDTH), Constraint::Min(10)])
        .split(chunks[1]);
    calendar::render_calendar(frame, app, body[0]);
    task_list::render_task_list(frame, app, body[1]);

    draft_bar::render_draft_bar(frame, app, chunks[2]);
    status_row::render_status_row(frame, app, chunks[3]);

    // Help overlay (rendered on top of everything)
    if app.show_help {
        help_overlay::render_help_overlay(frame, app, area);
    }
}

/// Push spans for a text with an insertion cursor at byte offset `cursor`.
///
/// Only a `max_width`-cell window is drawn, starting near column `h_scroll`
/// and shifted as needed so the cursor is always inside it.
pub(super) fn push_cursor_spans<'a>(
    spans: &mut Vec<Span<'a>>,
    text: &str,
    cursor: usize,
    h_scroll: usize,
    max_width: usize,
    text_style: Style,
    cursor_style: Style,
) {
    use crate::util::text::{col_to_offset, scroll_for_cursor, truncate_to_width};

    let cursor = cursor.min(text.len());
    let scroll = scroll_for_cursor(text, cursor, h_scroll, max_width);
    let start = col_to_offset(text, scroll).min(cursor);
    let before = &text[start..cursor];
    let room = max_width.saturating_sub(display_width(before) + 1);
    let after = truncate_to_width(&text[cursor..], room);
    spans.push(Span::styled(before.to_string(), text_style));
    spans.push(Span::styled("\u{258C}", cursor_style));
    if !after.is_empty() {
        spans.push(Span::styled(after, text_style));
    }
}

/// Fill the rest of a line so its background reaches `width`
pub(super) fn pad_to_width<'a>(spans: &mut Vec<Span<'a>>, width: usize, style: Style) {
    let used: usize = spans.iter().map(|s| display_width(&s.content)).sum();
    if used < width {
        spans.push(Span::styled(" ".repeat(width - used), style));
    }
}
