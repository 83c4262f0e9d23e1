use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::Style;
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use super::pad_to_width;
use crate::model::date_key;
use crate::tui::app::{App, Focus, Mode};
use crate::util::text::display_width;

/// Render the status row (bottom of screen)
pub fn render_status_row(frame: &mut Frame, app: &App, area: Rect) {
    let bg = app.theme.background;
    let width = area.width as usize;

    let mut spans: Vec<Span> = Vec::new();
    if app.mode == Mode::Move {
        spans.push(Span::styled(
            format!(" Move to {}?", date_key(app.calendar_cursor)),
            Style::default().fg(app.theme.text_bright).bg(bg),
        ));
    } else if let Some(date) = app.planner.selected_date() {
        let count = app.planner.visible_tasks().len();
        let done = app.planner.visible_tasks().iter().filter(|t| t.done).count();
        spans.push(Span::styled(
            format!(" {}  {}/{} done", date_key(date), done, count),
            Style::default().fg(app.theme.dim).bg(bg),
        ));
    }

    if app.show_key_hints {
        let hint = key_hint(app);
        let used: usize = spans.iter().map(|s| display_width(&s.content)).sum();
        let hint_width = display_width(hint) + 1;
        if used + hint_width < width {
            pad_to_width(&mut spans, width - hint_width, Style::default().bg(bg));
            spans.push(Span::styled(
                format!("{} ", hint),
                Style::default().fg(app.theme.dim).bg(bg),
            ));
        }
    }

    let paragraph = Paragraph::new(Line::from(spans)).style(Style::default().bg(bg));
    frame.render_widget(paragraph, area);
}

/// Context-sensitive key hint for the right side of the status row
fn key_hint(app: &App) -> &'static str {
    match app.mode {
        Mode::Move => "Enter confirm  Esc cancel",
        Mode::Insert if app.planner.is_editing() => "Enter save  Esc cancel",
        Mode::Insert => "Enter add  Esc done",
        Mode::Navigate => match app.focus {
            Focus::Calendar => "Enter select  Tab tasks  a add  ? help",
            Focus::Tasks => "Space done  e edit  d delete  m move  ? help",
        },
    }
}
