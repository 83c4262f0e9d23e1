use std::fmt::Write as _;

use chrono::{DateTime, Local};
use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use super::pad_to_width;
use crate::tui::app::App;
use crate::util::text::display_width;

const TITLE: &str = " Task Planner";

/// Render the title row with the clock on the right
pub fn render_header(frame: &mut Frame, app: &App, area: Rect) {
    let bg = app.theme.background;
    let width = area.width as usize;

    let mut spans = vec![Span::styled(
        TITLE,
        Style::default()
            .fg(app.theme.text_bright)
            .bg(bg)
            .add_modifier(Modifier::BOLD),
    )];

    if let Some(now) = app.now {
        let clock = format!("{} ", format_clock(now, &app.clock_format));
        let title_width = display_width(TITLE);
        let clock_width = display_width(&clock);
        if title_width + clock_width < width {
            pad_to_width(&mut spans, width - clock_width, Style::default().bg(bg));
            spans.push(Span::styled(
                clock,
                Style::default().fg(app.theme.cyan).bg(bg),
            ));
        }
    }

    let paragraph = Paragraph::new(Line::from(spans)).style(Style::default().bg(bg));
    frame.render_widget(paragraph, area);
}

/// Format a timestamp with a user pattern, falling back to `%H:%M:%S`
/// when the pattern is not valid strftime.
pub fn format_clock(now: DateTime<Local>, pattern: &str) -> String {
    let mut out = String::new();
    if write!(out, "{}", now.format(pattern)).is_err() {
        return now.format("%H:%M:%S").to_string();
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tui::render::test_helpers::*;
    use chrono::TimeZone;

    fn noon() -> DateTime<Local> {
        Local.with_ymd_and_hms(2024, 1, 5, 12, 34, 56).unwrap()
    }

    #[test]
    fn format_clock_uses_pattern() {
        assert_eq!(format_clock(noon(), "%H:%M:%S"), "12:34:56");
        assert_eq!(format_clock(noon(), "%Y-%m-%d %H:%M"), "2024-01-05 12:34");
    }

    #[test]
    fn format_clock_falls_back_on_bad_pattern() {
        assert_eq!(format_clock(noon(), "%Q"), "12:34:56");
    }

    #[test]
    fn header_shows_title_and_clock() {
        let mut app = empty_app();
        app.now = Some(noon());
        let output = render_to_string(40, 1, |frame, area| {
            render_header(frame, &app, area);
        });
        assert_eq!(output, " Task Planner                  12:34:56");
    }

    #[test]
    fn header_without_clock() {
        let app = empty_app();
        let output = render_to_string(40, 1, |frame, area| {
            render_header(frame, &app, area);
        });
        assert_eq!(output, " Task Planner");
    }
}
