use ratatui::Frame;
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph};

use crate::tui::app::App;

const CALENDAR_KEYS: &[(&str, &str)] = &[
    (" \u{2190}\u{2192}/hl", "Previous / next day"),
    (" \u{2191}\u{2193}/kj", "Previous / next week"),
    (" [ ]", "Previous / next month"),
    (" t", "Jump to today"),
    (" Enter/Space", "Select date"),
    (" Backspace", "Clear selection"),
];

const TASK_KEYS: &[(&str, &str)] = &[
    (" \u{2191}\u{2193}/kj", "Move cursor"),
    (" Space/x", "Toggle done"),
    (" e/Enter", "Edit task"),
    (" d", "Delete task"),
    (" m", "Move task to another date"),
];

const DRAFT_KEYS: &[(&str, &str)] = &[
    (" a/i", "Type a new task"),
    (" Enter", "Add / save"),
    (" Esc", "Leave field (cancels an edit)"),
    (" Ctrl+W Ctrl+U", "Delete word / line"),
];

const GLOBAL_KEYS: &[(&str, &str)] = &[
    (" Tab", "Switch calendar / tasks"),
    (" ?", "Toggle this help"),
    (" q, Ctrl+C", "Quit"),
];

/// Render the help overlay (toggled with ?)
pub fn render_help_overlay(frame: &mut Frame, app: &App, area: Rect) {
    let overlay_area = centered_rect(60, 80, area);

    // Clear the area behind the overlay
    frame.render_widget(Clear, overlay_area);

    let bg = app.theme.background;
    let key_style = Style::default()
        .fg(app.theme.highlight)
        .bg(bg)
        .add_modifier(Modifier::BOLD);
    let desc_style = Style::default().fg(app.theme.text).bg(bg);
    let header_style = Style::default()
        .fg(app.theme.text_bright)
        .bg(bg)
        .add_modifier(Modifier::BOLD);

    let mut lines: Vec<Line> = Vec::new();
    for (title, keys) in [
        (" Calendar", CALENDAR_KEYS),
        (" Tasks", TASK_KEYS),
        (" Task field", DRAFT_KEYS),
        (" Global", GLOBAL_KEYS),
    ] {
        lines.push(Line::from(Span::styled(title, header_style)));
        for (key, desc) in keys {
            add_binding(&mut lines, key, desc, key_style, desc_style);
        }
        lines.push(Line::from(""));
    }

    let block = Block::default()
        .borders(Borders::ALL)
        .title(Span::styled(" Key Bindings ", header_style))
        .border_style(Style::default().fg(app.theme.dim).bg(bg))
        .style(Style::default().bg(bg));

    let paragraph = Paragraph::new(lines)
        .block(block)
        .style(Style::default().bg(bg));

    frame.render_widget(paragraph, overlay_area);
}

fn add_binding<'a>(
    lines: &mut Vec<Line<'a>>,
    key: &'a str,
    desc: &'a str,
    key_style: Style,
    desc_style: Style,
) {
    let padded_key = format!("{:<16}", key);
    lines.push(Line::from(vec![
        Span::styled(padded_key, key_style),
        Span::styled(desc, desc_style),
    ]));
}

/// Create a centered rectangle of the given percentage of the parent
fn centered_rect(percent_x: u16, percent_y: u16, area: Rect) -> Rect {
    let vertical = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(area);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(vertical[1])[1]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tui::render::test_helpers::*;

    #[test]
    fn lists_sections() {
        let app = empty_app();
        let output = render_to_string(100, 40, |frame, area| {
            render_help_overlay(frame, &app, area);
        });
        assert!(output.contains("Key Bindings"));
        assert!(output.contains("Toggle done"));
        assert!(output.contains("Move task to another date"));
        assert!(output.contains("Quit"));
    }
}
