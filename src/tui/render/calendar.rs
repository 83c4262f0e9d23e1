use chrono::{Datelike, NaiveDate};
use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

use crate::model::WeekStart;
use crate::tui::app::{App, Focus, Mode};

/// One calendar row; `None` pads days outside the month
pub type Week = [Option<NaiveDate>; 7];

/// Lay out a month as rows of weeks starting on `week_start`
pub fn month_grid(year: i32, month: u32, week_start: WeekStart) -> Vec<Week> {
    let Some(first) = NaiveDate::from_ymd_opt(year, month, 1) else {
        return Vec::new();
    };
    let offset = match week_start {
        WeekStart::Monday => first.weekday().num_days_from_monday(),
        WeekStart::Sunday => first.weekday().num_days_from_sunday(),
    } as usize;

    let mut weeks = Vec::new();
    let mut week: Week = [None; 7];
    let mut col = offset;
    let mut day = Some(first);
    while let Some(date) = day.filter(|d| d.month() == month) {
        week[col] = Some(date);
        col += 1;
        if col == 7 {
            weeks.push(week);
            week = [None; 7];
            col = 0;
        }
        day = date.succ_opt();
    }
    if col > 0 {
        weeks.push(week);
    }
    weeks
}

/// Two-letter weekday labels in column order
pub fn weekday_labels(week_start: WeekStart) -> [&'static str; 7] {
    match week_start {
        WeekStart::Monday => ["Mo", "Tu", "We", "Th", "Fr", "Sa", "Su"],
        WeekStart::Sunday => ["Su", "Mo", "Tu", "We", "Th", "Fr", "Sa"],
    }
}

/// Render the month calendar around the calendar cursor
pub fn render_calendar(frame: &mut Frame, app: &App, area: Rect) {
    let bg = app.theme.background;
    let cursor = app.calendar_cursor;
    let selected = app.planner.selected_date();
    let store = app.planner.store();
    let active = app.focus == Focus::Calendar || app.mode == Mode::Move;

    let border_color = if active {
        app.theme.highlight
    } else {
        app.theme.border
    };
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border_color).bg(bg))
        .title(Span::styled(
            format!(" {} ", cursor.format("%B %Y")),
            Style::default().fg(app.theme.text_bright).bg(bg),
        ))
        .style(Style::default().bg(bg));

    let mut lines: Vec<Line> = Vec::new();

    let label_style = Style::default().fg(app.theme.dim).bg(bg);
    let mut header = Vec::new();
    for label in weekday_labels(app.week_start) {
        header.push(Span::styled(" ", label_style));
        header.push(Span::styled(label, label_style));
    }
    lines.push(Line::from(header));

    for week in month_grid(cursor.year(), cursor.month(), app.week_start) {
        let mut spans = Vec::new();
        for cell in week {
            spans.push(Span::styled(" ", Style::default().bg(bg)));
            let Some(date) = cell else {
                spans.push(Span::styled("  ", Style::default().bg(bg)));
                continue;
            };

            let mut style = Style::default().fg(app.theme.text).bg(bg);
            if !store.tasks_for(date).is_empty() {
                style = style
                    .fg(app.theme.day_marker(store.has_open_tasks(date)))
                    .add_modifier(Modifier::BOLD);
            }
            if date == app.today {
                style = style.add_modifier(Modifier::UNDERLINED);
            }
            if Some(date) == selected {
                style = style.fg(app.theme.text_bright).bg(app.theme.selection_bg);
            }
            if date == cursor && active {
                style = style.fg(bg).bg(app.theme.highlight);
            }
            spans.push(Span::styled(format!("{:>2}", date.day()), style));
        }
        lines.push(Line::from(spans));
    }

    let paragraph = Paragraph::new(lines).block(block);
    frame.render_widget(paragraph, area);
}
