use chrono::NaiveDate;
use ratatui::Terminal;
use ratatui::backend::TestBackend;
use ratatui::layout::Rect;

use crate::model::PlannerConfig;
use crate::ops::Planner;
use crate::tui::app::App;

/// Render into an in-memory buffer and return plain text (no styles).
pub fn render_to_string<F>(w: u16, h: u16, f: F) -> String
where
    F: FnOnce(&mut ratatui::Frame, Rect),
{
    let backend = TestBackend::new(w, h);
    let mut terminal = Terminal::new(backend).unwrap();
    terminal
        .draw(|frame| {
            let area = frame.area();
            f(frame, area);
        })
        .unwrap();

    let buf = terminal.backend().buffer().clone();
    let w = buf.area.width as usize;
    let lines: Vec<String> = buf
        .content
        .chunks(w)
        .map(|row| {
            let s: String = row.iter().map(|cell| cell.symbol()).collect();
            s.trim_end().to_string()
        })
        .collect();

    // Trim trailing blank lines
    let end = lines
        .iter()
        .rposition(|l| !l.is_empty())
        .map_or(0, |i| i + 1);
    lines[..end].join("\n")
}

/// The date every test app opens on
pub fn jan5() -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 1, 5).unwrap()
}

/// An App on 2024-01-05 with nothing selected and no tasks.
pub fn empty_app() -> App {
    App::new(Planner::new(), &PlannerConfig::default(), jan5())
}

/// An App with 2024-01-05 selected and one task per text.
pub fn app_with_tasks(texts: &[&str]) -> App {
    let mut app = empty_app();
    app.select_cursor_date();
    for text in texts {
        app.planner.set_draft(*text);
        app.planner.add_task().unwrap();
    }
    app
}
