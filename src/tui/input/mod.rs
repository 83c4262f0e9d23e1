mod edit;
mod move_mode;
mod navigate;

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use super::app::{App, Mode};
use crate::ops::PlanError;

use edit::handle_insert;
use move_mode::handle_move;
use navigate::handle_navigate;

/// Handle a key event in the current mode
pub fn handle_key(app: &mut App, key: KeyEvent) {
    // Ignore bare modifier key presses (Shift, Ctrl, Alt, etc.)
    if matches!(key.code, KeyCode::Modifier(_)) {
        return;
    }

    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        app.should_quit = true;
        return;
    }

    // Help overlay swallows the next key
    if app.show_help {
        app.show_help = false;
        return;
    }

    match app.mode {
        Mode::Navigate => handle_navigate(app, key),
        Mode::Insert => handle_insert(app, key),
        Mode::Move => handle_move(app, key),
    }
}

/// Calendar cursor keys shared by Navigate (calendar focus) and Move mode.
/// Returns false if the key is not a calendar key.
fn handle_calendar_key(app: &mut App, key: KeyEvent) -> bool {
    match key.code {
        KeyCode::Left | KeyCode::Char('h') => app.move_calendar_days(-1),
        KeyCode::Right | KeyCode::Char('l') => app.move_calendar_days(1),
        KeyCode::Up | KeyCode::Char('k') => app.move_calendar_days(-7),
        KeyCode::Down | KeyCode::Char('j') => app.move_calendar_days(7),
        KeyCode::Char('[') | KeyCode::PageUp => app.move_calendar_months(-1),
        KeyCode::Char(']') | KeyCode::PageDown => app.move_calendar_months(1),
        KeyCode::Char('t') => app.calendar_cursor = app.today,
        _ => return false,
    }
    true
}

/// Rejected planner operations are silent in the UI
fn ignore_rejected(op: &str, result: Result<(), PlanError>) {
    if let Err(e) = result {
        tracing::debug!(op, error = %e, "operation ignored");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::PlannerConfig;
    use crate::ops::Planner;
    use crate::tui::app::Focus;
    use chrono::NaiveDate;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn d(day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 1, day).unwrap()
    }

    fn app() -> App {
        App::new(Planner::new(), &PlannerConfig::default(), d(5))
    }

    fn type_text(app: &mut App, text: &str) {
        for c in text.chars() {
            handle_key(app, key(KeyCode::Char(c)));
        }
    }

    #[test]
    fn ctrl_c_quits_from_insert() {
        let mut app = app();
        handle_key(&mut app, key(KeyCode::Char('a')));
        assert_eq!(app.mode, Mode::Insert);
        handle_key(
            &mut app,
            KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL),
        );
        assert!(app.should_quit);
    }

    #[test]
    fn help_swallows_next_key() {
        let mut app = app();
        handle_key(&mut app, key(KeyCode::Char('?')));
        assert!(app.show_help);
        handle_key(&mut app, key(KeyCode::Char('q')));
        assert!(!app.show_help);
        assert!(!app.should_quit);
    }

    #[test]
    fn add_flow_from_keys() {
        let mut app = app();
        handle_key(&mut app, key(KeyCode::Enter)); // select 2024-01-05
        handle_key(&mut app, key(KeyCode::Char('a')));
        type_text(&mut app, "write report");
        handle_key(&mut app, key(KeyCode::Enter));

        let tasks = app.planner.store().tasks_for(d(5));
        assert_eq!(tasks.len(), 1);
        assert_eq!(tasks[0].text, "write report");
        assert_eq!(app.planner.draft(), "");
        // Stays in Insert for the next task
        assert_eq!(app.mode, Mode::Insert);
    }

    #[test]
    fn add_without_selection_is_silent() {
        let mut app = app();
        handle_key(&mut app, key(KeyCode::Char('i')));
        type_text(&mut app, "orphan");
        handle_key(&mut app, key(KeyCode::Enter));
        assert!(app.planner.store().is_empty());
        assert_eq!(app.planner.draft(), "orphan");
    }

    #[test]
    fn edit_toggle_delete_flow() {
        let mut app = app();
        handle_key(&mut app, key(KeyCode::Enter));
        handle_key(&mut app, key(KeyCode::Char('a')));
        type_text(&mut app, "a");
        handle_key(&mut app, key(KeyCode::Enter));
        type_text(&mut app, "b");
        handle_key(&mut app, key(KeyCode::Enter));
        handle_key(&mut app, key(KeyCode::Esc));
        assert_eq!(app.mode, Mode::Navigate);

        handle_key(&mut app, key(KeyCode::Tab));
        assert_eq!(app.focus, Focus::Tasks);

        // Edit the second task
        handle_key(&mut app, key(KeyCode::Char('j')));
        handle_key(&mut app, key(KeyCode::Char('e')));
        assert_eq!(app.mode, Mode::Insert);
        assert_eq!(app.planner.draft(), "b");
        type_text(&mut app, "2");
        handle_key(&mut app, key(KeyCode::Enter));
        assert_eq!(app.mode, Mode::Navigate);
        assert_eq!(app.planner.store().tasks_for(d(5))[1].text, "b2");

        // Toggle and delete the first
        handle_key(&mut app, key(KeyCode::Char('k')));
        handle_key(&mut app, key(KeyCode::Char(' ')));
        assert!(app.planner.store().tasks_for(d(5))[0].done);
        handle_key(&mut app, key(KeyCode::Char('d')));
        let tasks = app.planner.store().tasks_for(d(5));
        assert_eq!(tasks.len(), 1);
        assert_eq!(tasks[0].text, "b2");
    }

    #[test]
    fn esc_cancels_edit() {
        let mut app = app();
        handle_key(&mut app, key(KeyCode::Enter));
        handle_key(&mut app, key(KeyCode::Char('a')));
        type_text(&mut app, "a");
        handle_key(&mut app, key(KeyCode::Enter));
        handle_key(&mut app, key(KeyCode::Esc));
        handle_key(&mut app, key(KeyCode::Tab));
        handle_key(&mut app, key(KeyCode::Enter));
        assert!(app.planner.is_editing());
        type_text(&mut app, "zzz");
        handle_key(&mut app, key(KeyCode::Esc));
        assert!(!app.planner.is_editing());
        assert_eq!(app.planner.draft(), "");
        assert_eq!(app.planner.store().tasks_for(d(5))[0].text, "a");
    }

    #[test]
    fn move_flow_from_keys() {
        let mut app = app();
        handle_key(&mut app, key(KeyCode::Enter));
        handle_key(&mut app, key(KeyCode::Char('a')));
        type_text(&mut app, "write report");
        handle_key(&mut app, key(KeyCode::Enter));
        handle_key(&mut app, key(KeyCode::Esc));
        handle_key(&mut app, key(KeyCode::Tab));

        handle_key(&mut app, key(KeyCode::Char('m')));
        assert_eq!(app.mode, Mode::Move);
        handle_key(&mut app, key(KeyCode::Right));
        handle_key(&mut app, key(KeyCode::Enter));

        assert_eq!(app.mode, Mode::Navigate);
        assert!(app.planner.store().tasks_for(d(5)).is_empty());
        let moved = &app.planner.store().tasks_for(d(6))[0];
        assert_eq!(moved.text, "write report");
        assert_eq!(moved.date, d(6));
        // Selection stays on the source day
        assert_eq!(app.planner.selected_date(), Some(d(5)));
    }

    #[test]
    fn move_cancel_keeps_task() {
        let mut app = app();
        handle_key(&mut app, key(KeyCode::Enter));
        handle_key(&mut app, key(KeyCode::Char('a')));
        type_text(&mut app, "stay");
        handle_key(&mut app, key(KeyCode::Enter));
        handle_key(&mut app, key(KeyCode::Esc));
        handle_key(&mut app, key(KeyCode::Tab));
        handle_key(&mut app, key(KeyCode::Char('m')));
        handle_key(&mut app, key(KeyCode::Right));
        handle_key(&mut app, key(KeyCode::Esc));

        assert_eq!(app.mode, Mode::Navigate);
        assert_eq!(app.planner.store().tasks_for(d(5)).len(), 1);
        assert_eq!(app.calendar_cursor, d(5));
    }
}
