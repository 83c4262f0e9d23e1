use crossterm::event::{KeyCode, KeyEvent};

use super::{handle_calendar_key, ignore_rejected};
use crate::tui::app::{App, Mode};

/// Handle keys in Move mode: the calendar cursor picks the destination
pub(super) fn handle_move(app: &mut App, key: KeyEvent) {
    if handle_calendar_key(app, key) {
        return;
    }
    match key.code {
        KeyCode::Enter | KeyCode::Char('m') => {
            if let Some((from, id)) = app.move_source.take() {
                let to = app.calendar_cursor;
                ignore_rejected("move", app.planner.move_task(from, id, to));
                app.clamp_task_cursor();
            }
            app.mode = Mode::Navigate;
        }
        KeyCode::Esc => {
            if let Some((from, _)) = app.move_source.take() {
                app.calendar_cursor = from;
            }
            app.mode = Mode::Navigate;
        }
        _ => {}
    }
}
