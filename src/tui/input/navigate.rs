use crossterm::event::{KeyCode, KeyEvent};

use super::{handle_calendar_key, ignore_rejected};
use crate::tui::app::{App, Focus, Mode};

/// Handle keys in Navigate mode
pub(super) fn handle_navigate(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Char('q') => {
            app.should_quit = true;
            return;
        }
        KeyCode::Char('?') => {
            app.show_help = true;
            return;
        }
        KeyCode::Tab | KeyCode::BackTab => {
            app.focus = match app.focus {
                Focus::Calendar => Focus::Tasks,
                Focus::Tasks => Focus::Calendar,
            };
            app.clamp_task_cursor();
            return;
        }
        KeyCode::Char('a') | KeyCode::Char('i') => {
            app.enter_insert();
            return;
        }
        _ => {}
    }

    match app.focus {
        Focus::Calendar => handle_calendar_focus(app, key),
        Focus::Tasks => handle_task_focus(app, key),
    }
}

fn handle_calendar_focus(app: &mut App, key: KeyEvent) {
    if handle_calendar_key(app, key) {
        return;
    }
    match key.code {
        KeyCode::Enter | KeyCode::Char(' ') => app.select_cursor_date(),
        KeyCode::Backspace | KeyCode::Delete => app.clear_selection(),
        _ => {}
    }
}

fn handle_task_focus(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Up | KeyCode::Char('k') => {
            app.task_cursor = app.task_cursor.saturating_sub(1);
        }
        KeyCode::Down | KeyCode::Char('j') => {
            app.task_cursor += 1;
            app.clamp_task_cursor();
        }
        KeyCode::Home | KeyCode::Char('g') => app.task_cursor = 0,
        KeyCode::End | KeyCode::Char('G') => {
            app.task_cursor = usize::MAX;
            app.clamp_task_cursor();
        }
        KeyCode::Char(' ') | KeyCode::Char('x') => {
            if let Some((date, id)) = cursor_key(app) {
                ignore_rejected("toggle", app.planner.toggle_done(date, id));
            }
        }
        KeyCode::Char('e') | KeyCode::Enter => {
            if let Some((_, id)) = cursor_key(app) {
                match app.planner.begin_edit(id) {
                    Ok(()) => app.enter_insert(),
                    Err(e) => ignore_rejected("edit", Err(e)),
                }
            }
        }
        KeyCode::Char('d') => {
            if let Some((date, id)) = cursor_key(app) {
                ignore_rejected("delete", app.planner.delete_task(date, id));
                app.clamp_task_cursor();
            }
        }
        KeyCode::Char('m') => {
            if let Some((date, id)) = cursor_key(app) {
                app.move_source = Some((date, id));
                app.calendar_cursor = date;
                app.mode = Mode::Move;
            }
        }
        _ => {}
    }
}

/// `(date, id)` of the task under the row cursor
fn cursor_key(app: &App) -> Option<(chrono::NaiveDate, crate::model::TaskId)> {
    app.cursor_task().map(|t| (t.date, t.id))
}
