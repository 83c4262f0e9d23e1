use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use super::ignore_rejected;
use crate::tui::app::{App, Focus, Mode};
use crate::util::text::{next_boundary, prev_boundary, scroll_for_cursor, word_start_before};

/// Handle keys in Insert mode (editing the draft)
pub(super) fn handle_insert(app: &mut App, key: KeyEvent) {
    let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
    app.edit_cursor = app.edit_cursor.min(app.planner.draft().len());
    match key.code {
        KeyCode::Esc => {
            // Leaving Insert abandons an in-progress edit, but keeps a plain draft
            app.planner.cancel_edit();
            app.mode = Mode::Navigate;
            app.edit_cursor = app.edit_cursor.min(app.planner.draft().len());
        }
        KeyCode::Enter => submit(app),
        KeyCode::Char('u') if ctrl => {
            app.planner.draft_mut().clear();
            app.edit_cursor = 0;
        }
        KeyCode::Char('w') if ctrl => {
            let cursor = app.edit_cursor;
            let start = word_start_before(app.planner.draft(), cursor);
            app.planner.draft_mut().replace_range(start..cursor, "");
            app.edit_cursor = start;
        }
        KeyCode::Char('a') if ctrl => app.edit_cursor = 0,
        KeyCode::Char('e') if ctrl => app.edit_cursor = app.planner.draft().len(),
        KeyCode::Char(c) if !ctrl => {
            let cursor = app.edit_cursor;
            app.planner.draft_mut().insert(cursor, c);
            app.edit_cursor = cursor + c.len_utf8();
        }
        KeyCode::Backspace => {
            let cursor = app.edit_cursor;
            let start = prev_boundary(app.planner.draft(), cursor);
            app.planner.draft_mut().replace_range(start..cursor, "");
            app.edit_cursor = start;
        }
        KeyCode::Delete => {
            let cursor = app.edit_cursor;
            let end = next_boundary(app.planner.draft(), cursor);
            app.planner.draft_mut().replace_range(cursor..end, "");
        }
        KeyCode::Left => app.edit_cursor = prev_boundary(app.planner.draft(), app.edit_cursor),
        KeyCode::Right => app.edit_cursor = next_boundary(app.planner.draft(), app.edit_cursor),
        KeyCode::Home => app.edit_cursor = 0,
        KeyCode::End => app.edit_cursor = app.planner.draft().len(),
        _ => {}
    }
    update_edit_h_scroll(app);
}

/// Keep the text cursor inside the visible part of the draft field
fn update_edit_h_scroll(app: &mut App) {
    let width = app.edit_width.get();
    if width == 0 {
        return;
    }
    app.edit_h_scroll = scroll_for_cursor(
        app.planner.draft(),
        app.edit_cursor,
        app.edit_h_scroll,
        width,
    );
}

/// Add or save the draft. A saved edit returns to the task list;
/// a new task keeps Insert open for the next one.
fn submit(app: &mut App) {
    let was_editing = app.planner.is_editing();
    match app.planner.submit() {
        Ok(()) => {
            app.edit_cursor = 0;
            if was_editing {
                app.mode = Mode::Navigate;
                app.focus = Focus::Tasks;
            } else {
                // Keep the new task in view
                app.task_cursor = app.planner.visible_tasks().len().saturating_sub(1);
            }
        }
        Err(e) => {
            // A commit that found its task gone still clears the edit
            if was_editing && !app.planner.is_editing() {
                app.mode = Mode::Navigate;
                app.edit_cursor = 0;
            }
            ignore_rejected("submit", Err(e));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::PlannerConfig;
    use crate::ops::Planner;
    use chrono::NaiveDate;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn ctrl(c: char) -> KeyEvent {
        KeyEvent::new(KeyCode::Char(c), KeyModifiers::CONTROL)
    }

    fn insert_app(draft: &str) -> App {
        let mut planner = Planner::new();
        planner.set_draft(draft);
        let today = NaiveDate::from_ymd_opt(2024, 1, 5).unwrap();
        let mut app = App::new(planner, &PlannerConfig::default(), today);
        app.enter_insert();
        app
    }

    #[test]
    fn inserts_at_cursor() {
        let mut app = insert_app("wrte");
        handle_insert(&mut app, key(KeyCode::Left));
        handle_insert(&mut app, key(KeyCode::Left));
        handle_insert(&mut app, key(KeyCode::Char('i')));
        assert_eq!(app.planner.draft(), "write");
        assert_eq!(app.edit_cursor, 3);
    }

    #[test]
    fn backspace_and_delete_are_grapheme_aware() {
        let mut app = insert_app("cafe\u{301}!");
        handle_insert(&mut app, key(KeyCode::Left));
        handle_insert(&mut app, key(KeyCode::Backspace));
        assert_eq!(app.planner.draft(), "caf!");
        handle_insert(&mut app, key(KeyCode::Home));
        handle_insert(&mut app, key(KeyCode::Delete));
        assert_eq!(app.planner.draft(), "af!");
        assert_eq!(app.edit_cursor, 0);
    }

    #[test]
    fn backspace_at_start_is_noop() {
        let mut app = insert_app("x");
        handle_insert(&mut app, key(KeyCode::Home));
        handle_insert(&mut app, key(KeyCode::Backspace));
        assert_eq!(app.planner.draft(), "x");
    }

    #[test]
    fn ctrl_w_and_ctrl_u() {
        let mut app = insert_app("call the bank");
        handle_insert(&mut app, ctrl('w'));
        assert_eq!(app.planner.draft(), "call the ");
        handle_insert(&mut app, ctrl('u'));
        assert_eq!(app.planner.draft(), "");
        assert_eq!(app.edit_cursor, 0);
    }

    #[test]
    fn long_draft_scrolls_with_cursor() {
        let mut app = insert_app("");
        app.edit_width.set(23);
        for _ in 0..40 {
            handle_insert(&mut app, key(KeyCode::Char('a')));
        }
        assert_eq!(app.edit_h_scroll, 19);

        handle_insert(&mut app, key(KeyCode::Home));
        assert_eq!(app.edit_h_scroll, 0);

        handle_insert(&mut app, key(KeyCode::End));
        assert_eq!(app.edit_h_scroll, 19);
    }

    #[test]
    fn esc_keeps_plain_draft() {
        let mut app = insert_app("half");
        handle_insert(&mut app, key(KeyCode::Esc));
        assert_eq!(app.mode, Mode::Navigate);
        assert_eq!(app.planner.draft(), "half");
    }
}
