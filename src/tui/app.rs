use std::cell::Cell;
use std::io;
use std::time::Duration;

use chrono::{DateTime, Local, Months, NaiveDate};
use crossterm::event::{self, Event, KeyEventKind};
use crossterm::execute;
use crossterm::terminal::{
    EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
};
use ratatui::Terminal;
use ratatui::backend::CrosstermBackend;

use crate::io::clock::Clock;
use crate::model::{PlannerConfig, Store, Task, TaskId, WeekStart};
use crate::ops::Planner;

use super::input;
use super::render;
use super::theme::Theme;

/// Which panel receives navigation keys
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Focus {
    Calendar,
    Tasks,
}

/// Current interaction mode
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    Navigate,
    /// Keys edit the draft text
    Insert,
    /// The calendar cursor picks a destination for `App::move_source`
    Move,
}

/// Main application state
pub struct App {
    pub planner: Planner,
    pub focus: Focus,
    pub mode: Mode,
    pub should_quit: bool,
    pub theme: Theme,
    pub show_help: bool,
    pub show_key_hints: bool,
    pub week_start: WeekStart,
    /// Date under the calendar cursor (not necessarily selected)
    pub calendar_cursor: NaiveDate,
    pub today: NaiveDate,
    /// Row cursor into the selected date's task list
    pub task_cursor: usize,
    /// Byte offset of the text cursor in the draft
    pub edit_cursor: usize,
    /// First visible display column of the draft field
    pub edit_h_scroll: usize,
    /// Draft field width from the last render, in cells
    pub edit_width: Cell<usize>,
    /// Task being moved in Move mode
    pub move_source: Option<(NaiveDate, TaskId)>,
    /// Latest clock tick; `None` when the clock is off
    pub now: Option<DateTime<Local>>,
    pub clock_format: String,
}

impl App {
    pub fn new(planner: Planner, config: &PlannerConfig, today: NaiveDate) -> Self {
        let calendar_cursor = planner.selected_date().unwrap_or(today);
        App {
            planner,
            focus: Focus::Calendar,
            mode: Mode::Navigate,
            should_quit: false,
            theme: Theme::from_config(&config.ui),
            show_help: false,
            show_key_hints: config.ui.show_key_hints,
            week_start: config.ui.week_start,
            calendar_cursor,
            today,
            task_cursor: 0,
            edit_cursor: 0,
            edit_h_scroll: 0,
            edit_width: Cell::new(0),
            move_source: None,
            now: None,
            clock_format: config.ui.clock_format.clone(),
        }
    }

    /// Task under the row cursor, if the selected date has any
    pub fn cursor_task(&self) -> Option<&Task> {
        self.planner.visible_tasks().get(self.task_cursor)
    }

    /// Keep the row cursor inside the visible list
    pub fn clamp_task_cursor(&mut self) {
        let len = self.planner.visible_tasks().len();
        self.task_cursor = self.task_cursor.min(len.saturating_sub(1));
    }

    /// Select the date under the calendar cursor
    pub fn select_cursor_date(&mut self) {
        self.planner.select_date(Some(self.calendar_cursor));
        self.task_cursor = 0;
    }

    pub fn clear_selection(&mut self) {
        self.planner.select_date(None);
        self.task_cursor = 0;
    }

    pub fn move_calendar_days(&mut self, days: i64) {
        if let Some(date) = self
            .calendar_cursor
            .checked_add_signed(chrono::Duration::days(days))
        {
            self.calendar_cursor = date;
        }
    }

    /// Shift the calendar cursor by whole months, clamping the day to the month's end
    pub fn move_calendar_months(&mut self, months: i32) {
        let shifted = if months >= 0 {
            self.calendar_cursor
                .checked_add_months(Months::new(months.unsigned_abs()))
        } else {
            self.calendar_cursor
                .checked_sub_months(Months::new(months.unsigned_abs()))
        };
        if let Some(date) = shifted {
            self.calendar_cursor = date;
        }
    }

    /// Switch to Insert mode with the text cursor at the end of the draft
    pub fn enter_insert(&mut self) {
        self.mode = Mode::Insert;
        self.edit_cursor = self.planner.draft().len();
        self.edit_h_scroll = 0;
    }
}

/// Settings for one TUI session
#[derive(Debug, Clone)]
pub struct RunOptions {
    pub config: PlannerConfig,
    /// Date to select at startup
    pub initial_date: Option<NaiveDate>,
    pub show_clock: bool,
}

/// Run the TUI application. Returns the final store when the user quits.
pub fn run(options: RunOptions) -> Result<Store, Box<dyn std::error::Error>> {
    let today = Local::now().date_naive();
    let mut planner =
        Planner::new().keep_draft_on_delete(options.config.behavior.keep_draft_on_delete);
    let initial = options
        .initial_date
        .or(options.config.behavior.select_today.then_some(today));
    planner.select_date(initial);

    let mut app = App::new(planner, &options.config, today);

    // The clock lives exactly as long as this session; dropping it joins the thread
    let clock = if options.show_clock {
        let period = Duration::from_millis(options.config.ui.tick_millis.max(1));
        app.now = Some(Local::now());
        Some(Clock::start(period)?)
    } else {
        None
    };

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;
    terminal.clear()?;

    // Install panic hook to restore terminal on panic
    let original_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic_info| {
        let _ = disable_raw_mode();
        let _ = execute!(io::stdout(), LeaveAlternateScreen);
        original_hook(panic_info);
    }));

    tracing::info!(clock = options.show_clock, "planner started");
    let result = run_event_loop(&mut terminal, &mut app, clock.as_ref());

    if let Some(clock) = clock {
        clock.stop();
    }

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    result?;
    tracing::info!(tasks = app.planner.store().task_count(), "planner closed");
    Ok(app.planner.store().clone())
}

fn run_event_loop(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App,
    clock: Option<&Clock>,
) -> Result<(), Box<dyn std::error::Error>> {
    loop {
        terminal.draw(|frame| render::render(frame, app))?;

        if event::poll(Duration::from_millis(250))? {
            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press {
                    input::handle_key(app, key);
                }
            }
        }

        if let Some(now) = clock.and_then(Clock::poll) {
            app.now = Some(now);
            app.today = now.date_naive();
        }

        if app.should_quit {
            break;
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn d(y: i32, m: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, day).unwrap()
    }

    fn app_on(date: NaiveDate) -> App {
        App::new(Planner::new(), &PlannerConfig::default(), date)
    }

    #[test]
    fn starts_on_today_without_selection() {
        let app = app_on(d(2024, 1, 5));
        assert_eq!(app.calendar_cursor, d(2024, 1, 5));
        assert_eq!(app.planner.selected_date(), None);
        assert_eq!(app.focus, Focus::Calendar);
        assert_eq!(app.mode, Mode::Navigate);
    }

    #[test]
    fn cursor_starts_on_preselected_date() {
        let mut planner = Planner::new();
        planner.select_date(Some(d(2024, 3, 1)));
        let app = App::new(planner, &PlannerConfig::default(), d(2024, 1, 5));
        assert_eq!(app.calendar_cursor, d(2024, 3, 1));
    }

    #[test]
    fn calendar_moves_by_days_and_months() {
        let mut app = app_on(d(2024, 1, 31));
        app.move_calendar_days(1);
        assert_eq!(app.calendar_cursor, d(2024, 2, 1));
        app.move_calendar_days(-7);
        assert_eq!(app.calendar_cursor, d(2024, 1, 25));

        let mut app = app_on(d(2024, 1, 31));
        app.move_calendar_months(1);
        assert_eq!(app.calendar_cursor, d(2024, 2, 29));
        app.move_calendar_months(-2);
        assert_eq!(app.calendar_cursor, d(2023, 12, 29));
    }

    #[test]
    fn select_resets_row_cursor() {
        let mut app = app_on(d(2024, 1, 5));
        app.task_cursor = 3;
        app.select_cursor_date();
        assert_eq!(app.planner.selected_date(), Some(d(2024, 1, 5)));
        assert_eq!(app.task_cursor, 0);
        app.clear_selection();
        assert_eq!(app.planner.selected_date(), None);
    }

    #[test]
    fn clamp_handles_empty_list() {
        let mut app = app_on(d(2024, 1, 5));
        app.task_cursor = 4;
        app.clamp_task_cursor();
        assert_eq!(app.task_cursor, 0);
        assert!(app.cursor_task().is_none());
    }
}
