use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::PathBuf;

/// Configuration from dayplan.toml
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PlannerConfig {
    #[serde(default)]
    pub ui: UiConfig,
    #[serde(default)]
    pub behavior: BehaviorConfig,
    #[serde(default)]
    pub log: LogConfig,
}

/// First column of the calendar grid
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WeekStart {
    #[default]
    Monday,
    Sunday,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UiConfig {
    #[serde(default = "default_true")]
    pub show_clock: bool,
    /// strftime pattern for the header clock
    #[serde(default = "default_clock_format")]
    pub clock_format: String,
    /// Clock period in milliseconds
    #[serde(default = "default_tick_millis")]
    pub tick_millis: u64,
    #[serde(default)]
    pub week_start: WeekStart,
    #[serde(default = "default_true")]
    pub show_key_hints: bool,
    /// Hex color overrides keyed by theme slot name
    #[serde(default)]
    pub colors: HashMap<String, String>,
}

impl Default for UiConfig {
    fn default() -> Self {
        UiConfig {
            show_clock: true,
            clock_format: default_clock_format(),
            tick_millis: default_tick_millis(),
            week_start: WeekStart::default(),
            show_key_hints: true,
            colors: HashMap::new(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BehaviorConfig {
    /// Select today's date when the planner opens
    #[serde(default)]
    pub select_today: bool,
    /// Keep the draft and any in-progress edit when a task is deleted
    #[serde(default)]
    pub keep_draft_on_delete: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LogConfig {
    /// Log file path. No file means logging is off.
    #[serde(default)]
    pub file: Option<PathBuf>,
    /// EnvFilter directive, e.g. "info" or "dayplan=debug"
    #[serde(default = "default_log_level")]
    pub level: String,
}

impl Default for LogConfig {
    fn default() -> Self {
        LogConfig {
            file: None,
            level: default_log_level(),
        }
    }
}

fn default_true() -> bool {
    true
}

fn default_clock_format() -> String {
    "%H:%M:%S".into()
}

fn default_tick_millis() -> u64 {
    1000
}

fn default_log_level() -> String {
    "info".into()
}
