use std::fmt;

use chrono::{NaiveDate, Utc};
use serde::{Deserialize, Serialize};

/// Task identifier: milliseconds since the Unix epoch at creation time
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TaskId(pub i64);

impl fmt::Display for TaskId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A single planned task, filed under exactly one date
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    pub id: TaskId,
    /// Task text as typed (not trimmed)
    #[serde(rename = "task")]
    pub text: String,
    /// The date key this task is stored under
    pub date: NaiveDate,
    pub done: bool,
}

impl Task {
    /// Create a new, not-done task
    pub fn new(id: TaskId, text: impl Into<String>, date: NaiveDate) -> Self {
        Task {
            id,
            text: text.into(),
            date,
            done: false,
        }
    }
}

/// Hands out timestamp-derived ids that never repeat within a session.
///
/// Two adds inside the same millisecond would collide on a raw timestamp,
/// so the next id is bumped past the last one handed out.
#[derive(Debug, Clone, Default)]
pub struct IdSource {
    last: Option<i64>,
}

impl IdSource {
    pub fn new() -> Self {
        IdSource::default()
    }

    /// Next id based on the current wall clock
    pub fn next_id(&mut self) -> TaskId {
        self.next_id_at(Utc::now().timestamp_millis())
    }

    /// Next id given an explicit "now" in epoch milliseconds
    pub fn next_id_at(&mut self, now_millis: i64) -> TaskId {
        let id = match self.last {
            Some(last) if now_millis <= last => last + 1,
            _ => now_millis,
        };
        self.last = Some(id);
        TaskId(id)
    }
}

/// Format a date as its ISO `YYYY-MM-DD` key
pub fn date_key(date: NaiveDate) -> String {
    date.format("%Y-%m-%d").to_string()
}
