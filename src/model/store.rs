use std::sync::Arc;

use chrono::NaiveDate;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use super::task::{Task, TaskId};

/// Date-keyed task store.
///
/// Each date maps to a shared, immutable sequence. Transitions build a new
/// `Store` that re-uses the `Arc` of every date they don't touch, so an
/// unchanged day is pointer-equal across versions.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Store {
    days: IndexMap<NaiveDate, Arc<Vec<Task>>>,
}

impl Store {
    pub fn new() -> Self {
        Store::default()
    }

    /// Tasks filed under `date`, in insertion order (empty if the date is unknown)
    pub fn tasks_for(&self, date: NaiveDate) -> &[Task] {
        self.days.get(&date).map_or(&[], |tasks| tasks.as_slice())
    }

    /// The shared sequence for a date, if the date has ever held tasks
    pub fn day(&self, date: NaiveDate) -> Option<&Arc<Vec<Task>>> {
        self.days.get(&date)
    }

    pub fn contains_date(&self, date: NaiveDate) -> bool {
        self.days.contains_key(&date)
    }

    /// Find a task by id within one date's sequence
    pub fn find(&self, date: NaiveDate, id: TaskId) -> Option<&Task> {
        self.tasks_for(date).iter().find(|t| t.id == id)
    }

    /// All date keys in store order
    pub fn dates(&self) -> impl Iterator<Item = NaiveDate> + '_ {
        self.days.keys().copied()
    }

    /// Iterate `(date, tasks)` pairs in store order
    pub fn iter(&self) -> impl Iterator<Item = (NaiveDate, &[Task])> + '_ {
        self.days.iter().map(|(d, tasks)| (*d, tasks.as_slice()))
    }

    /// Number of tasks across all dates
    pub fn task_count(&self) -> usize {
        self.days.values().map(|tasks| tasks.len()).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.task_count() == 0
    }

    /// Whether `date` holds at least one task that is not done
    pub fn has_open_tasks(&self, date: NaiveDate) -> bool {
        self.tasks_for(date).iter().any(|t| !t.done)
    }

    /// A copy of this store with `date` replaced by `tasks`.
    /// Every other date keeps its shared sequence.
    pub(crate) fn with_day(&self, date: NaiveDate, tasks: Vec<Task>) -> Store {
        let mut days = self.days.clone();
        days.insert(date, Arc::new(tasks));
        Store { days }
    }

    /// A copy of this store with two dates replaced in one step
    pub(crate) fn with_days(
        &self,
        first: (NaiveDate, Vec<Task>),
        second: (NaiveDate, Vec<Task>),
    ) -> Store {
        let mut days = self.days.clone();
        days.insert(first.0, Arc::new(first.1));
        days.insert(second.0, Arc::new(second.1));
        Store { days }
    }
}
