use chrono::NaiveDate;

use crate::model::store::Store;
use crate::model::task::{Task, TaskId};

/// Error type for planner operations
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PlanError {
    #[error("no date selected")]
    NoDateSelected,
    #[error("task text is empty")]
    EmptyText,
    #[error("no task is being edited")]
    NotEditing,
    #[error("task {id} not found on {date}")]
    TaskNotFound { date: NaiveDate, id: TaskId },
}

// ---------------------------------------------------------------------------
// Store transitions
//
// Each function takes the current store by reference and returns a new one.
// Only the affected date sequences are rebuilt.
// ---------------------------------------------------------------------------

/// Append `task` to the sequence under its own date
pub fn add_task(store: &Store, task: Task) -> Store {
    let date = task.date;
    let mut tasks = store.tasks_for(date).to_vec();
    tasks.push(task);
    store.with_day(date, tasks)
}

/// Replace the text of one task, leaving id, date and done untouched
pub fn update_text(
    store: &Store,
    date: NaiveDate,
    id: TaskId,
    text: &str,
) -> Result<Store, PlanError> {
    map_task(store, date, id, |task| task.text = text.to_string())
}

/// Flip the done flag of one task
pub fn toggle_done(store: &Store, date: NaiveDate, id: TaskId) -> Result<Store, PlanError> {
    map_task(store, date, id, |task| task.done = !task.done)
}

/// Remove one task from a date's sequence. Siblings keep their order.
pub fn delete_task(store: &Store, date: NaiveDate, id: TaskId) -> Result<Store, PlanError> {
    let current = store.tasks_for(date);
    if !current.iter().any(|t| t.id == id) {
        return Err(PlanError::TaskNotFound { date, id });
    }
    let tasks: Vec<Task> = current.iter().filter(|t| t.id != id).cloned().collect();
    Ok(store.with_day(date, tasks))
}

/// Relocate a task from `from` to the end of `to`, rewriting its date.
///
/// Moving onto the same date removes and re-appends, so the task ends up
/// last in that day's sequence.
pub fn move_task(
    store: &Store,
    from: NaiveDate,
    id: TaskId,
    to: NaiveDate,
) -> Result<Store, PlanError> {
    let source = store.tasks_for(from);
    let idx = source
        .iter()
        .position(|t| t.id == id)
        .ok_or(PlanError::TaskNotFound { date: from, id })?;

    let mut moved = source[idx].clone();
    moved.date = to;

    let mut remaining = source.to_vec();
    remaining.remove(idx);

    if from == to {
        remaining.push(moved);
        return Ok(store.with_day(from, remaining));
    }

    let mut dest = store.tasks_for(to).to_vec();
    dest.push(moved);
    Ok(store.with_days((from, remaining), (to, dest)))
}

fn map_task(
    store: &Store,
    date: NaiveDate,
    id: TaskId,
    f: impl FnOnce(&mut Task),
) -> Result<Store, PlanError> {
    let mut tasks = store.tasks_for(date).to_vec();
    let task = tasks
        .iter_mut()
        .find(|t| t.id == id)
        .ok_or(PlanError::TaskNotFound { date, id })?;
    f(task);
    Ok(store.with_day(date, tasks))
}
