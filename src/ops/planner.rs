//! The planner state machine: selected date, draft text and the in-progress
//! edit, layered over the pure store transitions in [`super::store_ops`].

use chrono::NaiveDate;
use tracing::debug;

use super::store_ops::{self, PlanError};
use crate::model::store::Store;
use crate::model::task::{IdSource, Task, TaskId};

/// Everything the planner component owns
#[derive(Debug, Clone, Default)]
pub struct Planner {
    store: Store,
    selected: Option<NaiveDate>,
    draft: String,
    editing: Option<TaskId>,
    ids: IdSource,
    keep_draft_on_delete: bool,
}

impl Planner {
    pub fn new() -> Self {
        Planner::default()
    }

    /// When set, deleting a task leaves the draft and editing id alone
    pub fn keep_draft_on_delete(mut self, keep: bool) -> Self {
        self.keep_draft_on_delete = keep;
        self
    }

    pub fn store(&self) -> &Store {
        &self.store
    }

    pub fn selected_date(&self) -> Option<NaiveDate> {
        self.selected
    }

    pub fn draft(&self) -> &str {
        &self.draft
    }

    /// Mutable access to the draft for in-place text editing
    pub fn draft_mut(&mut self) -> &mut String {
        &mut self.draft
    }

    pub fn editing_id(&self) -> Option<TaskId> {
        self.editing
    }

    pub fn is_editing(&self) -> bool {
        self.editing.is_some()
    }

    /// Tasks for the selected date (empty when nothing is selected)
    pub fn visible_tasks(&self) -> &[Task] {
        match self.selected {
            Some(date) => self.store.tasks_for(date),
            None => &[],
        }
    }

    // -----------------------------------------------------------------------
    // Selection and draft
    // -----------------------------------------------------------------------

    /// Change the selected date. Draft and edit state are left as they are.
    pub fn select_date(&mut self, date: Option<NaiveDate>) {
        self.selected = date;
    }

    pub fn set_draft(&mut self, text: impl Into<String>) {
        self.draft = text.into();
    }

    // -----------------------------------------------------------------------
    // Task operations
    // -----------------------------------------------------------------------

    /// Add the draft as a new task on the selected date and clear the draft
    pub fn add_task(&mut self) -> Result<TaskId, PlanError> {
        let date = self.selected.ok_or(PlanError::NoDateSelected)?;
        if self.draft.trim().is_empty() {
            return Err(PlanError::EmptyText);
        }
        let id = self.ids.next_id();
        let task = Task::new(id, std::mem::take(&mut self.draft), date);
        self.store = store_ops::add_task(&self.store, task);
        debug!(%date, %id, "task added");
        Ok(id)
    }

    /// Load a task of the selected date into the draft and mark it as being edited
    pub fn begin_edit(&mut self, id: TaskId) -> Result<(), PlanError> {
        let date = self.selected.ok_or(PlanError::NoDateSelected)?;
        let task = self
            .store
            .find(date, id)
            .ok_or(PlanError::TaskNotFound { date, id })?;
        self.draft = task.text.clone();
        self.editing = Some(id);
        debug!(%date, %id, "edit started");
        Ok(())
    }

    /// Write the draft back into the task being edited.
    ///
    /// Once the guards pass, the draft and editing id are cleared even if the
    /// task is no longer on the selected date.
    pub fn commit_edit(&mut self) -> Result<(), PlanError> {
        let date = self.selected.ok_or(PlanError::NoDateSelected)?;
        if self.draft.trim().is_empty() {
            return Err(PlanError::EmptyText);
        }
        let id = self.editing.ok_or(PlanError::NotEditing)?;

        let result = store_ops::update_text(&self.store, date, id, &self.draft);
        self.draft.clear();
        self.editing = None;
        self.store = result?;
        debug!(%date, %id, "task updated");
        Ok(())
    }

    /// Drop the in-progress edit along with its draft
    pub fn cancel_edit(&mut self) {
        if self.editing.take().is_some() {
            self.draft.clear();
        }
    }

    /// Add when no edit is in progress, otherwise commit the edit
    pub fn submit(&mut self) -> Result<(), PlanError> {
        if self.is_editing() {
            self.commit_edit()
        } else {
            self.add_task().map(|_| ())
        }
    }

    /// Remove a task from `date` (not necessarily the selected date).
    ///
    /// Clears the draft and any in-progress edit, whichever task was deleted,
    /// unless the planner was built with `keep_draft_on_delete`.
    pub fn delete_task(&mut self, date: NaiveDate, id: TaskId) -> Result<(), PlanError> {
        let result = store_ops::delete_task(&self.store, date, id);
        if !self.keep_draft_on_delete {
            self.draft.clear();
            self.editing = None;
        } else if self.editing == Some(id) && result.is_ok() {
            self.draft.clear();
            self.editing = None;
        }
        self.store = result?;
        debug!(%date, %id, "task deleted");
        Ok(())
    }

    /// Flip a task's done flag. Draft and edit state are untouched.
    pub fn toggle_done(&mut self, date: NaiveDate, id: TaskId) -> Result<(), PlanError> {
        self.store = store_ops::toggle_done(&self.store, date, id)?;
        debug!(%date, %id, "task toggled");
        Ok(())
    }

    /// Move a task from `from` to the end of `to`
    pub fn move_task(
        &mut self,
        from: NaiveDate,
        id: TaskId,
        to: NaiveDate,
    ) -> Result<(), PlanError> {
        self.store = store_ops::move_task(&self.store, from, id, to)?;
        debug!(%from, %to, %id, "task moved");
        Ok(())
    }
}
