//! Column aggregate owning an ordered task list.

use super::{ColumnId, Task, TaskId};
use serde::{Deserialize, Serialize};

/// Ordered task container within a board.
///
/// A column exclusively owns its tasks: a task resides in exactly one
/// column at any instant, and task order is insertion order unless a
/// move explicitly re-homes an entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Column {
    id: ColumnId,
    title: String,
    tasks: Vec<Task>,
}

impl Column {
    /// Creates an empty column.
    #[must_use]
    pub fn new(id: ColumnId, title: impl Into<String>) -> Self {
        Self {
            id,
            title: title.into(),
            tasks: Vec::new(),
        }
    }

    /// Creates a column seeded with provisioned tasks.
    #[must_use]
    pub fn with_tasks(id: ColumnId, title: impl Into<String>, tasks: Vec<Task>) -> Self {
        Self {
            id,
            title: title.into(),
            tasks,
        }
    }

    /// Returns the column identifier.
    #[must_use]
    pub const fn id(&self) -> &ColumnId {
        &self.id
    }

    /// Returns the display title.
    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Returns the tasks in insertion order.
    #[must_use]
    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    /// Returns the resident task with the given id.
    #[must_use]
    pub fn task(&self, task_id: TaskId) -> Option<&Task> {
        self.tasks.iter().find(|task| task.id() == task_id)
    }

    /// Reports whether a task with the given id resides here.
    #[must_use]
    pub fn contains(&self, task_id: TaskId) -> bool {
        self.task(task_id).is_some()
    }

    /// Appends a task at the end of the list.
    pub(crate) fn push_task(&mut self, task: Task) {
        self.tasks.push(task);
    }

    /// Replaces the resident task sharing the replacement's id, keeping
    /// its list position. Returns whether a replacement happened.
    pub(crate) fn replace_task(&mut self, task: Task) -> bool {
        let task_id = task.id();
        let slot = self
            .tasks
            .iter_mut()
            .find(|existing| existing.id() == task_id);
        match slot {
            Some(existing) => {
                *existing = task;
                true
            }
            None => false,
        }
    }

    /// Removes and returns the resident task with the given id.
    pub(crate) fn remove_task(&mut self, task_id: TaskId) -> Option<Task> {
        let index = self.tasks.iter().position(|task| task.id() == task_id)?;
        Some(self.tasks.remove(index))
    }
}
