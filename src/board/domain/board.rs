//! Board aggregate owning an ordered column list.

use super::{BoardId, Column, ColumnId, TaskId};
use serde::{Deserialize, Serialize};

/// Ordered collection of columns under one board.
///
/// Column order is display order and is preserved by every store
/// operation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Board {
    id: BoardId,
    title: String,
    columns: Vec<Column>,
}

impl Board {
    /// Creates a board from provisioned columns.
    #[must_use]
    pub fn new(id: BoardId, title: impl Into<String>, columns: Vec<Column>) -> Self {
        Self {
            id,
            title: title.into(),
            columns,
        }
    }

    /// Returns the board identifier.
    #[must_use]
    pub const fn id(&self) -> &BoardId {
        &self.id
    }

    /// Returns the display title.
    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Returns the columns in display order.
    #[must_use]
    pub fn columns(&self) -> &[Column] {
        &self.columns
    }

    /// Returns the column with the given id.
    #[must_use]
    pub fn column(&self, column_id: &ColumnId) -> Option<&Column> {
        self.columns.iter().find(|column| column.id() == column_id)
    }

    /// Returns the column currently housing the given task.
    #[must_use]
    pub fn column_of_task(&self, task_id: TaskId) -> Option<&Column> {
        self.columns.iter().find(|column| column.contains(task_id))
    }

    /// Reports whether any column contains the given task id.
    #[must_use]
    pub fn contains_task(&self, task_id: TaskId) -> bool {
        self.column_of_task(task_id).is_some()
    }

    /// Returns a mutable handle to the column with the given id.
    pub(crate) fn column_mut(&mut self, column_id: &ColumnId) -> Option<&mut Column> {
        self.columns
            .iter_mut()
            .find(|column| column.id() == column_id)
    }
}
