//! Drop event emitted by the drag gesture boundary.

use super::{ColumnId, TaskId};
use serde::{Deserialize, Serialize};

/// A completed drag gesture: which task was dropped where.
///
/// The gesture layer tracks no drag state beyond producing this triple
/// when a drop lands on a column.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DropEvent {
    /// The dragged task.
    pub task_id: TaskId,
    /// Column the drag started in.
    pub source_column_id: ColumnId,
    /// Column the task was dropped on.
    pub target_column_id: ColumnId,
}

impl DropEvent {
    /// Creates a drop event.
    #[must_use]
    pub const fn new(
        task_id: TaskId,
        source_column_id: ColumnId,
        target_column_id: ColumnId,
    ) -> Self {
        Self {
            task_id,
            source_column_id,
            target_column_id,
        }
    }
}
