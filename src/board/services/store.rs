//! Board store: task CRUD and move operations over the board
//! collection.

use crate::board::domain::{
    Board, BoardId, Column, ColumnId, DropEvent, TagPolicy, Task, TaskDraft, TaskId,
};
use crate::notify::{NotificationKind, Notifier};
use mockable::Clock;
use std::sync::Arc;
use thiserror::Error;

/// Errors returned while provisioning the board collection.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum BoardStoreError {
    /// A board with the same identifier is already present.
    #[error("duplicate board identifier: {0}")]
    DuplicateBoard(BoardId),

    /// No board with the given identifier is present.
    #[error("unknown board identifier: {0}")]
    UnknownBoard(BoardId),
}

/// In-memory board store.
///
/// Keeps one canonical, ordered board collection plus the identifier of
/// the active board, resolved by lookup — there is no mirrored copy of
/// the active board to keep consistent. Task mutators operate on the
/// active board; a mutator referencing a missing board, column, or task
/// is a silent no-op that leaves the store untouched, never a
/// half-applied change.
///
/// All mutation is synchronous through `&mut self`; an embedding that
/// shares the store across writers must serialise access itself.
pub struct BoardStore<C, N>
where
    C: Clock,
    N: Notifier,
{
    boards: Vec<Board>,
    active: Option<BoardId>,
    tag_policy: TagPolicy,
    clock: Arc<C>,
    notifier: Arc<N>,
}

impl<C, N> BoardStore<C, N>
where
    C: Clock,
    N: Notifier,
{
    /// Creates an empty store with no boards and no active board.
    #[must_use]
    pub const fn new(tag_policy: TagPolicy, clock: Arc<C>, notifier: Arc<N>) -> Self {
        Self {
            boards: Vec::new(),
            active: None,
            tag_policy,
            clock,
            notifier,
        }
    }

    /// Returns the provisioned boards in insertion order.
    #[must_use]
    pub fn boards(&self) -> &[Board] {
        &self.boards
    }

    /// Returns the move retag policy.
    #[must_use]
    pub const fn tag_policy(&self) -> &TagPolicy {
        &self.tag_policy
    }

    /// Returns the active board, if one has been activated.
    ///
    /// The returned board is the collection entry itself.
    #[must_use]
    pub fn active_board(&self) -> Option<&Board> {
        let active = self.active.as_ref()?;
        self.boards.iter().find(|board| board.id() == active)
    }

    /// Adds a board to the collection.
    ///
    /// # Errors
    ///
    /// Returns [`BoardStoreError::DuplicateBoard`] when a board with
    /// the same identifier is already present.
    pub fn insert_board(&mut self, board: Board) -> Result<(), BoardStoreError> {
        if self.boards.iter().any(|existing| existing.id() == board.id()) {
            return Err(BoardStoreError::DuplicateBoard(board.id().clone()));
        }
        self.boards.push(board);
        Ok(())
    }

    /// Makes the given board the active one.
    ///
    /// # Errors
    ///
    /// Returns [`BoardStoreError::UnknownBoard`] when the identifier
    /// names no collection entry; the previous activation is kept.
    pub fn activate(&mut self, board_id: &BoardId) -> Result<(), BoardStoreError> {
        if !self.boards.iter().any(|board| board.id() == board_id) {
            return Err(BoardStoreError::UnknownBoard(board_id.clone()));
        }
        self.active = Some(board_id.clone());
        Ok(())
    }

    /// Creates a task from the draft and appends it to the end of the
    /// given column of the active board.
    ///
    /// Returns the stored task. Returns `None` — with no notification
    /// and no state change — when there is no active board or the
    /// column is unknown.
    pub fn add_task(&mut self, column_id: &ColumnId, draft: TaskDraft) -> Option<Task> {
        let clock = Arc::clone(&self.clock);
        let notifier = Arc::clone(&self.notifier);
        let column = self.active_column_mut(column_id)?;
        let task = Task::from_draft(draft, clock.as_ref());
        column.push_task(task.clone());
        tracing::debug!("added task {} to column {column_id}", task.id());
        notifier.notify(NotificationKind::Success, "Task added successfully");
        Some(task)
    }

    /// Replaces the task sharing the replacement's id within the given
    /// column of the active board, keeping its list position.
    ///
    /// Silent no-op when there is no active board, the column is
    /// unknown, or no resident task shares the id.
    pub fn update_task(&mut self, column_id: &ColumnId, task: Task) {
        let notifier = Arc::clone(&self.notifier);
        let task_id = task.id();
        let Some(column) = self.active_column_mut(column_id) else {
            return;
        };
        if column.replace_task(task) {
            tracing::debug!("updated task {task_id} in column {column_id}");
            notifier.notify(NotificationKind::Success, "Task updated successfully");
        }
    }

    /// Removes the task with the given id from the given column of the
    /// active board.
    ///
    /// Silent no-op when nothing matches.
    pub fn delete_task(&mut self, column_id: &ColumnId, task_id: TaskId) {
        let notifier = Arc::clone(&self.notifier);
        let Some(column) = self.active_column_mut(column_id) else {
            return;
        };
        if column.remove_task(task_id).is_some() {
            tracing::debug!("deleted task {task_id} from column {column_id}");
            notifier.notify(NotificationKind::Success, "Task deleted successfully");
        }
    }

    /// Moves a task between columns of the active board, appending it
    /// to the destination's end.
    ///
    /// The task and both columns are resolved before anything is
    /// touched, so a failed lookup at any stage leaves the store
    /// unchanged. A cross-column move reassigns the task's tag from the
    /// policy table entry for the destination (columns without an entry
    /// keep the tag); a same-column move re-appends the task with its
    /// tag untouched.
    pub fn move_task(&mut self, from_column_id: &ColumnId, to_column_id: &ColumnId, task_id: TaskId) {
        let destination_tag = if from_column_id == to_column_id {
            None
        } else {
            self.tag_policy.tag_for(to_column_id)
        };
        let notifier = Arc::clone(&self.notifier);
        let Some(board) = self.active_board_mut() else {
            return;
        };

        // Resolve the full move before mutating either column.
        let Some(task) = board
            .column(from_column_id)
            .and_then(|column| column.task(task_id))
            .cloned()
        else {
            return;
        };
        if board.column(to_column_id).is_none() {
            return;
        }

        let moved = match destination_tag {
            Some(tag) => task.with_tag(tag),
            None => task,
        };
        if let Some(source) = board.column_mut(from_column_id) {
            source.remove_task(task_id);
        }
        if let Some(destination) = board.column_mut(to_column_id) {
            destination.push_task(moved);
        }

        tracing::debug!("moved task {task_id} from column {from_column_id} to column {to_column_id}");
        notifier.notify(NotificationKind::Success, "Task moved successfully");
    }

    /// Applies a drop event from the gesture boundary.
    ///
    /// A cross-column drop delegates to [`Self::move_task`]; a drop
    /// back onto the source column is ignored, mirroring the gesture
    /// layer's contract of only reporting cross-column drops.
    pub fn apply_drop(&mut self, event: &DropEvent) {
        if event.source_column_id == event.target_column_id {
            return;
        }
        self.move_task(
            &event.source_column_id,
            &event.target_column_id,
            event.task_id,
        );
    }

    fn active_board_mut(&mut self) -> Option<&mut Board> {
        let active = self.active.clone()?;
        self.boards.iter_mut().find(move |board| *board.id() == active)
    }

    fn active_column_mut(&mut self, column_id: &ColumnId) -> Option<&mut Column> {
        self.active_board_mut()?.column_mut(column_id)
    }
}
