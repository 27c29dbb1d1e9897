//! Seed fixtures mirroring the product's demo data.
//!
//! Boards are provisioned externally in this design; these builders
//! provide the demo board, its retag policy, and a ready-made store the
//! way the product seeds a fresh session.

use crate::board::domain::{
    Board, BoardDomainError, BoardId, Column, ColumnId, Tag, TagPolicy, Task, TaskDraft,
};
use crate::board::services::{BoardStore, BoardStoreError};
use crate::notify::Notifier;
use mockable::Clock;
use std::sync::Arc;
use thiserror::Error;

/// Identifier of the demo board.
pub const SAMPLE_BOARD_ID: &str = "board-1";

/// Identifier of the demo "To Do" column.
pub const TODO_COLUMN_ID: &str = "column-1";

/// Identifier of the demo "In Progress" column.
pub const IN_PROGRESS_COLUMN_ID: &str = "column-2";

/// Identifier of the demo "Done" column.
pub const DONE_COLUMN_ID: &str = "column-3";

/// Errors raised while building demo fixtures.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum DemoError {
    /// Domain value construction failed.
    #[error(transparent)]
    Domain(#[from] BoardDomainError),

    /// Store provisioning failed.
    #[error(transparent)]
    Store(#[from] BoardStoreError),
}

fn seeded_task(
    title: &str,
    description: &str,
    tag: Tag,
    clock: &impl Clock,
) -> Result<Task, BoardDomainError> {
    Ok(Task::from_draft(TaskDraft::new(title, description, tag)?, clock))
}

/// Builds the demo board with its three columns and seeded tasks.
///
/// # Errors
///
/// Returns [`BoardDomainError`] when a fixture value fails validation.
pub fn sample_board(clock: &impl Clock) -> Result<Board, BoardDomainError> {
    let todo = Column::with_tasks(
        ColumnId::new(TODO_COLUMN_ID)?,
        "To Do",
        vec![
            seeded_task(
                "Research competitors",
                "Analyze top 5 competitor products",
                Tag::Blue,
                clock,
            )?,
            seeded_task(
                "Design landing page",
                "Create wireframes for homepage",
                Tag::Purple,
                clock,
            )?,
        ],
    );
    let in_progress = Column::with_tasks(
        ColumnId::new(IN_PROGRESS_COLUMN_ID)?,
        "In Progress",
        vec![seeded_task(
            "Implement authentication",
            "Add login/signup functionality",
            Tag::Green,
            clock,
        )?],
    );
    let done = Column::with_tasks(
        ColumnId::new(DONE_COLUMN_ID)?,
        "Done",
        vec![seeded_task(
            "Project setup",
            "Initialize repository and configure tooling",
            Tag::Yellow,
            clock,
        )?],
    );

    Ok(Board::new(
        BoardId::new(SAMPLE_BOARD_ID)?,
        "My First Board",
        vec![todo, in_progress, done],
    ))
}

/// Builds the demo retag policy: to-do columns take blue, in-progress
/// green, done yellow.
///
/// # Errors
///
/// Returns [`BoardDomainError`] when a fixture identifier fails
/// validation.
pub fn default_tag_policy() -> Result<TagPolicy, BoardDomainError> {
    Ok(TagPolicy::from_entries([
        (ColumnId::new(TODO_COLUMN_ID)?, Tag::Blue),
        (ColumnId::new(IN_PROGRESS_COLUMN_ID)?, Tag::Green),
        (ColumnId::new(DONE_COLUMN_ID)?, Tag::Yellow),
    ]))
}

/// Builds a store with the demo board inserted and activated.
///
/// # Errors
///
/// Returns [`DemoError`] when fixture construction or provisioning
/// fails.
pub fn sample_store<C, N>(clock: Arc<C>, notifier: Arc<N>) -> Result<BoardStore<C, N>, DemoError>
where
    C: Clock,
    N: Notifier,
{
    let board = sample_board(clock.as_ref())?;
    let board_id = board.id().clone();
    let mut store = BoardStore::new(default_tag_policy()?, clock, notifier);
    store.insert_board(board)?;
    store.activate(&board_id)?;
    Ok(store)
}
