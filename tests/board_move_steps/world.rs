//! Shared world state for board move BDD scenarios.

use std::collections::HashMap;
use std::sync::Arc;

use corkboard::board::domain::{Board, ColumnId, TaskId};
use corkboard::board::services::BoardStore;
use corkboard::demo;
use corkboard::notify::adapters::RecordingNotifier;
use mockable::DefaultClock;
use rstest::fixture;

/// Store type used by the BDD world.
pub type DemoStore = BoardStore<DefaultClock, RecordingNotifier>;

/// Scenario world for board move behaviour tests.
pub struct BoardWorld {
    pub store: DemoStore,
    pub task_ids: HashMap<String, TaskId>,
    pub baseline: Option<Vec<Board>>,
}

impl BoardWorld {
    /// Creates a world around the demo store with no tracked tasks.
    #[must_use]
    pub fn new() -> Self {
        let store = demo::sample_store(
            Arc::new(DefaultClock),
            Arc::new(RecordingNotifier::new()),
        )
        .expect("demo store builds");

        Self {
            store,
            task_ids: HashMap::new(),
            baseline: None,
        }
    }

    /// Resolves a tracked task id by the title used to seed it.
    pub fn tracked_task(&self, title: &str) -> Result<TaskId, eyre::Report> {
        self.task_ids
            .get(title)
            .copied()
            .ok_or_else(|| eyre::eyre!("no tracked task titled '{title}' in scenario world"))
    }
}

impl Default for BoardWorld {
    fn default() -> Self {
        Self::new()
    }
}

/// Builds a column identifier from a scenario value.
pub fn column_id(raw: &str) -> Result<ColumnId, eyre::Report> {
    Ok(ColumnId::new(raw)?)
}

/// Fixture that creates a new scenario world.
#[fixture]
pub fn world() -> BoardWorld {
    BoardWorld::default()
}
