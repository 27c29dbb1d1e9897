//! Shared test helpers for board store integration tests.

use corkboard::board::domain::{Column, ColumnId, TaskId};
use corkboard::board::services::BoardStore;
use corkboard::demo;
use corkboard::notify::adapters::RecordingNotifier;
use mockable::DefaultClock;
use rstest::fixture;
use std::sync::Arc;

/// Store type exercised by the integration suite.
pub type DemoStore = BoardStore<DefaultClock, RecordingNotifier>;

/// Provides the demo store plus a handle on its notification record.
#[fixture]
pub fn demo_store() -> (DemoStore, RecordingNotifier) {
    let notifier = RecordingNotifier::new();
    let store = demo::sample_store(Arc::new(DefaultClock), Arc::new(notifier.clone()))
        .expect("demo store builds");
    (store, notifier)
}

/// Builds a column identifier from a raw string.
pub fn column_id(raw: &str) -> ColumnId {
    ColumnId::new(raw).expect("valid column id")
}

/// Returns a clone of the named column of the active board.
pub fn active_column(store: &DemoStore, raw_id: &str) -> Column {
    store
        .active_board()
        .and_then(|board| board.column(&column_id(raw_id)))
        .cloned()
        .expect("column present on the active board")
}

/// Finds a task id on the active board by its title.
pub fn task_id_by_title(store: &DemoStore, title: &str) -> Option<TaskId> {
    store.active_board().and_then(|board| {
        board
            .columns()
            .iter()
            .flat_map(|column| column.tasks())
            .find(|task| task.title() == title)
            .map(|task| task.id())
    })
}
