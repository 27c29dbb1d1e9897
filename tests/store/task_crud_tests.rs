//! Integration tests for task creation, update, and deletion against
//! the demo board.

use super::helpers::{DemoStore, active_column, column_id, demo_store, task_id_by_title};
use corkboard::board::domain::{Tag, TaskDraft};
use corkboard::demo::{DONE_COLUMN_ID, IN_PROGRESS_COLUMN_ID, TODO_COLUMN_ID};
use corkboard::notify::adapters::RecordingNotifier;
use rstest::rstest;

#[rstest]
fn demo_board_is_seeded_as_provisioned(demo_store: (DemoStore, RecordingNotifier)) {
    let (store, _notifier) = demo_store;

    let board = store.active_board().expect("active board");
    assert_eq!(board.title(), "My First Board");

    let shape: Vec<_> = board
        .columns()
        .iter()
        .map(|column| (column.title(), column.tasks().len()))
        .collect();
    assert_eq!(
        shape,
        vec![("To Do", 2), ("In Progress", 1), ("Done", 1)]
    );
}

#[rstest]
fn added_task_lands_at_the_end_of_its_column(demo_store: (DemoStore, RecordingNotifier)) {
    let (mut store, _notifier) = demo_store;
    let draft = TaskDraft::new("Collect feedback", "Survey the beta cohort", Tag::Pink)
        .expect("valid draft");

    let created = store
        .add_task(&column_id(TODO_COLUMN_ID), draft)
        .expect("task added");

    let todo = active_column(&store, TODO_COLUMN_ID);
    assert_eq!(todo.tasks().len(), 3);
    assert_eq!(todo.tasks().last().map(|task| task.id()), Some(created.id()));
    assert_eq!(created.tag(), Tag::Pink);
}

#[rstest]
fn repeated_drafts_create_distinct_tasks(demo_store: (DemoStore, RecordingNotifier)) {
    let (mut store, _notifier) = demo_store;
    let draft =
        TaskDraft::new("Write changelog", "", Tag::Blue).expect("valid draft");

    let first = store
        .add_task(&column_id(TODO_COLUMN_ID), draft.clone())
        .expect("task added");
    let second = store
        .add_task(&column_id(TODO_COLUMN_ID), draft)
        .expect("task added");

    assert_ne!(first.id(), second.id());
}

#[rstest]
fn updating_a_seeded_task_keeps_its_position(demo_store: (DemoStore, RecordingNotifier)) {
    let (mut store, _notifier) = demo_store;
    let target_id =
        task_id_by_title(&store, "Research competitors").expect("seeded task present");
    let current = active_column(&store, TODO_COLUMN_ID)
        .task(target_id)
        .cloned()
        .expect("task resident in the to-do column");

    store.update_task(
        &column_id(TODO_COLUMN_ID),
        current.with_title("Research the market"),
    );

    let todo = active_column(&store, TODO_COLUMN_ID);
    assert_eq!(todo.tasks().len(), 2);
    assert_eq!(
        todo.tasks().first().map(|task| (task.id(), task.title().to_owned())),
        Some((target_id, "Research the market".to_owned()))
    );
}

#[rstest]
fn deleting_a_seeded_task_removes_it_everywhere(demo_store: (DemoStore, RecordingNotifier)) {
    let (mut store, _notifier) = demo_store;
    let target_id = task_id_by_title(&store, "Project setup").expect("seeded task present");

    store.delete_task(&column_id(DONE_COLUMN_ID), target_id);

    let board = store.active_board().expect("active board");
    assert!(!board.contains_task(target_id));
    assert!(active_column(&store, DONE_COLUMN_ID).tasks().is_empty());
}

#[rstest]
fn mutations_keep_the_collection_entry_in_step(demo_store: (DemoStore, RecordingNotifier)) {
    let (mut store, _notifier) = demo_store;
    let draft = TaskDraft::new("Pair on review", "", Tag::Orange).expect("valid draft");
    store
        .add_task(&column_id(IN_PROGRESS_COLUMN_ID), draft)
        .expect("task added");

    let active_id = store
        .active_board()
        .map(|board| board.id().clone())
        .expect("active board");
    let from_collection = store
        .boards()
        .iter()
        .find(|board| board.id() == &active_id);
    assert_eq!(store.active_board(), from_collection);
}
