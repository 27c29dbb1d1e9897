//! Given steps for board move BDD scenarios.

use super::world::{BoardWorld, column_id};
use corkboard::board::domain::{Tag, TaskDraft};
use rstest_bdd_macros::given;

#[given("the demo board is active")]
fn demo_board_is_active(world: &mut BoardWorld) -> Result<(), eyre::Report> {
    eyre::ensure!(
        world.store.active_board().is_some(),
        "the demo board must be active"
    );
    Ok(())
}

#[given(r#"a task "{title}" tagged "{tag}" in column "{column}""#)]
fn seeded_task(
    world: &mut BoardWorld,
    title: String,
    tag: String,
    column: String,
) -> Result<(), eyre::Report> {
    let parsed_tag = Tag::try_from(tag.as_str())
        .map_err(|err| eyre::eyre!("invalid tag in scenario: {err}"))?;
    let draft = TaskDraft::new(title.clone(), "", parsed_tag)?;
    let created = world
        .store
        .add_task(&column_id(&column)?, draft)
        .ok_or_else(|| eyre::eyre!("column '{column}' not found on the demo board"))?;
    world.task_ids.insert(title, created.id());
    Ok(())
}
