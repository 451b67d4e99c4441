//! Then steps for todo lifecycle BDD scenarios.

use super::world::TodoWorld;
use rstest_bdd_macros::then;
use todos::boundary::{Outcome, OutcomeClass};

fn last_outcome(world: &TodoWorld) -> Result<Outcome, eyre::Report> {
    world
        .last_outcome
        .ok_or_else(|| eyre::eyre!("missing outcome in scenario world"))
}

#[then("the operation succeeds")]
fn operation_succeeds(world: &TodoWorld) -> Result<(), eyre::Report> {
    let outcome = last_outcome(world)?;
    eyre::ensure!(
        outcome.class() == OutcomeClass::Success,
        "expected success, got {outcome:?}"
    );
    Ok(())
}

#[then("the operation is a conflict")]
fn operation_is_conflict(world: &TodoWorld) -> Result<(), eyre::Report> {
    let outcome = last_outcome(world)?;
    eyre::ensure!(
        outcome.class() == OutcomeClass::Conflict && outcome.status_code() == 409,
        "expected conflict, got {outcome:?}"
    );
    Ok(())
}

#[then(r#"the outcome is "{message}""#)]
fn outcome_is(world: &TodoWorld, message: String) -> Result<(), eyre::Report> {
    let outcome = last_outcome(world)?;
    eyre::ensure!(
        outcome.message() == Some(message.as_str()),
        "expected message {message:?}, got {outcome:?}"
    );
    Ok(())
}

#[then(r#"the todo has status "{status}""#)]
fn todo_has_status(world: &TodoWorld, status: String) -> Result<(), eyre::Report> {
    let todo = world
        .last_todo
        .as_ref()
        .ok_or_else(|| eyre::eyre!("missing returned todo"))?;
    eyre::ensure!(
        todo.status() == status,
        "expected status {status}, found {}",
        todo.status()
    );
    Ok(())
}

#[then("the stored todo has status id {id:i32}")]
fn stored_status_id(world: &TodoWorld, id: i32) -> Result<(), eyre::Report> {
    let record = world
        .store
        .record(world.current_todo()?)
        .ok_or_else(|| eyre::eyre!("todo row missing from store"))?;
    eyre::ensure!(
        record.status.value() == id,
        "expected status id {id}, found {}",
        record.status
    );
    Ok(())
}

#[then("the todo is unchanged")]
fn todo_is_unchanged(world: &TodoWorld) -> Result<(), eyre::Report> {
    let current = world.store.record(world.current_todo()?);
    eyre::ensure!(
        current.is_some() && current == world.snapshot,
        "expected stored row {:?}, found {current:?}",
        world.snapshot
    );
    Ok(())
}

#[then("{count:usize} todos are stored")]
fn todos_stored(world: &TodoWorld, count: usize) -> Result<(), eyre::Report> {
    let stored = world.store.todo_count();
    eyre::ensure!(stored == count, "expected {count} todos, found {stored}");
    Ok(())
}
