//! When steps for todo lifecycle BDD scenarios.

use super::world::{TodoWorld, run_async};
use rstest_bdd_macros::when;
use todos::boundary::Outcome;
use todos::todo::services::TodoRequest;

#[when(r#"a todo "{title}" due "{due_date}" is created for "{person}" with status "{status}""#)]
fn create_todo(
    world: &mut TodoWorld,
    title: String,
    due_date: String,
    person: String,
    status: String,
) {
    let request = TodoRequest::new(title, "scenario todo", due_date, person, status);
    let result = run_async(world.todos.create_todo(request));
    world.record_todo_result(result);
}

#[when(r#"the todo is updated to title "{title}" with status "{status}""#)]
fn update_todo(world: &mut TodoWorld, title: String, status: String) -> Result<(), eyre::Report> {
    let id = world.current_todo()?;
    let request = TodoRequest::new(title, "updated", "2022-01-31", "dwi", status);
    let result = run_async(world.todos.update_todo(id, request));
    world.record_todo_result(result);
    Ok(())
}

#[when("the todo is deleted")]
fn delete_todo(world: &mut TodoWorld) -> Result<(), eyre::Report> {
    let id = world.current_todo()?;
    let outcome = match run_async(world.todos.delete_todo(id)) {
        Ok(()) => Outcome::deleted(),
        Err(err) => Outcome::from_todo_error(&err, world.policy),
    };
    world.last_outcome = Some(outcome);
    Ok(())
}

#[when("the todos are listed")]
fn list_todos(world: &mut TodoWorld) {
    let outcome = match run_async(world.todos.list_todos()) {
        Ok(_) => Outcome::success(),
        Err(err) => Outcome::from_todo_error(&err, world.policy),
    };
    world.last_outcome = Some(outcome);
}
