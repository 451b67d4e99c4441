//! Given steps for todo lifecycle BDD scenarios.

use super::world::{TodoWorld, run_async};
use eyre::WrapErr;
use rstest_bdd_macros::given;
use todos::boundary::CollapsePolicy;
use todos::todo::services::TodoRequest;

#[given("conflicts are reported distinctly")]
fn conflicts_reported_distinctly(world: &mut TodoWorld) {
    world.policy = CollapsePolicy::Distinct;
}

#[given(r#"a user named "{name}""#)]
fn user_named(world: &mut TodoWorld, name: String) -> Result<(), eyre::Report> {
    run_async(world.users.create_user(name)).wrap_err("create user for scenario")?;
    Ok(())
}

#[given(r#"a todo "{title}" for "{person}" with status "{status}""#)]
fn existing_todo(
    world: &mut TodoWorld,
    title: String,
    person: String,
    status: String,
) -> Result<(), eyre::Report> {
    let request = TodoRequest::new(title, "scenario todo", "2021-10-02", person, status);
    let created =
        run_async(world.todos.create_todo(request)).wrap_err("create todo for scenario")?;
    world.snapshot = world.store.record(created.id());
    world.current_todo = Some(created.id());
    Ok(())
}
