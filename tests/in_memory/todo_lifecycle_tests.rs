//! In-memory integration tests for the todo lifecycle across both services.

use super::helpers::{App, app, todo_request};
use rstest::rstest;
use todos::todo::services::{LookupError, TodoLifecycleError};

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn renamed_user_shows_up_in_joined_reads(app: App) {
    let user = app
        .users
        .create_user("dwi")
        .await
        .expect("user creation should succeed");
    let created = app
        .todos
        .create_todo(todo_request("dwi", "New"))
        .await
        .expect("todo creation should succeed");

    app.users
        .rename_user(user.id(), "dwi santoso")
        .await
        .expect("rename should succeed");
    let fetched = app
        .todos
        .get_todo(created.id())
        .await
        .expect("lookup should succeed");

    assert_eq!(created.person_in_charge(), "dwi");
    assert_eq!(fetched.person_in_charge(), "dwi santoso");
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn old_name_no_longer_resolves_after_rename(app: App) {
    let user = app
        .users
        .create_user("dwi")
        .await
        .expect("user creation should succeed");
    app.users
        .rename_user(user.id(), "ana")
        .await
        .expect("rename should succeed");

    let result = app.todos.create_todo(todo_request("dwi", "New")).await;

    assert!(matches!(
        result,
        Err(TodoLifecycleError::Lookup(LookupError::UserNotFound(_)))
    ));
    assert_eq!(app.store.todo_count(), 0);
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn user_can_be_deleted_once_their_todos_are_gone(app: App) {
    let user = app
        .users
        .create_user("dwi")
        .await
        .expect("user creation should succeed");
    let todo = app
        .todos
        .create_todo(todo_request("dwi", "Done"))
        .await
        .expect("todo creation should succeed");

    assert!(app.users.delete_user(user.id()).await.is_err());
    app.todos
        .delete_todo(todo.id())
        .await
        .expect("terminal todos can still be deleted");
    app.users
        .delete_user(user.id())
        .await
        .expect("unreferenced user can be deleted");
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn full_lifecycle_from_new_to_done(app: App) {
    app.users
        .create_user("dwi")
        .await
        .expect("user creation should succeed");
    let created = app
        .todos
        .create_todo(todo_request("dwi", "New"))
        .await
        .expect("todo creation should succeed");

    for status in ["In Progress", "Done"] {
        app.todos
            .update_todo(created.id(), todo_request("dwi", status))
            .await
            .expect("open todos accept updates");
    }
    let reopen = app
        .todos
        .update_todo(created.id(), todo_request("dwi", "New"))
        .await;
    let listed = app.todos.list_todos().await.expect("listing should succeed");

    assert!(matches!(reopen, Err(TodoLifecycleError::Conflict { .. })));
    assert_eq!(listed.len(), 1);
    assert_eq!(listed.first().map(|todo| todo.status()), Some("Done"));
}
