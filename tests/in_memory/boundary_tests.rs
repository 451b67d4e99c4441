//! Outcome classification of real service results.

use super::helpers::{App, app, todo_request};
use rstest::rstest;
use todos::boundary::{self, CollapsePolicy, Outcome, OutcomeClass};
use todos::todo::domain::TodoId;
use todos::user::domain::UserId;

async fn done_todo(app: &App) -> TodoId {
    app.users
        .create_user("dwi")
        .await
        .expect("user creation should succeed");
    app.todos
        .create_todo(todo_request("dwi", "Done"))
        .await
        .expect("todo creation should succeed")
        .id()
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn terminal_update_collapses_to_not_found_by_default(app: App) {
    let id = done_todo(&app).await;

    let err = app
        .todos
        .update_todo(id, todo_request("dwi", "New"))
        .await
        .expect_err("terminal todo must refuse updates");
    let outcome = Outcome::from_todo_error(&err, CollapsePolicy::default());

    assert_eq!(outcome.class(), OutcomeClass::NotFound);
    assert_eq!(outcome.status_code(), 404);
    assert_eq!(outcome.message(), Some(boundary::TERMINAL_STATUS));
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn terminal_update_is_conflict_under_distinct_policy(app: App) {
    let id = done_todo(&app).await;

    let err = app
        .todos
        .update_todo(id, todo_request("dwi", "New"))
        .await
        .expect_err("terminal todo must refuse updates");
    let outcome = Outcome::from_todo_error(&err, CollapsePolicy::Distinct);

    assert_eq!(outcome.class(), OutcomeClass::Conflict);
    assert_eq!(outcome.class().exit_code(), 3);
}

#[rstest]
#[case::unknown_user(todo_request("nobody", "New"), boundary::USER_NOT_FOUND)]
#[case::unknown_status(todo_request("dwi", "Bogus"), boundary::STATUS_NOT_FOUND)]
#[tokio::test(flavor = "multi_thread")]
async fn unresolved_references_on_update_name_the_reference(
    app: App,
    #[case] request: todos::todo::services::TodoRequest,
    #[case] message: &str,
) {
    app.users
        .create_user("dwi")
        .await
        .expect("user creation should succeed");
    let id = app
        .todos
        .create_todo(todo_request("dwi", "New"))
        .await
        .expect("todo creation should succeed")
        .id();

    let err = app
        .todos
        .update_todo(id, request)
        .await
        .expect_err("unresolved reference must fail");

    assert_eq!(
        Outcome::from_todo_error(&err, CollapsePolicy::Reference).message(),
        Some(message)
    );
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn user_in_use_is_a_server_error(app: App) {
    done_todo(&app).await;

    let err = app
        .users
        .delete_user(UserId::new(1))
        .await
        .expect_err("referenced user must not be deleted");
    let outcome = Outcome::from_user_error(&err);

    assert_eq!(outcome.class(), OutcomeClass::ServerError);
    assert_eq!(outcome.message(), Some(boundary::INTERNAL_SERVER_ERROR));
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn empty_listings_are_data_not_found(app: App) {
    let todos_err = app.todos.list_todos().await.expect_err("no todos yet");
    let users_err = app.users.list_users().await.expect_err("no users yet");

    assert_eq!(
        Outcome::from_todo_error(&todos_err, CollapsePolicy::Reference).message(),
        Some(boundary::DATA_NOT_FOUND)
    );
    assert_eq!(
        Outcome::from_user_error(&users_err).message(),
        Some(boundary::DATA_NOT_FOUND)
    );
}
