//! Diesel row models for the todo tracker relations.

use super::schema::{statuses, todos, users};
use chrono::NaiveDate;
use diesel::prelude::*;

/// Query result row for user records.
#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = users)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct UserRow {
    /// Store-assigned user identifier.
    pub user_id: i32,
    /// User name.
    pub name: String,
}

/// Insert model for user records.
#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = users)]
pub struct NewUserRow {
    /// User name.
    pub name: String,
}

/// Query result row for status records.
#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = statuses)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct StatusRow {
    /// Integer status code.
    pub status_id: i32,
    /// Status text.
    pub status_txt: String,
}

/// Insert and changeset model for the mutable todo columns.
#[derive(Debug, Clone, Insertable, AsChangeset)]
#[diesel(table_name = todos)]
pub struct TodoWriteRow {
    /// Todo title.
    pub title: String,
    /// Free-text description.
    pub description: String,
    /// Calendar due date.
    pub due_date: NaiveDate,
    /// Key of the user in charge.
    pub person_in_charge: i32,
    /// Key of the status.
    pub status: i32,
}

/// Result row of the todo ⋈ user ⋈ status projection.
///
/// Field order matches the select clause in the repository.
#[derive(Debug, Clone, Queryable)]
pub struct TodoViewRow {
    /// Todo identifier.
    pub id: i64,
    /// Todo title.
    pub title: String,
    /// Free-text description.
    pub description: String,
    /// Calendar due date.
    pub due_date: NaiveDate,
    /// Name of the joined user.
    pub person_in_charge: String,
    /// Text of the joined status.
    pub status: String,
}
