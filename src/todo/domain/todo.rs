//! Todo projection entity and the foreign-key record written to the store.

use super::{DueDate, StatusId, TodoId};
use crate::user::domain::UserId;
use serde::{Deserialize, Serialize};

/// A todo as returned to callers.
///
/// The person in charge and the status are carried by their human-readable
/// text: the user name and the status text of the joined rows on reads, or
/// the values echoed from the request on writes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Todo {
    id: TodoId,
    title: String,
    description: String,
    due_date: DueDate,
    person_in_charge: String,
    status: String,
}

/// Parameter object for assembling a [`Todo`] from a joined row or from
/// echoed request fields.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectedTodoData {
    /// Todo identifier.
    pub id: TodoId,
    /// Todo title.
    pub title: String,
    /// Todo description.
    pub description: String,
    /// Todo due date.
    pub due_date: DueDate,
    /// Name of the user in charge.
    pub person_in_charge: String,
    /// Status text.
    pub status: String,
}

impl Todo {
    /// Assembles a todo from projected data.
    #[must_use]
    pub fn from_projection(data: ProjectedTodoData) -> Self {
        Self {
            id: data.id,
            title: data.title,
            description: data.description,
            due_date: data.due_date,
            person_in_charge: data.person_in_charge,
            status: data.status,
        }
    }

    /// Returns the todo identifier.
    #[must_use]
    pub const fn id(&self) -> TodoId {
        self.id
    }

    /// Returns the title.
    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Returns the description.
    #[must_use]
    pub fn description(&self) -> &str {
        &self.description
    }

    /// Returns the due date.
    #[must_use]
    pub const fn due_date(&self) -> DueDate {
        self.due_date
    }

    /// Returns the name of the user in charge.
    #[must_use]
    pub fn person_in_charge(&self) -> &str {
        &self.person_in_charge
    }

    /// Returns the status text.
    #[must_use]
    pub fn status(&self) -> &str {
        &self.status
    }
}

/// The five mutable columns of a todo row, with references resolved to
/// foreign keys.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TodoRecord {
    /// Todo title.
    pub title: String,
    /// Todo description.
    pub description: String,
    /// Todo due date.
    pub due_date: DueDate,
    /// Key of the user in charge.
    pub person_in_charge: UserId,
    /// Key of the status.
    pub status: StatusId,
}
