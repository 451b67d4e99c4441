//! Service layer for todo creation, retrieval, update, and deletion.
//!
//! Writes resolve every reference before touching the store, so a failed
//! resolution never leaves a partial write behind. Updates are refused
//! outright while a todo sits in a terminal status.

use super::lookup::{LookupError, LookupResolver};
use crate::todo::{
    domain::{DueDate, ProjectedTodoData, Status, Todo, TodoDomainError, TodoId, TodoRecord},
    ports::{StatusRepository, TodoRepository, TodoRepositoryError},
};
use crate::user::ports::UserRepository;
use std::sync::Arc;
use thiserror::Error;

/// Request payload shared by todo creation and update.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TodoRequest {
    title: String,
    description: String,
    due_date: String,
    person_in_charge: String,
    status: String,
}

impl TodoRequest {
    /// Creates a request from the five caller-supplied fields.
    ///
    /// `person_in_charge` is a user name and `status` a status text; both
    /// are resolved to foreign keys by the service.
    #[must_use]
    pub fn new(
        title: impl Into<String>,
        description: impl Into<String>,
        due_date: impl Into<String>,
        person_in_charge: impl Into<String>,
        status: impl Into<String>,
    ) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
            due_date: due_date.into(),
            person_in_charge: person_in_charge.into(),
            status: status.into(),
        }
    }

    /// Replaces the title.
    #[must_use]
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    /// Replaces the person in charge.
    #[must_use]
    pub fn with_person_in_charge(mut self, person_in_charge: impl Into<String>) -> Self {
        self.person_in_charge = person_in_charge.into();
        self
    }
}

/// Service-level errors for todo lifecycle operations.
#[derive(Debug, Error)]
pub enum TodoLifecycleError {
    /// Domain validation failed.
    #[error(transparent)]
    Domain(#[from] TodoDomainError),

    /// The todo does not exist.
    #[error("todo not found: {0}")]
    TodoNotFound(TodoId),

    /// No todo is recorded at all.
    #[error("no todos recorded")]
    NoTodos,

    /// The todo is in a terminal status and cannot be updated.
    #[error("todo {id} is {status} and can no longer be updated")]
    Conflict {
        /// Todo that was targeted.
        id: TodoId,
        /// Terminal status it is in.
        status: String,
    },

    /// A user name or status text did not resolve.
    #[error(transparent)]
    Lookup(#[from] LookupError),

    /// Repository operation failed.
    #[error(transparent)]
    Repository(TodoRepositoryError),
}

impl From<TodoRepositoryError> for TodoLifecycleError {
    fn from(err: TodoRepositoryError) -> Self {
        match err {
            TodoRepositoryError::NotFound(id) => Self::TodoNotFound(id),
            other => Self::Repository(other),
        }
    }
}

/// Result type for todo lifecycle service operations.
pub type TodoLifecycleResult<T> = Result<T, TodoLifecycleError>;

/// Todo lifecycle orchestration service.
#[derive(Clone)]
pub struct TodoLifecycleService<T, U, S>
where
    T: TodoRepository,
    U: UserRepository,
    S: StatusRepository,
{
    todos: Arc<T>,
    resolver: LookupResolver<U, S>,
}

impl<St> TodoLifecycleService<St, St, St>
where
    St: TodoRepository + UserRepository + StatusRepository,
{
    /// Creates a service whose three ports are served by one store.
    #[must_use]
    pub fn from_store(store: Arc<St>) -> Self {
        Self::new(Arc::clone(&store), Arc::clone(&store), store)
    }
}

impl<T, U, S> TodoLifecycleService<T, U, S>
where
    T: TodoRepository,
    U: UserRepository,
    S: StatusRepository,
{
    /// Creates a new todo lifecycle service.
    #[must_use]
    pub const fn new(todos: Arc<T>, users: Arc<U>, statuses: Arc<S>) -> Self {
        Self {
            todos,
            resolver: LookupResolver::new(users, statuses),
        }
    }

    /// Lists every todo with its user name and status text.
    ///
    /// # Errors
    ///
    /// Returns [`TodoLifecycleError::NoTodos`] when no todo exists, or
    /// [`TodoLifecycleError::Repository`] when the read fails.
    pub async fn list_todos(&self) -> TodoLifecycleResult<Vec<Todo>> {
        let todos = self.todos.list_views().await?;
        if todos.is_empty() {
            return Err(TodoLifecycleError::NoTodos);
        }
        Ok(todos)
    }

    /// Retrieves one todo with its user name and status text.
    ///
    /// # Errors
    ///
    /// Returns [`TodoLifecycleError::TodoNotFound`] when the todo does not
    /// exist.
    pub async fn get_todo(&self, id: TodoId) -> TodoLifecycleResult<Todo> {
        self.todos
            .find_view(id)
            .await?
            .ok_or(TodoLifecycleError::TodoNotFound(id))
    }

    /// Creates a todo.
    ///
    /// The returned todo echoes the caller's `person_in_charge` and carries
    /// the resolved status text, which is "New" when the requested status
    /// is unknown.
    ///
    /// # Errors
    ///
    /// Returns [`TodoLifecycleError::Lookup`] when the user is unknown,
    /// [`TodoLifecycleError::Domain`] for an invalid due date, or
    /// [`TodoLifecycleError::Repository`] when the insert fails. An unknown
    /// user is reported ahead of an invalid due date.
    pub async fn create_todo(&self, request: TodoRequest) -> TodoLifecycleResult<Todo> {
        let TodoRequest {
            title,
            description,
            due_date,
            person_in_charge,
            status,
        } = request;

        let user = self.resolver.resolve_user(&person_in_charge).await?;
        let parsed_due_date = DueDate::parse(&due_date)?;
        let resolved_status = self
            .resolver
            .resolve_status_for_create(&status)
            .await?
            .into_status();

        let record = TodoRecord {
            title,
            description,
            due_date: parsed_due_date,
            person_in_charge: user.id(),
            status: resolved_status.id(),
        };
        let id = self.todos.insert(&record).await?;
        tracing::debug!(todo_id = %id, status = resolved_status.text(), "todo created");

        Ok(echo(id, record, person_in_charge, &resolved_status))
    }

    /// Overwrites every mutable field of a todo.
    ///
    /// Nothing is written when the todo is in a terminal status or when any
    /// reference fails to resolve.
    ///
    /// # Errors
    ///
    /// Returns [`TodoLifecycleError::TodoNotFound`] when the todo does not
    /// exist, [`TodoLifecycleError::Conflict`] when it is "Done" or
    /// "Deleted", [`TodoLifecycleError::Lookup`] when the user or status is
    /// unknown, [`TodoLifecycleError::Domain`] for an invalid due date, or
    /// [`TodoLifecycleError::Repository`] when the write fails.
    pub async fn update_todo(&self, id: TodoId, request: TodoRequest) -> TodoLifecycleResult<Todo> {
        let current = self
            .todos
            .find_current_status(id)
            .await?
            .ok_or(TodoLifecycleError::TodoNotFound(id))?;
        if current.is_terminal() {
            tracing::warn!(todo_id = %id, status = current.text(), "update refused on terminal todo");
            return Err(TodoLifecycleError::Conflict {
                id,
                status: current.text().to_owned(),
            });
        }

        let TodoRequest {
            title,
            description,
            due_date,
            person_in_charge,
            status,
        } = request;

        let user = self.resolver.resolve_user(&person_in_charge).await?;
        let parsed_due_date = DueDate::parse(&due_date)?;
        let new_status = self.resolver.resolve_status_for_update(&status).await?;

        let record = TodoRecord {
            title,
            description,
            due_date: parsed_due_date,
            person_in_charge: user.id(),
            status: new_status.id(),
        };
        self.todos.update(id, &record).await?;
        tracing::debug!(todo_id = %id, status = new_status.text(), "todo updated");

        Ok(echo(id, record, person_in_charge, &new_status))
    }

    /// Deletes a todo regardless of its status.
    ///
    /// # Errors
    ///
    /// Returns [`TodoLifecycleError::TodoNotFound`] when the todo does not
    /// exist.
    pub async fn delete_todo(&self, id: TodoId) -> TodoLifecycleResult<()> {
        self.todos.delete(id).await?;
        tracing::debug!(todo_id = %id, "todo deleted");
        Ok(())
    }

    /// Returns the status vocabulary.
    ///
    /// # Errors
    ///
    /// Returns [`TodoLifecycleError::Lookup`] when the read fails.
    pub async fn list_statuses(&self) -> TodoLifecycleResult<Vec<Status>> {
        Ok(self.resolver.list_statuses().await?)
    }
}

/// Builds the todo returned by a write from what was written, keeping the
/// caller's user name rather than re-reading the user row. The due date is
/// the parsed one, so it comes back in `YYYY-MM-DD` form.
fn echo(id: TodoId, record: TodoRecord, person_in_charge: String, status: &Status) -> Todo {
    Todo::from_projection(ProjectedTodoData {
        id,
        title: record.title,
        description: record.description,
        due_date: record.due_date,
        person_in_charge,
        status: status.text().to_owned(),
    })
}
