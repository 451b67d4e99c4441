//! Repository ports for todo persistence, joined reads, and status lookup.

use crate::todo::domain::{Status, Todo, TodoId, TodoRecord};
use async_trait::async_trait;
use std::sync::Arc;
use thiserror::Error;

/// Result type for todo and status repository operations.
pub type TodoRepositoryResult<T> = Result<T, TodoRepositoryError>;

/// Todo persistence contract.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait TodoRepository: Send + Sync {
    /// Inserts a todo row and returns its store-assigned identifier.
    ///
    /// # Errors
    ///
    /// Returns [`TodoRepositoryError::Persistence`] when the store rejects
    /// the row, including foreign keys that no longer resolve.
    async fn insert(&self, record: &TodoRecord) -> TodoRepositoryResult<TodoId>;

    /// Overwrites all mutable columns of a todo in one statement.
    ///
    /// # Errors
    ///
    /// Returns [`TodoRepositoryError::NotFound`] when no row was affected.
    async fn update(&self, id: TodoId, record: &TodoRecord) -> TodoRepositoryResult<()>;

    /// Removes a todo.
    ///
    /// # Errors
    ///
    /// Returns [`TodoRepositoryError::NotFound`] when no row was affected.
    async fn delete(&self, id: TodoId) -> TodoRepositoryResult<()>;

    /// Reads one todo joined with its user and status.
    ///
    /// Returns `None` when the todo does not exist.
    async fn find_view(&self, id: TodoId) -> TodoRepositoryResult<Option<Todo>>;

    /// Reads every todo joined with its user and status, in store order.
    async fn list_views(&self) -> TodoRepositoryResult<Vec<Todo>>;

    /// Reads the current status of a todo.
    ///
    /// Returns `None` when the todo does not exist.
    async fn find_current_status(&self, id: TodoId) -> TodoRepositoryResult<Option<Status>>;
}

/// Read-only access to the status vocabulary.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait StatusRepository: Send + Sync {
    /// Finds the status whose text matches `text` exactly.
    ///
    /// Returns `None` when the text is not part of the vocabulary.
    async fn find_by_text(&self, text: &str) -> TodoRepositoryResult<Option<Status>>;

    /// Returns the whole vocabulary ordered by code.
    async fn list_vocabulary(&self) -> TodoRepositoryResult<Vec<Status>>;
}

/// Errors returned by todo and status repository implementations.
#[derive(Debug, Clone, Error)]
pub enum TodoRepositoryError {
    /// The todo was not found.
    #[error("todo not found: {0}")]
    NotFound(TodoId),

    /// Persistence-layer failure.
    #[error("persistence error: {0}")]
    Persistence(Arc<dyn std::error::Error + Send + Sync>),
}

impl TodoRepositoryError {
    /// Wraps a persistence error.
    pub fn persistence(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Persistence(Arc::new(err))
    }
}
