//! Repository port for user persistence and lookup.

use crate::user::domain::{User, UserId, UserName};
use async_trait::async_trait;
use std::sync::Arc;
use thiserror::Error;

/// Result type for user repository operations.
pub type UserRepositoryResult<T> = Result<T, UserRepositoryError>;

/// User persistence contract.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Inserts a new user and returns it with its store-assigned identifier.
    async fn create(&self, name: &UserName) -> UserRepositoryResult<User>;

    /// Replaces the name of an existing user.
    ///
    /// # Errors
    ///
    /// Returns [`UserRepositoryError::NotFound`] when no row was affected.
    async fn rename(&self, id: UserId, name: &UserName) -> UserRepositoryResult<()>;

    /// Removes a user.
    ///
    /// # Errors
    ///
    /// Returns [`UserRepositoryError::NotFound`] when no row was affected or
    /// [`UserRepositoryError::InUse`] when todos still reference the user.
    async fn remove(&self, id: UserId) -> UserRepositoryResult<()>;

    /// Finds a user by identifier.
    ///
    /// Returns `None` when the user does not exist.
    async fn find_by_id(&self, id: UserId) -> UserRepositoryResult<Option<User>>;

    /// Finds a user whose name matches `name` exactly.
    ///
    /// Names are not unique in storage; the first match in store order wins.
    async fn find_by_name(&self, name: &str) -> UserRepositoryResult<Option<User>>;

    /// Returns all users in store order.
    async fn list_all(&self) -> UserRepositoryResult<Vec<User>>;
}

/// Errors returned by user repository implementations.
#[derive(Debug, Clone, Error)]
pub enum UserRepositoryError {
    /// The user was not found.
    #[error("user not found: {0}")]
    NotFound(UserId),

    /// The user is still referenced as person in charge of a todo.
    #[error("user {0} is still in charge of at least one todo")]
    InUse(UserId),

    /// Persistence-layer failure.
    #[error("persistence error: {0}")]
    Persistence(Arc<dyn std::error::Error + Send + Sync>),
}

impl UserRepositoryError {
    /// Wraps a persistence error.
    pub fn persistence(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Persistence(Arc::new(err))
    }
}
