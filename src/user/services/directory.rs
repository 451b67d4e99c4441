//! Service layer for user creation, lookup, renaming, and removal.

use crate::user::{
    domain::{User, UserDomainError, UserId, UserName},
    ports::{UserRepository, UserRepositoryError},
};
use std::sync::Arc;
use thiserror::Error;

/// Service-level errors for user directory operations.
#[derive(Debug, Error)]
pub enum UserDirectoryError {
    /// Domain validation failed.
    #[error(transparent)]
    Domain(#[from] UserDomainError),

    /// The user does not exist.
    #[error("user not found: {0}")]
    UserNotFound(UserId),

    /// The directory holds no users at all.
    #[error("no users recorded")]
    NoUsers,

    /// Repository operation failed.
    #[error(transparent)]
    Repository(UserRepositoryError),
}

impl From<UserRepositoryError> for UserDirectoryError {
    fn from(err: UserRepositoryError) -> Self {
        match err {
            UserRepositoryError::NotFound(id) => Self::UserNotFound(id),
            other => Self::Repository(other),
        }
    }
}

/// Result type for user directory service operations.
pub type UserDirectoryResult<T> = Result<T, UserDirectoryError>;

/// User directory orchestration service.
#[derive(Clone)]
pub struct UserDirectoryService<R>
where
    R: UserRepository,
{
    repository: Arc<R>,
}

impl<R> UserDirectoryService<R>
where
    R: UserRepository,
{
    /// Creates a new user directory service.
    #[must_use]
    pub const fn new(repository: Arc<R>) -> Self {
        Self { repository }
    }

    /// Lists every user.
    ///
    /// # Errors
    ///
    /// Returns [`UserDirectoryError::NoUsers`] when the directory is empty,
    /// or [`UserDirectoryError::Repository`] when the lookup fails.
    pub async fn list_users(&self) -> UserDirectoryResult<Vec<User>> {
        let users = self.repository.list_all().await?;
        if users.is_empty() {
            return Err(UserDirectoryError::NoUsers);
        }
        Ok(users)
    }

    /// Retrieves a user by identifier.
    ///
    /// # Errors
    ///
    /// Returns [`UserDirectoryError::UserNotFound`] when the user does not
    /// exist.
    pub async fn get_user(&self, id: UserId) -> UserDirectoryResult<User> {
        self.repository
            .find_by_id(id)
            .await?
            .ok_or(UserDirectoryError::UserNotFound(id))
    }

    /// Creates a user.
    ///
    /// # Errors
    ///
    /// Returns [`UserDirectoryError::Domain`] when the name is invalid.
    pub async fn create_user(&self, name: impl Into<String>) -> UserDirectoryResult<User> {
        let user_name = UserName::new(name)?;
        let user = self.repository.create(&user_name).await?;
        tracing::debug!(user_id = %user.id(), "user created");
        Ok(user)
    }

    /// Renames an existing user and returns the updated record.
    ///
    /// # Errors
    ///
    /// Returns [`UserDirectoryError::Domain`] when the name is invalid or
    /// [`UserDirectoryError::UserNotFound`] when no user has the identifier.
    pub async fn rename_user(
        &self,
        id: UserId,
        name: impl Into<String>,
    ) -> UserDirectoryResult<User> {
        let user_name = UserName::new(name)?;
        self.repository.rename(id, &user_name).await?;
        Ok(User::new(id, user_name))
    }

    /// Deletes a user.
    ///
    /// # Errors
    ///
    /// Returns [`UserDirectoryError::UserNotFound`] when no user has the
    /// identifier, or [`UserDirectoryError::Repository`] with
    /// [`UserRepositoryError::InUse`] when todos still reference it.
    pub async fn delete_user(&self, id: UserId) -> UserDirectoryResult<()> {
        self.repository.remove(id).await?;
        tracing::debug!(user_id = %id, "user deleted");
        Ok(())
    }
}
