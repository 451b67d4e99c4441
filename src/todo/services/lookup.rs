//! Resolution of caller-supplied user names and status texts into the
//! foreign keys stored on todo rows.
//!
//! User resolution is strict on every path. Status resolution is lenient on
//! create, where an unknown text falls back to the canonical "New" status,
//! and strict on update.

use crate::todo::{
    domain::Status,
    ports::{StatusRepository, TodoRepositoryError},
};
use crate::user::{
    domain::User,
    ports::{UserRepository, UserRepositoryError},
};
use std::sync::Arc;
use thiserror::Error;

/// Errors raised while resolving references.
#[derive(Debug, Error)]
pub enum LookupError {
    /// No user has the requested name.
    #[error("user not found: {0}")]
    UserNotFound(String),

    /// No status has the requested text.
    #[error("status not found: {0}")]
    StatusNotFound(String),

    /// User lookup failed in the store.
    #[error(transparent)]
    Users(#[from] UserRepositoryError),

    /// Status lookup failed in the store.
    #[error(transparent)]
    Statuses(#[from] TodoRepositoryError),
}

/// Result type for lookup operations.
pub type LookupResult<T> = Result<T, LookupError>;

/// Outcome of resolving a status text on the create path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StatusResolution {
    /// The text named a status of the vocabulary.
    Resolved(Status),
    /// The text was unknown and the default status was substituted.
    Defaulted {
        /// Text supplied by the caller.
        requested: String,
        /// Status substituted for it.
        status: Status,
    },
}

impl StatusResolution {
    /// Returns the status the todo will carry.
    #[must_use]
    pub const fn status(&self) -> &Status {
        match self {
            Self::Resolved(status) | Self::Defaulted { status, .. } => status,
        }
    }

    /// Consumes the resolution and returns the status the todo will carry.
    #[must_use]
    pub fn into_status(self) -> Status {
        match self {
            Self::Resolved(status) | Self::Defaulted { status, .. } => status,
        }
    }

    /// Returns `true` when the caller's text was replaced by the default.
    #[must_use]
    pub const fn is_defaulted(&self) -> bool {
        matches!(self, Self::Defaulted { .. })
    }
}

/// Maps user names and status texts to stored rows.
#[derive(Clone)]
pub struct LookupResolver<U, S>
where
    U: UserRepository,
    S: StatusRepository,
{
    users: Arc<U>,
    statuses: Arc<S>,
}

impl<U, S> LookupResolver<U, S>
where
    U: UserRepository,
    S: StatusRepository,
{
    /// Creates a resolver over the given user and status stores.
    #[must_use]
    pub const fn new(users: Arc<U>, statuses: Arc<S>) -> Self {
        Self { users, statuses }
    }

    /// Resolves a user by exact name.
    ///
    /// # Errors
    ///
    /// Returns [`LookupError::UserNotFound`] when no user has the name, or
    /// [`LookupError::Users`] when the store lookup fails.
    pub async fn resolve_user(&self, name: &str) -> LookupResult<User> {
        self.users
            .find_by_name(name)
            .await?
            .ok_or_else(|| LookupError::UserNotFound(name.to_owned()))
    }

    /// Resolves a status for a new todo, substituting "New" for unknown
    /// texts.
    ///
    /// # Errors
    ///
    /// Returns [`LookupError::Statuses`] when the store lookup fails. An
    /// unknown text is not an error.
    pub async fn resolve_status_for_create(&self, text: &str) -> LookupResult<StatusResolution> {
        match self.statuses.find_by_text(text).await? {
            Some(status) => Ok(StatusResolution::Resolved(status)),
            None => {
                let status = Status::new_default();
                tracing::info!(
                    requested = text,
                    substituted = status.text(),
                    "unknown status on create, using default"
                );
                Ok(StatusResolution::Defaulted {
                    requested: text.to_owned(),
                    status,
                })
            }
        }
    }

    /// Resolves a status for an update.
    ///
    /// # Errors
    ///
    /// Returns [`LookupError::StatusNotFound`] when the text is unknown, or
    /// [`LookupError::Statuses`] when the store lookup fails.
    pub async fn resolve_status_for_update(&self, text: &str) -> LookupResult<Status> {
        self.statuses
            .find_by_text(text)
            .await?
            .ok_or_else(|| LookupError::StatusNotFound(text.to_owned()))
    }

    /// Returns the full status vocabulary.
    ///
    /// # Errors
    ///
    /// Returns [`LookupError::Statuses`] when the store lookup fails.
    pub async fn list_statuses(&self) -> LookupResult<Vec<Status>> {
        Ok(self.statuses.list_vocabulary().await?)
    }
}
