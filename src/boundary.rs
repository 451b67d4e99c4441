//! Translation of service results into caller-facing outcomes.
//!
//! Every service error lands in one of four outcome classes, each with a
//! status code and a fixed message text. Conflicts on terminal todos are
//! reported with the not-found code under [`CollapsePolicy::Reference`] and
//! with their own code under [`CollapsePolicy::Distinct`].

use crate::todo::services::{LookupError, TodoLifecycleError};
use crate::user::services::UserDirectoryError;

/// Message for absent todos, users, and empty listings.
pub const DATA_NOT_FOUND: &str = "Data not found";
/// Message for an unresolved person in charge.
pub const USER_NOT_FOUND: &str = "User not found";
/// Message for an unresolved status text on update.
pub const STATUS_NOT_FOUND: &str = "Status not found";
/// Message for updates refused on a terminal todo.
pub const TERMINAL_STATUS: &str = "Status has done or deleted";
/// Message for store failures and rejected input.
pub const INTERNAL_SERVER_ERROR: &str = "Internal server error";
/// Message confirming a delete.
pub const DELETE_SUCCESS: &str = "Delete data success";

/// Coarse classification of an operation result.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutcomeClass {
    /// The operation succeeded.
    Success,
    /// A referenced record or listing was absent.
    NotFound,
    /// The operation was refused by the status lifecycle.
    Conflict,
    /// The store or the input failed.
    ServerError,
}

impl OutcomeClass {
    /// Returns the process exit code reported for this class.
    #[must_use]
    pub const fn exit_code(self) -> u8 {
        match self {
            Self::Success => 0,
            Self::ServerError => 1,
            Self::NotFound => 2,
            Self::Conflict => 3,
        }
    }
}

/// How lifecycle conflicts are presented to callers.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum CollapsePolicy {
    /// Conflicts are reported as not-found (404) with their own message.
    #[default]
    Reference,
    /// Conflicts are reported as a distinct conflict outcome (409).
    Distinct,
}

/// A classified result with its status code and message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Outcome {
    class: OutcomeClass,
    status_code: u16,
    message: Option<&'static str>,
}

impl Outcome {
    const fn new(class: OutcomeClass, status_code: u16, message: &'static str) -> Self {
        Self {
            class,
            status_code,
            message: Some(message),
        }
    }

    /// Successful outcome whose payload is the returned data.
    #[must_use]
    pub const fn success() -> Self {
        Self {
            class: OutcomeClass::Success,
            status_code: 200,
            message: None,
        }
    }

    /// Successful delete.
    #[must_use]
    pub const fn deleted() -> Self {
        Self::new(OutcomeClass::Success, 200, DELETE_SUCCESS)
    }

    const fn not_found(message: &'static str) -> Self {
        Self::new(OutcomeClass::NotFound, 404, message)
    }

    const fn server_error() -> Self {
        Self::new(OutcomeClass::ServerError, 500, INTERNAL_SERVER_ERROR)
    }

    /// Classifies a todo lifecycle error.
    #[must_use]
    pub fn from_todo_error(err: &TodoLifecycleError, policy: CollapsePolicy) -> Self {
        let outcome = match err {
            TodoLifecycleError::TodoNotFound(_) | TodoLifecycleError::NoTodos => {
                Self::not_found(DATA_NOT_FOUND)
            }
            TodoLifecycleError::Lookup(LookupError::UserNotFound(_)) => {
                Self::not_found(USER_NOT_FOUND)
            }
            TodoLifecycleError::Lookup(LookupError::StatusNotFound(_)) => {
                Self::not_found(STATUS_NOT_FOUND)
            }
            TodoLifecycleError::Conflict { .. } => match policy {
                CollapsePolicy::Reference => Self::not_found(TERMINAL_STATUS),
                CollapsePolicy::Distinct => Self::new(OutcomeClass::Conflict, 409, TERMINAL_STATUS),
            },
            TodoLifecycleError::Domain(_)
            | TodoLifecycleError::Lookup(LookupError::Users(_) | LookupError::Statuses(_))
            | TodoLifecycleError::Repository(_) => Self::server_error(),
        };
        if outcome.class == OutcomeClass::ServerError {
            tracing::error!(error = %err, "todo operation failed");
        }
        outcome
    }

    /// Classifies a user directory error.
    #[must_use]
    pub fn from_user_error(err: &UserDirectoryError) -> Self {
        match err {
            UserDirectoryError::UserNotFound(_) | UserDirectoryError::NoUsers => {
                Self::not_found(DATA_NOT_FOUND)
            }
            UserDirectoryError::Domain(_) | UserDirectoryError::Repository(_) => {
                tracing::error!(error = %err, "user operation failed");
                Self::server_error()
            }
        }
    }

    /// Returns the outcome class.
    #[must_use]
    pub const fn class(&self) -> OutcomeClass {
        self.class
    }

    /// Returns the status code.
    #[must_use]
    pub const fn status_code(&self) -> u16 {
        self.status_code
    }

    /// Returns the message text, absent for data-carrying successes.
    #[must_use]
    pub const fn message(&self) -> Option<&'static str> {
        self.message
    }
}
