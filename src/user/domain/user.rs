//! User entity.

use super::{UserId, UserName};
use serde::{Deserialize, Serialize};

/// A user that can be put in charge of todos.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    #[serde(rename = "userId")]
    id: UserId,
    name: UserName,
}

impl User {
    /// Creates a user from its stored identifier and name.
    #[must_use]
    pub const fn new(id: UserId, name: UserName) -> Self {
        Self { id, name }
    }

    /// Returns the user identifier.
    #[must_use]
    pub const fn id(&self) -> UserId {
        self.id
    }

    /// Returns the user name.
    #[must_use]
    pub const fn name(&self) -> &UserName {
        &self.name
    }
}
