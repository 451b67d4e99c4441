//! Validated user name type.

use super::UserDomainError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Maximum length for a user name, matching the `VARCHAR(255)` column.
const MAX_NAME_LENGTH: usize = 255;

/// Human-readable user name.
///
/// Names are the lookup key used when a todo names its person in charge, so
/// they are stored exactly as given (after trimming surrounding whitespace)
/// and matched case-sensitively.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UserName(String);

impl UserName {
    /// Creates a validated user name.
    ///
    /// # Errors
    ///
    /// Returns [`UserDomainError::EmptyUserName`] when the value is empty
    /// after trimming, or [`UserDomainError::UserNameTooLong`] when it
    /// exceeds 255 characters.
    pub fn new(value: impl Into<String>) -> Result<Self, UserDomainError> {
        let raw = value.into();
        let normalized = raw.trim();

        if normalized.is_empty() {
            return Err(UserDomainError::EmptyUserName);
        }

        if normalized.chars().count() > MAX_NAME_LENGTH {
            return Err(UserDomainError::UserNameTooLong(raw));
        }

        Ok(Self(normalized.to_owned()))
    }

    /// Wraps a name read back from the store without validating it.
    ///
    /// User rows may be written by other tools, so a stored name is taken
    /// as-is, the same way joined todo reads carry it.
    #[must_use]
    pub const fn from_persisted(value: String) -> Self {
        Self(value)
    }

    /// Returns the name as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for UserName {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl fmt::Display for UserName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
