//! Calendar due date of a todo.

use super::TodoDomainError;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

const DUE_DATE_FORMAT: &str = "%Y-%m-%d";

/// Due date of a todo, a calendar day without time zone.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DueDate(NaiveDate);

impl DueDate {
    /// Parses a `YYYY-MM-DD` date, ignoring surrounding whitespace.
    ///
    /// # Errors
    ///
    /// Returns [`TodoDomainError::InvalidDueDate`] when the value is not a
    /// valid calendar date in that format.
    pub fn parse(value: &str) -> Result<Self, TodoDomainError> {
        NaiveDate::parse_from_str(value.trim(), DUE_DATE_FORMAT)
            .map(Self)
            .map_err(|_| TodoDomainError::InvalidDueDate(value.to_owned()))
    }

    /// Wraps an already validated calendar date.
    #[must_use]
    pub const fn from_date(date: NaiveDate) -> Self {
        Self(date)
    }

    /// Returns the wrapped calendar date.
    #[must_use]
    pub const fn into_inner(self) -> NaiveDate {
        self.0
    }
}

impl fmt::Display for DueDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format(DUE_DATE_FORMAT))
    }
}
