//! Status vocabulary entries and the terminal-state rule.

use super::StatusId;
use serde::{Deserialize, Serialize};

/// An entry of the status vocabulary.
///
/// Only "Done" and "Deleted" carry lifecycle meaning: a todo in either of
/// them can no longer be updated. Every other status is an open state.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Status {
    #[serde(rename = "statusId")]
    id: StatusId,
    #[serde(rename = "statusTxt")]
    text: String,
}

impl Status {
    /// Text of the default status assigned on create.
    pub const NEW_TEXT: &'static str = "New";
    /// Text of the terminal status for finished todos.
    pub const DONE_TEXT: &'static str = "Done";
    /// Text of the terminal status for discarded todos.
    pub const DELETED_TEXT: &'static str = "Deleted";

    /// Creates a status from its code and text.
    #[must_use]
    pub fn new(id: StatusId, text: impl Into<String>) -> Self {
        Self {
            id,
            text: text.into(),
        }
    }

    /// Returns the canonical `{1, "New"}` status.
    #[must_use]
    pub fn new_default() -> Self {
        Self::new(StatusId::NEW, Self::NEW_TEXT)
    }

    /// Returns the status code.
    #[must_use]
    pub const fn id(&self) -> StatusId {
        self.id
    }

    /// Returns the status text.
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Returns `true` when a todo in this status can no longer change.
    ///
    /// The comparison is exact: `"done"` is an open status.
    #[must_use]
    pub fn is_terminal(&self) -> bool {
        self.text == Self::DONE_TEXT || self.text == Self::DELETED_TEXT
    }
}
