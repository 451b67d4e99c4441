//! Domain model for todo lifecycle management.
//!
//! The todo domain models the status vocabulary, the terminal-state rule,
//! the foreign-key record written on create and update, and the joined
//! projection read back by callers. Infrastructure concerns stay outside the
//! domain boundary.

mod due_date;
mod error;
mod ids;
mod status;
mod todo;

pub use due_date::DueDate;
pub use error::TodoDomainError;
pub use ids::{StatusId, TodoId};
pub use status::Status;
pub use todo::{ProjectedTodoData, Todo, TodoRecord};
