//! Port contracts for todo lifecycle management.
//!
//! Ports define infrastructure-agnostic interfaces used by todo services.

pub mod repository;

pub use repository::{StatusRepository, TodoRepository, TodoRepositoryError, TodoRepositoryResult};

#[cfg(test)]
pub use repository::{MockStatusRepository, MockTodoRepository};
