//! Port contracts for the user directory.
//!
//! Ports define infrastructure-agnostic interfaces used by user and todo
//! services.

pub mod repository;

pub use repository::{UserRepository, UserRepositoryError, UserRepositoryResult};

#[cfg(test)]
pub use repository::MockUserRepository;
