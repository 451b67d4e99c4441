//! User directory for the todo tracker.
//!
//! Users are the reference data a todo's `person_in_charge` points at. The
//! module follows hexagonal architecture:
//!
//! - Domain types in [`domain`]
//! - Port contracts in [`ports`]
//! - Orchestration services in [`services`]
//!
//! Store adapters implementing [`ports::UserRepository`] live in
//! [`crate::store`], alongside the todo and status adapters they share a
//! connection pool with.

pub mod domain;
pub mod ports;
pub mod services;

#[cfg(test)]
mod tests;
