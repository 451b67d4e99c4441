//! Store adapters for the user, status, and todo ports.
//!
//! The three relations live in one relational store and the todo read
//! model joins across all of them, so each adapter implements every port
//! over a single shared handle:
//!
//! - [`memory::InMemoryStore`] keeps the relations in process memory for
//!   tests and behaviour scenarios.
//! - [`postgres::PostgresStore`] runs Diesel queries on a pooled
//!   `PostgreSQL` connection.

pub mod memory;
pub mod postgres;
