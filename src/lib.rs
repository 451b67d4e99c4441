//! Todos: todo tracking over a relational store.
//!
//! Callers create, read, update, and delete todos and the users put in
//! charge of them. Each todo references a user and a status by foreign key;
//! writes resolve the caller's user name and status text to those keys, and
//! reads join them back into text.
//!
//! # Architecture
//!
//! The crate follows hexagonal architecture principles:
//!
//! - **Domain**: Pure business logic with no infrastructure dependencies
//! - **Ports**: Abstract trait interfaces for store access
//! - **Adapters**: `PostgreSQL` and in-memory implementations of the ports
//!
//! # Modules
//!
//! - [`todo`]: Reference resolution and the todo status lifecycle
//! - [`user`]: User directory
//! - [`store`]: Store adapters shared by both
//! - [`boundary`]: Outcome classes, codes, and messages for callers
//! - [`config`]: Store configuration
//! - [`telemetry`]: Logging setup

pub mod boundary;
pub mod config;
pub mod store;
pub mod telemetry;
pub mod todo;
pub mod user;
