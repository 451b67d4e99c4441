//! `PostgreSQL` adapters for user, status, and todo persistence.

mod models;
mod repository;
mod schema;

pub use repository::{PostgresStore, StorePgPool};
