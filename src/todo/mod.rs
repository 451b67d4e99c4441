//! Todo lifecycle management.
//!
//! This module resolves the textual references a caller supplies (user name,
//! status text) into foreign keys, enforces the status state machine on
//! update, and assembles the joined read projection returned to callers. The
//! module follows hexagonal architecture:
//!
//! - Domain types in [`domain`]
//! - Port contracts in [`ports`]
//! - Orchestration services in [`services`]

pub mod domain;
pub mod ports;
pub mod services;

#[cfg(test)]
mod tests;
