//! Step definitions for todo lifecycle behaviour scenarios.

pub mod world;

mod given;
mod then;
mod when;
