//! Unit tests for todo lifecycle management.
