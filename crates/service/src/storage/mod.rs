//! Storage abstractions for service layer
//!
//! Holds the process-local stores that stand in for a database.

pub mod list_store;
