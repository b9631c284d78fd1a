//! Shared building blocks for the workout store crates.
//!
//! Wire types that are not owned by the domain and tracing setup live here so
//! the server library and the binary initialise logging the same way.

pub mod types;
pub mod utils;
