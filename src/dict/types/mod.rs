//! Foundational data structures, error types, and engine definitions.

pub mod engines;
pub mod error;
pub mod models;
