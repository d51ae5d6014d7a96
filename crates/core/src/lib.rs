//! Shared domain types for the todo service.
//!
//! Nothing in this crate performs I/O; the `db` and `api` crates build on it.

pub mod error;
pub mod patch;
pub mod types;
