//! Shared types: the crate error and result alias.

pub mod error;

pub use error::{Result, VariateError};
