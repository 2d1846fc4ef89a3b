//! CLI command implementations.

pub mod calc;
pub mod catalog;
