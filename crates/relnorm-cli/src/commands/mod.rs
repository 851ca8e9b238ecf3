//! Command implementations.

pub mod analyze;
pub mod sql;
