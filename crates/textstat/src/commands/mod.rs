//! Command implementations.

pub mod analyze;
pub mod info;
pub mod schema;
