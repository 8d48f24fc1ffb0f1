//! Use cases
//!
//! Application-level operations that orchestrate domain logic.

pub mod browse_directory;
pub mod list_advocates;
