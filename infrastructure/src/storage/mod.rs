//! Roster storage adapters.
//!
//! The roster is a fixed data set loaded once at startup, either from the
//! built-in seed or from a JSON file, and served read-only.

mod memory;
mod seed;

pub use memory::InMemoryAdvocateRepository;
pub use seed::{SeedError, builtin_roster, load_roster, parse_roster};
