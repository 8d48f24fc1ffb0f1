//! Application-level configuration.
//!
//! - [`BrowseParams`] — page size and search debounce for interactive browsing

pub mod browse_params;

pub use browse_params::BrowseParams;
