//! Progress indicators for one-shot commands

pub mod reporter;

pub use reporter::FetchSpinner;
