//! Domain layer for advocate-directory
//!
//! This crate contains the core business logic, entities, and value objects.
//! It has no dependencies on infrastructure or presentation concerns.
//!
//! # Core Concepts
//!
//! ## Advocate
//!
//! A single roster record: name, city, degree, specialties, years of
//! experience and phone number.
//!
//! ## Search
//!
//! A case-insensitive substring filter applied to the advocates of the
//! page currently on screen. See [`advocate_filter`].
//!
//! ## Pagination
//!
//! The contract between the listing endpoint and its clients: a bounded
//! [`PageRequest`] goes in, a [`Page`] with [`PaginationMetadata`] comes out.

pub mod advocate;
pub mod config;
pub mod core;
pub mod pagination;
pub mod search;

// Re-export commonly used types
pub use advocate::entities::Advocate;
pub use config::OutputFormat;
pub use core::error::DomainError;
pub use pagination::{
    metadata::{Page, PaginationMetadata, page_numbers},
    params::parse_int_param,
    request::{DEFAULT_LIMIT, DEFAULT_PAGE, MAX_LIMIT, PageRequest},
};
pub use search::{
    filter::{advocate_filter, filter_advocates},
    term::SearchTerm,
};
