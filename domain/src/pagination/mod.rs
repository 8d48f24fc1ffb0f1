//! Pagination contract between the listing endpoint and its clients.
//!
//! - [`request::PageRequest`] — a bounded page number and page size
//! - [`metadata::PaginationMetadata`] — totals and navigation flags for a page
//! - [`params::parse_int_param`] — lenient parsing of `?page=` / `?limit=`

pub mod metadata;
pub mod params;
pub mod request;
