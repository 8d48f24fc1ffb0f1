//! Client-side search over a page of advocates.
//!
//! - [`term::SearchTerm`] — the text typed into the search box
//! - [`filter::advocate_filter`] — the matching predicate

pub mod filter;
pub mod term;
