//! Advocate roster records.
//!
//! - [`entities::Advocate`] — a single roster record

pub mod entities;
