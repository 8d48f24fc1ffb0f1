//! Search term value object

use serde::{Deserialize, Serialize};

/// Text typed into the search box (Value Object)
///
/// Keeps the raw input for display next to the lowercased form used for
/// matching. Whitespace is significant and is not trimmed.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub struct SearchTerm {
    raw: String,
    folded: String,
}

impl SearchTerm {
    pub fn new(raw: impl Into<String>) -> Self {
        let raw = raw.into();
        let folded = raw.to_lowercase();
        Self { raw, folded }
    }

    /// The term as typed
    pub fn as_str(&self) -> &str {
        &self.raw
    }

    /// The lowercased term used for matching
    pub fn folded(&self) -> &str {
        &self.folded
    }

    /// An empty term matches every advocate
    pub fn is_empty(&self) -> bool {
        self.raw.is_empty()
    }
}

impl std::fmt::Display for SearchTerm {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.raw)
    }
}

impl From<&str> for SearchTerm {
    fn from(s: &str) -> Self {
        SearchTerm::new(s)
    }
}

impl From<String> for SearchTerm {
    fn from(s: String) -> Self {
        SearchTerm::new(s)
    }
}

impl From<SearchTerm> for String {
    fn from(term: SearchTerm) -> Self {
        term.raw
    }
}
