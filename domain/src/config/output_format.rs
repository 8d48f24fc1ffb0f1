//! Output format value object

use serde::{Deserialize, Serialize};

/// How a page of advocates is printed by the one-shot `list` command
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Column-aligned table with pagination footer (default)
    #[default]
    Table,
    /// The page exactly as the listing endpoint returns it
    Json,
}
