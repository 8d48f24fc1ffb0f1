//! Seed data loading.
//!
//! A seed file is a JSON array of advocate objects in the same camelCase
//! shape the API returns. Records without an `id` are numbered after the
//! highest id present, in file order; records without a `createdAt` are
//! stamped with the load time.

use advocates_domain::Advocate;
use chrono::Utc;
use std::path::Path;
use thiserror::Error;
use tracing::{debug, info};

const BUILTIN_SEED: &str = include_str!("seed_advocates.json");

/// Errors that can occur while loading a roster
#[derive(Error, Debug)]
pub enum SeedError {
    #[error("Failed to read seed file {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid seed data: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("No id left to assign to {name}: highest id is {max_id}")]
    IdOverflow { name: String, max_id: i64 },
}

/// Parse a JSON roster and assign missing ids.
pub fn parse_roster(json: &str) -> Result<Vec<Advocate>, SeedError> {
    let mut advocates: Vec<Advocate> = serde_json::from_str(json)?;

    let mut last_id = advocates.iter().filter_map(|a| a.id).max().unwrap_or(0);
    let loaded_at = Utc::now();
    for advocate in advocates.iter_mut() {
        if advocate.id.is_none() {
            last_id = last_id.checked_add(1).ok_or_else(|| SeedError::IdOverflow {
                name: advocate.full_name(),
                max_id: last_id,
            })?;
            advocate.id = Some(last_id);
        }
        advocate.created_at.get_or_insert(loaded_at);
    }

    debug!(count = advocates.len(), "Parsed advocate roster");
    Ok(advocates)
}

/// The roster compiled into the binary
pub fn builtin_roster() -> Result<Vec<Advocate>, SeedError> {
    parse_roster(BUILTIN_SEED)
}

/// Load the roster from `path`, or the built-in roster when `None`.
pub fn load_roster(path: Option<&Path>) -> Result<Vec<Advocate>, SeedError> {
    match path {
        Some(path) => {
            let json = std::fs::read_to_string(path).map_err(|source| SeedError::Io {
                path: path.display().to_string(),
                source,
            })?;
            let roster = parse_roster(&json)?;
            info!(count = roster.len(), path = %path.display(), "Loaded advocate roster");
            Ok(roster)
        }
        None => {
            let roster = builtin_roster()?;
            info!(count = roster.len(), "Using built-in advocate roster");
            Ok(roster)
        }
    }
}
