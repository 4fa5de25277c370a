//! Fear catalog filtering
//!
//! Positions always refer to the catalog as it was displayed, before any
//! filtering. Every position is validated before anything is applied, so an
//! out-of-range selection leaves no partial result behind.

use crate::catalog::FearCatalog;
use crate::error::{Result, SurveyError};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// How selected positions are applied to the catalog
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FilterMode {
    /// Remove the selected fears, keep the rest (choice `0`)
    ExcludeSelected,
    /// Keep only the selected fears (choice `1`)
    IncludeOnly,
}

impl FilterMode {
    /// Map an interactive choice to a mode; only `0` and `1` are accepted
    pub fn from_choice(choice: &str) -> Option<Self> {
        match choice {
            "0" => Some(FilterMode::ExcludeSelected),
            "1" => Some(FilterMode::IncludeOnly),
            _ => None,
        }
    }
}

/// Apply a filter to the catalog, returning the filtered catalog
///
/// - `IncludeOnly`: the selected labels in the order listed, duplicates
///   collapsed.
/// - `ExcludeSelected`: the catalog minus the selected positions. An empty
///   selection keeps everything.
pub fn apply_filter(
    catalog: &FearCatalog,
    positions: &[usize],
    mode: FilterMode,
) -> Result<FearCatalog> {
    validate_positions(positions, catalog.len())?;

    let filtered = match mode {
        FilterMode::IncludeOnly => {
            FearCatalog::from_labels(positions.iter().map(|&position| &catalog[position]))
        }
        FilterMode::ExcludeSelected => FearCatalog::from_labels(
            catalog
                .iter()
                .enumerate()
                .filter(|(position, _)| !positions.contains(position))
                .map(|(_, label)| label),
        ),
    };

    debug!(
        "Filter {:?} with {:?}: {} -> {} fears",
        mode,
        positions,
        catalog.len(),
        filtered.len()
    );
    Ok(filtered)
}

/// Parse a comma-separated selection against a catalog of `len` fears
///
/// An empty (or all-whitespace) input is a valid empty selection. Tokens are
/// trimmed; each must be written exactly as its displayed index (no sign, no
/// leading zeros) and lie in `[0, len)`.
pub fn parse_selection(input: &str, len: usize) -> Result<Vec<usize>> {
    if input.trim().is_empty() {
        return Ok(Vec::new());
    }

    let positions = input
        .split(',')
        .map(|token| {
            let token = token.trim();
            match token.parse::<usize>() {
                Ok(position) if position.to_string() == token => Ok(position),
                _ => Err(SurveyError::InvalidSelection(token.to_string())),
            }
        })
        .collect::<Result<Vec<usize>>>()?;

    validate_positions(&positions, len)?;
    Ok(positions)
}

fn validate_positions(positions: &[usize], len: usize) -> Result<()> {
    match positions.iter().find(|&&position| position >= len) {
        Some(&position) => Err(SurveyError::SelectionOutOfRange { position, len }),
        None => Ok(()),
    }
}
