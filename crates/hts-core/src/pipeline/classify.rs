//! Document variant classification from the queried-info table.

use tracing::debug;

use crate::error::{HtsError, Result};
use crate::models::{DocumentVariant, RawTable};

/// Determine the report variant from the raw table sequence.
///
/// Reads the bottom-right cell of the table at index 1 ("queried info") and
/// matches it against the two canonical variant descriptors. Each check is
/// a hard fail-fast check.
pub fn classify(tables: &[RawTable]) -> Result<DocumentVariant> {
    if tables.len() < 2 {
        return Err(HtsError::Structural(
            "report is missing its core tables".to_string(),
        ));
    }

    let info = &tables[1];
    if info.row_count() == 0 || info.col_count() == 0 {
        return Err(HtsError::Structural(
            "queried-info table is missing or malformed".to_string(),
        ));
    }

    let descriptor = info.bottom_right().ok_or_else(|| {
        HtsError::Structural("queried-info type cell is unreadable".to_string())
    })?;

    let variant = DocumentVariant::from_descriptor(descriptor)
        .ok_or_else(|| HtsError::UnsupportedFormat(descriptor.to_string()))?;
    debug!(?variant, "classified report");
    Ok(variant)
}
