//! Table sources standing in for the external lattice-extraction engine.

use std::path::Path;

use serde::Deserialize;
use tracing::debug;

use super::TableSource;
use crate::error::{HtsError, Result};
use crate::models::{PageRange, RawTable};

/// One table entry in a sidecar dump. Plain grids have no page attribution
/// and are always in range.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum SidecarTable {
    Paged {
        page: u32,
        rows: Vec<Vec<Option<String>>>,
    },
    Grid(Vec<Vec<Option<String>>>),
}

/// Table source backed by a sidecar JSON dump produced by an external
/// lattice engine (one array of tables, each a 2-D grid of nullable cells,
/// optionally wrapped as `{"page": n, "rows": [...]}`).
#[derive(Debug)]
pub struct JsonTableSource {
    tables: Vec<SidecarTable>,
}

impl JsonTableSource {
    /// Load a dump from a file.
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_str(&content)
    }

    /// Parse a dump from a JSON string.
    #[allow(clippy::should_implement_trait)]
    pub fn from_str(content: &str) -> Result<Self> {
        let tables: Vec<SidecarTable> = serde_json::from_str(content)
            .map_err(|e| HtsError::Extraction(format!("invalid table dump: {e}")))?;
        debug!("loaded table dump with {} tables", tables.len());
        Ok(Self { tables })
    }
}

impl TableSource for JsonTableSource {
    fn extract(&self, range: &PageRange) -> Result<Vec<RawTable>> {
        let tables = self
            .tables
            .iter()
            .filter(|t| match t {
                SidecarTable::Paged { page, .. } => range.contains(*page),
                SidecarTable::Grid(_) => true,
            })
            .map(|t| match t {
                SidecarTable::Paged { rows, .. } | SidecarTable::Grid(rows) => {
                    RawTable::from_rows(rows.clone())
                }
            })
            .collect();
        Ok(tables)
    }
}

/// Table source over pre-extracted tables, ignoring the page range.
pub struct InMemoryTableSource {
    tables: Vec<RawTable>,
}

impl InMemoryTableSource {
    pub fn new(tables: Vec<RawTable>) -> Self {
        Self { tables }
    }
}

impl TableSource for InMemoryTableSource {
    fn extract(&self, _range: &PageRange) -> Result<Vec<RawTable>> {
        Ok(self.tables.clone())
    }
}
