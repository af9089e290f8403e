//! Raw extracted tables: immutable grids of optional text cells.

use serde::{Deserialize, Serialize};

/// A raw table as returned by the extraction collaborator.
///
/// Rows may be ragged and any cell may be absent; all accessors are
/// bounds-checked and return `None` instead of panicking.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RawTable {
    rows: Vec<Vec<Option<String>>>,
}

impl RawTable {
    /// Create a table from raw rows.
    pub fn from_rows(rows: Vec<Vec<Option<String>>>) -> Self {
        Self { rows }
    }

    /// Convenience constructor for fixtures: `""` becomes an absent cell.
    pub fn from_str_rows(rows: &[&[&str]]) -> Self {
        let rows = rows
            .iter()
            .map(|row| {
                row.iter()
                    .map(|cell| {
                        if cell.is_empty() {
                            None
                        } else {
                            Some((*cell).to_string())
                        }
                    })
                    .collect()
            })
            .collect();
        Self { rows }
    }

    /// Number of rows.
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// Width of the widest row.
    pub fn col_count(&self) -> usize {
        self.rows.iter().map(Vec::len).max().unwrap_or(0)
    }

    /// Whether the table has no rows at all.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// The cell at `(row, col)`, if present. Out-of-range access is `None`.
    pub fn cell(&self, row: usize, col: usize) -> Option<&str> {
        self.rows.get(row)?.get(col)?.as_deref()
    }

    /// The last cell of the last row, if present.
    pub fn bottom_right(&self) -> Option<&str> {
        self.rows.last()?.last()?.as_deref()
    }

    /// Whether any cell in the first column equals `token`.
    pub fn first_column_contains(&self, token: &str) -> bool {
        self.rows
            .iter()
            .any(|row| row.first().and_then(|c| c.as_deref()) == Some(token))
    }

    /// Borrow the underlying rows.
    pub fn rows(&self) -> &[Vec<Option<String>>] {
        &self.rows
    }

    /// Concatenate several tables row-wise into a new table.
    pub fn concat<'a>(parts: impl IntoIterator<Item = &'a RawTable>) -> RawTable {
        let rows = parts
            .into_iter()
            .flat_map(|t| t.rows.iter().cloned())
            .collect();
        RawTable { rows }
    }

    /// Derived copy with carriage returns inside cells flattened to spaces.
    ///
    /// Lattice extraction renders multi-line cells with embedded `\r`.
    pub fn flatten_line_breaks(&self) -> RawTable {
        let rows = self
            .rows
            .iter()
            .map(|row| {
                row.iter()
                    .map(|cell| cell.as_ref().map(|c| c.replace('\r', " ")))
                    .collect()
            })
            .collect();
        RawTable { rows }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_cell_out_of_range_is_none() {
        let t = RawTable::from_str_rows(&[&["a", "b"], &["c"]]);
        assert_eq!(t.cell(0, 1), Some("b"));
        assert_eq!(t.cell(1, 1), None);
        assert_eq!(t.cell(5, 0), None);
    }

    #[test]
    fn test_bottom_right_of_ragged_table() {
        let t = RawTable::from_str_rows(&[&["a", "b", "c"], &["d", "e"]]);
        assert_eq!(t.bottom_right(), Some("e"));
        assert_eq!(RawTable::default().bottom_right(), None);
    }

    #[test]
    fn test_first_column_contains_exact_match_only() {
        let t = RawTable::from_str_rows(&[&["SIRA NO", "NUMARA"], &["1", "555"]]);
        assert!(t.first_column_contains("SIRA NO"));
        assert!(!t.first_column_contains("SIRA"));
        assert!(!t.first_column_contains("NUMARA"));
    }

    #[test]
    fn test_concat_preserves_row_order() {
        let a = RawTable::from_str_rows(&[&["1"]]);
        let b = RawTable::from_str_rows(&[&["2"], &["3"]]);
        let merged = RawTable::concat([&a, &b]);
        assert_eq!(merged.row_count(), 3);
        assert_eq!(merged.cell(2, 0), Some("3"));
    }

    #[test]
    fn test_flatten_line_breaks() {
        let t = RawTable::from_str_rows(&[&["Ad\rSoyad"]]);
        assert_eq!(t.flatten_line_breaks().cell(0, 0), Some("Ad Soyad"));
    }

    #[test]
    fn test_json_roundtrip_with_null_cells() {
        let json = r#"[["SIRA NO", null], ["1", "555"]]"#;
        let t: RawTable = serde_json::from_str(json).unwrap();
        assert_eq!(t.cell(0, 1), None);
        assert_eq!(t.cell(1, 1), Some("555"));
    }
}
