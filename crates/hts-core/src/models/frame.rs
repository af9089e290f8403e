//! Column-named data frame with dynamically typed cells.
//!
//! Source reports carry arbitrary extra columns through to the output, so
//! the normalized call-record block is a frame rather than a fixed struct.
//! Every transform produces a new derived frame; nothing mutates in place.

use chrono::NaiveDateTime;

/// One cell of a normalized frame.
#[derive(Debug, Clone, PartialEq)]
pub enum Cell {
    /// Absent or unparseable value.
    Null,
    /// Plain integer (coerced numbers, blank fill, durations).
    Int(i64),
    /// Free text carried through from the raw table.
    Text(String),
    /// Parsed day-first timestamp.
    Timestamp(NaiveDateTime),
}

impl Cell {
    /// Whether the cell is null or whitespace-only text.
    pub fn is_blank(&self) -> bool {
        match self {
            Cell::Null => true,
            Cell::Text(t) => t.trim().is_empty(),
            _ => false,
        }
    }

    /// Serialized field value: integers as plain decimals, timestamps as
    /// `YYYY-MM-DD HH:MM:SS`, nulls as the empty string.
    pub fn to_field(&self) -> String {
        match self {
            Cell::Null => String::new(),
            Cell::Int(n) => n.to_string(),
            Cell::Text(t) => t.clone(),
            Cell::Timestamp(ts) => ts.format("%Y-%m-%d %H:%M:%S").to_string(),
        }
    }
}

/// An immutable table of named columns and typed cells.
#[derive(Debug, Clone, PartialEq)]
pub struct Frame {
    columns: Vec<String>,
    rows: Vec<Vec<Cell>>,
}

impl Frame {
    /// Create a frame; rows are padded with nulls (or truncated) to the
    /// column count so the grid is always rectangular.
    pub fn new(columns: Vec<String>, mut rows: Vec<Vec<Cell>>) -> Self {
        let width = columns.len();
        for row in &mut rows {
            row.resize(width, Cell::Null);
        }
        Self { columns, rows }
    }

    /// Column names in output order.
    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    /// All data rows.
    pub fn rows(&self) -> &[Vec<Cell>] {
        &self.rows
    }

    /// Number of data rows.
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// Whether the frame has no data rows.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Index of the first column with the given name.
    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.columns.iter().position(|c| c == name)
    }

    /// Whether a column with the given name exists.
    pub fn has_column(&self, name: &str) -> bool {
        self.column_index(name).is_some()
    }

    /// Iterate over one column's cells.
    pub fn column(&self, index: usize) -> impl Iterator<Item = &Cell> {
        self.rows.iter().filter_map(move |row| row.get(index))
    }

    /// Derived frame with `f` applied to every cell of one column.
    pub fn map_column(&self, index: usize, f: impl Fn(&Cell) -> Cell) -> Frame {
        let rows = self
            .rows
            .iter()
            .map(|row| {
                row.iter()
                    .enumerate()
                    .map(|(i, cell)| if i == index { f(cell) } else { cell.clone() })
                    .collect()
            })
            .collect();
        Frame {
            columns: self.columns.clone(),
            rows,
        }
    }

    /// Derived frame keeping only rows for which `pred` holds.
    pub fn retain_rows(&self, pred: impl Fn(&[Cell]) -> bool) -> Frame {
        let rows = self
            .rows
            .iter()
            .filter(|row| pred(row))
            .cloned()
            .collect();
        Frame {
            columns: self.columns.clone(),
            rows,
        }
    }

    /// Derived frame with every blank cell replaced by `value`.
    pub fn fill_blanks(&self, value: Cell) -> Frame {
        let rows = self
            .rows
            .iter()
            .map(|row| {
                row.iter()
                    .map(|cell| {
                        if cell.is_blank() {
                            value.clone()
                        } else {
                            cell.clone()
                        }
                    })
                    .collect()
            })
            .collect();
        Frame {
            columns: self.columns.clone(),
            rows,
        }
    }

    /// Derived frame with an extra column appended; short value vectors are
    /// padded with nulls.
    pub fn with_column(&self, name: impl Into<String>, mut values: Vec<Cell>) -> Frame {
        values.resize(self.rows.len(), Cell::Null);
        let mut columns = self.columns.clone();
        columns.push(name.into());
        let rows = self
            .rows
            .iter()
            .zip(values)
            .map(|(row, value)| {
                let mut row = row.clone();
                row.push(value);
                row
            })
            .collect();
        Frame { columns, rows }
    }

    /// Derived frame with the values of two columns swapped row-wise.
    /// Column names keep their positions.
    pub fn swap_columns(&self, a: usize, b: usize) -> Frame {
        let rows = self
            .rows
            .iter()
            .map(|row| {
                let mut row = row.clone();
                row.swap(a, b);
                row
            })
            .collect();
        Frame {
            columns: self.columns.clone(),
            rows,
        }
    }

    /// Derived frame with columns renamed per `map`; entries whose old name
    /// is absent are skipped.
    pub fn rename_columns(&self, map: &[(&str, &str)]) -> Frame {
        let columns = self
            .columns
            .iter()
            .map(|name| {
                map.iter()
                    .find(|(old, _)| old == name)
                    .map(|(_, new)| (*new).to_string())
                    .unwrap_or_else(|| name.clone())
            })
            .collect();
        Frame {
            columns,
            rows: self.rows.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn sample() -> Frame {
        Frame::new(
            vec!["a".to_string(), "b".to_string()],
            vec![
                vec![Cell::Text("1".to_string()), Cell::Text("x".to_string())],
                vec![Cell::Null, Cell::Text("y".to_string())],
            ],
        )
    }

    #[test]
    fn test_new_pads_short_rows() {
        let f = Frame::new(
            vec!["a".to_string(), "b".to_string(), "c".to_string()],
            vec![vec![Cell::Int(1)]],
        );
        assert_eq!(f.rows()[0], vec![Cell::Int(1), Cell::Null, Cell::Null]);
    }

    #[test]
    fn test_map_column_leaves_others_untouched() {
        let f = sample().map_column(0, |_| Cell::Int(9));
        assert_eq!(f.rows()[0][0], Cell::Int(9));
        assert_eq!(f.rows()[0][1], Cell::Text("x".to_string()));
    }

    #[test]
    fn test_fill_blanks() {
        let f = sample().fill_blanks(Cell::Int(0));
        assert_eq!(f.rows()[1][0], Cell::Int(0));
    }

    #[test]
    fn test_swap_columns_keeps_names() {
        let f = sample().swap_columns(0, 1);
        assert_eq!(f.columns(), ["a", "b"]);
        assert_eq!(f.rows()[0][0], Cell::Text("x".to_string()));
        assert_eq!(f.rows()[0][1], Cell::Text("1".to_string()));
    }

    #[test]
    fn test_rename_skips_absent_columns() {
        let f = sample().rename_columns(&[("b", "B"), ("missing", "M")]);
        assert_eq!(f.columns(), ["a", "B"]);
    }

    #[test]
    fn test_with_column_pads_values() {
        let f = sample().with_column("c", vec![Cell::Int(1)]);
        assert_eq!(f.columns(), ["a", "b", "c"]);
        assert_eq!(f.rows()[1][2], Cell::Null);
    }

    #[test]
    fn test_cell_to_field() {
        assert_eq!(Cell::Null.to_field(), "");
        assert_eq!(Cell::Int(42).to_field(), "42");
        let ts = NaiveDateTime::parse_from_str("01.02.2023 10:30:00", "%d.%m.%Y %H:%M:%S").unwrap();
        assert_eq!(Cell::Timestamp(ts).to_field(), "2023-02-01 10:30:00");
    }
}
