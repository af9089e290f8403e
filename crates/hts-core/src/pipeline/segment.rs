//! Partitioning the raw table sequence into subscriber and call blocks.

use tracing::debug;

use super::SEQUENCE_MARKER;
use crate::error::{HtsError, Result};
use crate::models::RawTable;

/// Free-form key/value rows describing the queried subscriber.
///
/// Only its presence and shape are validated here; the contents are not
/// interpreted further.
#[derive(Debug, Clone)]
pub struct SubscriberBlock {
    table: RawTable,
}

impl SubscriberBlock {
    /// Number of rows in the merged block.
    pub fn row_count(&self) -> usize {
        self.table.row_count()
    }

    /// The merged raw table.
    pub fn table(&self) -> &RawTable {
        &self.table
    }
}

/// Index of the first table at or after `start` whose first column contains
/// the sequence marker, or the sequence length if none does.
fn marker_boundary(tables: &[RawTable], start: usize) -> usize {
    tables
        .iter()
        .enumerate()
        .skip(start)
        .find(|(_, t)| t.first_column_contains(SEQUENCE_MARKER))
        .map(|(i, _)| i)
        .unwrap_or(tables.len())
}

/// Split the raw table sequence into (subscriber block, call-record block).
///
/// Logical tables arrive split across arbitrarily many raw fragments (a
/// page-break artifact of extraction); fragments are merged row-wise until
/// the next marker table begins. The subscriber block spans `tables[2..b]`
/// where `b` is the first marker at or after index 2; the call block spans
/// `tables[b..b2]` where `b2` is the next marker after `b`. Both blocks
/// need at least two rows (one decorative row plus one header row).
pub fn segment(tables: &[RawTable]) -> Result<(SubscriberBlock, RawTable)> {
    let boundary = marker_boundary(tables, 2);
    let subscriber =
        RawTable::concat(tables.get(2..boundary).unwrap_or_default()).flatten_line_breaks();
    if subscriber.row_count() < 2 {
        return Err(HtsError::Structural(
            "subscriber block is empty or invalid".to_string(),
        ));
    }

    let next_boundary = marker_boundary(tables, boundary + 1);
    let call_block = RawTable::concat(tables.get(boundary..next_boundary).unwrap_or_default());
    if call_block.row_count() < 2 {
        return Err(HtsError::Structural(
            "call-record block is empty or invalid".to_string(),
        ));
    }

    debug!(
        subscriber_rows = subscriber.row_count(),
        call_rows = call_block.row_count(),
        "segmented raw tables"
    );
    Ok((SubscriberBlock { table: subscriber }, call_block))
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn marker_table(rows: &[&[&str]]) -> RawTable {
        let mut all: Vec<&[&str]> = vec![&["SIRA NO", "NUMARA"]];
        all.extend_from_slice(rows);
        RawTable::from_str_rows(&all)
    }

    fn subscriber_fragment() -> RawTable {
        RawTable::from_str_rows(&[&["dekor", "dekor"], &["İsim Soyisim", "Adres"]])
    }

    #[test]
    fn test_basic_split() {
        let tables = vec![
            RawTable::default(),
            RawTable::from_str_rows(&[&["tip"]]),
            subscriber_fragment(),
            marker_table(&[&["1", "555"]]),
        ];
        let (subscriber, call) = segment(&tables).unwrap();
        assert_eq!(subscriber.row_count(), 2);
        assert_eq!(call.row_count(), 2);
        assert_eq!(call.cell(0, 0), Some("SIRA NO"));
    }

    #[test]
    fn test_fragmented_call_block_is_merged() {
        // Call block split over three raw fragments by page breaks.
        let tables = vec![
            RawTable::default(),
            RawTable::from_str_rows(&[&["tip"]]),
            subscriber_fragment(),
            marker_table(&[&["1", "555"]]),
            RawTable::from_str_rows(&[&["2", "556"]]),
            RawTable::from_str_rows(&[&["3", "557"]]),
        ];
        let (_, call) = segment(&tables).unwrap();
        assert_eq!(call.row_count(), 4);
        assert_eq!(call.cell(3, 0), Some("3"));
    }

    #[test]
    fn test_second_marker_ends_the_call_block() {
        let tables = vec![
            RawTable::default(),
            RawTable::from_str_rows(&[&["tip"]]),
            subscriber_fragment(),
            marker_table(&[&["1", "555"]]),
            marker_table(&[&["99", "999"]]),
        ];
        let (_, call) = segment(&tables).unwrap();
        assert_eq!(call.row_count(), 2);
        assert_eq!(call.cell(1, 0), Some("1"));
    }

    #[test]
    fn test_only_classification_tables_is_structural() {
        let tables = vec![RawTable::default(), RawTable::from_str_rows(&[&["tip"]])];
        let err = segment(&tables).unwrap_err();
        assert!(matches!(err, HtsError::Structural(_)));
    }

    #[test]
    fn test_missing_call_block_is_structural() {
        // Subscriber fragments present but no marker table follows.
        let tables = vec![
            RawTable::default(),
            RawTable::from_str_rows(&[&["tip"]]),
            subscriber_fragment(),
        ];
        let err = segment(&tables).unwrap_err();
        assert!(matches!(err, HtsError::Structural(m) if m.contains("call-record")));
    }

    #[test]
    fn test_subscriber_line_breaks_are_flattened() {
        let tables = vec![
            RawTable::default(),
            RawTable::from_str_rows(&[&["tip"]]),
            RawTable::from_str_rows(&[&["dekor"], &["Ad\rSoyad"]]),
            marker_table(&[&["1", "555"]]),
        ];
        let (subscriber, _) = segment(&tables).unwrap();
        assert_eq!(subscriber.table().cell(1, 0), Some("Ad Soyad"));
    }
}
