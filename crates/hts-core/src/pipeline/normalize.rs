//! Call-record normalization: header promotion, type coercion, filtering,
//! derived fields, and the variant-specific column transform.

use chrono::{NaiveDate, NaiveDateTime};
use lazy_static::lazy_static;
use regex::Regex;
use tracing::debug;

use crate::error::{HtsError, Result};
use crate::models::variant::RECEIVED_FIRST_RENAMES;
use crate::models::{Cell, DocumentVariant, Frame, RawTable};

/// Phone number of the queried subscriber.
pub const COL_NUMBER: &str = "NUMARA";
/// Call/message type.
pub const COL_TYPE: &str = "TİP";
/// Event timestamp.
pub const COL_DATE: &str = "TARİH";
/// Duration as printed in the report ("60", "120 sn", ...).
pub const COL_DURATION: &str = "SÜRE";
/// Handset identifier.
pub const COL_IMEI: &str = "IMEI";
/// Record sequence number; also the section marker token.
pub const COL_SEQUENCE: &str = "SIRA NO";
/// The other party's number.
pub const COL_OTHER_NUMBER: &str = "DİĞER NUMARA";
/// Derived duration in whole seconds.
pub const COL_DURATION_SECONDS: &str = "salt_sure";

/// Rows whose type contains this substring are call-forwarding events and
/// not genuine call-detail records.
pub const FORWARDING_MARKER: &str = "Yönlendirme";

/// Day-first timestamp formats seen in the source reports.
const TIMESTAMP_FORMATS: &[&str] = &[
    "%d.%m.%Y %H:%M:%S",
    "%d.%m.%Y %H:%M",
    "%d/%m/%Y %H:%M:%S",
    "%d/%m/%Y %H:%M",
    "%d-%m-%Y %H:%M:%S",
    "%d-%m-%Y %H:%M",
];
const DATE_ONLY_FORMATS: &[&str] = &["%d.%m.%Y", "%d/%m/%Y", "%d-%m-%Y"];

lazy_static! {
    static ref DIGIT_RUN: Regex = Regex::new(r"\d+").unwrap();
}

/// Normalize the merged call-record block into the output frame.
///
/// Steps, in order: header promotion, required-column check, phone-number
/// coercion, forwarding filter, blank fill, timestamp parse, optional
/// numeric coercion, duration derivation, and the received-first column
/// transform. Any failed check aborts the whole invocation.
pub fn normalize(block: &RawTable, variant: DocumentVariant) -> Result<Frame> {
    let frame = promote_header(block)?;

    // Checked in fixed order; the first missing column is reported.
    let number_idx = require_column(&frame, COL_NUMBER)?;
    let type_idx = require_column(&frame, COL_TYPE)?;
    let date_idx = require_column(&frame, COL_DATE)?;

    let frame = frame.map_column(number_idx, coerce_int);

    let frame = frame.retain_rows(|row| {
        !matches!(&row[type_idx], Cell::Text(t) if t.contains(FORWARDING_MARKER))
    });

    let frame = frame.fill_blanks(Cell::Int(0));

    let frame = frame.map_column(date_idx, parse_timestamp);
    let parsed_any = frame
        .column(date_idx)
        .any(|cell| matches!(cell, Cell::Timestamp(_)));
    if !frame.is_empty() && !parsed_any {
        // Every row failed to parse: a systemic format mismatch, not
        // scattered bad rows.
        return Err(HtsError::DateFormat);
    }

    let mut frame = frame;
    for name in [COL_IMEI, COL_SEQUENCE] {
        if let Some(idx) = frame.column_index(name) {
            frame = frame.map_column(idx, coerce_int);
        }
    }

    let seconds = match frame.column_index(COL_DURATION) {
        Some(idx) => frame
            .column(idx)
            .map(|cell| Cell::Int(duration_seconds(cell)))
            .collect(),
        None => vec![Cell::Int(0); frame.row_count()],
    };
    let frame = frame.with_column(COL_DURATION_SECONDS, seconds);

    let frame = match variant {
        DocumentVariant::CallFirst => frame,
        DocumentVariant::ReceivedFirst => {
            // In this variant the raw "NUMARA" field denotes the other
            // party; correct the orientation before renaming.
            let other_idx = frame
                .column_index(COL_OTHER_NUMBER)
                .ok_or_else(|| HtsError::MissingColumn(COL_OTHER_NUMBER.to_string()))?;
            frame
                .swap_columns(number_idx, other_idx)
                .rename_columns(RECEIVED_FIRST_RENAMES)
        }
    };

    debug!(records = frame.row_count(), "normalized call-record block");
    Ok(frame)
}

/// Promote row 1 to column names, drop the decorative row 0 and the header
/// row, and reindex the remaining rows from 0.
fn promote_header(block: &RawTable) -> Result<Frame> {
    let rows = block.rows();
    if rows.len() < 2 {
        return Err(HtsError::Structural(
            "call-record block has no header row".to_string(),
        ));
    }

    let columns = rows[1]
        .iter()
        .map(|cell| cell.clone().unwrap_or_default())
        .collect();
    let data = rows[2..]
        .iter()
        .map(|row| {
            row.iter()
                .map(|cell| match cell {
                    Some(text) => Cell::Text(text.clone()),
                    None => Cell::Null,
                })
                .collect()
        })
        .collect();
    Ok(Frame::new(columns, data))
}

fn require_column(frame: &Frame, name: &str) -> Result<usize> {
    frame
        .column_index(name)
        .ok_or_else(|| HtsError::MissingColumn(name.to_string()))
}

/// Coerce a cell to an integer; unparseable values become 0, never errors.
fn coerce_int(cell: &Cell) -> Cell {
    let value = match cell {
        Cell::Int(n) => *n,
        Cell::Text(t) => {
            let t = t.trim();
            t.parse::<i64>()
                .or_else(|_| t.parse::<f64>().map(|f| f as i64))
                .unwrap_or(0)
        }
        _ => 0,
    };
    Cell::Int(value)
}

/// Parse a cell with the day-first convention; unparseable values are null.
fn parse_timestamp(cell: &Cell) -> Cell {
    match cell {
        Cell::Text(t) => parse_day_first(t).map(Cell::Timestamp).unwrap_or(Cell::Null),
        Cell::Timestamp(ts) => Cell::Timestamp(*ts),
        _ => Cell::Null,
    }
}

fn parse_day_first(text: &str) -> Option<NaiveDateTime> {
    let text = text.trim();
    for format in TIMESTAMP_FORMATS {
        if let Ok(ts) = NaiveDateTime::parse_from_str(text, format) {
            return Some(ts);
        }
    }
    for format in DATE_ONLY_FORMATS {
        if let Ok(date) = NaiveDate::parse_from_str(text, format) {
            return date.and_hms_opt(0, 0, 0);
        }
    }
    None
}

/// Leading run of digits in the duration text; no digits yields 0.
fn duration_seconds(cell: &Cell) -> i64 {
    match cell {
        Cell::Int(n) => (*n).max(0),
        Cell::Text(t) => DIGIT_RUN
            .find(t)
            .and_then(|m| m.as_str().parse::<i64>().ok())
            .unwrap_or(0),
        _ => 0,
    }
}
