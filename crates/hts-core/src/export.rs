//! CSV serialization of the normalized call-record frame.

use std::fs::File;
use std::io::Write;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::error::Result;
use crate::models::{Cell, CollisionPolicy, Frame};

/// UTF-8 byte order mark; keeps non-ASCII subscriber names intact when the
/// file is opened in spreadsheet tools.
const UTF8_BOM: &[u8] = b"\xEF\xBB\xBF";

/// Derive the output path from the input path: same stem, `.csv` extension.
///
/// Under the `Rename` policy an existing file is left alone and the next
/// free numbered name is chosen instead.
pub fn output_path(input: &Path, policy: CollisionPolicy) -> PathBuf {
    let base = input.with_extension("csv");
    match policy {
        CollisionPolicy::Overwrite => base,
        CollisionPolicy::Rename => {
            if !base.exists() {
                return base;
            }
            let stem = base
                .file_stem()
                .and_then(|s| s.to_str())
                .unwrap_or("output")
                .to_string();
            let dir = base.parent().map(Path::to_path_buf).unwrap_or_default();
            (1..)
                .map(|n| dir.join(format!("{stem}-{n}.csv")))
                .find(|candidate| !candidate.exists())
                .unwrap_or(base)
        }
    }
}

/// Write the frame as a delimited file: BOM, header row of final column
/// names, then one record per row.
pub fn write_csv(frame: &Frame, path: &Path) -> Result<()> {
    let mut file = File::create(path)?;
    file.write_all(UTF8_BOM)?;

    let mut writer = csv::Writer::from_writer(file);
    writer.write_record(frame.columns())?;
    for row in frame.rows() {
        writer.write_record(row.iter().map(Cell::to_field))?;
    }
    writer.flush()?;

    debug!(records = frame.row_count(), path = %path.display(), "wrote CSV");
    Ok(())
}
