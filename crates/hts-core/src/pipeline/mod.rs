//! The extraction-classification-normalization pipeline.
//!
//! Each stage consumes only the previous stage's validated output and
//! returns either validated data or a typed error; composition
//! short-circuits on the first failure. One invocation is one all-or-nothing
//! attempt — no partial output, no row-level error accumulation, no retries.

mod classify;
mod locate;
mod normalize;
mod segment;

pub use classify::classify;
pub use locate::locate_page_range;
pub use normalize::normalize;
pub use segment::{segment, SubscriberBlock};

use std::path::{Path, PathBuf};

use serde::Serialize;
use tracing::{error, info};

use crate::error::{HtsError, Result};
use crate::export::{output_path, write_csv};
use crate::models::HtsConfig;
use crate::pdf::ReportDocument;

/// Header token that begins a new logical table in the report; doubles as
/// the anchor phrase for page-range location.
pub const SEQUENCE_MARKER: &str = "SIRA NO";

/// Caller-facing result of one conversion attempt.
#[derive(Debug, Clone, Serialize)]
pub struct ConversionReport {
    /// Whether the invocation produced an output file.
    pub success: bool,
    /// User-facing message; sanitized on failure.
    pub message: String,
    /// Populated only on success, never partially.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<ConversionData>,
}

/// Payload of a successful conversion.
#[derive(Debug, Clone, Serialize)]
pub struct ConversionData {
    /// Where the CSV was written.
    pub output_path: PathBuf,
    /// Number of normalized call records.
    pub record_count: usize,
}

impl ConversionReport {
    fn completed(data: ConversionData) -> Self {
        Self {
            success: true,
            message: "Report processed and converted to CSV.".to_string(),
            data: Some(data),
        }
    }

    /// Failure report carrying only the sanitized message; the full error
    /// goes to the log here.
    pub fn failure(err: &HtsError) -> Self {
        error!(error = %err, "report conversion failed");
        Self {
            success: false,
            message: err.user_message(),
            data: None,
        }
    }

    fn rejected(message: String) -> Self {
        Self {
            success: false,
            message,
            data: None,
        }
    }
}

/// Run the whole pipeline over one report document.
///
/// `input` is the path the document was loaded from; the output path is
/// derived from it per the configured collision policy. The output file is
/// written only after every validation step has succeeded.
pub fn process_report(
    doc: &dyn ReportDocument,
    input: &Path,
    config: &HtsConfig,
) -> ConversionReport {
    if !config.extension_allowed(input) {
        return ConversionReport::rejected(format!(
            "File type not allowed; accepted: {}.",
            config.allowed_extensions.join(", ")
        ));
    }

    match run(doc, input, config) {
        Ok(data) => {
            info!(
                records = data.record_count,
                output = %data.output_path.display(),
                "report converted"
            );
            ConversionReport::completed(data)
        }
        Err(err) => ConversionReport::failure(&err),
    }
}

fn run(doc: &dyn ReportDocument, input: &Path, config: &HtsConfig) -> Result<ConversionData> {
    let range = locate_page_range(doc, SEQUENCE_MARKER);
    let tables = doc.extract_tables(&range)?;
    info!(tables = tables.len(), range = %range, "extracted raw tables");

    let variant = classify(&tables)?;
    let (subscriber, call_block) = segment(&tables)?;
    info!(
        ?variant,
        subscriber_rows = subscriber.row_count(),
        "report classified and segmented"
    );

    let frame = normalize(&call_block, variant)?;

    let output = output_path(input, config.on_collision);
    write_csv(&frame, &output)?;

    Ok(ConversionData {
        output_path: output,
        record_count: frame.row_count(),
    })
}
