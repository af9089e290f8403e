//! Error types for the hts-core library.

use thiserror::Error;

/// Main error type for the hts library.
///
/// Every pipeline stage returns one of these on its first failed check;
/// nothing is retried and no partial output survives a failure.
#[derive(Error, Debug)]
pub enum HtsError {
    /// A required table or block is missing, empty, or too small.
    #[error("document structure invalid: {0}")]
    Structural(String),

    /// The document was recognized but is not one of the supported
    /// report variants. Carries the descriptor text that was found.
    #[error("unsupported report format: {0:?}")]
    UnsupportedFormat(String),

    /// A semantically required column is absent from the call-record table.
    #[error("missing required column: {0}")]
    MissingColumn(String),

    /// Systemic timestamp parse failure: the call-record block is non-empty
    /// but not a single timestamp cell could be parsed.
    #[error("no timestamp in the call-record block could be parsed")]
    DateFormat,

    /// The external table-extraction collaborator failed.
    #[error("table extraction failed: {0}")]
    Extraction(String),

    /// PDF processing error.
    #[error("PDF error: {0}")]
    Pdf(#[from] PdfError),

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// CSV serialization error.
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// Catch-all for anything not anticipated above.
    #[error("unexpected error: {0}")]
    Unexpected(String),
}

/// Errors related to PDF access.
#[derive(Error, Debug)]
pub enum PdfError {
    /// Failed to open/parse the PDF file.
    #[error("failed to parse PDF: {0}")]
    Parse(String),

    /// Failed to extract text from the PDF.
    #[error("failed to extract text: {0}")]
    TextExtraction(String),

    /// The PDF is encrypted and cannot be processed.
    #[error("PDF is encrypted")]
    Encrypted,

    /// The PDF is empty or has no pages.
    #[error("PDF has no pages")]
    NoPages,

    /// Invalid page number requested.
    #[error("invalid page number: {0}")]
    InvalidPage(u32),
}

impl HtsError {
    /// Sanitized message for the caller-facing result contract.
    ///
    /// Full diagnostic detail stays in the log; only this string crosses
    /// the system boundary.
    pub fn user_message(&self) -> String {
        match self {
            HtsError::Structural(_) => {
                "Report format not recognized: required tables were not found.".to_string()
            }
            HtsError::UnsupportedFormat(_) => {
                "Unsupported report format. Only İletişimin Tespiti (call/received) \
                 reports are supported."
                    .to_string()
            }
            HtsError::MissingColumn(column) => {
                format!("Required column {column:?} was not found in the call-record table.")
            }
            HtsError::DateFormat => {
                "Timestamp column could not be parsed; the report uses an unknown date format."
                    .to_string()
            }
            HtsError::Extraction(_) => {
                "Table extraction from the report failed.".to_string()
            }
            HtsError::Pdf(_) => "The PDF file could not be read.".to_string(),
            HtsError::Io(_) | HtsError::Csv(_) => {
                "The output file could not be written.".to_string()
            }
            HtsError::Unexpected(_) => {
                "An unexpected error occurred while processing the report.".to_string()
            }
        }
    }
}

/// Result type for the hts library.
pub type Result<T> = std::result::Result<T, HtsError>;
