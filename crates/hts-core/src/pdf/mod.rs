//! Document access: page text, page counts, and the table-extraction seam.

mod report;
mod tables;

pub use report::PdfReport;
pub use tables::{InMemoryTableSource, JsonTableSource};

use crate::error::Result;
use crate::models::{PageRange, RawTable};

/// Handle to one report document.
///
/// The pipeline consumes reports exclusively through this trait; tests
/// substitute an in-memory stub.
pub trait ReportDocument {
    /// Number of pages in the document.
    fn page_count(&self) -> u32;

    /// Plain text of a single 1-indexed page.
    fn page_text(&self, page: u32) -> Result<String>;

    /// Ordered raw tables over the given page range, grid detection on,
    /// multi-table mode, no implicit header row.
    fn extract_tables(&self, range: &PageRange) -> Result<Vec<RawTable>>;
}

/// The external lattice-extraction collaborator, reduced to its interface.
pub trait TableSource {
    /// Raw tables over the given page range, in document order.
    fn extract(&self, range: &PageRange) -> Result<Vec<RawTable>>;
}
