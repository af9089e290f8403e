//! PDF-backed report documents using lopdf and pdf-extract.

use std::path::Path;

use lopdf::Document;
use tracing::debug;

use super::{ReportDocument, TableSource};
use crate::error::{PdfError, Result};
use crate::models::{PageRange, RawTable};

/// A report PDF paired with a table source.
///
/// Page text comes from pdf-extract; the raw tables come from the attached
/// [`TableSource`] collaborator.
pub struct PdfReport {
    document: Document,
    raw_data: Vec<u8>,
    tables: Box<dyn TableSource>,
}

impl PdfReport {
    /// Open a report from a file.
    pub fn open(path: &Path, tables: Box<dyn TableSource>) -> Result<Self> {
        let data = std::fs::read(path)?;
        Self::from_bytes(&data, tables)
    }

    /// Load a report from raw PDF bytes.
    pub fn from_bytes(data: &[u8], tables: Box<dyn TableSource>) -> Result<Self> {
        let mut document =
            Document::load_mem(data).map_err(|e| PdfError::Parse(e.to_string()))?;

        // Handle PDFs with empty password encryption
        let raw_data = if document.is_encrypted() {
            if document.decrypt("").is_err() {
                return Err(PdfError::Encrypted.into());
            }
            debug!("decrypted PDF with empty password");

            let mut decrypted = Vec::new();
            document
                .save_to(&mut decrypted)
                .map_err(|e| PdfError::Parse(format!("failed to save decrypted PDF: {e}")))?;
            decrypted
        } else {
            data.to_vec()
        };

        let page_count = document.get_pages().len();
        if page_count == 0 {
            return Err(PdfError::NoPages.into());
        }
        debug!("loaded report PDF with {} pages", page_count);

        Ok(Self {
            document,
            raw_data,
            tables,
        })
    }

    fn extract_text(&self) -> Result<String> {
        let text = pdf_extract::extract_text_from_mem(&self.raw_data)
            .map_err(|e| PdfError::TextExtraction(e.to_string()))?;
        Ok(text)
    }
}

impl ReportDocument for PdfReport {
    fn page_count(&self) -> u32 {
        self.document.get_pages().len() as u32
    }

    fn page_text(&self, page: u32) -> Result<String> {
        let page_count = self.page_count();
        if page == 0 || page > page_count {
            return Err(PdfError::InvalidPage(page).into());
        }

        // pdf-extract has no per-page API; slice the full text evenly.
        let full_text = self.extract_text()?;
        let lines: Vec<&str> = full_text.lines().collect();
        let lines_per_page = lines.len() / page_count as usize;
        let start = (page - 1) as usize * lines_per_page;
        let end = page as usize * lines_per_page;

        Ok(lines[start.min(lines.len())..end.min(lines.len())].join("\n"))
    }

    fn extract_tables(&self, range: &PageRange) -> Result<Vec<RawTable>> {
        debug!("extracting tables over pages {}", range.as_spec());
        self.tables.extract(range)
    }
}
