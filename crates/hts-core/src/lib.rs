//! Core library for HTS call-detail report extraction.
//!
//! This crate provides:
//! - PDF access (page counts, per-page text) behind a document-handle trait
//! - Page-range location, variant classification, and table segmentation
//! - Call-record normalization with variant-specific column transforms
//! - CSV export of the validated dataset

pub mod error;
pub mod export;
pub mod models;
pub mod pdf;
pub mod pipeline;

pub use error::{HtsError, PdfError, Result};
pub use models::{
    Cell, CollisionPolicy, DocumentVariant, Frame, HtsConfig, PageRange, RawTable,
};
pub use pdf::{InMemoryTableSource, JsonTableSource, PdfReport, ReportDocument, TableSource};
pub use pipeline::{process_report, ConversionData, ConversionReport, SEQUENCE_MARKER};
