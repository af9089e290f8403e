//! Page range passed to the table-extraction collaborator.

use std::fmt;

/// The page span over which tables are extracted.
///
/// Computed once by the page-range locator and read-only afterwards.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageRange {
    /// The entire document.
    All,
    /// A bounded 1-indexed page interval, inclusive on both ends.
    Bounded { start: u32, end: u32 },
}

impl PageRange {
    /// Render to the extractor's page-spec string (`"start-end"` or `"all"`).
    pub fn as_spec(&self) -> String {
        self.to_string()
    }

    /// Whether a 1-indexed page falls within this range.
    pub fn contains(&self, page: u32) -> bool {
        match self {
            PageRange::All => true,
            PageRange::Bounded { start, end } => (*start..=*end).contains(&page),
        }
    }
}

impl fmt::Display for PageRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PageRange::All => write!(f, "all"),
            PageRange::Bounded { start, end } => write!(f, "{start}-{end}"),
        }
    }
}
