//! Page-range location via the second occurrence of the anchor phrase.

use tracing::debug;

use crate::models::PageRange;
use crate::pdf::ReportDocument;

/// Below this page count extraction runs over the whole document; anchor
/// narrowing is unnecessary on short reports and risks truncation.
const MIN_PAGES_FOR_NARROWING: u32 = 5;

/// Bound the extraction range to the first logical section of the report.
///
/// The anchor phrase recurs at the start of a second, irrelevant section;
/// scanning stops at the second match and the range becomes
/// `[1, second-match-page]`. With fewer than two matches the whole document
/// is used. This stage never fails: unreadable pages count as non-matches.
pub fn locate_page_range(doc: &dyn ReportDocument, anchor: &str) -> PageRange {
    let page_count = doc.page_count();
    if page_count < MIN_PAGES_FOR_NARROWING {
        return PageRange::All;
    }

    let mut matched_pages = Vec::with_capacity(2);
    for page in 1..=page_count {
        let text = doc.page_text(page).unwrap_or_default();
        if text.contains(anchor) {
            matched_pages.push(page);
        }
        if matched_pages.len() == 2 {
            break;
        }
    }

    let range = match matched_pages.get(1) {
        Some(&second) => PageRange::Bounded {
            start: 1,
            end: second,
        },
        None => PageRange::All,
    };
    debug!(pages = page_count, range = %range, "located extraction range");
    range
}
