//! Page classification.

use dom_query::Document;
use serde::{Deserialize, Serialize};

use crate::dom;
use crate::patterns;

/// Coarse classification of a rendered arXiv document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PageKind {
    /// A search listing with at least one result entry.
    Found,
    /// A search listing whose query matched nothing.
    Empty,
    /// A single paper's abstract page.
    Abstract,
    /// Anything else.
    Unknown,
}

/// Classify an already-parsed document.
///
/// Rules are checked in strict priority order and the first match wins:
/// a result entry makes the page `Found` regardless of what else is present,
/// then the no-results message, then the abstract-page title marker.
#[must_use]
pub fn classify_doc(doc: &Document) -> PageKind {
    if !doc.select(patterns::RESULT_ENTRY).is_empty() {
        return PageKind::Found;
    }
    if dom::text_content(&doc.select("body")).contains(patterns::NO_RESULTS_TEXT) {
        return PageKind::Empty;
    }
    if !doc.select(patterns::PAGE_TITLE).is_empty() {
        return PageKind::Abstract;
    }
    PageKind::Unknown
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn page_kind_serializes_lowercase() {
        assert_eq!(serde_json::to_string(&PageKind::Found).unwrap(), "\"found\"");
        assert_eq!(
            serde_json::to_string(&PageKind::Unknown).unwrap(),
            "\"unknown\""
        );
    }
}
