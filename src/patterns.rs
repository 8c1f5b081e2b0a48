//! Compiled regex patterns and CSS markers for arXiv page extraction.
//!
//! Regexes are compiled once at first use via `LazyLock`. The CSS selectors
//! name the structural markers of arXiv's search listing and abstract pages.

#![allow(clippy::expect_used)]

use std::sync::LazyLock;

use regex::Regex;

// =============================================================================
// Search listing markers
// =============================================================================

/// One candidate paper within a search listing.
pub const RESULT_ENTRY: &str = "li.arxiv-result";

/// Title node inside a listing entry.
pub const ENTRY_TITLE: &str = ".title";

/// Author links under an authors container (listing entry or abstract page).
pub const AUTHOR_LINKS: &str = ".authors > a";

/// Collapsed abstract inside a listing entry.
pub const ENTRY_ABSTRACT: &str = ".abstract-short";

/// Submission-date line inside a listing entry.
pub const ENTRY_DATE: &str = "p.is-size-7";

/// Link to the abstract page inside a listing entry.
pub const ENTRY_LINK: &str = ".list-title > a";

/// Message arXiv renders when a query matches nothing.
pub const NO_RESULTS_TEXT: &str = "Sorry, your query returned no results";

// =============================================================================
// Abstract page markers
// =============================================================================

/// Title heading on an abstract page.
pub const PAGE_TITLE: &str = "h1.title";

/// Abstract block on an abstract page.
pub const PAGE_ABSTRACT: &str = "blockquote.abstract";

/// Submission dateline on an abstract page.
pub const PAGE_DATELINE: &str = ".dateline";

// =============================================================================
// Text patterns
// =============================================================================

/// Trailing "... ▽ More" expander left on collapsed abstracts.
///
/// The ellipsis is optional and the triangle appears in both the white (▽)
/// and black (▼) variant depending on the widget state.
pub static TRAILING_AFFORDANCE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\s*(?:\.{3}|…)?\s*[▽▼]\s*More\s*$").expect("valid regex")
});

/// Trailing version suffix on an arXiv identifier ("2512.05073v2" -> "v2").
///
/// Anchored at the end so identifiers containing a letter "v" elsewhere are
/// left alone.
pub static VERSION_SUFFIX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"v\d+$").expect("valid regex")
});

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn affordance_matches_both_triangle_variants() {
        assert!(TRAILING_AFFORDANCE.is_match("text ... ▽ More"));
        assert!(TRAILING_AFFORDANCE.is_match("text ▼ More"));
    }

    #[test]
    fn affordance_is_anchored_at_the_end() {
        assert!(!TRAILING_AFFORDANCE.is_match("▽ More text continues"));
    }

    #[test]
    fn version_suffix_only_at_end() {
        assert!(VERSION_SUFFIX.is_match("2512.05073v2"));
        assert!(!VERSION_SUFFIX.is_match("cond-mat/0703470"));
        assert!(!VERSION_SUFFIX.is_match("2512.05073v2/extra"));
    }
}
