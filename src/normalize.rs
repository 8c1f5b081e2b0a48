//! Field normalizers shared by both extractors.
//!
//! Text cleaning is deliberately conservative: labels and trailing UI
//! affordances are stripped, surrounding whitespace is trimmed, and internal
//! whitespace is left untouched to preserve title and abstract structure.

use crate::patterns::TRAILING_AFFORDANCE;

/// Strip one leading occurrence of `label` from `text` and trim.
///
/// Total function: input without the label comes back trimmed, empty input
/// comes back empty.
#[must_use]
pub fn strip_label(text: &str, label: &str) -> String {
    let trimmed = text.trim();
    match trimmed.strip_prefix(label) {
        Some(rest) => rest.trim().to_string(),
        None => trimmed.to_string(),
    }
}

/// Strip the trailing "... ▽ More" expander from a collapsed abstract.
///
/// Input without the pattern comes back trimmed unchanged; applying the
/// function twice is a no-op after the first.
#[must_use]
pub fn strip_trailing_affordance(text: &str) -> String {
    TRAILING_AFFORDANCE.replace(text, "").trim().to_string()
}
