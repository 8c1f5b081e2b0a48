//! DOM operations adapter.
//!
//! Thin wrappers over `dom_query` giving the extractors their document
//! capabilities: select-first, text content, attribute retrieval. A parsed
//! [`Document`] is the in-memory document tree; tests build one straight
//! from fixture HTML, so no rendering engine is involved anywhere.

// Re-export core types for external use
pub use dom_query::{Document, Selection};

// Re-export StrTendril for external use
pub use tendril::StrTendril;

/// Parse an HTML document.
#[inline]
#[must_use]
pub fn parse(html: &str) -> Document {
    Document::from(html)
}

/// Get all text content of a selection's nodes and descendants.
///
/// Returns `StrTendril` for zero-copy passing. Use `.to_string()` only when
/// you need owned storage.
#[inline]
#[must_use]
pub fn text_content(sel: &Selection) -> StrTendril {
    sel.text()
}

/// Get an attribute value of the first node in the selection.
#[inline]
#[must_use]
pub fn get_attribute(sel: &Selection, name: &str) -> Option<String> {
    sel.attr(name).map(|s| s.to_string())
}

/// First node matching `selector` under `scope`, in document order.
#[must_use]
pub fn first<'a>(scope: &Selection<'a>, selector: &str) -> Option<Selection<'a>> {
    let found = scope.select_single(selector);
    if found.is_empty() {
        None
    } else {
        Some(found)
    }
}

/// Text of the first match under `scope`; `None` when nothing matches.
#[must_use]
pub fn first_text(scope: &Selection, selector: &str) -> Option<String> {
    first(scope, selector).map(|sel| sel.text().to_string())
}

/// Attribute of the first match under `scope`; `None` when nothing matches
/// or the attribute is unset.
#[must_use]
pub fn first_attr(scope: &Selection, selector: &str, name: &str) -> Option<String> {
    first(scope, selector).and_then(|sel| get_attribute(&sel, name))
}
