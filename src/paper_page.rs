//! Abstract-page extraction.
//!
//! One rendered abstract page in, one record out. Any failure degrades the
//! whole result to `None`; nothing partial crosses the boundary, and no
//! error propagates to the caller.

use dom_query::{Document, Selection};

use crate::dom;
use crate::error::{Error, Result};
use crate::normalize::strip_label;
use crate::options::Options;
use crate::patterns;
use crate::record::Paper;
use crate::url_utils::{self, DerivedIds, IdPolicy};

/// Extract the paper record from an abstract page.
///
/// Returns `None` when the document holds no recognizable paper; the failure
/// is reported on the diagnostic channel.
#[must_use]
pub fn extract(doc: &Document, options: &Options) -> Option<Paper> {
    match try_extract(doc, options) {
        Ok(paper) => Some(paper),
        Err(error) => {
            tracing::warn!(error = %error, "paper page extraction failed");
            None
        }
    }
}

fn try_extract(doc: &Document, options: &Options) -> Result<Paper> {
    let root = doc.select("html");

    let title_node = dom::first(&root, patterns::PAGE_TITLE);
    let abstract_node = dom::first(&root, patterns::PAGE_ABSTRACT);
    if title_node.is_none() && abstract_node.is_none() {
        // neither marker present: not a paper page at all
        return Err(Error::NoContent);
    }

    let title = title_node
        .map(|sel| strip_label(&sel.text(), "Title:"))
        .unwrap_or_default();

    let authors: Vec<String> = root
        .select(patterns::AUTHOR_LINKS)
        .nodes()
        .iter()
        .map(|node| Selection::from(*node).text().trim().to_string())
        .collect();

    let summary = abstract_node
        .map(|sel| strip_label(&sel.text(), "Abstract:"))
        .unwrap_or_default();

    let published_date = dom::first_text(&root, patterns::PAGE_DATELINE)
        .map(|text| dateline_value(&text))
        .unwrap_or_default();

    let url = document_url(&root, options);
    let DerivedIds { id, pdf_url } = url_utils::derive_ids(&url, IdPolicy::StripVersion);

    Ok(Paper {
        id,
        title,
        authors,
        summary,
        published_date,
        url,
        pdf_url,
        description_paragraphs: None,
    })
}

/// "(Submitted on 17 Jun 2017)" -> "17 Jun 2017".
fn dateline_value(text: &str) -> String {
    let trimmed = text.trim();
    let trimmed = trimmed.strip_prefix("(Submitted on").unwrap_or(trimmed);
    let trimmed = trimmed.strip_suffix(')').unwrap_or(trimmed);
    trimmed.trim().to_string()
}

/// The document's own address: what the harness rendered when it told us,
/// else the canonical link, else `og:url`, else empty.
fn document_url(root: &Selection, options: &Options) -> String {
    if let Some(url) = options.url.as_deref() {
        let url = url.trim();
        if !url.is_empty() {
            return url.to_string();
        }
    }
    for (selector, attribute) in [
        ("link[rel='canonical']", "href"),
        ("meta[property='og:url']", "content"),
    ] {
        if let Some(value) = dom::first_attr(root, selector, attribute) {
            let value = value.trim();
            if url_utils::is_absolute_url(value) {
                return value.to_string();
            }
        }
    }
    String::new()
}
