//! Search-results listing extraction.
//!
//! Walks every result entry in document order and extracts each one
//! independently: an entry that fails is dropped and reported, the rest of
//! the listing survives. This per-entry isolation is the defining property
//! of the listing extractor; the abstract-page extractor fails whole instead.

use dom_query::{Document, Selection};
use url::Url;

use crate::dom;
use crate::error::{Error, Result};
use crate::normalize::{strip_label, strip_trailing_affordance};
use crate::options::Options;
use crate::patterns;
use crate::record::Paper;
use crate::url_utils::{self, DerivedIds, IdPolicy};

/// Extract every paper record from a search listing, in document order.
///
/// Entries that cannot yield an identifier are skipped; the skip is emitted
/// at debug level on the diagnostic channel and never aborts the batch.
#[must_use]
pub fn extract(doc: &Document, options: &Options) -> Vec<Paper> {
    let base = options.url.as_deref().and_then(|u| Url::parse(u).ok());
    let mut papers = Vec::new();
    for (index, node) in doc.select(patterns::RESULT_ENTRY).nodes().iter().enumerate() {
        let entry = Selection::from(*node);
        match extract_entry(&entry, base.as_ref()) {
            Ok(paper) => papers.push(paper),
            Err(error) => {
                tracing::debug!(entry = index, error = %error, "skipping result entry");
            }
        }
    }
    papers
}

/// Extract one listing entry. Missing fields degrade to empty values; only a
/// missing identifier fails the entry.
fn extract_entry(entry: &Selection, base: Option<&Url>) -> Result<Paper> {
    let title = dom::first_text(entry, patterns::ENTRY_TITLE)
        .map(|text| strip_label(&text, "Title:"))
        .unwrap_or_default();

    let authors: Vec<String> = entry
        .select(patterns::AUTHOR_LINKS)
        .nodes()
        .iter()
        .map(|node| Selection::from(*node).text().trim().to_string())
        .collect();

    let summary = dom::first_text(entry, patterns::ENTRY_ABSTRACT)
        .map(|text| strip_trailing_affordance(&strip_label(&text, "Abstract:")))
        .unwrap_or_default();

    let published_date = dom::first_text(entry, patterns::ENTRY_DATE)
        .map(|text| submitted_segment(&text))
        .unwrap_or_default();

    let href = dom::first_attr(entry, patterns::ENTRY_LINK, "href").unwrap_or_default();
    let url = url_utils::make_absolute(&href, base);

    let DerivedIds { id, pdf_url } = url_utils::derive_ids(&url, IdPolicy::Verbatim);
    if id.is_empty() {
        return Err(Error::MissingLink);
    }

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

/// Leading segment of the submission line, before announcement notes.
///
/// "Submitted 30 October, 2023; originally announced October 2023."
/// -> "30 October, 2023"
fn submitted_segment(text: &str) -> String {
    let leading = text.split(';').next().unwrap_or(text);
    strip_label(leading, "Submitted")
}
