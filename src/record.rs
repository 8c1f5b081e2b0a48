//! Output record types.
//!
//! Every record is built fresh from the document at call time and handed to
//! the caller by value; the caller owns serialization and transport.

use serde::{Deserialize, Serialize};

/// A bibliographic record extracted from one arXiv page.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Paper {
    /// Canonical arXiv identifier. Listing records always carry one;
    /// an abstract-page record may have an empty id when no address for
    /// the document is known.
    pub id: String,

    /// Paper title, trimmed and label-free.
    pub title: String,

    /// Author names in document order. May be empty.
    pub authors: Vec<String>,

    /// Cleaned abstract text. May be empty.
    pub summary: String,

    /// Raw human-readable submission date token, e.g. "30 October, 2023".
    pub published_date: String,

    /// Absolute URL of the source page.
    pub url: String,

    /// PDF URL derived from `url`.
    pub pdf_url: String,

    /// Full-text paragraphs added by a later enrichment step.
    ///
    /// Always `None` in this crate; the field stays in the schema so
    /// serialized records round-trip with enriched ones.
    pub description_paragraphs: Option<Vec<Paragraph>>,
}

/// One paragraph of enriched full text.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Paragraph {
    /// Zero-padded ordinal within the document ("0001", "0002", ...).
    pub number: String,

    /// Paragraph identifier, when the source provides one.
    pub id: String,

    /// Paragraph text.
    pub text: String,
}
