//! # arxiv-extract
//!
//! Structured bibliographic extraction from rendered arXiv HTML.
//!
//! Given the HTML of an arXiv search-results listing or abstract page
//! (already fetched and rendered by the caller), this crate classifies the
//! page and extracts [`Paper`] records. It is a pure, single-document layer:
//! no fetching, no retries, no caching, no state across calls. The caller
//! owns rendering on one side and serialization of the returned records on
//! the other.
//!
//! ## Quick Start
//!
//! ```rust
//! use arxiv_extract::{classify, extract_search_results, PageKind};
//!
//! let html = r#"<li class="arxiv-result">
//!   <p class="list-title"><a href="https://arxiv.org/abs/2512.05073">arXiv:2512.05073</a></p>
//!   <p class="title is-5">Attention Is Not All You Need</p>
//! </li>"#;
//!
//! assert_eq!(classify(html), PageKind::Found);
//!
//! let papers = extract_search_results(html);
//! assert_eq!(papers[0].id, "2512.05073");
//! assert_eq!(papers[0].pdf_url, "https://arxiv.org/pdf/2512.05073");
//! ```
//!
//! ## Failure isolation
//!
//! The two extractors deliberately fail differently. The listing extractor
//! isolates faults per entry: a broken entry is dropped (and reported via
//! `tracing`) while the rest of the listing survives. The abstract-page
//! extractor fails whole: anything unexpected degrades the entire result to
//! `None`. Neither ever panics or returns an error to the caller.

mod classify;
mod error;
mod options;
mod paper_page;
mod patterns;
mod record;
mod search_results;

/// DOM operations adapter over `dom_query`.
pub mod dom;

/// Character encoding detection and transcoding.
pub mod encoding;

/// Field normalizers shared by both extractors.
pub mod normalize;

/// Search and fetch URL construction.
pub mod queries;

/// URL identifier/PDF derivation and absolute-URL helpers.
pub mod url_utils;

// Public API - re-exports
pub use classify::{classify_doc, PageKind};
pub use error::{Error, Result};
pub use options::Options;
pub use record::{Paper, Paragraph};

/// Classify a rendered arXiv page.
///
/// # Example
///
/// ```rust
/// use arxiv_extract::{classify, PageKind};
///
/// let html = "<html><body><p>Sorry, your query returned no results</p></body></html>";
/// assert_eq!(classify(html), PageKind::Empty);
/// ```
#[must_use]
pub fn classify(html: &str) -> PageKind {
    classify::classify_doc(&dom::parse(html))
}

/// Classify a rendered arXiv page from raw bytes, detecting the charset
/// declared in the document.
#[must_use]
pub fn classify_bytes(html: &[u8]) -> PageKind {
    classify(&encoding::transcode_to_utf8(html))
}

/// Extract every paper record from a search-results listing.
///
/// Records come back in document order; entries without a derivable
/// identifier are skipped. See [`extract_search_results_with_options`] for
/// resolving relative links.
#[must_use]
pub fn extract_search_results(html: &str) -> Vec<Paper> {
    extract_search_results_with_options(html, &Options::default())
}

/// Extract search-results records with explicit context.
///
/// `options.url` is the address of the listing itself and serves as the base
/// for resolving relative entry links.
///
/// # Example
///
/// ```rust
/// use arxiv_extract::{extract_search_results_with_options, Options};
///
/// let html = r#"<li class="arxiv-result">
///   <p class="list-title"><a href="/abs/2512.05073">arXiv:2512.05073</a></p>
/// </li>"#;
/// let options = Options {
///     url: Some("https://arxiv.org/search/?query=llm".to_string()),
/// };
///
/// let papers = extract_search_results_with_options(html, &options);
/// assert_eq!(papers[0].url, "https://arxiv.org/abs/2512.05073");
/// ```
#[must_use]
pub fn extract_search_results_with_options(html: &str, options: &Options) -> Vec<Paper> {
    search_results::extract(&dom::parse(html), options)
}

/// Extract search-results records from raw bytes.
#[must_use]
pub fn extract_search_results_bytes(html: &[u8], options: &Options) -> Vec<Paper> {
    extract_search_results_with_options(&encoding::transcode_to_utf8(html), options)
}

/// Extract the single paper record from an abstract page.
///
/// `url` is the address the page was rendered from; it becomes the record's
/// `url` and drives identifier derivation. Returns `None` when the document
/// holds no recognizable paper.
///
/// # Example
///
/// ```rust
/// use arxiv_extract::extract_paper;
///
/// let html = r#"<html><body>
///   <h1 class="title"><span class="descriptor">Title:</span>Attention Is All You Need</h1>
///   <blockquote class="abstract"><span class="descriptor">Abstract:</span> The dominant models...</blockquote>
/// </body></html>"#;
///
/// let paper = extract_paper(html, "https://arxiv.org/abs/1706.03762v5").unwrap();
/// assert_eq!(paper.id, "1706.03762");
/// assert_eq!(paper.pdf_url, "https://arxiv.org/pdf/1706.03762v5");
/// ```
#[must_use]
pub fn extract_paper(html: &str, url: &str) -> Option<Paper> {
    let options = Options {
        url: Some(url.to_string()),
    };
    extract_paper_with_options(html, &options)
}

/// Extract an abstract-page record with explicit context.
///
/// When `options.url` is absent the document's canonical link is used as a
/// fallback address.
#[must_use]
pub fn extract_paper_with_options(html: &str, options: &Options) -> Option<Paper> {
    paper_page::extract(&dom::parse(html), options)
}

/// Extract an abstract-page record from raw bytes.
#[must_use]
pub fn extract_paper_bytes(html: &[u8], options: &Options) -> Option<Paper> {
    extract_paper_with_options(&encoding::transcode_to_utf8(html), options)
}
