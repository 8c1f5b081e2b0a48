//! URL utilities: identifier/PDF derivation and absolute-URL helpers.

use url::Url;

use crate::patterns::VERSION_SUFFIX;

/// Path marker separating the abstract-page prefix from the identifier.
const ABS_MARKER: &str = "/abs/";

/// Replacement marker producing the PDF URL.
const PDF_MARKER: &str = "/pdf/";

/// How [`derive_ids`] treats a trailing version suffix.
///
/// Listing extraction keeps the suffix verbatim; abstract-page extraction
/// strips it. The asymmetry is observed behavior and kept as-is.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IdPolicy {
    /// Keep the identifier exactly as it appears in the URL.
    Verbatim,
    /// Drop a trailing `v<digits>` suffix ("2512.05073v2" -> "2512.05073").
    StripVersion,
}

/// Identifier and PDF URL derived from an abstract-page URL.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DerivedIds {
    /// Canonical identifier; empty when the URL has no `/abs/` marker.
    pub id: String,
    /// PDF URL; equals the input when the URL has no `/abs/` marker.
    pub pdf_url: String,
}

/// Derive the canonical identifier and PDF URL from an abstract-page URL.
///
/// The PDF URL swaps the first `/abs/` for `/pdf/`. The identifier is the
/// substring after the first `/abs/`, shaped by `policy`; the version suffix
/// always survives in the PDF URL.
#[must_use]
pub fn derive_ids(url: &str, policy: IdPolicy) -> DerivedIds {
    let pdf_url = url.replacen(ABS_MARKER, PDF_MARKER, 1);
    let id = match url.split_once(ABS_MARKER) {
        Some((_, rest)) => match policy {
            IdPolicy::Verbatim => rest.to_string(),
            IdPolicy::StripVersion => VERSION_SUFFIX.replace(rest, "").into_owned(),
        },
        None => String::new(),
    };
    DerivedIds { id, pdf_url }
}

/// Check whether a string is an absolute http(s) URL with a host.
#[must_use]
pub fn is_absolute_url(s: &str) -> bool {
    let s = s.trim();
    (s.starts_with("http://") || s.starts_with("https://"))
        && Url::parse(s).is_ok_and(|u| u.host().is_some())
}

/// Resolve `href` against `base` when it is not already absolute.
///
/// Empty input, an absolute input, an unknown base, and a failed join all
/// come back unchanged (trimmed).
#[must_use]
pub fn make_absolute(href: &str, base: Option<&Url>) -> String {
    let href = href.trim();
    if href.is_empty() || is_absolute_url(href) {
        return href.to_string();
    }
    match base {
        Some(base) => base
            .join(href)
            .map_or_else(|_| href.to_string(), |resolved| resolved.to_string()),
        None => href.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn derive_ids_verbatim_keeps_version() {
        let derived = derive_ids("https://arxiv.org/abs/2512.05073v2", IdPolicy::Verbatim);
        assert_eq!(derived.id, "2512.05073v2");
        assert_eq!(derived.pdf_url, "https://arxiv.org/pdf/2512.05073v2");
    }

    #[test]
    fn derive_ids_strips_version() {
        let derived = derive_ids("https://arxiv.org/abs/2512.05073v2", IdPolicy::StripVersion);
        assert_eq!(derived.id, "2512.05073");
        // the PDF URL keeps the version the page was rendered at
        assert_eq!(derived.pdf_url, "https://arxiv.org/pdf/2512.05073v2");
    }

    #[test]
    fn derive_ids_without_version_suffix() {
        let derived = derive_ids("https://arxiv.org/abs/2512.05073", IdPolicy::Verbatim);
        assert_eq!(derived.id, "2512.05073");
        assert_eq!(derived.pdf_url, "https://arxiv.org/pdf/2512.05073");
    }

    #[test]
    fn derive_ids_old_style_identifier() {
        let derived = derive_ids(
            "https://arxiv.org/abs/cond-mat/0703470",
            IdPolicy::StripVersion,
        );
        assert_eq!(derived.id, "cond-mat/0703470");
        assert_eq!(derived.pdf_url, "https://arxiv.org/pdf/cond-mat/0703470");
    }

    #[test]
    fn derive_ids_without_marker() {
        let derived = derive_ids("https://example.com/paper/123", IdPolicy::Verbatim);
        assert_eq!(derived.id, "");
        assert_eq!(derived.pdf_url, "https://example.com/paper/123");
    }

    #[test]
    fn derive_ids_empty_input() {
        let derived = derive_ids("", IdPolicy::Verbatim);
        assert_eq!(derived.id, "");
        assert_eq!(derived.pdf_url, "");
    }

    #[test]
    fn derive_ids_only_first_marker_is_replaced() {
        let derived = derive_ids("https://arxiv.org/abs/abs/weird", IdPolicy::Verbatim);
        assert_eq!(derived.id, "abs/weird");
        assert_eq!(derived.pdf_url, "https://arxiv.org/pdf/abs/weird");
    }

    #[test]
    fn is_absolute_url_cases() {
        assert!(is_absolute_url("https://arxiv.org/abs/2512.05073"));
        assert!(is_absolute_url("  http://arxiv.org  "));
        assert!(!is_absolute_url("/abs/2512.05073"));
        assert!(!is_absolute_url("arxiv.org/abs/2512.05073"));
        assert!(!is_absolute_url(""));
    }

    #[test]
    fn make_absolute_resolves_relative_href() {
        let base = Url::parse("https://arxiv.org/search/?query=llm").ok();
        assert_eq!(
            make_absolute("/abs/2512.05073", base.as_ref()),
            "https://arxiv.org/abs/2512.05073"
        );
    }

    #[test]
    fn make_absolute_passes_through_absolute_href() {
        let base = Url::parse("https://example.com/").ok();
        assert_eq!(
            make_absolute("https://arxiv.org/abs/2512.05073", base.as_ref()),
            "https://arxiv.org/abs/2512.05073"
        );
    }

    #[test]
    fn make_absolute_without_base_keeps_input() {
        assert_eq!(make_absolute("/abs/2512.05073", None), "/abs/2512.05073");
        assert_eq!(make_absolute("  ", None), "");
    }
}
