//! Search and fetch URL construction.
//!
//! Pure string derivation for the harness; nothing here performs I/O.
//! The search endpoint pages in chunks of 50, newest announcements first
//! when the advanced (date-filtered) form is used.

/// Build a search-results URL for `query` at result offset `start`.
///
/// With either date bound set, the advanced-search endpoint is used with a
/// submitted-date range filter; bounds are `YYYY-MM-DD` strings and an open
/// bound is left empty.
#[must_use]
pub fn build_search_url(
    query: &str,
    start: usize,
    after: Option<&str>,
    before: Option<&str>,
) -> String {
    let encoded_query = urlencoding::encode(query);
    if after.is_some() || before.is_some() {
        let from_date = after.unwrap_or("");
        let to_date = before.unwrap_or("");
        format!(
            "https://arxiv.org/search/advanced?advanced=1&terms-0-operator=AND&terms-0-term={encoded_query}&terms-0-field=all&classification-physics_archives=all&classification-include_cross_list=include&date-filter_by=date_range&date-from_date={from_date}&date-to_date={to_date}&date-date_type=submitted_date&abstracts=show&size=50&order=-announced_date_first&start={start}"
        )
    } else {
        format!(
            "https://arxiv.org/search/?query={encoded_query}&searchtype=all&source=header&start={start}"
        )
    }
}

/// Build the abstract-page URL for a bare identifier.
///
/// Full http(s) URLs pass through unchanged so callers can hand over either
/// form.
#[must_use]
pub fn build_fetch_url(id: &str) -> String {
    if id.starts_with("http") {
        id.to_string()
    } else {
        format!("https://arxiv.org/abs/{id}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn search_url_simple() {
        let url = build_search_url("LLM", 0, None, None);
        assert_eq!(
            url,
            "https://arxiv.org/search/?query=LLM&searchtype=all&source=header&start=0"
        );
    }

    #[test]
    fn search_url_with_pagination() {
        let url = build_search_url("LLM", 50, None, None);
        assert_eq!(
            url,
            "https://arxiv.org/search/?query=LLM&searchtype=all&source=header&start=50"
        );
    }

    #[test]
    fn search_url_encodes_query() {
        let url = build_search_url("graph neural networks", 0, None, None);
        assert!(url.contains("query=graph%20neural%20networks"));
    }

    #[test]
    fn search_url_with_dates() {
        let url = build_search_url("LLM", 0, Some("2023-01-01"), Some("2023-12-31"));
        assert!(url.contains("date-filter_by=date_range"));
        assert!(url.contains("date-from_date=2023-01-01"));
        assert!(url.contains("date-to_date=2023-12-31"));
        assert!(url.contains("date-date_type=submitted_date"));
    }

    #[test]
    fn search_url_with_open_lower_bound() {
        let url = build_search_url("LLM", 0, None, Some("2023-12-31"));
        assert!(url.contains("date-from_date=&"));
        assert!(url.contains("date-to_date=2023-12-31"));
    }

    #[test]
    fn fetch_url_from_id() {
        assert_eq!(
            build_fetch_url("2512.04518"),
            "https://arxiv.org/abs/2512.04518"
        );
    }

    #[test]
    fn fetch_url_passes_through_full_url() {
        assert_eq!(
            build_fetch_url("https://arxiv.org/abs/2512.04518"),
            "https://arxiv.org/abs/2512.04518"
        );
    }
}
