//! Extraction context options.

/// Context the harness knows about the document being extracted.
///
/// Use `Default::default()` when nothing is known.
///
/// # Example
///
/// ```rust
/// use arxiv_extract::Options;
///
/// let options = Options {
///     url: Some("https://arxiv.org/abs/2512.05073".to_string()),
/// };
/// # let _ = options;
/// ```
#[derive(Debug, Clone, Default)]
pub struct Options {
    /// Address of the rendered document.
    ///
    /// For an abstract page this becomes the record's `url` and feeds
    /// identifier derivation. For a listing it is the base against which
    /// relative entry links are resolved.
    ///
    /// Default: `None`
    pub url: Option<String>,
}
