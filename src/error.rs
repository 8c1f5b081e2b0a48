//! Error types for extraction operations.

/// Error type for extraction operations.
///
/// Errors never cross the public boundary: the listing extractor drops the
/// failed entry and keeps going, the paper-page extractor degrades the whole
/// result to `None`.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// A listing entry carries no link from which an identifier can be derived.
    #[error("result entry has no usable abstract link")]
    MissingLink,

    /// The document contains no recognizable paper content.
    #[error("no paper content found")]
    NoContent,
}

/// Result type alias for extraction operations.
pub type Result<T> = std::result::Result<T, Error>;
