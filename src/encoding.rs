//! Character encoding handling for byte input.
//!
//! The harness usually hands over UTF-8 text, but saved page snapshots may
//! carry a legacy charset declaration. The byte entry points sniff the
//! declared charset and transcode to UTF-8 before parsing.

use std::sync::LazyLock;

use encoding_rs::{Encoding, UTF_8};
use regex::Regex;

/// Matches the charset token of both `<meta charset=...>` and
/// `<meta http-equiv="Content-Type" content="...; charset=...">`.
#[allow(clippy::expect_used)]
static CHARSET_DECL: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(?i)<meta[^>]+charset\s*=\s*["']?([^"'\s;>]+)"#).expect("valid regex")
});

/// Resolve the declared encoding, defaulting to UTF-8.
///
/// Only the first 1024 bytes are examined.
fn declared_encoding(html: &[u8]) -> &'static Encoding {
    let head = String::from_utf8_lossy(&html[..html.len().min(1024)]);
    CHARSET_DECL
        .captures(&head)
        .and_then(|captures| captures.get(1))
        .and_then(|token| Encoding::for_label(token.as_str().as_bytes()))
        .unwrap_or(UTF_8)
}

/// Decode HTML bytes to a UTF-8 string.
///
/// Invalid sequences become the Unicode replacement character rather than
/// failing the call.
#[must_use]
pub fn transcode_to_utf8(html: &[u8]) -> String {
    let encoding = declared_encoding(html);
    if encoding == UTF_8 {
        return String::from_utf8_lossy(html).into_owned();
    }
    encoding.decode(html).0.into_owned()
}
