//! Response body decoding.
//!
//! Problem pages are fetched as raw bytes. The charset is taken from the
//! HTTP `Content-Type` header when present, then from the document's own
//! `<meta>` declarations, and finally defaults to UTF-8.

use encoding_rs::{Encoding, UTF_8};
use regex::Regex;
use std::sync::LazyLock;

/// `charset=...` parameter, as found in a `Content-Type` value.
#[allow(clippy::expect_used)]
static CHARSET_PARAM_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(?i)charset\s*=\s*["']?([^"'\s;>]+)"#).expect("valid regex")
});

/// `<meta charset="...">` or `<meta http-equiv=... content="...; charset=...">`.
#[allow(clippy::expect_used)]
static META_CHARSET_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(?i)<meta[^>]+charset\s*=\s*["']?([^"'\s;>]+)"#).expect("valid regex")
});

/// Number of leading bytes searched for a `<meta>` charset.
const SNIFF_LEN: usize = 1024;

/// Charset label from a `Content-Type` header value, if any.
#[must_use]
pub fn charset_from_content_type(content_type: &str) -> Option<&str> {
    CHARSET_PARAM_RE
        .captures(content_type)
        .and_then(|c| c.get(1))
        .map(|m| m.as_str())
}

/// Pick the encoding for a response body.
#[must_use]
pub fn detect_encoding(body: &[u8], content_type: Option<&str>) -> &'static Encoding {
    let from_header = content_type
        .and_then(charset_from_content_type)
        .and_then(|label| Encoding::for_label(label.as_bytes()));
    if let Some(encoding) = from_header {
        return encoding;
    }

    let head = String::from_utf8_lossy(&body[..body.len().min(SNIFF_LEN)]);
    META_CHARSET_RE
        .captures(&head)
        .and_then(|c| c.get(1))
        .and_then(|m| Encoding::for_label(m.as_str().as_bytes()))
        .unwrap_or(UTF_8)
}

/// Decode a response body to UTF-8.
///
/// Malformed sequences are replaced with U+FFFD instead of failing. A
/// leading byte order mark is dropped.
///
/// # Examples
///
/// ```
/// use rs_eclair::encoding::decode_body;
///
/// let body = b"<h2>Caf\xE9</h2>";
/// assert_eq!(decode_body(body, Some("text/html; charset=ISO-8859-1")), "<h2>Café</h2>");
/// ```
#[must_use]
pub fn decode_body(body: &[u8], content_type: Option<&str>) -> String {
    let encoding = detect_encoding(body, content_type);
    if encoding == UTF_8 {
        return UTF_8.decode_with_bom_removal(body).0.into_owned();
    }

    let (decoded, _, _) = encoding.decode(body);
    decoded.into_owned()
}
