//! Share-link construction and parsing.
//!
//! A share link is `<origin>?tx=<signature>`. Signatures are normally hex or
//! base58 and pass through unchanged; anything outside the URL unreserved set
//! is percent-encoded so that [`extract_tx`] always recovers the input.

use crate::error::{SpecError, SpecResult};

/// Query parameter carrying the signature.
pub const TX_PARAM: &str = "tx";

/// Hashtags attached to the social share intent.
pub const SHARE_HASHTAGS: &str = "SYMPH-AI,Blockchain,Music";

/// Text attached to the social share intent.
pub const SHARE_TEXT: &str = "\u{1F3B5} Listen to this blockchain melody on SYMPH-AI\n\n";

/// Builds the share link for a signature.
///
/// # Example
/// ```
/// use symph_spec::share::share_link;
///
/// assert_eq!(share_link("https://symph.example", "ab12"), "https://symph.example?tx=ab12");
/// ```
pub fn share_link(origin: &str, signature: &str) -> String {
    format!("{}?{}={}", origin, TX_PARAM, percent_encode(signature))
}

/// Builds the tweet-intent URL that shares the link with text and hashtags.
pub fn x_share_intent(origin: &str, signature: &str) -> String {
    format!(
        "https://twitter.com/intent/tweet?text={}&url={}&hashtags={}",
        percent_encode(SHARE_TEXT),
        percent_encode(&share_link(origin, signature)),
        SHARE_HASHTAGS
    )
}

/// Extracts the signature from a share link.
///
/// Returns `None` if the link has no `tx` parameter or it does not decode to
/// UTF-8.
pub fn extract_tx(url: &str) -> Option<String> {
    let without_fragment = url.split('#').next().unwrap_or(url);
    let (_, query) = without_fragment.split_once('?')?;
    query
        .split('&')
        .filter_map(|pair| pair.split_once('='))
        .find(|(key, _)| *key == TX_PARAM)
        .and_then(|(_, value)| percent_decode(value))
}

/// Like [`extract_tx`] but reports a missing parameter as an error.
pub fn require_tx(url: &str) -> SpecResult<String> {
    extract_tx(url).ok_or_else(|| SpecError::MissingShareParam {
        url: url.to_string(),
    })
}

fn is_unreserved(byte: u8) -> bool {
    byte.is_ascii_alphanumeric() || matches!(byte, b'-' | b'_' | b'.' | b'~')
}

/// Percent-encodes every byte outside the unreserved set.
pub fn percent_encode(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for byte in input.bytes() {
        if is_unreserved(byte) {
            out.push(byte as char);
        } else {
            out.push_str(&format!("%{:02X}", byte));
        }
    }
    out
}

/// Decodes `%XX` escapes and `+` as space.
pub fn percent_decode(input: &str) -> Option<String> {
    let bytes = input.as_bytes();
    let mut out = Vec::with_capacity(bytes.len());
    let mut i = 0;
    while i < bytes.len() {
        match bytes[i] {
            b'%' => {
                let hex = input.get(i + 1..i + 3)?;
                out.push(u8::from_str_radix(hex, 16).ok()?);
                i += 3;
            }
            b'+' => {
                out.push(b' ');
                i += 1;
            }
            b => {
                out.push(b);
                i += 1;
            }
        }
    }
    String::from_utf8(out).ok()
}
