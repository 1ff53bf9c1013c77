#[cfg(test)]
#[path = "search_test.rs"]
mod search_test;

use percent_encoding::{AsciiSet, NON_ALPHANUMERIC, utf8_percent_encode};

use crate::consts::SEARCH_PATH;

/// Characters escaped in the query value. Matches `encodeURIComponent`:
/// alphanumerics plus `- _ . ! ~ * ' ( )` pass through, everything else
/// (including space) is percent-encoded.
const QUERY_SET: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

/// Build the redirect URL for a raw search-field value.
///
/// The value is trimmed first. A non-empty query becomes
/// `/search?q=<encoded>`; an empty or whitespace-only value navigates
/// to the bare search path with no query parameter.
#[must_use]
pub fn redirect_url(raw: &str) -> String {
    let query = raw.trim();
    if query.is_empty() {
        SEARCH_PATH.to_owned()
    } else {
        format!("{SEARCH_PATH}?q={}", utf8_percent_encode(query, QUERY_SET))
    }
}
