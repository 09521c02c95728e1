// Tue Jan 13 2026 - Alex

use super::{QueryName, QUERY_SEPARATOR};

/// Turns an input token into the form sent to the taxonomy browser.
///
/// Underscores take precedence: when the token has any, only they become
/// [`QUERY_SEPARATOR`] and literal spaces are kept. Otherwise each space is
/// replaced. Tokens with neither pass through unchanged.
pub fn normalize(raw: &str) -> QueryName {
    let normalized = if raw.contains('_') {
        raw.replace('_', QUERY_SEPARATOR)
    } else if raw.contains(' ') {
        raw.replace(' ', QUERY_SEPARATOR)
    } else {
        raw.to_string()
    };

    QueryName::from_normalized(normalized)
}

pub fn strip_brackets(text: &str) -> String {
    text.chars().filter(|c| *c != '[' && *c != ']').collect()
}
