use std::borrow::Cow;
use std::sync::LazyLock;

use regex::Regex;

static URL_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"https?://\S+|www\.\S+|\S+\.com\b").expect("url pattern is a valid regex")
});

static WHITESPACE_RUN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s+").expect("whitespace pattern is a valid regex"));

/// Strip structural noise from a raw text blob.
///
/// Newlines and non-breaking spaces become plain spaces, URL-like tokens are
/// removed, whitespace runs collapse to a single space and the result is
/// trimmed. Total over all inputs.
pub fn normalize(text: &str) -> String {
    let flattened = text.replace(['\n', '\u{a0}'], " ");
    let without_urls = strip_urls(flattened);
    let collapsed = WHITESPACE_RUN.replace_all(&without_urls, " ");
    collapsed.trim().to_owned()
}

/// Remove URL-like tokens until none remain. Dropping a link tail can expose
/// a `.com` that now ends at a word boundary.
fn strip_urls(mut text: String) -> String {
    loop {
        let stripped = match URL_PATTERN.replace_all(&text, "") {
            Cow::Borrowed(_) => break,
            Cow::Owned(stripped) => stripped,
        };
        text = stripped;
    }
    text
}
