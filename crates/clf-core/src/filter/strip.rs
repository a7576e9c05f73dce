//! Allow-list tag stripping

use regex::{Captures, Regex};
use std::sync::LazyLock;

/// HTML comments, removed with their content.
static HTML_COMMENT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?s)<!--.*?-->").expect("valid regex"));

/// Declarations and processing instructions (`<!DOCTYPE html>`, `<?xml ?>`).
static DECLARATION: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"<[!?][^>]*>").expect("valid regex"));

/// Opening, closing or self-closing tag. Group 1 is the tag name.
static TAG: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"</?([A-Za-z][A-Za-z0-9]*)(?:\s[^>]*)?/?>").expect("valid regex")
});

pub(crate) fn strip_tags<S: AsRef<str>>(text: &str, allowed_tags: &[S]) -> String {
    let text = HTML_COMMENT.replace_all(text, "");
    let text = DECLARATION.replace_all(&text, "");

    let stripped = TAG.replace_all(&text, |caps: &Captures| {
        let name = &caps[1];
        let allowed = allowed_tags
            .iter()
            .any(|tag| tag.as_ref().eq_ignore_ascii_case(name));

        if allowed {
            caps[0].to_string()
        } else {
            String::new()
        }
    });

    stripped.into_owned()
}
