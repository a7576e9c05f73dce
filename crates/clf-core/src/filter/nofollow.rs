//! `rel` normalization for anchors

use super::ANCHOR_OPEN_TAG;
use regex::{Captures, Regex};
use std::sync::LazyLock;

/// Any `rel="..."` attribute, with the whitespace before it.
static REL_ATTR: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"\s*rel="[^"]*""#).expect("valid regex"));

/// Remove every `rel` attribute in the text, whatever tag it sits on.
///
/// A match only counts when it starts the input or follows whitespace or a
/// quote, so `data-rel` is kept. The preceding character is inspected, not
/// consumed, so back-to-back attributes like `rel="a"rel="b"` all go.
pub(crate) fn remove_rel(text: &str) -> String {
    REL_ATTR
        .replace_all(text, |caps: &Captures| {
            let attr = &caps[0];
            let start = caps.get(0).map_or(0, |m| m.start());
            let separated = attr.starts_with(char::is_whitespace)
                || text[..start]
                    .chars()
                    .next_back()
                    .map_or(true, |c| c == '"' || c == '\'' || c.is_whitespace());

            if separated {
                String::new()
            } else {
                attr.to_string()
            }
        })
        .into_owned()
}

/// Append `rel="<rel>"` before the `>` of every opening anchor tag.
///
/// Whitespace in front of the `>` is dropped so a second pass produces the
/// same tag.
pub(crate) fn append_rel(text: &str, rel: &str) -> String {
    ANCHOR_OPEN_TAG
        .replace_all(text, |caps: &Captures| {
            let tag = &caps[0];
            let attrs = tag[..tag.len() - 1].trim_end();
            format!("{} rel=\"{}\">", attrs, rel)
        })
        .into_owned()
}

pub(crate) fn force_rel(text: &str, rel: &str) -> String {
    append_rel(&remove_rel(text), rel)
}
