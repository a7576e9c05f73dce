//! Anchor href clearing and text masking

use super::{ANCHOR_OPEN_PATTERN, ANCHOR_OPEN_TAG};
use regex::{Captures, Regex};
use std::sync::LazyLock;

/// `href="..."` inside a tag; the value never runs past its closing quote.
static HREF_VALUE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"(\shref=")[^"]*""#).expect("valid regex"));

/// One anchor pair, non-greedy so adjacent anchors match separately.
static ANCHOR_PAIR: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(&format!("(?s)({}).*?(</a>)", ANCHOR_OPEN_PATTERN)).expect("valid regex")
});

/// Empty every `href` value on every opening anchor tag.
pub(crate) fn clear_hrefs(text: &str) -> String {
    ANCHOR_OPEN_TAG
        .replace_all(text, |caps: &Captures| {
            HREF_VALUE.replace_all(&caps[0], "${1}\"").into_owned()
        })
        .into_owned()
}

/// Replace the text of every anchor pair with `mask`.
pub(crate) fn mask_text(text: &str, mask: &str) -> String {
    ANCHOR_PAIR
        .replace_all(text, |caps: &Captures| {
            format!("{}{}{}", &caps[1], mask, &caps[2])
        })
        .into_owned()
}

pub(crate) fn mask_anchors(text: &str, mask: &str) -> String {
    mask_text(&clear_hrefs(text), mask)
}
