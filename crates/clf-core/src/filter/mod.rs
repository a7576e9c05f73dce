//! Comment link filter
//!
//! Pure string-to-string transforms that neutralize hyperlinks in comment
//! HTML. Matching is done with bounded, non-greedy patterns instead of a DOM:
//! anything a pattern does not match is left exactly as it was.
//!
//! # Overview
//!
//! - [`mask_anchors`]: empties every anchor `href` and replaces the anchor
//!   text with `***`
//! - [`add_nofollow`]: drops existing `rel` attributes and adds
//!   `rel="nofollow"` to every anchor
//! - [`strip_tags`]: removes tags outside an allow-list (not part of the
//!   default pipeline)
//!
//! # Example
//!
//! ```
//! use clf_core::filter::filter_comment_text;
//!
//! let out = filter_comment_text(r#"Check <a href="http://x.com" title="x">this link</a>!"#);
//! assert_eq!(out, r#"Check <a href="" title="x" rel="nofollow">***</a>!"#);
//! ```
//!
//! Only lower-case `a`, `href` and `rel` tokens with double-quoted values are
//! recognized.

mod anchors;
mod chain;
mod link_filter;
mod nofollow;
mod strip;

use regex::Regex;
use std::sync::LazyLock;

use crate::config::{DEFAULT_MASK, DEFAULT_REL};

pub use chain::{
    AddNofollowFilter, CommentFilter, FilterChain, MaskAnchorsFilter, StripTagsFilter,
    DEFAULT_PRIORITY,
};
pub use link_filter::LinkFilter;

/// Tags kept by [`strip_tags`] when no allow-list is configured
pub const DEFAULT_ALLOWED_TAGS: [&str; 4] = ["p", "b", "hr", "strong"];

/// Opening anchor tag, bounded by its own `>`. Quoted attribute values are
/// skipped whole, so a `>` inside one does not end the tag. Does not match
/// `<abbr>` and friends, and spans newlines inside the attribute list.
pub(crate) const ANCHOR_OPEN_PATTERN: &str = r#"<a(?:\s(?:[^>"']|"[^"]*"|'[^']*')*)?>"#;

pub(crate) static ANCHOR_OPEN_TAG: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(ANCHOR_OPEN_PATTERN).expect("valid regex"));

/// Empty every anchor `href` and replace each anchor's text with `***`
pub fn mask_anchors(text: &str) -> String {
    anchors::mask_anchors(text, DEFAULT_MASK)
}

/// Replace any `rel` attribute with `rel="nofollow"` on every anchor
pub fn add_nofollow(text: &str) -> String {
    nofollow::force_rel(text, DEFAULT_REL)
}

/// Remove every tag whose name is not in `allowed_tags`, keeping its text
pub fn strip_tags<S: AsRef<str>>(text: &str, allowed_tags: &[S]) -> String {
    strip::strip_tags(text, allowed_tags)
}

/// Run the default pipeline: `add_nofollow(mask_anchors(text))`
pub fn filter_comment_text(text: &str) -> String {
    add_nofollow(&mask_anchors(text))
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_mask_anchors_clears_href() {
        assert_eq!(
            mask_anchors(r#"<a href="http://evil.example">click</a>"#),
            r#"<a href="">***</a>"#
        );
    }

    #[test]
    fn test_non_anchor_markup_untouched() {
        let input = "<p>Hello <b>world</b></p>";
        assert_eq!(mask_anchors(input), input);
        assert_eq!(add_nofollow(input), input);
        assert_eq!(filter_comment_text(input), input);
    }

    #[test]
    fn test_multiple_independent_anchors() {
        assert_eq!(
            mask_anchors(r#"<a href="x">a</a> and <a href="y">b</a>"#),
            r#"<a href="">***</a> and <a href="">***</a>"#
        );
    }

    #[test]
    fn test_rel_normalization() {
        assert_eq!(
            add_nofollow(r#"<a href="" rel="sponsored">***</a>"#),
            r#"<a href="" rel="nofollow">***</a>"#
        );
    }

    #[test]
    fn test_full_pipeline() {
        let input = r#"Check <a href="http://x.com" title="x">this link</a>!"#;
        assert_eq!(
            add_nofollow(&mask_anchors(input)),
            r#"Check <a href="" title="x" rel="nofollow">***</a>!"#
        );
        assert_eq!(
            filter_comment_text(input),
            r#"Check <a href="" title="x" rel="nofollow">***</a>!"#
        );
    }

    #[test]
    fn test_add_nofollow_idempotent() {
        let inputs = [
            r#"<a href="x">y</a>"#,
            r#"<a href="" rel="sponsored ugc">***</a> <a>z</a>"#,
            "<a\n  href=\"x\"\n  rel=\"ugc\"\n>link</a>",
            r#"<a href="" rel="a"rel="b">x</a>"#,
            "no anchors at all",
            "",
        ];

        for input in inputs {
            let once = add_nofollow(input);
            assert_eq!(add_nofollow(&once), once, "input: {input:?}");
        }
    }

    #[test]
    fn test_strip_tags_allow_list() {
        assert_eq!(
            strip_tags(
                "<div><p>Kept</p><script>bad()</script></div>",
                &DEFAULT_ALLOWED_TAGS
            ),
            "<p>Kept</p>bad()"
        );
    }

    #[test]
    fn test_empty_input() {
        assert_eq!(mask_anchors(""), "");
        assert_eq!(add_nofollow(""), "");
        assert_eq!(strip_tags("", &DEFAULT_ALLOWED_TAGS), "");
    }

    #[test]
    fn test_anchor_open_tag_pattern() {
        assert!(ANCHOR_OPEN_TAG.is_match("<a>"));
        assert!(ANCHOR_OPEN_TAG.is_match("<a\nhref=\"x\">"));
        assert!(!ANCHOR_OPEN_TAG.is_match("<abbr>"));
        assert!(!ANCHOR_OPEN_TAG.is_match("</a>"));
        assert!(!ANCHOR_OPEN_TAG.is_match("<A HREF=\"x\">"));
    }

    #[test]
    fn test_anchor_open_tag_skips_quoted_gt() {
        let tag = ANCHOR_OPEN_TAG.find(r#"<a href="/?a>b" title='c>d'>x</a>"#).unwrap();
        assert_eq!(tag.as_str(), r#"<a href="/?a>b" title='c>d'>"#);
    }

    #[test]
    fn test_gt_inside_href_value() {
        assert_eq!(
            filter_comment_text(r#"<a href="http://evil.example/?a>b">click</a>"#),
            r#"<a href="" rel="nofollow">***</a>"#
        );
    }

    #[test]
    fn test_gt_inside_other_attribute_value() {
        assert_eq!(
            filter_comment_text(r#"<a href="http://x.com" title="a>b">click</a>"#),
            r#"<a href="" title="a>b" rel="nofollow">***</a>"#
        );
    }
}
