//! Core type definitions for comments-link-filter

use crate::error::FilterError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// One comment's rendered HTML fragment
///
/// Produced by the host per render and discarded once the filtered
/// counterpart is returned. Filters never mutate a `CommentText`; they hand
/// back a new one.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CommentText(String);

impl CommentText {
    /// Create a comment text from any string-like value
    pub fn new(text: impl Into<String>) -> Self {
        CommentText(text.into())
    }

    /// Borrow the raw HTML
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Consume the value, returning the raw HTML
    pub fn into_inner(self) -> String {
        self.0
    }

    /// Check if the comment is empty
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Display for CommentText {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for CommentText {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl From<String> for CommentText {
    fn from(text: String) -> Self {
        CommentText(text)
    }
}

impl From<&str> for CommentText {
    fn from(text: &str) -> Self {
        CommentText(text.to_string())
    }
}

impl From<CommentText> for String {
    fn from(text: CommentText) -> Self {
        text.0
    }
}

/// A named transform in the filter pipeline
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum FilterStage {
    /// Remove every tag outside the allow-list
    StripTags,
    /// Empty `href` values and replace anchor text with the mask
    MaskAnchors,
    /// Replace any `rel` attribute and add `rel="nofollow"` to anchors
    AddNofollow,
}

impl FilterStage {
    /// All stages, in declaration order
    pub const ALL: [FilterStage; 3] = [
        FilterStage::StripTags,
        FilterStage::MaskAnchors,
        FilterStage::AddNofollow,
    ];

    /// Stage name as used in configuration files and on the command line
    pub fn as_str(&self) -> &'static str {
        match self {
            FilterStage::StripTags => "strip-tags",
            FilterStage::MaskAnchors => "mask-anchors",
            FilterStage::AddNofollow => "add-nofollow",
        }
    }

    /// Stages run when nothing else is configured
    pub fn default_pipeline() -> Vec<FilterStage> {
        vec![FilterStage::MaskAnchors, FilterStage::AddNofollow]
    }
}

impl fmt::Display for FilterStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for FilterStage {
    type Err = FilterError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        FilterStage::ALL
            .into_iter()
            .find(|stage| stage.as_str() == s.trim())
            .ok_or_else(|| FilterError::UnknownStage(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_comment_text_conversions() {
        let text = CommentText::from("<p>hi</p>");
        assert_eq!(text.as_str(), "<p>hi</p>");
        assert_eq!(text.to_string(), "<p>hi</p>");
        assert!(!text.is_empty());

        let raw: String = text.clone().into();
        assert_eq!(raw, text.into_inner());
    }

    #[test]
    fn test_comment_text_serializes_as_string() {
        let text = CommentText::new("<a href=\"\">***</a>");
        let json = serde_json::to_string(&text).unwrap();
        assert_eq!(json, r#""<a href=\"\">***</a>""#);
    }

    #[test]
    fn test_stage_parse() {
        assert_eq!("mask-anchors".parse::<FilterStage>().unwrap(), FilterStage::MaskAnchors);
        assert_eq!(" add-nofollow ".parse::<FilterStage>().unwrap(), FilterStage::AddNofollow);
        assert_eq!("strip-tags".parse::<FilterStage>().unwrap(), FilterStage::StripTags);
        assert!(matches!(
            "linkify".parse::<FilterStage>(),
            Err(FilterError::UnknownStage(_))
        ));
    }

    #[test]
    fn test_stage_name_matches_serde() {
        for stage in FilterStage::ALL {
            let json = serde_json::to_string(&stage).unwrap();
            assert_eq!(json, format!("\"{}\"", stage.as_str()));
        }
    }

    #[test]
    fn test_default_pipeline() {
        assert_eq!(
            FilterStage::default_pipeline(),
            vec![FilterStage::MaskAnchors, FilterStage::AddNofollow]
        );
    }
}
