//! Configured link filter service

use super::{anchors, nofollow, strip};
use crate::config::FilterConfig;
use crate::error::Result;
use crate::types::{CommentText, FilterStage};
use tracing::{debug, trace};

/// Stateless filter service
///
/// Build it once at startup and share it by reference; it holds only
/// immutable configuration, so concurrent use needs no synchronization.
#[derive(Debug, Clone, Default)]
pub struct LinkFilter {
    config: FilterConfig,
}

impl LinkFilter {
    /// Create a filter running the default pipeline
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a filter from a validated configuration
    pub fn with_config(config: FilterConfig) -> Result<Self> {
        config.validate()?;
        debug!(
            stages = ?config.stages,
            mask = %config.mask,
            rel = %config.rel,
            "Created link filter"
        );
        Ok(Self { config })
    }

    /// Get the active configuration
    pub fn config(&self) -> &FilterConfig {
        &self.config
    }

    /// Stages run by [`LinkFilter::apply`], in order
    pub fn stages(&self) -> &[FilterStage] {
        &self.config.stages
    }

    /// Remove tags outside the configured allow-list
    pub fn strip_tags(&self, text: &str) -> String {
        strip::strip_tags(text, &self.config.allowed_tags)
    }

    /// Empty anchor hrefs and replace anchor text with the configured mask
    pub fn mask_anchors(&self, text: &str) -> String {
        anchors::mask_anchors(text, &self.config.mask)
    }

    /// Force the configured `rel` value onto every anchor
    pub fn add_nofollow(&self, text: &str) -> String {
        nofollow::force_rel(text, &self.config.rel)
    }

    /// Run a single stage
    pub fn run_stage(&self, stage: FilterStage, text: &str) -> String {
        match stage {
            FilterStage::StripTags => self.strip_tags(text),
            FilterStage::MaskAnchors => self.mask_anchors(text),
            FilterStage::AddNofollow => self.add_nofollow(text),
        }
    }

    /// Run every configured stage, each on the previous stage's output
    pub fn apply(&self, text: &str) -> String {
        self.config
            .stages
            .iter()
            .fold(text.to_string(), |acc, stage| {
                trace!(stage = %stage, len = acc.len(), "Applying filter stage");
                self.run_stage(*stage, &acc)
            })
    }

    /// Filter one comment, returning its filtered counterpart
    pub fn filter_comment(&self, comment: &CommentText) -> CommentText {
        CommentText::new(self.apply(comment.as_str()))
    }
}
