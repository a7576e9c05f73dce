//! Comment filter trait and prioritized chain
//!
//! A `FilterChain` plays the part of the host's comment-text hook: filters
//! are registered with a priority, and each one receives the previous
//! filter's output.

use super::{anchors, nofollow, strip, LinkFilter, DEFAULT_ALLOWED_TAGS};
use crate::config::{DEFAULT_MASK, DEFAULT_REL};
use crate::types::FilterStage;
use tracing::{debug, trace};

/// Priority used by [`FilterChain::register`]
pub const DEFAULT_PRIORITY: i32 = 10;

/// Trait for comment text filters
pub trait CommentFilter: Send + Sync {
    /// Get the filter name
    fn name(&self) -> &str;

    /// Transform comment text
    fn apply(&self, text: &str) -> String;
}

/// Empties anchor hrefs and masks anchor text
#[derive(Debug, Clone)]
pub struct MaskAnchorsFilter {
    mask: String,
}

impl MaskAnchorsFilter {
    pub fn new() -> Self {
        Self::with_mask(DEFAULT_MASK)
    }

    pub fn with_mask(mask: impl Into<String>) -> Self {
        Self { mask: mask.into() }
    }
}

impl Default for MaskAnchorsFilter {
    fn default() -> Self {
        Self::new()
    }
}

impl CommentFilter for MaskAnchorsFilter {
    fn name(&self) -> &str {
        FilterStage::MaskAnchors.as_str()
    }

    fn apply(&self, text: &str) -> String {
        anchors::mask_anchors(text, &self.mask)
    }
}

/// Replaces `rel` attributes and marks every anchor `nofollow`
#[derive(Debug, Clone)]
pub struct AddNofollowFilter {
    rel: String,
}

impl AddNofollowFilter {
    pub fn new() -> Self {
        Self::with_rel(DEFAULT_REL)
    }

    pub fn with_rel(rel: impl Into<String>) -> Self {
        Self { rel: rel.into() }
    }
}

impl Default for AddNofollowFilter {
    fn default() -> Self {
        Self::new()
    }
}

impl CommentFilter for AddNofollowFilter {
    fn name(&self) -> &str {
        FilterStage::AddNofollow.as_str()
    }

    fn apply(&self, text: &str) -> String {
        nofollow::force_rel(text, &self.rel)
    }
}

/// Removes tags outside an allow-list
#[derive(Debug, Clone)]
pub struct StripTagsFilter {
    allowed_tags: Vec<String>,
}

impl StripTagsFilter {
    pub fn new() -> Self {
        Self::with_allowed_tags(DEFAULT_ALLOWED_TAGS)
    }

    pub fn with_allowed_tags<I, S>(tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            allowed_tags: tags.into_iter().map(Into::into).collect(),
        }
    }
}

impl Default for StripTagsFilter {
    fn default() -> Self {
        Self::new()
    }
}

impl CommentFilter for StripTagsFilter {
    fn name(&self) -> &str {
        FilterStage::StripTags.as_str()
    }

    fn apply(&self, text: &str) -> String {
        strip::strip_tags(text, &self.allowed_tags)
    }
}

struct Registered {
    priority: i32,
    filter: Box<dyn CommentFilter>,
}

/// Ordered set of comment filters
///
/// Lower priorities run first; filters sharing a priority run in
/// registration order.
pub struct FilterChain {
    filters: Vec<Registered>,
}

impl FilterChain {
    /// Create an empty chain
    pub fn new() -> Self {
        Self {
            filters: Vec::new(),
        }
    }

    /// Build the chain equivalent to a link filter's configured stages
    pub fn from_stages(link_filter: &LinkFilter) -> Self {
        let config = link_filter.config();
        let mut chain = Self::new();

        for stage in link_filter.stages() {
            let filter: Box<dyn CommentFilter> = match stage {
                FilterStage::StripTags => {
                    Box::new(StripTagsFilter::with_allowed_tags(config.allowed_tags.clone()))
                }
                FilterStage::MaskAnchors => Box::new(MaskAnchorsFilter::with_mask(&config.mask)),
                FilterStage::AddNofollow => Box::new(AddNofollowFilter::with_rel(&config.rel)),
            };
            chain.register(filter);
        }

        debug!(filters = ?chain.names(), "Built filter chain");
        chain
    }

    /// Register a filter at [`DEFAULT_PRIORITY`]
    pub fn register(&mut self, filter: Box<dyn CommentFilter>) {
        self.register_with_priority(filter, DEFAULT_PRIORITY);
    }

    /// Register a filter at the given priority
    pub fn register_with_priority(&mut self, filter: Box<dyn CommentFilter>, priority: i32) {
        let index = self
            .filters
            .partition_point(|registered| registered.priority <= priority);
        self.filters.insert(index, Registered { priority, filter });
    }

    /// Run every filter in order, each on the previous output
    pub fn apply(&self, text: &str) -> String {
        self.filters
            .iter()
            .fold(text.to_string(), |acc, registered| {
                trace!(
                    filter = registered.filter.name(),
                    priority = registered.priority,
                    "Applying comment filter"
                );
                registered.filter.apply(&acc)
            })
    }

    /// Filter names in execution order
    pub fn names(&self) -> Vec<&str> {
        self.filters.iter().map(|r| r.filter.name()).collect()
    }

    /// Check if a filter with this name is registered
    pub fn contains(&self, name: &str) -> bool {
        self.filters.iter().any(|r| r.filter.name() == name)
    }

    pub fn len(&self) -> usize {
        self.filters.len()
    }

    pub fn is_empty(&self) -> bool {
        self.filters.is_empty()
    }
}

impl Default for FilterChain {
    fn default() -> Self {
        Self::from_stages(&LinkFilter::default())
    }
}
