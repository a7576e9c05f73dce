//! clf-core - Core library for comments-link-filter
//!
//! This crate neutralizes hyperlinks in user-submitted comment HTML: anchor
//! destinations are emptied, anchor text is masked, and every anchor is
//! forced to `rel="nofollow"`. It also provides an allow-list tag stripper,
//! a prioritized filter chain for hosts, and TOML configuration.

pub mod config;
pub mod error;
pub mod filter;
pub mod types;

pub use config::{Config, FilterConfig};
pub use error::{FilterError, Result};
pub use filter::{
    add_nofollow, filter_comment_text, mask_anchors, strip_tags, CommentFilter, FilterChain,
    LinkFilter,
};
pub use types::*;
