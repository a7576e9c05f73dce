//! Error types for comments-link-filter
//!
//! The text transforms never fail; these errors only come from the edges
//! around them (reading configuration, parsing stage names).

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for comments-link-filter
#[derive(Debug, Error)]
pub enum FilterError {
    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// TOML parsing error
    #[error("TOML error: {0}")]
    Toml(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Configuration file not found
    #[error("Configuration file not found: {0}")]
    ConfigNotFound(PathBuf),

    /// Unknown filter stage name
    #[error("Unknown filter stage: {0} (expected strip-tags, mask-anchors or add-nofollow)")]
    UnknownStage(String),

    /// Generic error with context
    #[error("{context}: {source}")]
    WithContext {
        context: String,
        #[source]
        source: Box<FilterError>,
    },
}

impl FilterError {
    /// Add context to an error
    pub fn with_context(self, context: impl Into<String>) -> Self {
        FilterError::WithContext {
            context: context.into(),
            source: Box::new(self),
        }
    }
}

impl From<toml::de::Error> for FilterError {
    fn from(err: toml::de::Error) -> Self {
        FilterError::Toml(err.to_string())
    }
}

impl From<toml::ser::Error> for FilterError {
    fn from(err: toml::ser::Error) -> Self {
        FilterError::Toml(err.to_string())
    }
}

/// Result type alias for comments-link-filter
pub type Result<T> = std::result::Result<T, FilterError>;
