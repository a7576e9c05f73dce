//! Configuration management for comments-link-filter

use crate::error::{FilterError, Result};
use crate::filter::DEFAULT_ALLOWED_TAGS;
use crate::types::FilterStage;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use tracing::debug;

/// Default replacement for anchor text
pub const DEFAULT_MASK: &str = "***";

/// Default `rel` value forced onto anchors
pub const DEFAULT_REL: &str = "nofollow";

/// Main configuration structure
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Filter settings
    pub filter: FilterConfig,
}

impl Config {
    /// Load configuration from a TOML file
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Err(FilterError::ConfigNotFound(path.to_path_buf()));
        }

        let content = fs::read_to_string(path)?;
        let config = Self::from_toml_str(&content)
            .map_err(|e| e.with_context(format!("Failed to load {}", path.display())))?;

        debug!("Loaded configuration from {}", path.display());
        Ok(config)
    }

    /// Parse and validate configuration from TOML text
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let config: Config = toml::from_str(content)?;
        config.filter.validate()?;
        Ok(config)
    }

    /// Render the configuration as TOML
    pub fn to_toml_string(&self) -> Result<String> {
        Ok(toml::to_string_pretty(self)?)
    }
}

/// Filter pipeline configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FilterConfig {
    /// Stages to run, in order
    pub stages: Vec<FilterStage>,
    /// Replacement for anchor text
    pub mask: String,
    /// `rel` value added to every anchor
    pub rel: String,
    /// Tags kept by the strip-tags stage
    pub allowed_tags: Vec<String>,
}

impl Default for FilterConfig {
    fn default() -> Self {
        Self {
            stages: FilterStage::default_pipeline(),
            mask: DEFAULT_MASK.to_string(),
            rel: DEFAULT_REL.to_string(),
            allowed_tags: DEFAULT_ALLOWED_TAGS.iter().map(|t| t.to_string()).collect(),
        }
    }
}

impl FilterConfig {
    /// Validate values that would otherwise produce broken markup
    pub fn validate(&self) -> Result<()> {
        if self.mask.is_empty() {
            return Err(FilterError::Config("mask must not be empty".to_string()));
        }

        if self.mask.contains(['<', '>']) {
            return Err(FilterError::Config(format!(
                "mask {:?} must not contain angle brackets",
                self.mask
            )));
        }

        if self.rel.trim().is_empty() {
            return Err(FilterError::Config("rel must not be empty".to_string()));
        }

        if self.rel.contains(['"', '<', '>']) {
            return Err(FilterError::Config(format!(
                "rel value {:?} must not contain quotes or angle brackets",
                self.rel
            )));
        }

        for tag in &self.allowed_tags {
            if tag.is_empty() || !tag.chars().all(|c| c.is_ascii_alphanumeric()) {
                return Err(FilterError::Config(format!(
                    "allowed tag {:?} is not a valid tag name",
                    tag
                )));
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::io::Write;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(
            config.filter.stages,
            vec![FilterStage::MaskAnchors, FilterStage::AddNofollow]
        );
        assert_eq!(config.filter.mask, "***");
        assert_eq!(config.filter.rel, "nofollow");
        assert_eq!(config.filter.allowed_tags, vec!["p", "b", "hr", "strong"]);
        assert!(config.filter.validate().is_ok());
    }

    #[test]
    fn test_config_serialization() {
        let config = Config::default();
        let toml = config.to_toml_string().unwrap();
        assert!(toml.contains("[filter]"));
        assert!(toml.contains("\"mask-anchors\""));

        let config2 = Config::from_toml_str(&toml).unwrap();
        assert_eq!(config, config2);
    }

    #[test]
    fn test_partial_config_uses_defaults() {
        let config = Config::from_toml_str("[filter]\nmask = \"[link removed]\"\n").unwrap();
        assert_eq!(config.filter.mask, "[link removed]");
        assert_eq!(config.filter.rel, "nofollow");
        assert_eq!(config.filter.stages, FilterStage::default_pipeline());
    }

    #[test]
    fn test_empty_stages_allowed() {
        let config = Config::from_toml_str("[filter]\nstages = []\n").unwrap();
        assert!(config.filter.stages.is_empty());
    }

    #[test]
    fn test_unknown_stage_rejected() {
        let result = Config::from_toml_str("[filter]\nstages = [\"linkify\"]\n");
        assert!(matches!(result, Err(FilterError::Toml(_))));
    }

    #[test]
    fn test_validate_rejects_bad_values() {
        let mut config = FilterConfig::default();
        config.mask = String::new();
        assert!(config.validate().is_err());

        let mut config = FilterConfig::default();
        config.rel = "nofollow\" onclick=\"x".to_string();
        assert!(config.validate().is_err());

        let mut config = FilterConfig::default();
        config.allowed_tags.push("scr ipt".to_string());
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validate_rejects_markup_in_mask() {
        for mask in ["<a>", "</a>", "x > y"] {
            let config = FilterConfig {
                mask: mask.to_string(),
                ..FilterConfig::default()
            };
            assert!(config.validate().is_err(), "mask: {mask:?}");
        }

        let config = FilterConfig {
            mask: "[link removed]".to_string(),
            ..FilterConfig::default()
        };
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[filter]\nrel = \"nofollow ugc\"").unwrap();

        let config = Config::load(file.path()).unwrap();
        assert_eq!(config.filter.rel, "nofollow ugc");
    }

    #[test]
    fn test_load_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let result = Config::load(&dir.path().join("missing.toml"));
        assert!(matches!(result, Err(FilterError::ConfigNotFound(_))));
    }

    #[test]
    fn test_load_invalid_file_has_context() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[filter]\nmask = \"\"").unwrap();

        let err = Config::load(file.path()).unwrap_err();
        assert!(matches!(err, FilterError::WithContext { .. }));
        assert!(err.to_string().contains("mask must not be empty"));
    }
}
