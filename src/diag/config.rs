//! Runtime options
//!
//! Line patterns and the type grammar are fixed process-wide tables. What can
//! be tuned is how message bodies are annotated. Options load from YAML; any
//! field left out keeps its default.
//!
//! ```yaml
//! annotate_quoted: true
//! normalize_spacing: true
//! max_nesting_depth: 64
//! ```

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use thiserror::Error;

use crate::diag::brackets::MAX_NESTING_DEPTH;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Parse the first quoted span of each message body
    pub annotate_quoted: bool,
    /// Collapse `", "` and `" >"` inside quoted spans before scanning
    pub normalize_spacing: bool,
    /// Template nesting beyond this is left as literal text
    pub max_nesting_depth: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            annotate_quoted: true,
            normalize_spacing: true,
            max_nesting_depth: MAX_NESTING_DEPTH,
        }
    }
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("cannot read {path}: {source}")]
    Io {
        path: String,
        source: std::io::Error,
    },
    #[error("invalid configuration: {0}")]
    Yaml(#[from] serde_yaml::Error),
}

impl Config {
    pub fn from_yaml_str(source: &str) -> Result<Self, ConfigError> {
        if source.trim().is_empty() {
            return Ok(Self::default());
        }
        Ok(serde_yaml::from_str(source)?)
    }

    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let source = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.display().to_string(),
            source,
        })?;
        Self::from_yaml_str(&source)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert!(config.annotate_quoted);
        assert!(config.normalize_spacing);
        assert_eq!(config.max_nesting_depth, 64);
    }

    #[test]
    fn test_partial_yaml_keeps_defaults() {
        let config = Config::from_yaml_str("max_nesting_depth: 8\n").unwrap();
        assert_eq!(config.max_nesting_depth, 8);
        assert!(config.annotate_quoted);
    }

    #[test]
    fn test_empty_yaml_is_default() {
        assert_eq!(Config::from_yaml_str("").unwrap(), Config::default());
    }

    #[test]
    fn test_unknown_field_is_rejected() {
        assert!(Config::from_yaml_str("colour: always\n").is_err());
    }

    #[test]
    fn test_missing_file() {
        let error = Config::from_file("/nonexistent/diagtree.yaml").unwrap_err();
        assert!(matches!(error, ConfigError::Io { .. }));
    }
}
