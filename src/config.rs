//! Analyzer configuration
//!
//! Every field has a default; a YAML file only needs to name what it changes:
//!
//! ```yaml
//! recommend:
//!   top_k: 5
//!   max_fan_out: 100000
//! top_readers: 20
//! output_dir: reports
//! ```

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::debug;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Cannot read config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid config: {0}")]
    Yaml(#[from] serde_yaml::Error),
}

pub type ConfigResult<T> = Result<T, ConfigError>;

/// Co-occurrence recommendation settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RecommendConfig {
    /// Entries kept by the top-K selector
    pub top_k: usize,
    /// Ceiling on co-read occurrences gathered for one seed (None = unbounded)
    pub max_fan_out: Option<usize>,
}

impl Default for RecommendConfig {
    fn default() -> Self {
        Self {
            top_k: 10,
            max_fan_out: None,
        }
    }
}

/// Top-level configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnalyzerConfig {
    pub recommend: RecommendConfig,
    /// Rows in the top-readers table
    pub top_readers: usize,
    /// Directory for rendered graph files
    pub output_dir: PathBuf,
}

impl Default for AnalyzerConfig {
    fn default() -> Self {
        Self {
            recommend: RecommendConfig::default(),
            top_readers: 10,
            output_dir: PathBuf::from("output"),
        }
    }
}

impl AnalyzerConfig {
    pub fn from_yaml_str(yaml: &str) -> ConfigResult<Self> {
        // An empty document deserialises to unit, not to a mapping
        if yaml.trim().is_empty() {
            return Ok(Self::default());
        }
        Ok(serde_yaml::from_str(yaml)?)
    }

    pub fn from_yaml_file(path: impl AsRef<Path>) -> ConfigResult<Self> {
        let path = path.as_ref();
        debug!("Reading config from {:?}", path);
        let text = std::fs::read_to_string(path)?;
        Self::from_yaml_str(&text)
    }
}
