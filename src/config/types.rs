//! Configuration Types
//!
//! Small, flat configuration with sensible defaults. Everything here can be
//! overridden from `.testloom.toml` or `TESTLOOM_*` environment variables.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::constants::{analysis, output};

/// Root configuration structure
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub version: String,

    /// File collection settings
    pub analysis: AnalysisConfig,

    /// Generated artifact settings
    pub output: OutputConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            version: "1.0".to_string(),
            analysis: AnalysisConfig::default(),
            output: OutputConfig::default(),
        }
    }
}

impl Config {
    /// Validate configuration values are within acceptable ranges.
    pub fn validate(&self) -> crate::types::Result<()> {
        if self.analysis.max_file_size == 0 {
            return Err(crate::types::LoomError::Config(
                "analysis.max_file_size must be greater than 0".to_string(),
            ));
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct AnalysisConfig {
    /// Glob patterns excluded from directory walks
    pub exclude: Vec<String>,

    /// Maximum file size to analyze (bytes)
    pub max_file_size: u64,
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            exclude: analysis::SKIP_DIRS
                .iter()
                .map(|d| format!("**/{}/**", d))
                .collect(),
            max_file_size: analysis::MAX_FILE_SIZE,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    /// Directory for generated test scaffolding
    pub dir: PathBuf,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            dir: PathBuf::from(output::DEFAULT_OUTPUT_DIR),
        }
    }
}
