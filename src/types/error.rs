//! Unified Error Type System
//!
//! Single error type (`LoomError`) for the whole application.
//!
//! Two failure classes matter operationally:
//!
//! - **Fatal**: bad source path, broken configuration, generator failures.
//!   These terminate the run and surface to the user.
//! - **Per-file**: a source file that cannot be read or parsed. These are
//!   isolated by the extractor, logged, and never escalate to a run failure.

use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum LoomError {
    // -------------------------------------------------------------------------
    // System Errors (auto From impl)
    // -------------------------------------------------------------------------
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    // -------------------------------------------------------------------------
    // Domain Errors
    // -------------------------------------------------------------------------
    /// The top-level source path given to the collector does not exist.
    #[error("Source path not found: {0}")]
    SourceNotFound(PathBuf),

    /// A per-file read or parse failure. Isolated by the extractor.
    #[error("Parse error in {path}: {message}")]
    Parse { message: String, path: String },

    #[error("Config error: {0}")]
    Config(String),

    /// Failure while the generator was producing an artifact. Propagated
    /// to the caller unmodified.
    #[error("Generation failed for {item}: {reason}")]
    Generation { item: String, reason: String },
}

pub type Result<T> = std::result::Result<T, LoomError>;

impl LoomError {
    /// Create a parse error for a given file identifier.
    pub fn parse(path: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Parse {
            message: message.into(),
            path: path.into(),
        }
    }

    /// Create a generation error for a given artifact.
    pub fn generation(item: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::Generation {
            item: item.into(),
            reason: reason.into(),
        }
    }

    /// Whether this error is a per-file failure that the extractor isolates
    /// instead of aborting the run.
    pub fn is_per_file(&self) -> bool {
        matches!(self, Self::Parse { .. })
    }
}
