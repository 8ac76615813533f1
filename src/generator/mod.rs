//! Test Generation Module
//!
//! The extraction core hands its completed [`AnalysisModel`] to a
//! [`TestGenerator`]. The trait is the whole contract: the core guarantees
//! the model's shape and that the output directory exists; what artifacts a
//! generator produces, and how it names them, is its own business. Generator
//! failures propagate to the caller unmodified.

pub mod pytest;

use std::path::{Path, PathBuf};

use crate::types::{AnalysisModel, Result};

pub use pytest::PytestScaffoldGenerator;

pub trait TestGenerator {
    /// Produce test artifacts from the model into `output_dir` and return
    /// the paths written. An empty model yields an empty artifact list.
    fn generate(&self, model: &AnalysisModel, output_dir: &Path) -> Result<Vec<PathBuf>>;
}
