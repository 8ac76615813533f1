//! TestLoom - Integration Test Scaffolding Generator
//!
//! Analyzes Python source code and generates pytest scaffolding for
//! integration tests. The pipeline is deliberately shallow:
//!
//! 1. **Collect** ([`analyzer::scanner`]): a file or directory path becomes
//!    an ordered sequence of Python source files.
//! 2. **Extract** ([`analyzer::extract`]): each file is parsed with
//!    tree-sitter and walked once, producing a normalized [`AnalysisModel`]
//!    of functions, classes with their methods, and imports. Broken files
//!    are reported and skipped, never fatal.
//! 3. **Generate** ([`generator`]): the model is handed to a
//!    [`TestGenerator`], which writes artifacts and returns their paths.
//!
//! ## Quick Start
//!
//! ```ignore
//! use testloom::{Extractor, PytestScaffoldGenerator, SourceScanner, TestGenerator};
//!
//! let files = SourceScanner::new("src/").collect()?;
//! let extraction = Extractor::new().extract(&files);
//! let artifacts = PytestScaffoldGenerator::new()
//!     .generate(&extraction.model, Path::new("tests/"))?;
//! ```
//!
//! ## Modules
//!
//! - [`analyzer`]: file collection, Python parsing, structural extraction
//! - [`generator`]: the generator trait and the pytest implementation
//! - [`types`]: the analysis model and the unified error type
//! - [`config`]: project configuration

pub mod analyzer;
pub mod cli;
pub mod config;
pub mod constants;
pub mod generator;
pub mod types;

// =============================================================================
// Core Re-exports
// =============================================================================

pub use analyzer::{Extraction, Extractor, SourceScanner, extract_source};
pub use config::{Config, ConfigLoader};
pub use generator::{PytestScaffoldGenerator, TestGenerator};
pub use types::{
    AnalysisModel, ClassRecord, FunctionRecord, ImportKind, ImportRecord, LoomError, MethodRecord,
    Result,
};
