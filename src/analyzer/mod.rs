//! Code Analyzer Module
//!
//! The structural extraction core:
//! - File collection ([`scanner`])
//! - Python parsing via tree-sitter ([`parser`])
//! - Declaration-level extraction into the analysis model ([`extract`])

pub mod extract;
pub mod parser;
pub mod scanner;

pub use extract::{Extraction, Extractor, extract_source};
pub use scanner::SourceScanner;
