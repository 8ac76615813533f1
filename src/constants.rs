//! Global Constants
//!
//! Centralized constants for collection and output defaults.

/// File collection constants
pub mod analysis {
    /// Source file extension accepted by the directory walk
    pub const SOURCE_EXTENSION: &str = "py";

    /// Maximum file size to analyze (1MB)
    pub const MAX_FILE_SIZE: u64 = 1_048_576;

    /// Directories that never contain analyzable application source
    pub const SKIP_DIRS: &[&str] = &[
        "__pycache__",
        ".git",
        ".venv",
        "venv",
        ".tox",
        "node_modules",
        "build",
        "dist",
    ];
}

/// Output constants
pub mod output {
    /// Default directory for generated test scaffolding
    pub const DEFAULT_OUTPUT_DIR: &str = "./tests";

    /// File name of the generated pytest scaffold
    pub const SCAFFOLD_FILE: &str = "test_integration.py";

    /// File name of the serialized analysis model
    pub const MODEL_FILE: &str = "analysis.json";
}
