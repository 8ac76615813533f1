use std::path::{Path, PathBuf};

use ignore::WalkBuilder;

use crate::constants::analysis::{MAX_FILE_SIZE, SKIP_DIRS, SOURCE_EXTENSION};
use crate::types::{LoomError, Result};

/// Collects the ordered set of source files to analyze.
///
/// A file path is returned as a one-element sequence, unfiltered: the
/// extractor decides whether it parses. A directory is walked recursively,
/// filtered to Python source files, with a deterministic sort so repeated
/// runs see the same order.
pub struct SourceScanner {
    root: PathBuf,
    exclude: Vec<String>,
    max_file_size: u64,
}

impl SourceScanner {
    pub fn new<P: AsRef<Path>>(root: P) -> Self {
        let exclude = SKIP_DIRS.iter().map(|d| format!("**/{}/**", d)).collect();
        Self {
            root: root.as_ref().to_path_buf(),
            exclude,
            max_file_size: MAX_FILE_SIZE,
        }
    }

    pub fn with_exclude(mut self, patterns: Vec<String>) -> Self {
        self.exclude = patterns;
        self
    }

    pub fn with_max_file_size(mut self, size: u64) -> Self {
        self.max_file_size = size;
        self
    }

    /// Produce the file sequence for this scanner's root.
    ///
    /// Fails only when the root itself does not exist; unreadable or
    /// oversized entries below it are silently dropped.
    pub fn collect(&self) -> Result<Vec<PathBuf>> {
        if !self.root.exists() {
            return Err(LoomError::SourceNotFound(self.root.clone()));
        }

        if self.root.is_file() {
            return Ok(vec![self.root.clone()]);
        }

        let walker = WalkBuilder::new(&self.root)
            .hidden(false)
            .git_ignore(true)
            .follow_links(false)
            .sort_by_file_name(std::cmp::Ord::cmp)
            .build();

        let mut files = Vec::new();
        for entry in walker.filter_map(|e| e.ok()) {
            let path = entry.path();

            if !path.is_file() || !self.is_source_file(path) || self.should_exclude(path) {
                continue;
            }

            match path.metadata() {
                Ok(meta) if meta.len() <= self.max_file_size => files.push(path.to_path_buf()),
                Ok(meta) => {
                    tracing::debug!(
                        "Skipping {} ({} bytes over limit)",
                        path.display(),
                        meta.len()
                    );
                }
                Err(e) => tracing::debug!("Skipping {}: {}", path.display(), e),
            }
        }

        Ok(files)
    }

    fn is_source_file(&self, path: &Path) -> bool {
        path.extension()
            .and_then(|e| e.to_str())
            .is_some_and(|ext| ext == SOURCE_EXTENSION)
    }

    fn should_exclude(&self, path: &Path) -> bool {
        let path_str = path.to_string_lossy();
        self.exclude.iter().any(|pattern| {
            glob::Pattern::new(pattern)
                .map(|p| p.matches(&path_str))
                .unwrap_or(false)
        })
    }
}
