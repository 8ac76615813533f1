//! Generate Command
//!
//! Orchestrates the full run: collect source files, extract the analysis
//! model, and hand it to the generator. Prints a human-readable summary of
//! what was produced.

use std::fs;
use std::path::PathBuf;

use crate::analyzer::{Extractor, SourceScanner};
use crate::config::ConfigLoader;
use crate::generator::{PytestScaffoldGenerator, TestGenerator};
use crate::types::Result;

pub fn run(source: PathBuf, output: Option<PathBuf>) -> Result<()> {
    let config = ConfigLoader::load()?;
    let output = output.unwrap_or_else(|| config.output.dir.clone());

    println!("Generating integration tests from: {}", source.display());
    println!("Output directory: {}", output.display());

    let scanner = SourceScanner::new(&source)
        .with_exclude(config.analysis.exclude.clone())
        .with_max_file_size(config.analysis.max_file_size);
    let files = scanner.collect()?;
    println!("Found {} source files", files.len());

    let extraction = Extractor::new().extract(&files);
    let model = &extraction.model;
    println!(
        "Extracted {} functions, {} classes, {} imports from {} files",
        model.functions.len(),
        model.classes.len(),
        model.imports.len(),
        model.files.len(),
    );
    if !extraction.skipped.is_empty() {
        println!(
            "Skipped {} files with read or parse errors",
            extraction.skipped.len()
        );
    }

    // The generator contract requires the destination to exist.
    fs::create_dir_all(&output)?;

    let generator = PytestScaffoldGenerator::new();
    let artifacts = generator.generate(model, &output)?;

    println!("\nGenerated {} test files:", artifacts.len());
    for artifact in &artifacts {
        println!("  - {}", artifact.display());
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_end_to_end_with_mixed_sources() {
        let source = TempDir::new().unwrap();
        fs::write(
            source.path().join("svc.py"),
            "import os\n\nclass Service:\n    def start(self):\n        pass\n",
        )
        .unwrap();
        fs::write(source.path().join("broken.py"), "def broken(:\n").unwrap();

        let output = TempDir::new().unwrap();
        let out_dir = output.path().join("tests");

        run(source.path().to_path_buf(), Some(out_dir.clone())).unwrap();

        assert!(out_dir.join("test_integration.py").exists());
        assert!(out_dir.join("analysis.json").exists());
    }

    #[test]
    fn test_missing_source_is_fatal() {
        let output = TempDir::new().unwrap();
        let result = run(
            PathBuf::from("/definitely/not/here"),
            Some(output.path().to_path_buf()),
        );
        assert!(result.is_err());
    }

    #[test]
    fn test_empty_source_succeeds_with_no_artifacts() {
        let source = TempDir::new().unwrap();
        fs::write(source.path().join("empty.py"), "").unwrap();

        let output = TempDir::new().unwrap();
        let out_dir = output.path().join("tests");

        run(source.path().to_path_buf(), Some(out_dir.clone())).unwrap();

        assert!(out_dir.exists());
        assert!(!out_dir.join("test_integration.py").exists());
    }
}
