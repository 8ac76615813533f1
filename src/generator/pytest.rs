//! Pytest Scaffold Generator
//!
//! Turns the analysis model into pytest scaffolding: one test class per
//! extracted class with a stub per method, plus a stub per free function.
//! Every stub is a `pytest.skip` placeholder to be filled in by hand; the
//! scaffold exists so the wiring (imports, grouping, naming) is already
//! done. Alongside the scaffold the raw model is written as JSON for
//! traceability.

use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};

use crate::constants::output::{MODEL_FILE, SCAFFOLD_FILE};
use crate::types::{AnalysisModel, ImportKind, LoomError, Result};

use super::TestGenerator;

#[derive(Debug, Default)]
pub struct PytestScaffoldGenerator;

impl PytestScaffoldGenerator {
    pub fn new() -> Self {
        Self
    }
}

impl TestGenerator for PytestScaffoldGenerator {
    fn generate(&self, model: &AnalysisModel, output_dir: &Path) -> Result<Vec<PathBuf>> {
        if model.is_empty() {
            return Ok(Vec::new());
        }

        let mut artifacts = Vec::new();

        let scaffold_path = output_dir.join(SCAFFOLD_FILE);
        write_artifact(&scaffold_path, &render_scaffold(model))?;
        artifacts.push(scaffold_path);

        let model_path = output_dir.join(MODEL_FILE);
        write_artifact(&model_path, &serde_json::to_string_pretty(model)?)?;
        artifacts.push(model_path);

        Ok(artifacts)
    }
}

fn write_artifact(path: &Path, content: &str) -> Result<()> {
    fs::write(path, content).map_err(|e| {
        LoomError::generation(path.to_string_lossy().to_string(), e.to_string())
    })
}

fn render_scaffold(model: &AnalysisModel) -> String {
    let mut out = String::new();

    out.push_str("\"\"\"Integration test scaffolding generated by testloom.\n\n");
    out.push_str("Each stub is a skipped placeholder: replace the skip with a real\n");
    out.push_str("scenario that exercises the component against its collaborators.\n");
    out.push_str("\"\"\"\n\n");
    out.push_str("import pytest\n");

    if !model.imports.is_empty() {
        out.push_str("\n# Modules the analyzed code depends on:\n");
        for import in &model.imports {
            match import.kind {
                ImportKind::Import => {
                    out.push_str(&format!("#   import {}\n", import.module));
                }
                ImportKind::FromImport => {
                    out.push_str(&format!(
                        "#   from-import {} (bound as {})\n",
                        import.module, import.name
                    ));
                }
            }
        }
    }

    for class in &model.classes {
        out.push_str(&format!("\n\nclass Test{}Integration:\n", class.name));
        if class.methods.is_empty() {
            out.push_str("    def test_instantiation(self):\n");
            out.push_str(&format!(
                "        pytest.skip(\"scaffold: construct {} with real collaborators\")\n",
                class.name
            ));
            continue;
        }
        for (i, method) in class.methods.iter().enumerate() {
            if i > 0 {
                out.push('\n');
            }
            out.push_str(&format!("    def test_{}(self):\n", method.name));
            out.push_str(&format!(
                "        pytest.skip(\"scaffold: exercise {}.{} in an integrated scenario\")\n",
                class.name, method.name
            ));
        }
    }

    let free_functions = free_function_names(model);
    if !free_functions.is_empty() {
        out.push('\n');
        for name in free_functions {
            out.push_str(&format!("\ndef test_{}():\n", name));
            out.push_str(&format!(
                "    pytest.skip(\"scaffold: exercise {} end to end\")\n",
                name
            ));
        }
    }

    out
}

/// Function names to stub at module level: everything in the flat function
/// list that is not attributed to a class as a method, deduplicated with the
/// first occurrence winning.
fn free_function_names(model: &AnalysisModel) -> Vec<&str> {
    let method_names: HashSet<&str> = model
        .classes
        .iter()
        .flat_map(|c| c.methods.iter().map(|m| m.name.as_str()))
        .collect();

    let mut seen = HashSet::new();
    model
        .functions
        .iter()
        .map(|f| f.name.as_str())
        .filter(|name| !method_names.contains(name) && seen.insert(*name))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{ClassRecord, FunctionRecord, ImportRecord, MethodRecord};
    use tempfile::TempDir;

    fn sample_model() -> AnalysisModel {
        let mut model = AnalysisModel::new();
        model.files.push("svc.py".to_string());
        model.classes.push(ClassRecord {
            name: "Service".to_string(),
            methods: vec![
                MethodRecord {
                    name: "start".to_string(),
                },
                MethodRecord {
                    name: "stop".to_string(),
                },
            ],
        });
        model.functions.push(FunctionRecord::named("start"));
        model.functions.push(FunctionRecord::named("stop"));
        model.functions.push(FunctionRecord::named("main"));
        model.imports.push(ImportRecord {
            module: "os".to_string(),
            name: "os".to_string(),
            kind: ImportKind::Import,
        });
        model
    }

    #[test]
    fn test_generate_writes_scaffold_and_model() {
        let dir = TempDir::new().unwrap();
        let artifacts = PytestScaffoldGenerator::new()
            .generate(&sample_model(), dir.path())
            .unwrap();

        assert_eq!(artifacts.len(), 2);
        for artifact in &artifacts {
            assert!(artifact.exists(), "missing artifact {}", artifact.display());
        }

        let scaffold = std::fs::read_to_string(dir.path().join(SCAFFOLD_FILE)).unwrap();
        assert!(scaffold.contains("class TestServiceIntegration:"));
        assert!(scaffold.contains("def test_start(self):"));
        assert!(scaffold.contains("def test_stop(self):"));
        assert!(scaffold.contains("def test_main():"));
        assert!(scaffold.contains("import pytest"));
    }

    #[test]
    fn test_methods_not_duplicated_as_free_functions() {
        let scaffold = render_scaffold(&sample_model());
        // `start` appears as a method stub only, never a module-level stub.
        assert!(!scaffold.contains("def test_start():"));
    }

    #[test]
    fn test_model_json_round_trips() {
        let dir = TempDir::new().unwrap();
        let model = sample_model();
        PytestScaffoldGenerator::new()
            .generate(&model, dir.path())
            .unwrap();

        let json = std::fs::read_to_string(dir.path().join(MODEL_FILE)).unwrap();
        let restored: AnalysisModel = serde_json::from_str(&json).unwrap();
        assert_eq!(restored, model);
    }

    #[test]
    fn test_empty_model_yields_no_artifacts() {
        let dir = TempDir::new().unwrap();
        let artifacts = PytestScaffoldGenerator::new()
            .generate(&AnalysisModel::new(), dir.path())
            .unwrap();
        assert!(artifacts.is_empty());
        assert!(!dir.path().join(SCAFFOLD_FILE).exists());
    }

    #[test]
    fn test_class_without_methods_gets_instantiation_stub() {
        let mut model = AnalysisModel::new();
        model.classes.push(ClassRecord {
            name: "Marker".to_string(),
            methods: Vec::new(),
        });
        let scaffold = render_scaffold(&model);
        assert!(scaffold.contains("class TestMarkerIntegration:"));
        assert!(scaffold.contains("def test_instantiation(self):"));
    }
}
