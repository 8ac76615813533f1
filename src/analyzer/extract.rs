//! Structural Extractor
//!
//! Walks each parsed source file once and records every function definition,
//! class definition, and import statement into an [`AnalysisModel`].
//!
//! The traversal is a single recursive descent carrying an explicit scope
//! tag so that class-method attribution is an invariant of the walk:
//! a function definition becomes a method only when the walk is directly
//! inside a class body. Definitions nested in method bodies or behind
//! statement-level containers (`if`, `try`, loops) still land in the
//! model's flat `functions` list, never in `methods`.
//!
//! Each file produces its own model; the [`Extractor`] merges them in
//! collection order. A file that cannot be read or parsed contributes
//! nothing and is reported once, without affecting the rest of the run.

use std::fs;
use std::path::PathBuf;

use tree_sitter::Node;

use super::parser::{node_text, parse_python};
use crate::types::{
    AnalysisModel, ClassRecord, FunctionRecord, ImportKind, ImportRecord, MethodRecord, Result,
};

/// Node kinds the extractor distinguishes. Everything else is traversal-only.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum NodeKind {
    FunctionDef,
    ClassDef,
    Import,
    FromImport,
    Other,
}

fn classify(node: Node) -> NodeKind {
    match node.kind() {
        "function_definition" => NodeKind::FunctionDef,
        "class_definition" => NodeKind::ClassDef,
        "import_statement" => NodeKind::Import,
        "import_from_statement" => NodeKind::FromImport,
        _ => NodeKind::Other,
    }
}

/// Container context for the current node.
#[derive(Debug, Clone, Copy)]
enum Scope {
    Module,
    /// Directly inside the body of `classes[index]`.
    ClassBody(usize),
    FunctionBody,
}

/// Result of extracting a set of files: the merged model plus the
/// identifiers of files that were skipped due to read or parse failures.
#[derive(Debug, Default)]
pub struct Extraction {
    pub model: AnalysisModel,
    pub skipped: Vec<String>,
}

/// Sequential extractor over a collected file set.
#[derive(Debug, Default)]
pub struct Extractor;

impl Extractor {
    pub fn new() -> Self {
        Self
    }

    /// Extract every file, merging per-file models in order.
    ///
    /// Per-file failures are logged and recorded in `skipped`; they never
    /// abort the run or drop other files' contributions.
    pub fn extract(&self, files: &[PathBuf]) -> Extraction {
        let mut extraction = Extraction::default();

        for path in files {
            let file_id = path.to_string_lossy().to_string();

            let contribution = fs::read_to_string(path)
                .map_err(|e| crate::types::LoomError::parse(&file_id, e.to_string()))
                .and_then(|content| extract_source(&file_id, &content));

            match contribution {
                Ok(model) => extraction.model.merge(model),
                Err(e) => {
                    tracing::warn!("Skipping {}: {}", file_id, e);
                    extraction.skipped.push(file_id);
                }
            }
        }

        extraction
    }
}

/// Extract the structural facts of a single file's source text.
pub fn extract_source(file_id: &str, content: &str) -> Result<AnalysisModel> {
    let tree = parse_python(file_id, content)?;
    let src = content.as_bytes();

    let mut model = AnalysisModel::new();
    let root = tree.root_node();
    let mut cursor = root.walk();
    for child in root.named_children(&mut cursor) {
        visit(child, src, Scope::Module, &mut model);
    }

    model.files.push(file_id.to_string());
    Ok(model)
}

fn visit(node: Node, src: &[u8], scope: Scope, model: &mut AnalysisModel) {
    match classify(node) {
        NodeKind::FunctionDef => {
            let name = field_text(node, "name", src);
            if let Scope::ClassBody(index) = scope {
                model.classes[index].methods.push(MethodRecord {
                    name: name.clone(),
                });
            }
            model.functions.push(FunctionRecord::named(name));

            if let Some(body) = node.child_by_field_name("body") {
                let mut cursor = body.walk();
                for child in body.named_children(&mut cursor) {
                    visit(child, src, Scope::FunctionBody, model);
                }
            }
        }
        NodeKind::ClassDef => {
            model.classes.push(ClassRecord {
                name: field_text(node, "name", src),
                methods: Vec::new(),
            });
            let index = model.classes.len() - 1;

            if let Some(body) = node.child_by_field_name("body") {
                let mut cursor = body.walk();
                for child in body.named_children(&mut cursor) {
                    visit(child, src, Scope::ClassBody(index), model);
                }
            }
        }
        NodeKind::Import => collect_imports(node, src, model),
        NodeKind::FromImport => collect_from_imports(node, src, model),
        NodeKind::Other => {
            // Decorators wrap a definition without breaking class-body
            // directness; any other container does.
            let next = match scope {
                Scope::ClassBody(_) if node.kind() != "decorated_definition" => Scope::Module,
                s => s,
            };
            let mut cursor = node.walk();
            for child in node.named_children(&mut cursor) {
                visit(child, src, next, model);
            }
        }
    }
}

fn field_text(node: Node, field: &str, src: &[u8]) -> String {
    node.child_by_field_name(field)
        .map(|n| node_text(n, src).to_string())
        .unwrap_or_default()
}

/// `import a.b, c as d` introduces one record per imported name.
fn collect_imports(node: Node, src: &[u8], model: &mut AnalysisModel) {
    let mut cursor = node.walk();
    for name_node in node.children_by_field_name("name", &mut cursor) {
        let (module, alias) = split_alias(name_node, src);
        model.imports.push(ImportRecord {
            name: alias.unwrap_or_else(|| module.clone()),
            module,
            kind: ImportKind::Import,
        });
    }
}

/// `from m import a as b, c` introduces one record per imported name, with
/// the module synthesized as `m.a` / `m.c`. A bare relative import has no
/// source module, so the record's module is the imported name alone.
fn collect_from_imports(node: Node, src: &[u8], model: &mut AnalysisModel) {
    let module = node
        .child_by_field_name("module_name")
        .map(|m| source_module(m, src))
        .unwrap_or_default();

    let mut cursor = node.walk();
    for name_node in node.children_by_field_name("name", &mut cursor) {
        let (imported, alias) = split_alias(name_node, src);
        model.imports.push(ImportRecord {
            module: join_module(&module, &imported),
            name: alias.unwrap_or(imported),
            kind: ImportKind::FromImport,
        });
    }

    // `from m import *` carries no name fields.
    let mut cursor = node.walk();
    if node
        .named_children(&mut cursor)
        .any(|n| n.kind() == "wildcard_import")
    {
        model.imports.push(ImportRecord {
            module: join_module(&module, "*"),
            name: "*".to_string(),
            kind: ImportKind::FromImport,
        });
    }
}

/// The dotted source module of a from-import, with relative-import dots
/// stripped: `from .pkg import x` has source module `pkg`, `from . import x`
/// has none.
fn source_module(module_node: Node, src: &[u8]) -> String {
    if module_node.kind() == "relative_import" {
        let mut cursor = module_node.walk();
        module_node
            .named_children(&mut cursor)
            .find(|n| n.kind() == "dotted_name")
            .map(|n| node_text(n, src).to_string())
            .unwrap_or_default()
    } else {
        node_text(module_node, src).to_string()
    }
}

fn join_module(module: &str, imported: &str) -> String {
    if module.is_empty() {
        imported.to_string()
    } else {
        format!("{}.{}", module, imported)
    }
}

/// Resolve `name` / `name as alias` into the target path and optional alias.
fn split_alias(node: Node, src: &[u8]) -> (String, Option<String>) {
    if node.kind() == "aliased_import" {
        let target = node
            .child_by_field_name("name")
            .map(|n| node_text(n, src).to_string())
            .unwrap_or_default();
        let alias = node
            .child_by_field_name("alias")
            .map(|n| node_text(n, src).to_string());
        (target, alias)
    } else {
        (node_text(node, src).to_string(), None)
    }
}
