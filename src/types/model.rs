//! Analysis Model
//!
//! The intermediate representation handed to test generators: a flat,
//! normalized aggregate of what the analyzed source declares. Built
//! incrementally by the extractor (one model per file, merged in collection
//! order) and consumed read-only by a [`TestGenerator`].
//!
//! Records are append-only: nothing is mutated or removed once pushed.
//! Record order reflects per-file traversal order and cross-file collection
//! order; it is implementation-defined and not a contract consumers may
//! rely on.
//!
//! [`TestGenerator`]: crate::generator::TestGenerator

use serde::{Deserialize, Serialize};

/// Aggregate of structural facts extracted from one or more source files.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnalysisModel {
    /// File identifiers processed, in order. Not deduplicated; used for
    /// traceability only.
    pub files: Vec<String>,
    /// Every function definition at every nesting level, including methods.
    pub functions: Vec<FunctionRecord>,
    /// Every class definition, including nested classes.
    pub classes: Vec<ClassRecord>,
    pub imports: Vec<ImportRecord>,
}

impl AnalysisModel {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append another model's records, preserving their order.
    pub fn merge(&mut self, other: AnalysisModel) {
        self.files.extend(other.files);
        self.functions.extend(other.functions);
        self.classes.extend(other.classes);
        self.imports.extend(other.imports);
    }

    /// True when the model declares nothing a generator could scaffold.
    pub fn is_empty(&self) -> bool {
        self.functions.is_empty() && self.classes.is_empty() && self.imports.is_empty()
    }
}

/// A function definition, at any nesting level.
///
/// `args` is structurally present but never populated by the extractor.
/// Parameter extraction is deliberately deferred; see DESIGN.md. Consumers
/// must treat it as optional.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FunctionRecord {
    pub name: String,
    #[serde(default)]
    pub args: Vec<String>,
}

impl FunctionRecord {
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            args: Vec::new(),
        }
    }
}

/// A class definition and the function definitions found directly in its
/// body. Nested classes are separate records; their methods are not
/// attributed here.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClassRecord {
    pub name: String,
    pub methods: Vec<MethodRecord>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MethodRecord {
    pub name: String,
}

/// One bound name introduced by an import statement.
///
/// For a plain `import os.path`, `module` is the dotted path and `name` is
/// the alias or the dotted path itself. For `from collections import
/// OrderedDict as OD`, `module` is `collections.OrderedDict` and `name` is
/// `OD`; a bare relative import (`from . import x`) has no source module, so
/// `module` is just `x`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImportRecord {
    pub module: String,
    pub name: String,
    #[serde(rename = "type")]
    pub kind: ImportKind,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ImportKind {
    Import,
    FromImport,
}
