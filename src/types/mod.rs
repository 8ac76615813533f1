//! Core Types
//!
//! The analysis model (IR) and the unified error type.

pub mod error;
pub mod model;

pub use error::{LoomError, Result};
pub use model::{
    AnalysisModel, ClassRecord, FunctionRecord, ImportKind, ImportRecord, MethodRecord,
};
