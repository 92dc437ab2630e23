//! Import functionality
//!
//! Provides parsers for importing candidate data models from interchange
//! formats:
//! - Diagram (node/edge diagram JSON with delimited property strings)
//! - Workbench (structured property records keyed by generated ids)
//!
//! Importers produce the raw candidate shape
//! ([`DataModelData`](crate::models::candidate::DataModelData)); run
//! [`validate`](crate::validation::validate) on the result to obtain a
//! checked model.

pub mod diagram;
pub mod workbench;

/// Error during import
#[derive(Debug, thiserror::Error, serde::Serialize, serde::Deserialize)]
pub enum ImportError {
    #[error("Parse error: {0}")]
    ParseError(String),
    #[error("Unknown node reference: {0}")]
    UnknownNodeReference(String),
}

// Re-export for convenience
pub use diagram::DiagramImporter;
pub use workbench::WorkbenchImporter;
