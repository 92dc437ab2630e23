//! Export functionality
//!
//! Provides exporters for interchange formats:
//! - Diagram (node/edge diagram JSON with delimited property strings)
//! - Workbench (structured property records keyed by generated ids)
//!
//! Exporters consume a validated
//! [`DataModel`](crate::models::data_model::DataModel) and produce the
//! format's JSON text.

pub mod diagram;
pub mod workbench;

/// Error during export
#[derive(Debug, thiserror::Error, serde::Serialize, serde::Deserialize)]
pub enum ExportError {
    #[error("Serialization error: {0}")]
    SerializationError(String),
    #[error("Validation error: {0}")]
    ValidationError(String),
}

// Re-export for convenience
pub use diagram::DiagramExporter;
pub use workbench::WorkbenchExporter;
