//! Graph Modelling SDK - validation and interchange for property graph data models
//!
//! Provides unified interfaces for:
//! - Turning raw candidate schemas (LLM output, hand-authored records,
//!   diagram imports) into validated graph data models
//! - Identifier normalization to the target graph naming conventions
//! - Per-field, located validation diagnostics
//! - Import/export against diagram and workbench interchange formats
//! - YAML and text-schema serialization of validated models

pub mod export;
pub mod import;
pub mod models;
pub mod naming;
pub mod validation;

// Re-export commonly used types
pub use export::{DiagramExporter, ExportError, WorkbenchExporter};
pub use import::{DiagramImporter, ImportError, WorkbenchImporter};
pub use validation::{
    EntityField, ErrorKind, GlobalCheck, Location, PropertyField, ValidatedModel,
    ValidationContext, ValidationError, ValidationReport, validate,
};

// Re-export models
pub use models::candidate::{DataModelData, NodeData, PropertyData, RelationshipData};
pub use models::{DataModel, Node, Property, PropertyType, Relationship};
