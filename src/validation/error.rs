//! Located validation errors.
//!
//! Every diagnostic carries a typed location path so callers can render
//! per-field messages (`nodes[2].properties[0].column_mapping`) or feed a
//! complete report back into an upstream regeneration step.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A field of a property record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PropertyField {
    ValueType,
    ColumnMapping,
}

impl fmt::Display for PropertyField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            PropertyField::ValueType => "value_type",
            PropertyField::ColumnMapping => "column_mapping",
        };
        f.write_str(name)
    }
}

/// A field of a node or relationship record. `Entity` addresses the record
/// as a whole.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EntityField {
    Entity,
    Source,
    Target,
    SourceName,
    Properties,
    Property { index: usize, field: PropertyField },
}

impl fmt::Display for EntityField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EntityField::Entity => Ok(()),
            EntityField::Source => f.write_str("source"),
            EntityField::Target => f.write_str("target"),
            EntityField::SourceName => f.write_str("source_name"),
            EntityField::Properties => f.write_str("properties"),
            EntityField::Property { index, field } => {
                write!(f, "properties[{index}].{field}")
            }
        }
    }
}

/// A model-level check with no single entity to attribute an error to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GlobalCheck {
    NodeCount,
}

impl fmt::Display for GlobalCheck {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GlobalCheck::NodeCount => f.write_str("node_count"),
        }
    }
}

/// Where in the candidate an error was found. Indices refer to positions
/// in the candidate's input order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Location {
    Node { index: usize, field: EntityField },
    Relationship { index: usize, field: EntityField },
    Global { check: GlobalCheck },
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Location::Node { index, field } => {
                write!(f, "nodes[{index}]")?;
                if !matches!(field, EntityField::Entity) {
                    write!(f, ".{field}")?;
                }
                Ok(())
            }
            Location::Relationship { index, field } => {
                write!(f, "relationships[{index}]")?;
                if !matches!(field, EntityField::Entity) {
                    write!(f, ".{field}")?;
                }
                Ok(())
            }
            Location::Global { check } => write!(f, "data_model.{check}"),
        }
    }
}

/// The kinds of validation diagnostics.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", tag = "kind")]
pub enum ErrorKind {
    #[error("unrecognized property type `{hint}`")]
    UnrecognizedPropertyType { hint: String },

    #[error("`{source_name}` is not in the provided source list: {valid_sources:?}")]
    InvalidSourceName {
        source_name: String,
        valid_sources: Vec<String>,
    },

    #[error(
        "property `{property}` is mapped to column `{column}` which is not \
         available on source `{source_name}`; the property was removed"
    )]
    InvalidColumnMapping {
        property: String,
        column: String,
        source_name: String,
    },

    #[error("node `{label}` must contain at least one key property")]
    NonuniqueNode { label: String },

    #[error("column `{column}` of source `{source_name}` may back at most one property")]
    DuplicateColumnMapping {
        column: String,
        source_name: String,
    },

    #[error(
        "relationship `{rel_type}` is populated from `{relationship_source}` but spans \
         source files; its source node `{label}` has no key property with an alias"
    )]
    MissingCrossFileJoinAlias {
        rel_type: String,
        label: String,
        relationship_source: String,
    },

    #[error("`{label}` does not resolve to a declared node label")]
    UnknownNodeLabel { label: String },

    #[error("relationship `{rel_type}` between `{source_label}` and `{target}` parallels another relationship")]
    ParallelRelationship {
        rel_type: String,
        // `source` would be picked up as the error-source field by the
        // derive; keep the wire name via serde instead.
        #[serde(rename = "source")]
        source_label: String,
        target: String,
    },

    #[error("relationship `{rel_type}` connects node `{label}` to itself")]
    SelfReferentialRelationship { rel_type: String, label: String },

    #[error("a data model requires at least 2 nodes, found {count}")]
    TooFewNodes { count: usize },
}

/// A single located diagnostic.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error, Serialize, Deserialize)]
#[error("{location}: {kind}")]
pub struct ValidationError {
    pub location: Location,
    #[source]
    pub kind: ErrorKind,
}

impl ValidationError {
    pub fn new(location: Location, kind: ErrorKind) -> Self {
        Self { location, kind }
    }
}

/// The complete diagnostic set of a failed validation pass.
///
/// `errors` holds the hard errors that caused the failure; `warnings`
/// holds recoverable diagnostics (dropped properties) gathered on the way.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[must_use = "validation reports should be inspected for per-field diagnostics"]
pub struct ValidationReport {
    pub errors: Vec<ValidationError>,
    pub warnings: Vec<ValidationError>,
}

impl std::error::Error for ValidationReport {}

impl ValidationReport {
    /// All diagnostics of a given kind, regardless of severity.
    pub fn of_kind(&self, matches: impl Fn(&ErrorKind) -> bool) -> Vec<&ValidationError> {
        self.errors
            .iter()
            .chain(self.warnings.iter())
            .filter(|e| matches(&e.kind))
            .collect()
    }
}

impl fmt::Display for ValidationReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{} validation error(s)", self.errors.len())?;
        for error in &self.errors {
            writeln!(f, "  {error}")?;
        }
        for warning in &self.warnings {
            writeln!(f, "  warning: {warning}")?;
        }
        Ok(())
    }
}
