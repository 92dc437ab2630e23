//! Raw candidate records: the unvalidated nested shape consumed by
//! [`crate::validation::validate`].
//!
//! Candidates originate from LLM structured output, hand-authored records
//! or the format importers. Field spellings follow the wire convention
//! (`type` for the value-type hint and the relationship type); fields that
//! upstream producers routinely omit default cleanly.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Raw property record.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PropertyData {
    /// The proposed property name; rewritten to the property naming
    /// convention during validation.
    pub name: String,
    /// Free-form value-type hint ("str", "int64", "STRING", ...).
    #[serde(rename = "type")]
    pub value_type: String,
    /// The source column backing the property.
    pub column_mapping: String,
    /// Optional second source column used for cross-file joins.
    #[serde(default)]
    pub alias: Option<String>,
    /// Whether the property is proposed as (part of) a unique identifier.
    #[serde(default)]
    pub is_key: bool,
}

/// Raw node record.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NodeData {
    /// The proposed node label.
    pub label: String,
    /// The proposed properties.
    #[serde(default)]
    pub properties: Vec<PropertyData>,
    /// The source file or table the node is populated from.
    #[serde(default)]
    pub source_name: String,
}

/// Raw relationship record.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RelationshipData {
    /// The proposed relationship type.
    #[serde(rename = "type")]
    pub rel_type: String,
    /// The proposed properties. May be empty.
    #[serde(default)]
    pub properties: Vec<PropertyData>,
    /// The label (in any spelling) of the node the relationship starts at.
    pub source: String,
    /// The label (in any spelling) of the node the relationship ends at.
    pub target: String,
    /// The source file or table the relationship is populated from.
    #[serde(default)]
    pub source_name: String,
}

/// Raw data model candidate: the single input shape of the validator.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DataModelData {
    #[serde(default)]
    pub nodes: Vec<NodeData>,
    #[serde(default)]
    pub relationships: Vec<RelationshipData>,
    /// Free-form annotations (provenance, notes); carried through
    /// validation untouched.
    #[serde(default)]
    pub metadata: BTreeMap<String, String>,
}
