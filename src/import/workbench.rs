//! Workbench parser for importing workbench JSON into candidate data
//! models.
//!
//! The workbench format keeps nodes and relationships in maps keyed by
//! generated ids (`Node0`, `Rel0`, ...). Each property record carries an
//! explicit `datatype`, a `referenceData` field comma-joining the source
//! column and the optional alias, and key flags; either
//! `hasUniqueConstraint` or `isPartOfKey` marks a key property.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::collections::HashMap;

use super::ImportError;
use crate::models::candidate::{DataModelData, NodeData, PropertyData, RelationshipData};
use crate::models::enums::PropertyType;

/// A property record as stored in the workbench JSON.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WorkbenchProperty {
    pub key: String,
    pub name: String,
    pub datatype: String,
    #[serde(default)]
    pub reference_data: String,
    #[serde(default)]
    pub is_part_of_key: bool,
    #[serde(default)]
    pub is_indexed: bool,
    #[serde(default)]
    pub must_exist: bool,
    #[serde(default)]
    pub has_unique_constraint: bool,
    #[serde(default)]
    pub is_array: bool,
}

/// A node record as stored in the workbench JSON. The `description` field
/// carries the source file name.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WorkbenchNode {
    #[serde(default = "node_class_type")]
    pub class_type: String,
    pub key: String,
    pub label: String,
    #[serde(default)]
    pub properties: Map<String, Value>,
    #[serde(default)]
    pub x: f64,
    #[serde(default)]
    pub y: f64,
    #[serde(default)]
    pub description: String,
}

/// A relationship record as stored in the workbench JSON. Endpoints are
/// references to node keys, not labels.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WorkbenchRelationship {
    #[serde(default = "relationship_class_type")]
    pub class_type: String,
    pub key: String,
    #[serde(rename = "type")]
    pub rel_type: String,
    pub start_node_label_key: String,
    pub end_node_label_key: String,
    #[serde(default)]
    pub properties: Map<String, Value>,
    #[serde(default)]
    pub description: String,
}

/// The `dataModel` section of a workbench document.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WorkbenchGraph {
    #[serde(default)]
    pub node_labels: Map<String, Value>,
    #[serde(default)]
    pub relationship_types: Map<String, Value>,
}

/// A complete workbench document.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WorkbenchModel {
    #[serde(default)]
    pub metadata: Map<String, Value>,
    pub data_model: WorkbenchGraph,
}

pub(crate) fn node_class_type() -> String {
    "NodeLabel".to_string()
}

pub(crate) fn relationship_class_type() -> String {
    "RelationshipType".to_string()
}

/// Parser for the workbench format.
pub struct WorkbenchImporter;

impl Default for WorkbenchImporter {
    fn default() -> Self {
        Self::new()
    }
}

impl WorkbenchImporter {
    /// Create a new workbench parser instance.
    pub fn new() -> Self {
        Self
    }

    /// Import workbench JSON and build a candidate data model.
    pub fn import(&self, json_content: &str) -> Result<DataModelData, ImportError> {
        let workbench: WorkbenchModel = serde_json::from_str(json_content)
            .map_err(|e| ImportError::ParseError(e.to_string()))?;
        self.from_workbench(&workbench)
    }

    /// Build a candidate data model from an already-parsed workbench
    /// document.
    pub fn from_workbench(&self, workbench: &WorkbenchModel) -> Result<DataModelData, ImportError> {
        let mut label_by_key: HashMap<String, String> = HashMap::new();
        let mut nodes = Vec::with_capacity(workbench.data_model.node_labels.len());

        for (key, value) in &workbench.data_model.node_labels {
            let node: WorkbenchNode = serde_json::from_value(value.clone())
                .map_err(|e| ImportError::ParseError(format!("node `{key}`: {e}")))?;
            label_by_key.insert(key.clone(), node.label.clone());
            nodes.push(NodeData {
                label: node.label,
                properties: candidate_properties(key, &node.properties)?,
                source_name: node.description,
            });
        }

        let mut relationships =
            Vec::with_capacity(workbench.data_model.relationship_types.len());
        for (key, value) in &workbench.data_model.relationship_types {
            let relationship: WorkbenchRelationship = serde_json::from_value(value.clone())
                .map_err(|e| ImportError::ParseError(format!("relationship `{key}`: {e}")))?;
            let source = label_by_key
                .get(&relationship.start_node_label_key)
                .ok_or_else(|| {
                    ImportError::UnknownNodeReference(relationship.start_node_label_key.clone())
                })?;
            let target = label_by_key
                .get(&relationship.end_node_label_key)
                .ok_or_else(|| {
                    ImportError::UnknownNodeReference(relationship.end_node_label_key.clone())
                })?;

            relationships.push(RelationshipData {
                rel_type: relationship.rel_type,
                properties: candidate_properties(key, &relationship.properties)?,
                source: source.clone(),
                target: target.clone(),
                source_name: relationship.description,
            });
        }

        Ok(DataModelData {
            nodes,
            relationships,
            metadata: Default::default(),
        })
    }
}

fn candidate_properties(
    entity_key: &str,
    properties: &Map<String, Value>,
) -> Result<Vec<PropertyData>, ImportError> {
    let mut out = Vec::with_capacity(properties.len());
    for (name, value) in properties {
        let property: WorkbenchProperty = serde_json::from_value(value.clone())
            .map_err(|e| ImportError::ParseError(format!("property `{entity_key}.{name}`: {e}")))?;
        out.push(candidate_property(property));
    }
    Ok(out)
}

fn candidate_property(property: WorkbenchProperty) -> PropertyData {
    let (column_mapping, alias) = match property.reference_data.split_once(',') {
        Some((column, alias)) => (
            column.trim().to_string(),
            Some(alias.trim().to_string()).filter(|a| !a.is_empty()),
        ),
        None => (property.reference_data.trim().to_string(), None),
    };

    // Known workbench datatypes map to the canonical spelling; anything
    // else is passed through as a raw hint for validation to judge.
    let value_type = PropertyType::from_workbench(&property.datatype)
        .map(|t| t.as_str().to_string())
        .unwrap_or(property.datatype);

    PropertyData {
        name: property.name,
        value_type,
        column_mapping,
        alias,
        is_key: property.has_unique_constraint || property.is_part_of_key,
    }
}
