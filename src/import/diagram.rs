//! Diagram parser for importing node/edge diagram JSON into candidate
//! data models.
//!
//! The diagram format stores each property as a single delimited string:
//! `"<column>[, <alias>] | <type> [| unique|nodekey] [| ignore]"`. A
//! property tagged `ignore`, and the reserved `csv` key used to carry the
//! source file name, are excluded from the built candidate.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::collections::HashMap;
use tracing::warn;

use super::ImportError;
use crate::models::candidate::{DataModelData, NodeData, PropertyData, RelationshipData};

/// Position of a diagram node on the canvas.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct DiagramPosition {
    pub x: f64,
    pub y: f64,
}

/// A node as stored in the diagram JSON.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DiagramNode {
    pub id: String,
    #[serde(default)]
    pub position: DiagramPosition,
    #[serde(default)]
    pub caption: String,
    #[serde(default)]
    pub labels: Vec<String>,
    #[serde(default)]
    pub properties: Map<String, Value>,
}

/// An edge as stored in the diagram JSON.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DiagramRelationship {
    pub id: String,
    #[serde(rename = "fromId")]
    pub from_id: String,
    #[serde(rename = "toId")]
    pub to_id: String,
    #[serde(rename = "type", default)]
    pub rel_type: String,
    #[serde(default)]
    pub properties: Map<String, Value>,
}

/// A complete diagram document.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DiagramModel {
    #[serde(default)]
    pub nodes: Vec<DiagramNode>,
    #[serde(default)]
    pub relationships: Vec<DiagramRelationship>,
}

/// Parser for the diagram format.
pub struct DiagramImporter;

impl Default for DiagramImporter {
    fn default() -> Self {
        Self::new()
    }
}

impl DiagramImporter {
    /// Create a new diagram parser instance.
    pub fn new() -> Self {
        Self
    }

    /// Import diagram JSON and build a candidate data model.
    ///
    /// # Example
    ///
    /// ```rust
    /// use graph_modelling_sdk::import::diagram::DiagramImporter;
    ///
    /// let json = r#"
    /// {
    ///   "nodes": [
    ///     {
    ///       "id": "n0",
    ///       "caption": "people.csv",
    ///       "labels": ["Person"],
    ///       "properties": {"name": "name | STRING | nodekey"}
    ///     }
    ///   ],
    ///   "relationships": []
    /// }
    /// "#;
    /// let candidate = DiagramImporter::new().import(json).unwrap();
    /// assert_eq!(candidate.nodes[0].label, "Person");
    /// assert!(candidate.nodes[0].properties[0].is_key);
    /// ```
    pub fn import(&self, json_content: &str) -> Result<DataModelData, ImportError> {
        let diagram: DiagramModel = serde_json::from_str(json_content)
            .map_err(|e| ImportError::ParseError(e.to_string()))?;
        self.from_diagram(&diagram)
    }

    /// Build a candidate data model from an already-parsed diagram.
    pub fn from_diagram(&self, diagram: &DiagramModel) -> Result<DataModelData, ImportError> {
        let mut label_by_id: HashMap<&str, &str> = HashMap::new();
        let mut nodes = Vec::with_capacity(diagram.nodes.len());

        for node in &diagram.nodes {
            // Multiple labels are not supported; the first one wins.
            let label = node.labels.first().ok_or_else(|| {
                ImportError::ParseError(format!("diagram node `{}` has no label", node.id))
            })?;
            label_by_id.insert(&node.id, label);

            let source_name = source_name_from(&node.properties, &node.caption);
            nodes.push(NodeData {
                label: label.clone(),
                properties: candidate_properties(&node.properties),
                source_name,
            });
        }

        let mut relationships = Vec::with_capacity(diagram.relationships.len());
        for relationship in &diagram.relationships {
            let source = *label_by_id.get(relationship.from_id.as_str()).ok_or_else(|| {
                ImportError::UnknownNodeReference(relationship.from_id.clone())
            })?;
            let target = *label_by_id.get(relationship.to_id.as_str()).ok_or_else(|| {
                ImportError::UnknownNodeReference(relationship.to_id.clone())
            })?;

            relationships.push(RelationshipData {
                rel_type: relationship.rel_type.clone(),
                properties: candidate_properties(&relationship.properties),
                source: source.to_string(),
                target: target.to_string(),
                source_name: source_name_from(&relationship.properties, ""),
            });
        }

        Ok(DataModelData {
            nodes,
            relationships,
            metadata: Default::default(),
        })
    }
}

/// The reserved `csv` property wins over the caption as the source name.
fn source_name_from(properties: &Map<String, Value>, caption: &str) -> String {
    properties
        .get("csv")
        .map(value_text)
        .unwrap_or_else(|| caption.to_string())
}

/// Parse every non-reserved, non-ignored property of a diagram entity.
fn candidate_properties(properties: &Map<String, Value>) -> Vec<PropertyData> {
    let mut out = Vec::new();
    for (name, value) in properties {
        if name == "csv" {
            continue;
        }
        let text = value_text(value);
        if text.to_lowercase().trim_end().ends_with("ignore") {
            warn!(property = %name, "skipping ignore-tagged diagram property");
            continue;
        }
        out.push(parse_property(name, &text));
    }
    out
}

/// Parse one delimited diagram property value.
///
/// A value without a `|` delimiter is taken as a bare column mapping with
/// an unknown type, defaulting to `STRING`.
fn parse_property(name: &str, value: &str) -> PropertyData {
    if !value.contains('|') {
        return PropertyData {
            name: name.to_string(),
            value_type: "STRING".to_string(),
            column_mapping: value.trim().to_string(),
            alias: None,
            is_key: false,
        };
    }

    let segments: Vec<&str> = value.split('|').map(str::trim).collect();
    let (column_mapping, alias) = match segments[0].split_once(',') {
        Some((column, alias)) => (
            column.trim().to_string(),
            Some(alias.trim().to_string()).filter(|a| !a.is_empty()),
        ),
        None => (segments[0].to_string(), None),
    };
    let value_type = segments.get(1).copied().unwrap_or("STRING").to_string();
    let is_key = segments
        .iter()
        .any(|segment| *segment == "unique" || *segment == "nodekey");

    PropertyData {
        name: name.to_string(),
        value_type,
        column_mapping,
        alias,
        is_key,
    }
}

fn value_text(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}
