//! Validated graph data model: the aggregate of nodes and relationships.

use super::candidate::{DataModelData, NodeData, PropertyData, RelationshipData};
use super::node::Node;
use super::relationship::Relationship;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// A validated graph data model.
///
/// Instances are only produced by [`crate::validation::validate`] and are
/// treated as immutable values afterwards. Updates are modeled as lowering
/// a model back to its candidate shape with [`DataModel::to_candidate`],
/// editing the candidate and re-validating.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DataModel {
    /// The nodes of the model, in validated input order.
    pub nodes: Vec<Node>,
    /// The relationships of the model, in validated input order.
    pub relationships: Vec<Relationship>,
    /// Free-form annotations (provenance, notes).
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub metadata: BTreeMap<String, String>,
}

impl DataModel {
    /// The node labels, in model order.
    pub fn node_labels(&self) -> Vec<&str> {
        self.nodes.iter().map(|n| n.label.as_str()).collect()
    }

    /// The relationship types, in model order.
    pub fn relationship_types(&self) -> Vec<&str> {
        self.relationships
            .iter()
            .map(|r| r.rel_type.as_str())
            .collect()
    }

    /// Find a node by its label.
    pub fn get_node_by_label(&self, label: &str) -> Option<&Node> {
        self.nodes.iter().find(|n| n.label == label)
    }

    /// A deterministic, human- and LLM-readable rendering of the model:
    /// one block per node, then one block per relationship.
    ///
    /// ```text
    /// (:Person)
    ///   name (name): STRING | KEY
    /// (:Address)
    ///   street (street): STRING | KEY
    /// (:Person)-[:HAS_ADDRESS]->(:Address)
    /// ```
    pub fn render_text_schema(&self) -> String {
        let mut blocks = Vec::with_capacity(self.nodes.len() + self.relationships.len());
        for node in &self.nodes {
            blocks.push(node.render_text());
        }
        for relationship in &self.relationships {
            blocks.push(relationship.render_text());
        }
        blocks.join("\n")
    }

    /// Serialize the model to YAML with the stable field order
    /// (label/type, properties, source/target, source_name).
    pub fn to_yaml(&self) -> Result<String, serde_yaml::Error> {
        serde_yaml::to_string(self)
    }

    /// Deserialize a model previously produced by [`DataModel::to_yaml`].
    pub fn from_yaml(yaml: &str) -> Result<Self, serde_yaml::Error> {
        serde_yaml::from_str(yaml)
    }

    /// Lower the validated model back into the editable candidate shape,
    /// so callers can propose additions or removals and re-validate.
    pub fn to_candidate(&self) -> DataModelData {
        DataModelData {
            nodes: self
                .nodes
                .iter()
                .map(|n| NodeData {
                    label: n.label.clone(),
                    properties: n.properties.iter().map(property_data).collect(),
                    source_name: n.source_name.clone(),
                })
                .collect(),
            relationships: self
                .relationships
                .iter()
                .map(|r| RelationshipData {
                    rel_type: r.rel_type.clone(),
                    properties: r.properties.iter().map(property_data).collect(),
                    source: r.source.clone(),
                    target: r.target.clone(),
                    source_name: r.source_name.clone(),
                })
                .collect(),
            metadata: self.metadata.clone(),
        }
    }
}

fn property_data(property: &super::property::Property) -> PropertyData {
    PropertyData {
        name: property.name.clone(),
        value_type: property.value_type.as_str().to_string(),
        column_mapping: property.column_mapping.clone(),
        alias: property.alias.clone(),
        is_key: property.is_key,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::enums::PropertyType;
    use crate::models::property::Property;

    fn sample_model() -> DataModel {
        DataModel {
            nodes: vec![
                Node {
                    label: "Person".to_string(),
                    properties: vec![Property {
                        name: "name".to_string(),
                        value_type: PropertyType::String,
                        column_mapping: "name".to_string(),
                        alias: None,
                        is_key: true,
                    }],
                    source_name: "people.csv".to_string(),
                },
                Node {
                    label: "Address".to_string(),
                    properties: vec![Property {
                        name: "street".to_string(),
                        value_type: PropertyType::String,
                        column_mapping: "street".to_string(),
                        alias: None,
                        is_key: true,
                    }],
                    source_name: "people.csv".to_string(),
                },
            ],
            relationships: vec![Relationship {
                rel_type: "HAS_ADDRESS".to_string(),
                properties: Vec::new(),
                source: "Person".to_string(),
                target: "Address".to_string(),
                source_name: "people.csv".to_string(),
            }],
            metadata: BTreeMap::new(),
        }
    }

    #[test]
    fn renders_deterministic_text_schema() {
        assert_eq!(
            sample_model().render_text_schema(),
            "(:Person)\n  name (name): STRING | KEY\n\
             (:Address)\n  street (street): STRING | KEY\n\
             (:Person)-[:HAS_ADDRESS]->(:Address)"
        );
    }

    #[test]
    fn yaml_round_trips() {
        let model = sample_model();
        let yaml = model.to_yaml().unwrap();
        assert!(yaml.contains("label: Person"));
        assert!(yaml.contains("value_type: STRING"));
        assert!(yaml.contains("type: HAS_ADDRESS"));
        assert_eq!(DataModel::from_yaml(&yaml).unwrap(), model);
    }

    #[test]
    fn lowers_to_candidate_shape() {
        let candidate = sample_model().to_candidate();
        assert_eq!(candidate.nodes.len(), 2);
        assert_eq!(candidate.nodes[0].properties[0].value_type, "STRING");
        assert_eq!(candidate.relationships[0].rel_type, "HAS_ADDRESS");
    }
}
