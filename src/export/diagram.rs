//! Diagram exporter for generating node/edge diagram JSON from validated
//! data models.

use serde_json::{Map, Value};

use super::ExportError;
use crate::import::diagram::{DiagramModel, DiagramNode, DiagramPosition, DiagramRelationship};
use crate::models::data_model::DataModel;
use crate::models::property::Property;

// Canvas spacing between grid cells.
const GRID_COLUMNS: usize = 5;
const GRID_X_STEP: f64 = 250.0;
const GRID_Y_STEP: f64 = 200.0;

/// Exporter for the diagram format.
pub struct DiagramExporter;

impl Default for DiagramExporter {
    fn default() -> Self {
        Self::new()
    }
}

impl DiagramExporter {
    /// Create a new diagram exporter instance.
    pub fn new() -> Self {
        Self
    }

    /// Export a validated model as pretty-printed diagram JSON.
    ///
    /// # Example
    ///
    /// ```rust
    /// use graph_modelling_sdk::export::diagram::DiagramExporter;
    /// use graph_modelling_sdk::import::diagram::DiagramImporter;
    /// # use graph_modelling_sdk::{validate, ValidationContext};
    /// # use graph_modelling_sdk::models::candidate::{DataModelData, NodeData, PropertyData};
    /// # let candidate = DataModelData {
    /// #     nodes: vec![
    /// #         NodeData {
    /// #             label: "Person".into(),
    /// #             properties: vec![PropertyData {
    /// #                 name: "name".into(),
    /// #                 value_type: "STRING".into(),
    /// #                 column_mapping: "name".into(),
    /// #                 alias: None,
    /// #                 is_key: true,
    /// #             }],
    /// #             source_name: "people.csv".into(),
    /// #         },
    /// #         NodeData {
    /// #             label: "Address".into(),
    /// #             properties: vec![PropertyData {
    /// #                 name: "street".into(),
    /// #                 value_type: "STRING".into(),
    /// #                 column_mapping: "street".into(),
    /// #                 alias: None,
    /// #                 is_key: true,
    /// #             }],
    /// #             source_name: "people.csv".into(),
    /// #         },
    /// #     ],
    /// #     relationships: vec![],
    /// #     metadata: Default::default(),
    /// # };
    /// # let model = validate(&candidate, &ValidationContext::default()).unwrap().model;
    /// let json = DiagramExporter::new().export(&model).unwrap();
    /// let back = DiagramImporter::new().import(&json).unwrap();
    /// assert_eq!(back.nodes[0].label, "Person");
    /// ```
    pub fn export(&self, model: &DataModel) -> Result<String, ExportError> {
        let diagram = self.to_diagram(model);
        serde_json::to_string_pretty(&diagram)
            .map_err(|e| ExportError::SerializationError(e.to_string()))
    }

    /// Build the diagram document, laying nodes out on a fixed grid.
    pub fn to_diagram(&self, model: &DataModel) -> DiagramModel {
        let nodes = model
            .nodes
            .iter()
            .enumerate()
            .map(|(i, node)| {
                let mut properties = Map::new();
                for property in &node.properties {
                    properties.insert(
                        property.name.clone(),
                        Value::String(property_value(property)),
                    );
                }
                DiagramNode {
                    id: node.label.clone(),
                    position: DiagramPosition {
                        x: (i % GRID_COLUMNS) as f64 * GRID_X_STEP,
                        y: (i / GRID_COLUMNS) as f64 * GRID_Y_STEP,
                    },
                    caption: node.source_name.clone(),
                    labels: vec![node.label.clone()],
                    properties,
                }
            })
            .collect();

        let relationships = model
            .relationships
            .iter()
            .map(|relationship| {
                let mut properties = Map::new();
                for property in &relationship.properties {
                    properties.insert(
                        property.name.clone(),
                        Value::String(property_value(property)),
                    );
                }
                if !relationship.source_name.is_empty() {
                    properties.insert(
                        "csv".to_string(),
                        Value::String(relationship.source_name.clone()),
                    );
                }
                DiagramRelationship {
                    id: format!(
                        "{}{}{}",
                        relationship.rel_type, relationship.source, relationship.target
                    ),
                    from_id: relationship.source.clone(),
                    to_id: relationship.target.clone(),
                    rel_type: relationship.rel_type.clone(),
                    properties,
                }
            })
            .collect();

        DiagramModel {
            nodes,
            relationships,
        }
    }
}

/// Compose the delimited diagram value for one property.
fn property_value(property: &Property) -> String {
    let mut value = match &property.alias {
        Some(alias) => format!("{}, {}", property.column_mapping, alias),
        None => property.column_mapping.clone(),
    };
    value.push_str(" | ");
    value.push_str(property.value_type.as_str());
    if property.is_key {
        value.push_str(" | nodekey");
    }
    value
}
