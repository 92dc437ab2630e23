//! Workbench exporter for generating workbench JSON from validated data
//! models.

use serde_json::Map;
use std::collections::HashMap;

use super::ExportError;
use crate::import::workbench::{
    WorkbenchGraph, WorkbenchModel, WorkbenchNode, WorkbenchProperty, WorkbenchRelationship,
    node_class_type, relationship_class_type,
};
use crate::models::data_model::DataModel;
use crate::models::enums::PropertyType;
use crate::models::property::Property;

const GRID_COLUMNS: usize = 5;
const GRID_X_STEP: f64 = 250.0;
const GRID_Y_STEP: f64 = 200.0;

/// Exporter for the workbench format.
pub struct WorkbenchExporter;

impl Default for WorkbenchExporter {
    fn default() -> Self {
        Self::new()
    }
}

impl WorkbenchExporter {
    /// Create a new workbench exporter instance.
    pub fn new() -> Self {
        Self
    }

    /// Export a validated model as pretty-printed workbench JSON.
    pub fn export(&self, model: &DataModel) -> Result<String, ExportError> {
        let workbench = self.to_workbench(model)?;
        serde_json::to_string_pretty(&workbench)
            .map_err(|e| ExportError::SerializationError(e.to_string()))
    }

    /// Build the workbench document, keying entities by generated
    /// `Node{i}`/`Rel{i}` ids.
    pub fn to_workbench(&self, model: &DataModel) -> Result<WorkbenchModel, ExportError> {
        let mut key_by_label: HashMap<&str, String> = HashMap::new();
        let mut node_labels = Map::new();

        for (i, node) in model.nodes.iter().enumerate() {
            let key = format!("Node{i}");
            key_by_label.insert(&node.label, key.clone());

            let mut properties = Map::new();
            for property in &node.properties {
                properties.insert(
                    property.name.clone(),
                    serde_json::to_value(workbench_property(property))
                        .map_err(|e| ExportError::SerializationError(e.to_string()))?,
                );
            }

            let record = WorkbenchNode {
                class_type: node_class_type(),
                key: key.clone(),
                label: node.label.clone(),
                properties,
                x: (i % GRID_COLUMNS) as f64 * GRID_X_STEP,
                y: (i / GRID_COLUMNS) as f64 * GRID_Y_STEP,
                description: node.source_name.clone(),
            };
            node_labels.insert(
                key,
                serde_json::to_value(record)
                    .map_err(|e| ExportError::SerializationError(e.to_string()))?,
            );
        }

        let mut relationship_types = Map::new();
        for (i, relationship) in model.relationships.iter().enumerate() {
            let key = format!("Rel{i}");
            let start = key_by_label.get(relationship.source.as_str()).ok_or_else(|| {
                ExportError::ValidationError(format!(
                    "relationship `{}` references unknown node label `{}`",
                    relationship.rel_type, relationship.source
                ))
            })?;
            let end = key_by_label.get(relationship.target.as_str()).ok_or_else(|| {
                ExportError::ValidationError(format!(
                    "relationship `{}` references unknown node label `{}`",
                    relationship.rel_type, relationship.target
                ))
            })?;

            let mut properties = Map::new();
            for property in &relationship.properties {
                properties.insert(
                    property.name.clone(),
                    serde_json::to_value(workbench_property(property))
                        .map_err(|e| ExportError::SerializationError(e.to_string()))?,
                );
            }

            let record = WorkbenchRelationship {
                class_type: relationship_class_type(),
                key: key.clone(),
                rel_type: relationship.rel_type.clone(),
                start_node_label_key: start.clone(),
                end_node_label_key: end.clone(),
                properties,
                description: relationship.source_name.clone(),
            };
            relationship_types.insert(
                key,
                serde_json::to_value(record)
                    .map_err(|e| ExportError::SerializationError(e.to_string()))?,
            );
        }

        Ok(WorkbenchModel {
            metadata: Map::new(),
            data_model: WorkbenchGraph {
                node_labels,
                relationship_types,
            },
        })
    }
}

/// Compose a workbench property record: every key flag mirrors `is_key`,
/// `isArray` reflects a LIST-valued property.
fn workbench_property(property: &Property) -> WorkbenchProperty {
    let reference_data = match &property.alias {
        Some(alias) => format!("{}, {}", property.column_mapping, alias),
        None => property.column_mapping.clone(),
    };
    WorkbenchProperty {
        key: property.name.clone(),
        name: property.name.clone(),
        datatype: property.value_type.workbench_type().to_string(),
        reference_data,
        is_part_of_key: property.is_key,
        is_indexed: property.is_key,
        must_exist: property.is_key,
        has_unique_constraint: property.is_key,
        is_array: property.value_type == PropertyType::List,
    }
}
