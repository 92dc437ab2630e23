//! Property model for validated graph data models.

use super::enums::PropertyType;
use serde::{Deserialize, Serialize};

/// A typed, source-column-backed attribute of a node or relationship.
///
/// Properties are built by the validation pass: the name has been rewritten
/// to the property naming convention and the value type has been coerced
/// from the raw hint. Once part of a validated model they are immutable.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Property {
    /// The property name in the graph.
    pub name: String,
    /// The value type of the property.
    pub value_type: PropertyType,
    /// The source column that backs the property.
    pub column_mapping: String,
    /// An optional second source column used for cross-file joins.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub alias: Option<String>,
    /// Whether the property is (part of) the unique identifier of its owner.
    #[serde(default)]
    pub is_key: bool,
}

impl Property {
    /// One line of schema text: `name (column): TYPE | KEY`.
    pub fn render(&self) -> String {
        let key_marker = if self.is_key { " | KEY" } else { "" };
        format!(
            "{} ({}): {}{}",
            self.name, self.column_mapping, self.value_type, key_marker
        )
    }
}
