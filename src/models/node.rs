//! Node model for validated graph data models.

use super::property::Property;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A labeled entity populated from one source table or file.
///
/// A node is defined by its label and properties. When uniqueness
/// enforcement is on, at least one property is a key property.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Node {
    /// The node label.
    pub label: String,
    /// The properties within the node.
    pub properties: Vec<Property>,
    /// The source file or table the node is populated from.
    pub source_name: String,
}

impl Node {
    /// The node property names.
    pub fn property_names(&self) -> Vec<&str> {
        self.properties.iter().map(|p| p.name.as_str()).collect()
    }

    /// The key properties, if any.
    pub fn key_properties(&self) -> Vec<&Property> {
        self.properties.iter().filter(|p| p.is_key).collect()
    }

    /// Whether any key property carries a cross-file join alias.
    pub fn has_key_alias(&self) -> bool {
        self.properties
            .iter()
            .any(|p| p.is_key && p.alias.is_some())
    }

    /// The schema text block for this node: the `(:Label)` line followed by
    /// one indented line per property.
    pub fn render_text(&self) -> String {
        let mut out = format!("(:{})", self.label);
        for property in &self.properties {
            out.push_str("\n  ");
            out.push_str(&property.render());
        }
        out
    }
}

impl fmt::Display for Node {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "(:{})", self.label)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::enums::PropertyType;

    fn person() -> Node {
        Node {
            label: "Person".to_string(),
            properties: vec![
                Property {
                    name: "name".to_string(),
                    value_type: PropertyType::String,
                    column_mapping: "name".to_string(),
                    alias: Some("knows".to_string()),
                    is_key: true,
                },
                Property {
                    name: "age".to_string(),
                    value_type: PropertyType::Integer,
                    column_mapping: "age".to_string(),
                    alias: None,
                    is_key: false,
                },
            ],
            source_name: "people.csv".to_string(),
        }
    }

    #[test]
    fn exposes_key_properties() {
        let node = person();
        assert_eq!(node.key_properties().len(), 1);
        assert!(node.has_key_alias());
        assert_eq!(node.property_names(), vec!["name", "age"]);
    }

    #[test]
    fn renders_text_block() {
        assert_eq!(
            person().render_text(),
            "(:Person)\n  name (name): STRING | KEY\n  age (age): INTEGER"
        );
    }
}
