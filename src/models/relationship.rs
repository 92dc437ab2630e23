//! Relationship model for validated graph data models.

use super::property::Property;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A typed, directed edge between two node labels.
///
/// `source` and `target` always equal the post-normalization label of a
/// node in the same model; the validation pass resolves them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Relationship {
    /// The relationship type.
    #[serde(rename = "type")]
    pub rel_type: String,
    /// The properties within the relationship. May be empty.
    pub properties: Vec<Property>,
    /// Label of the node the relationship starts at.
    pub source: String,
    /// Label of the node the relationship ends at.
    pub target: String,
    /// The source file or table the relationship is populated from.
    pub source_name: String,
}

impl Relationship {
    /// The schema text block for this relationship: the
    /// `(:Source)-[:TYPE]->(:Target)` line followed by one indented line
    /// per property.
    pub fn render_text(&self) -> String {
        let mut out = self.to_string();
        for property in &self.properties {
            out.push_str("\n  ");
            out.push_str(&property.render());
        }
        out
    }
}

impl fmt::Display for Relationship {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "(:{})-[:{}]->(:{})", self.source, self.rel_type, self.target)
    }
}
