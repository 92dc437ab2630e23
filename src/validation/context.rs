//! The validation context: every option recognized by the validator.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use super::error::ErrorKind;

/// Options controlling a validation pass.
///
/// The context is the only configuration surface of the validator. It is
/// read-only during validation and may be shared across parallel calls.
///
/// # Defaults
///
/// `enforce_uniqueness` and `apply_naming_conventions` default to `true`;
/// every `allow_*` flag defaults to `false`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ValidationContext {
    /// The source files or tables a node or relationship may be populated
    /// from. Empty means any source name is accepted; a single entry means
    /// every supplied source name is coerced to it.
    pub valid_sources: Vec<String>,
    /// The columns legally available on each source. When non-empty, every
    /// `column_mapping` is checked against its entity's resolved source;
    /// when empty, the check is skipped entirely.
    pub column_listing: HashMap<String, Vec<String>>,
    /// Require every node to carry at least one key property.
    pub enforce_uniqueness: bool,
    /// Rewrite labels, property names and relationship types to the target
    /// naming conventions.
    pub apply_naming_conventions: bool,
    /// Permit one source column to back more than one property within the
    /// same source.
    pub allow_duplicate_column_mappings: bool,
    /// Permit two relationships of the same type between the same unordered
    /// pair of labels.
    pub allow_parallel_relationships: bool,
    /// Permit relationships whose source and target labels are equal.
    pub allow_relationships_between_same_node_label: bool,
    /// Permit a model with exactly one node.
    pub allow_single_node_models: bool,
}

impl Default for ValidationContext {
    fn default() -> Self {
        Self {
            valid_sources: Vec::new(),
            column_listing: HashMap::new(),
            enforce_uniqueness: true,
            apply_naming_conventions: true,
            allow_duplicate_column_mappings: false,
            allow_parallel_relationships: false,
            allow_relationships_between_same_node_label: false,
            allow_single_node_models: false,
        }
    }
}

impl ValidationContext {
    /// Resolve a raw `source_name` against the declared valid sources.
    ///
    /// With exactly one valid source, any supplied name is coerced to it.
    /// With several, the name must be a member; with none, any name passes
    /// through unchanged.
    pub(crate) fn resolve_source_name(&self, raw: &str) -> Result<String, ErrorKind> {
        if self.valid_sources.len() == 1 {
            return Ok(self.valid_sources[0].clone());
        }
        if self.valid_sources.is_empty() || self.valid_sources.iter().any(|s| s == raw) {
            Ok(raw.to_string())
        } else {
            Err(ErrorKind::InvalidSourceName {
                source_name: raw.to_string(),
                valid_sources: self.valid_sources.clone(),
            })
        }
    }

    /// The columns legally available on `source`, honoring the
    /// "no listing supplied, no check" rule. Returns `None` when the
    /// listing map is empty; a supplied map with no entry for `source`
    /// yields an empty slice (no column is legal there).
    pub(crate) fn columns_for(&self, source: &str) -> Option<&[String]> {
        if self.column_listing.is_empty() {
            return None;
        }
        Some(
            self.column_listing
                .get(source)
                .map(|c| c.as_slice())
                .unwrap_or(&[]),
        )
    }
}
