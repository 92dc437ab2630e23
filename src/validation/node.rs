//! Node builder: raw record to normalized [`Node`], collecting located
//! diagnostics along the way.

use crate::models::candidate::NodeData;
use crate::models::node::Node;
use crate::naming::normalize_label;

use super::context::ValidationContext;
use super::error::{EntityField, ErrorKind, Location, PropertyField, ValidationError};
use super::property::{build_properties, drop_unmapped_properties};

/// A best-effort built node plus the candidate-relative index of each
/// surviving property (needed by the model-level duplicate-column check).
pub(crate) struct BuiltNode {
    pub node: Node,
    pub property_indices: Vec<usize>,
}

/// Normalize a raw label: labels already starting with an uppercase letter
/// are left untouched.
pub(crate) fn resolve_label(raw: &str, ctx: &ValidationContext) -> String {
    if ctx.apply_naming_conventions && !raw.chars().next().is_some_and(char::is_uppercase) {
        normalize_label(raw)
    } else {
        raw.to_string()
    }
}

/// Build a node from a raw record. All diagnostics are appended to the
/// shared vectors; a node is always produced so that model-level checks can
/// still run over the full label set.
pub(crate) fn build_node(
    index: usize,
    raw: &NodeData,
    ctx: &ValidationContext,
    errors: &mut Vec<ValidationError>,
    warnings: &mut Vec<ValidationError>,
) -> BuiltNode {
    let label = resolve_label(&raw.label, ctx);

    let source_name = match ctx.resolve_source_name(&raw.source_name) {
        Ok(resolved) => resolved,
        Err(kind) => {
            errors.push(ValidationError::new(
                Location::Node {
                    index,
                    field: EntityField::SourceName,
                },
                kind,
            ));
            raw.source_name.clone()
        }
    };

    let locate = |property_index: usize, field: PropertyField| Location::Node {
        index,
        field: EntityField::Property {
            index: property_index,
            field,
        },
    };
    let mut properties = build_properties(&raw.properties, ctx, locate, errors);

    if ctx.enforce_uniqueness && !properties.iter().any(|(_, p)| p.is_key) {
        errors.push(ValidationError::new(
            Location::Node {
                index,
                field: EntityField::Properties,
            },
            ErrorKind::NonuniqueNode {
                label: label.clone(),
            },
        ));
    }

    drop_unmapped_properties(&mut properties, &source_name, ctx, locate, warnings);

    let (property_indices, properties) = properties.into_iter().unzip();
    BuiltNode {
        node: Node {
            label,
            properties,
            source_name,
        },
        property_indices,
    }
}
