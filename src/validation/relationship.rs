//! Relationship builder: raw record to normalized [`Relationship`].
//!
//! Endpoint labels are kept raw here; they are resolved against the built
//! node set by the model-level pass.

use crate::models::candidate::RelationshipData;
use crate::models::relationship::Relationship;
use crate::naming::normalize_relationship_type;

use super::context::ValidationContext;
use super::error::{EntityField, Location, PropertyField, ValidationError};
use super::property::{build_properties, drop_unmapped_properties};

/// A best-effort built relationship plus the candidate-relative index of
/// each surviving property.
pub(crate) struct BuiltRelationship {
    pub relationship: Relationship,
    pub property_indices: Vec<usize>,
}

/// Build a relationship from a raw record. Relationships carry no key
/// properties, so there is no uniqueness check here.
pub(crate) fn build_relationship(
    index: usize,
    raw: &RelationshipData,
    ctx: &ValidationContext,
    errors: &mut Vec<ValidationError>,
    warnings: &mut Vec<ValidationError>,
) -> BuiltRelationship {
    let rel_type = if ctx.apply_naming_conventions {
        normalize_relationship_type(&raw.rel_type)
    } else {
        raw.rel_type.clone()
    };

    let source_name = match ctx.resolve_source_name(&raw.source_name) {
        Ok(resolved) => resolved,
        Err(kind) => {
            errors.push(ValidationError::new(
                Location::Relationship {
                    index,
                    field: EntityField::SourceName,
                },
                kind,
            ));
            raw.source_name.clone()
        }
    };

    let locate = |property_index: usize, field: PropertyField| Location::Relationship {
        index,
        field: EntityField::Property {
            index: property_index,
            field,
        },
    };
    let mut properties = build_properties(&raw.properties, ctx, locate, errors);
    drop_unmapped_properties(&mut properties, &source_name, ctx, locate, warnings);

    let (property_indices, properties) = properties.into_iter().unzip();
    BuiltRelationship {
        relationship: Relationship {
            rel_type,
            properties,
            source: raw.source.clone(),
            target: raw.target.clone(),
            source_name,
        },
        property_indices,
    }
}
