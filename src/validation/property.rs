//! Property builder: raw record to normalized [`Property`].

use crate::models::candidate::PropertyData;
use crate::models::enums::PropertyType;
use crate::models::property::Property;
use crate::naming::normalize_property;

use super::context::ValidationContext;
use super::error::{ErrorKind, Location, PropertyField, ValidationError};

/// Build a normalized property from a raw record.
///
/// The value-type hint is coerced against the fixed table and fails closed;
/// the name is rewritten to the property naming convention when the context
/// asks for it. Empty aliases are treated as absent.
pub(crate) fn build_property(
    raw: &PropertyData,
    ctx: &ValidationContext,
) -> Result<Property, ErrorKind> {
    let value_type =
        PropertyType::coerce(&raw.value_type).ok_or_else(|| ErrorKind::UnrecognizedPropertyType {
            hint: raw.value_type.clone(),
        })?;

    let name = if ctx.apply_naming_conventions {
        normalize_property(&raw.name)
    } else {
        raw.name.clone()
    };

    Ok(Property {
        name,
        value_type,
        column_mapping: raw.column_mapping.clone(),
        alias: raw.alias.clone().filter(|a| !a.is_empty()),
        is_key: raw.is_key,
    })
}

/// Build every property of an entity, collecting one located error per
/// failing record instead of stopping at the first. Survivors keep their
/// candidate-relative index for later location reporting.
pub(crate) fn build_properties(
    raw_properties: &[PropertyData],
    ctx: &ValidationContext,
    locate: impl Fn(usize, PropertyField) -> Location,
    errors: &mut Vec<ValidationError>,
) -> Vec<(usize, Property)> {
    let mut built = Vec::with_capacity(raw_properties.len());
    for (index, raw) in raw_properties.iter().enumerate() {
        match build_property(raw, ctx) {
            Ok(property) => built.push((index, property)),
            Err(kind) => errors.push(ValidationError::new(
                locate(index, PropertyField::ValueType),
                kind,
            )),
        }
    }
    built
}

/// Enforce the column listing for one entity: properties mapped to columns
/// not available on `source_name` are flagged and removed rather than
/// invalidating the entity. Skipped entirely when no listing was supplied.
pub(crate) fn drop_unmapped_properties(
    properties: &mut Vec<(usize, Property)>,
    source_name: &str,
    ctx: &ValidationContext,
    locate: impl Fn(usize, PropertyField) -> Location,
    warnings: &mut Vec<ValidationError>,
) {
    let Some(columns) = ctx.columns_for(source_name) else {
        return;
    };
    properties.retain(|(index, property)| {
        if columns.iter().any(|c| c == &property.column_mapping) {
            return true;
        }
        warnings.push(ValidationError::new(
            locate(*index, PropertyField::ColumnMapping),
            ErrorKind::InvalidColumnMapping {
                property: property.name.clone(),
                column: property.column_mapping.clone(),
                source_name: source_name.to_string(),
            },
        ));
        false
    });
}
