//! Model-level validation: the entry point tying the entity builders
//! together with the cross-entity checks.

use std::collections::HashMap;

use crate::models::candidate::DataModelData;
use crate::models::data_model::DataModel;

use super::context::ValidationContext;
use super::error::{
    EntityField, ErrorKind, GlobalCheck, Location, ValidationError, ValidationReport,
};
use super::node::{build_node, resolve_label};
use super::relationship::build_relationship;

/// A successfully validated model plus the recoverable diagnostics
/// (dropped properties) gathered while building it.
#[derive(Debug, Clone, PartialEq, Eq)]
#[must_use = "a validated model should be used or its warnings inspected"]
pub struct ValidatedModel {
    pub model: DataModel,
    pub warnings: Vec<ValidationError>,
}

/// Validate a candidate model against a context.
///
/// The pass never stops at the first problem: every check runs over the
/// whole candidate and the result carries one located diagnostic per
/// finding. A candidate passes only when no hard error was found; dropped
/// properties are reported as warnings on the `Ok` side.
///
/// # Example
///
/// ```
/// use graph_modelling_sdk::{validate, ValidationContext};
/// use graph_modelling_sdk::models::candidate::{DataModelData, NodeData, PropertyData};
///
/// let candidate = DataModelData {
///     nodes: vec![
///         NodeData {
///             label: "person".into(),
///             properties: vec![PropertyData {
///                 name: "name".into(),
///                 value_type: "str".into(),
///                 column_mapping: "name".into(),
///                 alias: None,
///                 is_key: true,
///             }],
///             source_name: "people.csv".into(),
///         },
///         NodeData {
///             label: "address".into(),
///             properties: vec![PropertyData {
///                 name: "street".into(),
///                 value_type: "str".into(),
///                 column_mapping: "street".into(),
///                 alias: None,
///                 is_key: true,
///             }],
///             source_name: "people.csv".into(),
///         },
///     ],
///     relationships: vec![],
///     metadata: Default::default(),
/// };
///
/// let validated = validate(&candidate, &ValidationContext::default()).unwrap();
/// assert_eq!(validated.model.node_labels(), ["Person", "Address"]);
/// ```
pub fn validate(
    candidate: &DataModelData,
    ctx: &ValidationContext,
) -> Result<ValidatedModel, ValidationReport> {
    let mut errors = Vec::new();
    let mut warnings = Vec::new();

    let built_nodes: Vec<_> = candidate
        .nodes
        .iter()
        .enumerate()
        .map(|(i, raw)| build_node(i, raw, ctx, &mut errors, &mut warnings))
        .collect();
    let mut built_relationships: Vec<_> = candidate
        .relationships
        .iter()
        .enumerate()
        .map(|(i, raw)| build_relationship(i, raw, ctx, &mut errors, &mut warnings))
        .collect();

    check_node_count(built_nodes.len(), ctx, &mut errors);

    // Rewrites endpoint labels in place to the labels they resolved to.
    let resolved_endpoints =
        resolve_endpoints(&built_nodes, &mut built_relationships, ctx, &mut errors);

    check_self_references(&built_relationships, &resolved_endpoints, ctx, &mut errors);
    check_parallel_relationships(&built_relationships, &resolved_endpoints, ctx, &mut errors);
    check_duplicate_columns(&built_nodes, &built_relationships, ctx, &mut errors);
    check_cross_file_joins(
        &built_nodes,
        &built_relationships,
        &resolved_endpoints,
        &mut errors,
    );

    tracing::debug!(
        nodes = built_nodes.len(),
        relationships = built_relationships.len(),
        errors = errors.len(),
        warnings = warnings.len(),
        "validation pass complete"
    );

    if !errors.is_empty() {
        return Err(ValidationReport { errors, warnings });
    }

    Ok(ValidatedModel {
        model: DataModel {
            nodes: built_nodes.into_iter().map(|b| b.node).collect(),
            relationships: built_relationships
                .into_iter()
                .map(|b| b.relationship)
                .collect(),
            metadata: candidate.metadata.clone(),
        },
        warnings,
    })
}

fn check_node_count(count: usize, ctx: &ValidationContext, errors: &mut Vec<ValidationError>) {
    let enough = match count {
        0 => false,
        1 => ctx.allow_single_node_models,
        _ => true,
    };
    if !enough {
        errors.push(ValidationError::new(
            Location::Global {
                check: GlobalCheck::NodeCount,
            },
            ErrorKind::TooFewNodes { count },
        ));
    }
}

/// Match each relationship endpoint against the built node labels: exact
/// match first, then the label-normalized form compared case-insensitively.
/// Matched endpoints are rewritten to the label they resolved to; misses
/// get an [`ErrorKind::UnknownNodeLabel`] and a `None` entry.
fn resolve_endpoints(
    nodes: &[super::node::BuiltNode],
    relationships: &mut [super::relationship::BuiltRelationship],
    ctx: &ValidationContext,
    errors: &mut Vec<ValidationError>,
) -> Vec<(Option<usize>, Option<usize>)> {
    let resolve = |raw: &str| -> Option<usize> {
        if let Some(i) = nodes.iter().position(|n| n.node.label == raw) {
            return Some(i);
        }
        let normalized = resolve_label(raw, ctx);
        nodes
            .iter()
            .position(|n| n.node.label.eq_ignore_ascii_case(&normalized))
    };

    relationships
        .iter_mut()
        .enumerate()
        .map(|(index, built)| {
            let source = resolve(&built.relationship.source);
            match source {
                Some(i) => built.relationship.source = nodes[i].node.label.clone(),
                None => errors.push(ValidationError::new(
                    Location::Relationship {
                        index,
                        field: EntityField::Source,
                    },
                    ErrorKind::UnknownNodeLabel {
                        label: built.relationship.source.clone(),
                    },
                )),
            }
            let target = resolve(&built.relationship.target);
            match target {
                Some(i) => built.relationship.target = nodes[i].node.label.clone(),
                None => errors.push(ValidationError::new(
                    Location::Relationship {
                        index,
                        field: EntityField::Target,
                    },
                    ErrorKind::UnknownNodeLabel {
                        label: built.relationship.target.clone(),
                    },
                )),
            }
            (source, target)
        })
        .collect()
}

fn check_self_references(
    relationships: &[super::relationship::BuiltRelationship],
    endpoints: &[(Option<usize>, Option<usize>)],
    ctx: &ValidationContext,
    errors: &mut Vec<ValidationError>,
) {
    if ctx.allow_relationships_between_same_node_label {
        return;
    }
    for (index, (built, (source, target))) in relationships.iter().zip(endpoints).enumerate() {
        if source.is_some() && source == target {
            errors.push(ValidationError::new(
                Location::Relationship {
                    index,
                    field: EntityField::Entity,
                },
                ErrorKind::SelfReferentialRelationship {
                    rel_type: built.relationship.rel_type.clone(),
                    label: built.relationship.source.clone(),
                },
            ));
        }
    }
}

fn check_parallel_relationships(
    relationships: &[super::relationship::BuiltRelationship],
    endpoints: &[(Option<usize>, Option<usize>)],
    ctx: &ValidationContext,
    errors: &mut Vec<ValidationError>,
) {
    if ctx.allow_parallel_relationships {
        return;
    }
    // Unordered endpoint pair: opposite directions still collide.
    let mut groups: HashMap<(String, usize, usize), Vec<usize>> = HashMap::new();
    for (index, (built, endpoint)) in relationships.iter().zip(endpoints).enumerate() {
        if let (Some(source), Some(target)) = endpoint {
            let pair = (source.min(target), source.max(target));
            groups
                .entry((built.relationship.rel_type.clone(), *pair.0, *pair.1))
                .or_default()
                .push(index);
        }
    }
    let mut offenders: Vec<usize> = groups
        .into_values()
        .filter(|members| members.len() > 1)
        .flatten()
        .collect();
    offenders.sort_unstable();
    for index in offenders {
        let relationship = &relationships[index].relationship;
        errors.push(ValidationError::new(
            Location::Relationship {
                index,
                field: EntityField::Entity,
            },
            ErrorKind::ParallelRelationship {
                rel_type: relationship.rel_type.clone(),
                source_label: relationship.source.clone(),
                target: relationship.target.clone(),
            },
        ));
    }
}

fn check_duplicate_columns(
    nodes: &[super::node::BuiltNode],
    relationships: &[super::relationship::BuiltRelationship],
    ctx: &ValidationContext,
    errors: &mut Vec<ValidationError>,
) {
    if ctx.allow_duplicate_column_mappings {
        return;
    }
    let mut usage: HashMap<(&str, &str), Vec<Location>> = HashMap::new();
    for (index, built) in nodes.iter().enumerate() {
        for (property_index, property) in built.property_indices.iter().zip(&built.node.properties)
        {
            usage
                .entry((built.node.source_name.as_str(), &property.column_mapping))
                .or_default()
                .push(Location::Node {
                    index,
                    field: EntityField::Property {
                        index: *property_index,
                        field: super::error::PropertyField::ColumnMapping,
                    },
                });
        }
    }
    for (index, built) in relationships.iter().enumerate() {
        for (property_index, property) in built
            .property_indices
            .iter()
            .zip(&built.relationship.properties)
        {
            usage
                .entry((
                    built.relationship.source_name.as_str(),
                    &property.column_mapping,
                ))
                .or_default()
                .push(Location::Relationship {
                    index,
                    field: EntityField::Property {
                        index: *property_index,
                        field: super::error::PropertyField::ColumnMapping,
                    },
                });
        }
    }

    let mut findings = Vec::new();
    for ((source_name, column), locations) in usage {
        if locations.len() > 1 {
            for location in locations {
                findings.push(ValidationError::new(
                    location,
                    ErrorKind::DuplicateColumnMapping {
                        column: column.to_string(),
                        source_name: source_name.to_string(),
                    },
                ));
            }
        }
    }
    findings.sort_by_key(|e| e.location.to_string());
    errors.extend(findings);
}

/// When a relationship's row source differs from either endpoint node's
/// source, its start node must expose a key property with an alias naming
/// the join column in the relationship's file. Relationships with no
/// source of their own are exempt.
fn check_cross_file_joins(
    nodes: &[super::node::BuiltNode],
    relationships: &[super::relationship::BuiltRelationship],
    endpoints: &[(Option<usize>, Option<usize>)],
    errors: &mut Vec<ValidationError>,
) {
    for (index, (built, (source, target))) in relationships.iter().zip(endpoints).enumerate() {
        let relationship = &built.relationship;
        if relationship.source_name.is_empty() {
            continue;
        }
        let (Some(source), Some(target)) = (source, target) else {
            continue;
        };
        let spans_files = nodes[*source].node.source_name != relationship.source_name
            || nodes[*target].node.source_name != relationship.source_name;
        if spans_files && !nodes[*source].node.has_key_alias() {
            errors.push(ValidationError::new(
                Location::Relationship {
                    index,
                    field: EntityField::Entity,
                },
                ErrorKind::MissingCrossFileJoinAlias {
                    rel_type: relationship.rel_type.clone(),
                    label: nodes[*source].node.label.clone(),
                    relationship_source: relationship.source_name.clone(),
                },
            ));
        }
    }
}
