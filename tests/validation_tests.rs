//! Tests for candidate validation and normalization

use std::collections::HashMap;

use graph_modelling_sdk::models::candidate::{
    DataModelData, NodeData, PropertyData, RelationshipData,
};
use graph_modelling_sdk::{ErrorKind, ValidationContext, validate};

fn property(name: &str, column: &str, is_key: bool) -> PropertyData {
    PropertyData {
        name: name.to_string(),
        value_type: "str".to_string(),
        column_mapping: column.to_string(),
        alias: None,
        is_key,
    }
}

fn node(label: &str, properties: Vec<PropertyData>, source: &str) -> NodeData {
    NodeData {
        label: label.to_string(),
        properties,
        source_name: source.to_string(),
    }
}

fn relationship(rel_type: &str, source: &str, target: &str, file: &str) -> RelationshipData {
    RelationshipData {
        rel_type: rel_type.to_string(),
        properties: Vec::new(),
        source: source.to_string(),
        target: target.to_string(),
        source_name: file.to_string(),
    }
}

fn two_node_candidate() -> DataModelData {
    DataModelData {
        nodes: vec![
            node("person", vec![property("first_name", "first_name", true)], "people.csv"),
            node("current_address", vec![property("street", "street", true)], "people.csv"),
        ],
        relationships: vec![relationship("hasAddress", "person", "current_address", "people.csv")],
        metadata: Default::default(),
    }
}

#[test]
fn test_naming_conventions_applied() {
    let validated = validate(&two_node_candidate(), &ValidationContext::default()).unwrap();

    assert_eq!(validated.model.node_labels(), ["Person", "CurrentAddress"]);
    assert_eq!(validated.model.relationship_types(), ["HAS_ADDRESS"]);
    assert_eq!(validated.model.nodes[0].properties[0].name, "firstName");
    // endpoints rewritten to the normalized labels
    assert_eq!(validated.model.relationships[0].source, "Person");
    assert_eq!(validated.model.relationships[0].target, "CurrentAddress");
}

#[test]
fn test_naming_conventions_disabled() {
    let ctx = ValidationContext {
        apply_naming_conventions: false,
        ..Default::default()
    };
    let validated = validate(&two_node_candidate(), &ctx).unwrap();

    assert_eq!(validated.model.node_labels(), ["person", "current_address"]);
    assert_eq!(validated.model.relationship_types(), ["hasAddress"]);
    assert_eq!(validated.model.nodes[0].properties[0].name, "first_name");
}

#[test]
fn test_invalid_source_name_with_multiple_files() {
    let ctx = ValidationContext {
        valid_sources: vec!["a.csv".to_string(), "b.csv".to_string()],
        ..Default::default()
    };
    let mut candidate = two_node_candidate();
    candidate.nodes[0].source_name = "wrong.csv".to_string();
    // alias keeps the cross-file join rule out of the picture
    candidate.nodes[0].properties[0].alias = Some("person_first_name".to_string());
    candidate.nodes[1].source_name = "a.csv".to_string();
    candidate.relationships[0].source_name = "a.csv".to_string();

    let report = validate(&candidate, &ctx).unwrap_err();
    assert_eq!(report.errors.len(), 1);
    assert_eq!(report.errors[0].location.to_string(), "nodes[0].source_name");
    assert!(matches!(
        &report.errors[0].kind,
        ErrorKind::InvalidSourceName { source_name, .. } if source_name == "wrong.csv"
    ));
}

#[test]
fn test_single_valid_source_coerces_every_entity() {
    let ctx = ValidationContext {
        valid_sources: vec!["only.csv".to_string()],
        ..Default::default()
    };
    let mut candidate = two_node_candidate();
    candidate.nodes[0].source_name = "whatever.csv".to_string();

    let validated = validate(&candidate, &ctx).unwrap();
    assert!(validated.model.nodes.iter().all(|n| n.source_name == "only.csv"));
    assert_eq!(validated.model.relationships[0].source_name, "only.csv");
}

#[test]
fn test_nonunique_node_toggle() {
    let mut candidate = two_node_candidate();
    candidate.nodes[0].properties[0].is_key = false;

    let report = validate(&candidate, &ValidationContext::default()).unwrap_err();
    assert!(matches!(report.errors[0].kind, ErrorKind::NonuniqueNode { ref label } if label == "Person"));

    let ctx = ValidationContext {
        enforce_uniqueness: false,
        ..Default::default()
    };
    assert!(validate(&candidate, &ctx).is_ok());
}

#[test]
fn test_unrecognized_property_type_is_located() {
    let mut candidate = two_node_candidate();
    candidate.nodes[1].properties[0].value_type = "mystery".to_string();

    let report = validate(&candidate, &ValidationContext::default()).unwrap_err();
    assert_eq!(
        report.errors[0].location.to_string(),
        "nodes[1].properties[0].value_type"
    );
    assert!(matches!(
        &report.errors[0].kind,
        ErrorKind::UnrecognizedPropertyType { hint } if hint == "mystery"
    ));
}

#[test]
fn test_dropped_property_is_a_warning_not_an_error() {
    let mut candidate = two_node_candidate();
    candidate.nodes[0]
        .properties
        .push(property("nickname", "not_a_column", false));
    let ctx = ValidationContext {
        column_listing: HashMap::from([
            ("people.csv".to_string(), vec!["first_name".to_string(), "street".to_string()]),
        ]),
        ..Default::default()
    };

    let validated = validate(&candidate, &ctx).unwrap();
    assert_eq!(validated.warnings.len(), 1);
    assert_eq!(
        validated.warnings[0].location.to_string(),
        "nodes[0].properties[1].column_mapping"
    );
    assert!(matches!(
        validated.warnings[0].kind,
        ErrorKind::InvalidColumnMapping { .. }
    ));
    // the property is gone but the node survived
    assert_eq!(validated.model.nodes[0].properties.len(), 1);
}

#[test]
fn test_no_column_listing_means_no_mapping_check() {
    let mut candidate = two_node_candidate();
    candidate.nodes[0].properties[0].column_mapping = "anything_at_all".to_string();

    let validated = validate(&candidate, &ValidationContext::default()).unwrap();
    assert!(validated.warnings.is_empty());
}

#[test]
fn test_duplicate_column_mapping_toggle() {
    let mut candidate = two_node_candidate();
    // both nodes on the same file, both mapped to the same column
    candidate.nodes[1].properties[0].column_mapping = "first_name".to_string();

    let report = validate(&candidate, &ValidationContext::default()).unwrap_err();
    let duplicates = report.of_kind(|k| matches!(k, ErrorKind::DuplicateColumnMapping { .. }));
    assert_eq!(duplicates.len(), 2);

    let ctx = ValidationContext {
        allow_duplicate_column_mappings: true,
        ..Default::default()
    };
    assert!(validate(&candidate, &ctx).is_ok());
}

#[test]
fn test_coerced_sources_collide_on_shared_columns() {
    // Distinct files in the candidate, but a single valid source forces
    // both nodes onto one file, where the shared column collides.
    let ctx = ValidationContext {
        valid_sources: vec!["only.csv".to_string()],
        ..Default::default()
    };
    let candidate = DataModelData {
        nodes: vec![
            node("Person", vec![property("id", "id", true)], "people.csv"),
            node("Address", vec![property("addressId", "id", true)], "addresses.csv"),
        ],
        relationships: Vec::new(),
        metadata: Default::default(),
    };

    let report = validate(&candidate, &ctx).unwrap_err();
    let duplicates = report.of_kind(|k| matches!(k, ErrorKind::DuplicateColumnMapping { .. }));
    assert_eq!(duplicates.len(), 2);
    assert!(duplicates.iter().all(|e| matches!(
        &e.kind,
        ErrorKind::DuplicateColumnMapping { source_name, column }
            if source_name == "only.csv" && column == "id"
    )));

    // the same candidate passes when the sources stay distinct
    assert!(validate(&candidate, &ValidationContext::default()).is_ok());
}

#[test]
fn test_parallel_relationships_same_direction() {
    let mut candidate = two_node_candidate();
    candidate
        .relationships
        .push(relationship("hasAddress", "person", "current_address", "people.csv"));

    let report = validate(&candidate, &ValidationContext::default()).unwrap_err();
    let parallel = report.of_kind(|k| matches!(k, ErrorKind::ParallelRelationship { .. }));
    assert_eq!(parallel.len(), 2);
}

#[test]
fn test_parallel_relationships_opposite_direction_and_allow_flag() {
    let mut candidate = two_node_candidate();
    candidate
        .relationships
        .push(relationship("hasAddress", "current_address", "person", "people.csv"));

    let report = validate(&candidate, &ValidationContext::default()).unwrap_err();
    let parallel = report.of_kind(|k| matches!(k, ErrorKind::ParallelRelationship { .. }));
    assert_eq!(parallel.len(), 2);

    let ctx = ValidationContext {
        allow_parallel_relationships: true,
        ..Default::default()
    };
    assert!(validate(&candidate, &ctx).is_ok());
}

#[test]
fn test_different_types_are_not_parallel() {
    let mut candidate = two_node_candidate();
    candidate
        .relationships
        .push(relationship("LIVES_AT", "person", "current_address", "people.csv"));

    assert!(validate(&candidate, &ValidationContext::default()).is_ok());
}

#[test]
fn test_self_referential_relationship_toggle() {
    let mut candidate = two_node_candidate();
    candidate.relationships[0].target = "person".to_string();

    let report = validate(&candidate, &ValidationContext::default()).unwrap_err();
    assert!(matches!(
        &report.errors[0].kind,
        ErrorKind::SelfReferentialRelationship { label, .. } if label == "Person"
    ));
    assert_eq!(report.errors[0].location.to_string(), "relationships[0]");

    let ctx = ValidationContext {
        allow_relationships_between_same_node_label: true,
        ..Default::default()
    };
    assert!(validate(&candidate, &ctx).is_ok());
}

#[test]
fn test_unknown_node_label_in_relationship() {
    let mut candidate = two_node_candidate();
    candidate.relationships[0].target = "Street".to_string();

    let report = validate(&candidate, &ValidationContext::default()).unwrap_err();
    assert_eq!(report.errors[0].location.to_string(), "relationships[0].target");
    assert!(matches!(
        &report.errors[0].kind,
        ErrorKind::UnknownNodeLabel { label } if label == "Street"
    ));
}

#[test]
fn test_too_few_nodes_and_single_node_opt_in() {
    let empty = DataModelData::default();
    let report = validate(&empty, &ValidationContext::default()).unwrap_err();
    assert!(matches!(report.errors[0].kind, ErrorKind::TooFewNodes { count: 0 }));

    let single = DataModelData {
        nodes: vec![node("Person", vec![property("id", "id", true)], "a.csv")],
        relationships: Vec::new(),
        metadata: Default::default(),
    };
    let report = validate(&single, &ValidationContext::default()).unwrap_err();
    assert!(matches!(report.errors[0].kind, ErrorKind::TooFewNodes { count: 1 }));

    let ctx = ValidationContext {
        allow_single_node_models: true,
        ..Default::default()
    };
    assert!(validate(&single, &ctx).is_ok());
}

#[test]
fn test_cross_file_relationship_needs_source_key_alias() {
    // Person comes from people.csv; the relationship rows live in
    // addresses.csv, so Person's key needs an alias naming the join
    // column there.
    let mut candidate = DataModelData {
        nodes: vec![
            node("Person", vec![property("name", "name", true)], "people.csv"),
            node("Address", vec![property("street", "street", true)], "addresses.csv"),
        ],
        relationships: vec![relationship("HAS_ADDRESS", "Person", "Address", "addresses.csv")],
        metadata: Default::default(),
    };

    let report = validate(&candidate, &ValidationContext::default()).unwrap_err();
    assert_eq!(report.errors.len(), 1);
    assert_eq!(report.errors[0].location.to_string(), "relationships[0]");
    assert!(matches!(
        &report.errors[0].kind,
        ErrorKind::MissingCrossFileJoinAlias { label, .. } if label == "Person"
    ));

    candidate.nodes[0].properties[0].alias = Some("person_name".to_string());
    assert!(validate(&candidate, &ValidationContext::default()).is_ok());
}

#[test]
fn test_same_file_relationship_needs_no_alias() {
    assert!(validate(&two_node_candidate(), &ValidationContext::default()).is_ok());
}

#[test]
fn test_relationship_without_source_file_skips_join_check() {
    let candidate = DataModelData {
        nodes: vec![
            node("Person", vec![property("name", "name", true)], "people.csv"),
            node("Address", vec![property("street", "street", true)], "addresses.csv"),
        ],
        relationships: vec![relationship("HAS_ADDRESS", "Person", "Address", "")],
        metadata: Default::default(),
    };
    assert!(validate(&candidate, &ValidationContext::default()).is_ok());
}

#[test]
fn test_all_errors_are_collected_in_one_pass() {
    let mut keyed = property("name", "name", true);
    keyed.alias = Some("person_name".to_string());
    let candidate = DataModelData {
        nodes: vec![
            // bad source file
            node("person", vec![keyed], "wrong.csv"),
            // bad type hint on a non-key property
            node(
                "address",
                vec![
                    property("street", "street", true),
                    PropertyData {
                        name: "zip".to_string(),
                        value_type: "mystery".to_string(),
                        column_mapping: "zip".to_string(),
                        alias: None,
                        is_key: false,
                    },
                ],
                "a.csv",
            ),
            // no key property
            node("city", vec![property("cityName", "city_name", false)], "a.csv"),
        ],
        relationships: vec![relationship("HAS_ADDRESS", "person", "nowhere", "a.csv")],
        metadata: Default::default(),
    };
    let ctx = ValidationContext {
        valid_sources: vec!["a.csv".to_string(), "b.csv".to_string()],
        ..Default::default()
    };

    let report = validate(&candidate, &ctx).unwrap_err();
    assert_eq!(report.of_kind(|k| matches!(k, ErrorKind::InvalidSourceName { .. })).len(), 1);
    assert_eq!(report.of_kind(|k| matches!(k, ErrorKind::NonuniqueNode { .. })).len(), 1);
    assert_eq!(report.of_kind(|k| matches!(k, ErrorKind::UnrecognizedPropertyType { .. })).len(), 1);
    assert_eq!(report.of_kind(|k| matches!(k, ErrorKind::UnknownNodeLabel { .. })).len(), 1);
    assert_eq!(report.errors.len(), 4);
}

#[test]
fn test_report_renders_readable_paths() {
    let mut candidate = two_node_candidate();
    candidate.nodes[0].properties[0].value_type = "mystery".to_string();
    candidate.nodes[0].properties[0].is_key = true;

    let report = validate(&candidate, &ValidationContext::default()).unwrap_err();
    let rendered = report.to_string();
    assert!(rendered.contains("validation error(s)"));
    assert!(rendered.contains("nodes[0].properties[0].value_type"));
}
