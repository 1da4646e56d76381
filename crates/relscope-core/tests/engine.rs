use relscope_core::{
    infer, issue_codes, ColumnData, ColumnRef, Confidence, ForeignKeyConstraint, ForeignKeyRef,
    ColumnSchema, InferenceOptions, InferenceRequest, MinConfidence, Provenance, SchemaMetadata,
    SchemaTable, Severity, SignalKind, TableData,
};
use rstest::rstest;

fn column(name: &str, values: &[Option<&str>]) -> ColumnData {
    ColumnData {
        name: name.into(),
        data_type: None,
        values: values.iter().map(|v| v.map(String::from)).collect(),
    }
}

fn int_column(name: &str, values: &[i64]) -> ColumnData {
    ColumnData {
        name: name.into(),
        data_type: Some("integer".into()),
        values: values.iter().map(|v| Some(v.to_string())).collect(),
    }
}

fn table(name: &str, columns: Vec<ColumnData>) -> TableData {
    TableData {
        name: name.into(),
        columns,
    }
}

/// The canonical two-table shop: `orders.customer_id` references
/// `customers.customer_id`, with repeated FK values and full overlap.
fn shop_tables() -> Vec<TableData> {
    vec![
        table(
            "orders",
            vec![
                int_column("order_id", &(1..=12).collect::<Vec<_>>()),
                int_column("customer_id", &[1, 1, 1, 2, 2, 2, 3, 3, 3, 4, 4, 4]),
            ],
        ),
        table(
            "customers",
            vec![
                int_column("customer_id", &[1, 2, 3, 4]),
                column(
                    "name",
                    &[Some("alice"), Some("bob"), Some("alice"), Some("dana")],
                ),
            ],
        ),
    ]
}

fn request(tables: Vec<TableData>) -> InferenceRequest {
    InferenceRequest {
        tables,
        schema: None,
        constraints: vec![],
        options: None,
    }
}

fn schema_with_fk(
    table: &str,
    column: &str,
    referenced_table: &str,
    referenced_column: &str,
) -> SchemaMetadata {
    SchemaMetadata {
        tables: vec![SchemaTable {
            name: table.into(),
            columns: vec![ColumnSchema {
                name: column.into(),
                data_type: None,
                primary_key: None,
                foreign_key: Some(ForeignKeyRef {
                    table: referenced_table.into(),
                    column: referenced_column.into(),
                }),
            }],
        }],
    }
}

#[test]
fn infers_conventional_foreign_key() {
    let result = infer(&request(shop_tables())).unwrap();

    assert!(!result.summary.has_errors);
    assert_eq!(result.relationships.len(), 1, "{:?}", result.relationships);

    let rel = &result.relationships[0];
    assert_eq!(rel.source, ColumnRef::new("orders", "customer_id"));
    assert_eq!(rel.target, ColumnRef::new("customers", "customer_id"));
    assert_eq!(rel.provenance, Provenance::Inferred);
    assert_eq!(rel.confidence, Confidence::High);
    assert!(rel.score > 0.85, "score {}", rel.score);
    assert_eq!(rel.detected_by, Some(SignalKind::Naming));
    assert!(!rel.reasons.is_empty());

    // The graph mirrors the report: two nodes, one FK → PK edge.
    assert_eq!(result.graph.nodes.len(), 2);
    assert_eq!(result.graph.edges.len(), 1);
    let edge = &result.graph.edges[0];
    assert_eq!(edge.from, "orders");
    assert_eq!(edge.to, "customers");
    assert_eq!(edge.source_column, "customer_id");
    assert_eq!(edge.target_column, "customer_id");
}

#[rstest]
#[case(MinConfidence::None, 2)]
#[case(MinConfidence::Medium, 1)]
#[case(MinConfidence::High, 1)]
fn min_confidence_filters_inferred_relationships(
    #[case] min_confidence: MinConfidence,
    #[case] expected: usize,
) {
    let mut req = request(shop_tables());
    req.options = Some(InferenceOptions {
        min_confidence,
        ..InferenceOptions::default()
    });
    let result = infer(&req).unwrap();
    assert_eq!(result.relationships.len(), expected, "{:?}", result.relationships);
}

#[test]
fn declared_relationship_survives_zero_value_overlap() {
    let tables = vec![
        table("orders", vec![int_column("buyer", &[900, 901, 902])]),
        table("customers", vec![int_column("customer_id", &[1, 2, 3])]),
    ];
    let mut req = request(tables);
    req.schema = Some(schema_with_fk("orders", "buyer", "customers", "customer_id"));

    let result = infer(&req).unwrap();
    let rel = result
        .relationships
        .iter()
        .find(|r| r.source == ColumnRef::new("orders", "buyer"))
        .expect("declared relationship missing");
    assert_eq!(rel.provenance, Provenance::Declared);
    assert_eq!(rel.confidence, Confidence::High);
    assert_eq!(rel.score, 1.0);
    assert_eq!(rel.detected_by, None);
}

#[test]
fn declared_outranks_db_constraint_and_inference_on_same_pair() {
    let mut req = request(shop_tables());
    req.schema = Some(schema_with_fk(
        "orders",
        "customer_id",
        "customers",
        "customer_id",
    ));
    req.constraints = vec![ForeignKeyConstraint {
        table: "orders".into(),
        column: "customer_id".into(),
        referenced_table: "customers".into(),
        referenced_column: "customer_id".into(),
    }];

    let result = infer(&req).unwrap();
    // One relationship for the pair, not three.
    assert_eq!(result.relationships.len(), 1);
    assert_eq!(result.relationships[0].provenance, Provenance::Declared);
}

#[test]
fn conflicting_authorities_are_reported() {
    let mut req = request(shop_tables());
    req.schema = Some(schema_with_fk(
        "orders",
        "customer_id",
        "customers",
        "customer_id",
    ));
    req.constraints = vec![ForeignKeyConstraint {
        table: "orders".into(),
        column: "customer_id".into(),
        referenced_table: "clients".into(),
        referenced_column: "client_id".into(),
    }];

    let result = infer(&req).unwrap();
    let conflict = result
        .issues
        .iter()
        .find(|i| i.code == issue_codes::AUTHORITY_CONFLICT)
        .expect("conflict issue missing");
    assert_eq!(conflict.severity, Severity::Warning);

    // Both claims survive; they cover different column pairs.
    assert!(result
        .relationships
        .iter()
        .any(|r| r.target == ColumnRef::new("customers", "customer_id")));
    assert!(result
        .relationships
        .iter()
        .any(|r| r.target == ColumnRef::new("clients", "client_id")));
}

#[test]
fn declared_reference_to_unloaded_table_is_flagged_but_kept() {
    let tables = vec![table("orders", vec![int_column("region_id", &[1, 2])])];
    let mut req = request(tables);
    req.schema = Some(schema_with_fk("orders", "region_id", "regions", "region_id"));

    let result = infer(&req).unwrap();
    assert!(result
        .issues
        .iter()
        .any(|i| i.code == issue_codes::UNKNOWN_TABLE));

    // The unloaded table still appears as a node, without counts.
    let node = result
        .graph
        .nodes
        .iter()
        .find(|n| n.label == "regions")
        .expect("dragged-in node missing");
    assert_eq!(node.row_count, None);
    assert_eq!(result.graph.edges.len(), 1);
}

#[test]
fn empty_table_yields_info_issue_not_error() {
    let tables = vec![table("events", vec![column("event_id", &[])])];
    let result = infer(&request(tables)).unwrap();
    let issue = result
        .issues
        .iter()
        .find(|i| i.code == issue_codes::EMPTY_TABLE)
        .expect("empty-table issue missing");
    assert_eq!(issue.severity, Severity::Info);
    assert!(!result.summary.has_errors);
}

#[test]
fn capped_profiling_is_reported_per_column() {
    let tables = vec![table(
        "notes",
        vec![column(
            "body",
            &[
                Some("first entry"),
                Some("second entry"),
                Some("third entry"),
                Some("fourth entry"),
                Some("fifth entry"),
            ],
        )],
    )];
    let mut req = request(tables);
    req.options = Some(InferenceOptions {
        distinct_cap: Some(2),
        ..InferenceOptions::default()
    });

    let result = infer(&req).unwrap();
    let issue = result
        .issues
        .iter()
        .find(|i| i.code == issue_codes::COLUMN_SAMPLED)
        .expect("sampling issue missing");
    assert_eq!(issue.severity, Severity::Warning);
    assert_eq!(issue.column.as_deref(), Some("body"));
    assert!(result.profiles[0].columns[0].truncated);
}

#[test]
fn prose_only_tables_produce_no_candidates() {
    let first: Vec<String> = (0..20).map(|i| format!("long prose value {i}")).collect();
    let second: Vec<String> = (0..20).map(|i| format!("other prose value {i}")).collect();
    let tables = vec![
        table(
            "articles",
            vec![column(
                "body",
                &first.iter().map(|s| Some(s.as_str())).collect::<Vec<_>>(),
            )],
        ),
        table(
            "comments",
            vec![column(
                "text",
                &second.iter().map(|s| Some(s.as_str())).collect::<Vec<_>>(),
            )],
        ),
    ];

    let result = infer(&request(tables)).unwrap();
    assert_eq!(result.summary.candidate_count, 0);
    assert!(result.relationships.is_empty());
    assert!(result.graph.edges.is_empty());
    assert_eq!(result.graph.nodes.len(), 2);
}

#[test]
fn detected_primary_keys_appear_in_profiles() {
    let result = infer(&request(shop_tables())).unwrap();
    let customers = result
        .profiles
        .iter()
        .find(|p| p.table == "customers")
        .unwrap();
    assert_eq!(customers.primary_key.as_deref(), Some("customer_id"));

    let orders = result.profiles.iter().find(|p| p.table == "orders").unwrap();
    assert_eq!(orders.primary_key.as_deref(), Some("order_id"));
}

#[test]
fn identical_input_reproduces_identical_output() {
    let req = request(shop_tables());
    let first = serde_json::to_string(&infer(&req).unwrap()).unwrap();
    let second = serde_json::to_string(&infer(&req).unwrap()).unwrap();
    assert_eq!(first, second);
}

#[test]
fn summary_counts_reflect_the_run() {
    let result = infer(&request(shop_tables())).unwrap();
    assert_eq!(result.summary.table_count, 2);
    assert_eq!(result.summary.column_count, 4);
    assert!(result.summary.candidate_count >= 1);
    assert_eq!(result.summary.relationship_count, 1);
}
