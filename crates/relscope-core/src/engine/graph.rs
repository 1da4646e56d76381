//! Relationship graph assembly: the terminal, exported structure.
//!
//! Input relationships are already deduplicated per unordered pair by the
//! authority resolver; this stage orders them for stable output, builds the
//! node list (loaded tables plus any table a declared relationship drags
//! in), and emits the directed FK → PK edges.

use std::collections::BTreeMap;

use crate::naming::clean_name;
use crate::types::{
    Confidence, Relationship, RelationshipEdge, RelationshipGraph, TableData, TableNode,
};

/// Build the graph and the flat, sorted relationships report.
pub fn build(
    tables: &[TableData],
    mut relationships: Vec<Relationship>,
) -> (RelationshipGraph, Vec<Relationship>) {
    // Report order: strongest first, then stable by endpoint names.
    relationships.sort_by(|a, b| {
        confidence_rank(b.confidence)
            .cmp(&confidence_rank(a.confidence))
            .then(b.score.total_cmp(&a.score))
            .then_with(|| a.source.cmp(&b.source))
            .then_with(|| a.target.cmp(&b.target))
    });

    let mut nodes: BTreeMap<String, TableNode> = BTreeMap::new();
    for table in tables {
        nodes.insert(
            table.name.clone(),
            TableNode {
                id: node_id(&table.name),
                label: table.name.clone(),
                row_count: Some(table.row_count()),
                column_count: Some(table.columns.len()),
            },
        );
    }
    for rel in &relationships {
        for endpoint in [&rel.source, &rel.target] {
            nodes.entry(endpoint.table.clone()).or_insert_with(|| TableNode {
                id: node_id(&endpoint.table),
                label: endpoint.table.clone(),
                row_count: None,
                column_count: None,
            });
        }
    }

    let edges = relationships
        .iter()
        .map(|rel| RelationshipEdge {
            from: node_id(&rel.source.table),
            to: node_id(&rel.target.table),
            source_column: rel.source.column.clone(),
            target_column: rel.target.column.clone(),
            provenance: rel.provenance,
            confidence: rel.confidence,
            score: rel.score,
        })
        .collect();

    let graph = RelationshipGraph {
        nodes: nodes.into_values().collect(),
        edges,
    };
    (graph, relationships)
}

/// Stable node identifier for renderers: the cleaned table name.
pub fn node_id(table: &str) -> String {
    clean_name(table)
}

fn confidence_rank(confidence: Confidence) -> u8 {
    match confidence {
        Confidence::Low => 0,
        Confidence::Medium => 1,
        Confidence::High => 2,
    }
}
