//! Authority resolution: declared schema and database constraints outrank
//! inference.
//!
//! Authoritative relationships enter the result set unconditionally and are
//! never re-scored or downgraded by anything inference observed. Precedence
//! is the [`Provenance`] ordering: schema file (explicit human intent) over
//! database constraint over inferred candidate, applied per unordered
//! column pair.

use std::collections::{BTreeMap, HashSet};

use crate::types::{
    issue_codes, ColumnRef, Confidence, ForeignKeyConstraint, Issue, Provenance, Relationship,
    SchemaMetadata,
};

/// Unordered endpoint pair, used as the merge key.
pub(crate) fn pair_key(a: &ColumnRef, b: &ColumnRef) -> (ColumnRef, ColumnRef) {
    if a <= b {
        (a.clone(), b.clone())
    } else {
        (b.clone(), a.clone())
    }
}

/// Merge inferred candidates with authoritative relationships.
///
/// `known_tables` is the set of loaded table names; declared relationships
/// referencing unloaded tables are kept but reported as warnings so the
/// caller can see the gap.
pub fn resolve(
    schema: Option<&SchemaMetadata>,
    constraints: &[ForeignKeyConstraint],
    inferred: Vec<Relationship>,
    known_tables: &HashSet<String>,
    issues: &mut Vec<Issue>,
) -> Vec<Relationship> {
    let declared = schema.map(declared_relationships).unwrap_or_default();
    let from_db: Vec<Relationship> = constraints.iter().map(constraint_relationship).collect();

    report_unknown_tables(&declared, known_tables, issues);
    report_conflicts(&declared, &from_db, issues);

    // Ordered merge: lowest precedence first so later inserts overwrite.
    let mut merged: BTreeMap<(ColumnRef, ColumnRef), Relationship> = BTreeMap::new();
    for rel in inferred
        .into_iter()
        .chain(from_db)
        .chain(declared)
    {
        let key = pair_key(&rel.source, &rel.target);
        let replace = match merged.get(&key) {
            None => true,
            Some(existing) => outranks(&rel, existing),
        };
        if replace {
            merged.insert(key, rel);
        }
    }

    merged.into_values().collect()
}

/// Strictly higher precedence: provenance first, then confidence, then score.
fn outranks(candidate: &Relationship, incumbent: &Relationship) -> bool {
    (
        candidate.provenance,
        candidate.confidence,
    ) > (incumbent.provenance, incumbent.confidence)
        || (candidate.provenance == incumbent.provenance
            && candidate.confidence == incumbent.confidence
            && candidate.score.total_cmp(&incumbent.score).is_gt())
}

fn declared_relationships(schema: &SchemaMetadata) -> Vec<Relationship> {
    let mut rels = Vec::new();
    for table in &schema.tables {
        for column in &table.columns {
            if let Some(fk) = &column.foreign_key {
                rels.push(Relationship {
                    source: ColumnRef::new(&table.name, &column.name),
                    target: ColumnRef::new(&fk.table, &fk.column),
                    provenance: Provenance::Declared,
                    confidence: Confidence::High,
                    score: 1.0,
                    detected_by: None,
                    reasons: vec!["declared in schema file".to_string()],
                });
            }
        }
    }
    rels
}

fn constraint_relationship(constraint: &ForeignKeyConstraint) -> Relationship {
    Relationship {
        source: ColumnRef::new(&constraint.table, &constraint.column),
        target: ColumnRef::new(&constraint.referenced_table, &constraint.referenced_column),
        provenance: Provenance::DbConstraint,
        confidence: Confidence::High,
        score: 1.0,
        detected_by: None,
        reasons: vec!["database foreign-key constraint".to_string()],
    }
}

fn report_unknown_tables(
    declared: &[Relationship],
    known_tables: &HashSet<String>,
    issues: &mut Vec<Issue>,
) {
    if known_tables.is_empty() {
        // Schema-only runs have no loaded data at all; silence the noise.
        return;
    }
    let mut reported = HashSet::new();
    for rel in declared {
        for endpoint in [&rel.source, &rel.target] {
            if !known_tables.contains(&endpoint.table) && reported.insert(endpoint.table.clone()) {
                issues.push(
                    Issue::warning(
                        issue_codes::UNKNOWN_TABLE,
                        format!(
                            "schema declares a relationship for `{}`, which was not loaded",
                            endpoint.table
                        ),
                    )
                    .with_table(endpoint.table.clone()),
                );
            }
        }
    }
}

/// A schema file and a database constraint claiming different targets for
/// the same FK endpoint: the schema file wins, the disagreement is warned.
fn report_conflicts(declared: &[Relationship], from_db: &[Relationship], issues: &mut Vec<Issue>) {
    for db_rel in from_db {
        for decl in declared {
            if decl.source == db_rel.source && decl.target != db_rel.target {
                issues.push(
                    Issue::warning(
                        issue_codes::AUTHORITY_CONFLICT,
                        format!(
                            "schema file says {} references {}, database constraint says {}; keeping the schema file",
                            decl.source, decl.target, db_rel.target
                        ),
                    )
                    .with_table(decl.source.table.clone())
                    .with_column(decl.source.column.clone()),
                );
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{ColumnSchema, ForeignKeyRef, SchemaTable, SignalKind};

    fn inferred(source: (&str, &str), target: (&str, &str), score: f64) -> Relationship {
        Relationship {
            source: ColumnRef::new(source.0, source.1),
            target: ColumnRef::new(target.0, target.1),
            provenance: Provenance::Inferred,
            confidence: Confidence::Medium,
            score,
            detected_by: Some(SignalKind::ValueOverlap),
            reasons: vec![],
        }
    }

    fn schema_with_fk(table: &str, column: &str, ref_table: &str, ref_column: &str) -> SchemaMetadata {
        SchemaMetadata {
            tables: vec![SchemaTable {
                name: table.to_string(),
                columns: vec![ColumnSchema {
                    name: column.to_string(),
                    data_type: None,
                    primary_key: None,
                    foreign_key: Some(ForeignKeyRef {
                        table: ref_table.to_string(),
                        column: ref_column.to_string(),
                    }),
                }],
            }],
        }
    }

    fn known(names: &[&str]) -> HashSet<String> {
        names.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn declared_replaces_inferred_on_same_pair() {
        let schema = schema_with_fk("orders", "customer_id", "customers", "customer_id");
        let mut issues = Vec::new();
        let resolved = resolve(
            Some(&schema),
            &[],
            vec![inferred(
                ("orders", "customer_id"),
                ("customers", "customer_id"),
                0.7,
            )],
            &known(&["orders", "customers"]),
            &mut issues,
        );
        assert_eq!(resolved.len(), 1);
        assert_eq!(resolved[0].provenance, Provenance::Declared);
        assert_eq!(resolved[0].score, 1.0);
    }

    #[test]
    fn disjoint_inferred_pairs_survive() {
        let schema = schema_with_fk("orders", "customer_id", "customers", "customer_id");
        let mut issues = Vec::new();
        let resolved = resolve(
            Some(&schema),
            &[],
            vec![inferred(("orders", "product_id"), ("products", "id"), 0.8)],
            &known(&["orders", "customers", "products"]),
            &mut issues,
        );
        assert_eq!(resolved.len(), 2);
        assert!(resolved
            .iter()
            .any(|r| r.provenance == Provenance::Inferred));
    }

    #[test]
    fn declared_outranks_db_constraint_on_same_pair() {
        let schema = schema_with_fk("orders", "customer_id", "customers", "customer_id");
        let constraint = ForeignKeyConstraint {
            table: "orders".into(),
            column: "customer_id".into(),
            referenced_table: "customers".into(),
            referenced_column: "customer_id".into(),
        };
        let mut issues = Vec::new();
        let resolved = resolve(
            Some(&schema),
            &[constraint],
            vec![],
            &known(&["orders", "customers"]),
            &mut issues,
        );
        assert_eq!(resolved.len(), 1);
        assert_eq!(resolved[0].provenance, Provenance::Declared);
        assert!(issues.is_empty());
    }

    #[test]
    fn conflicting_targets_warn_and_keep_declared() {
        let schema = schema_with_fk("orders", "customer_id", "customers", "customer_id");
        let constraint = ForeignKeyConstraint {
            table: "orders".into(),
            column: "customer_id".into(),
            referenced_table: "clients".into(),
            referenced_column: "id".into(),
        };
        let mut issues = Vec::new();
        let resolved = resolve(
            Some(&schema),
            &[constraint],
            vec![],
            &known(&["orders", "customers", "clients"]),
            &mut issues,
        );
        assert!(issues
            .iter()
            .any(|i| i.code == issue_codes::AUTHORITY_CONFLICT));
        // Both pairs exist (different unordered keys); the declared one wins
        // its pair, the db constraint keeps its own disjoint pair.
        assert!(resolved
            .iter()
            .any(|r| r.provenance == Provenance::Declared));
    }

    #[test]
    fn unknown_table_in_schema_warns_but_keeps_relationship() {
        let schema = schema_with_fk("orders", "customer_id", "archive", "id");
        let mut issues = Vec::new();
        let resolved = resolve(Some(&schema), &[], vec![], &known(&["orders"]), &mut issues);
        assert_eq!(resolved.len(), 1);
        assert!(issues.iter().any(|i| i.code == issue_codes::UNKNOWN_TABLE));
    }

    #[test]
    fn db_constraint_replaces_inferred() {
        let constraint = ForeignKeyConstraint {
            table: "orders".into(),
            column: "customer_id".into(),
            referenced_table: "customers".into(),
            referenced_column: "customer_id".into(),
        };
        let mut issues = Vec::new();
        let resolved = resolve(
            None,
            &[constraint],
            vec![inferred(
                ("orders", "customer_id"),
                ("customers", "customer_id"),
                0.9,
            )],
            &known(&["orders", "customers"]),
            &mut issues,
        );
        assert_eq!(resolved.len(), 1);
        assert_eq!(resolved[0].provenance, Provenance::DbConstraint);
    }
}
