//! Candidate generation: which cross-table column pairs are worth scoring.
//!
//! The search space is all ordered (FK column, PK column) pairs across
//! distinct tables, pruned to keep cost bounded. Pairs the naming convention
//! speaks for are always kept, so a conventionally named FK can never be
//! pruned away.

use crate::naming::{is_fk_name_for, is_pk_name};
use crate::profiler::ColumnProfile;

/// Cardinality ratio above which a free-text column is considered an
/// unlikely key (near-unique prose is usually descriptive text).
const FREE_TEXT_PRUNE_RATIO: f64 = 0.9;

/// One directed candidate pair: `fk` tested as referencing `pk`.
pub struct CandidatePair<'a> {
    pub fk: &'a ColumnProfile,
    pub pk: &'a ColumnProfile,
}

/// Enumerate candidate pairs over the per-table profile lists.
pub fn generate<'a>(tables: &'a [Vec<ColumnProfile>]) -> Vec<CandidatePair<'a>> {
    let mut pairs = Vec::new();

    for (fk_table_idx, fk_profiles) in tables.iter().enumerate() {
        for fk in fk_profiles {
            for (pk_table_idx, pk_profiles) in tables.iter().enumerate() {
                if pk_table_idx == fk_table_idx {
                    continue;
                }
                // A table's own unique key is not a plausible FK unless it
                // is literally named after the target table (1:1 links).
                if fk.is_pk_like() && !names_target(fk, pk_profiles) {
                    continue;
                }
                for pk in pk_targets(pk_profiles) {
                    if prune(fk, pk) {
                        continue;
                    }
                    pairs.push(CandidatePair { fk, pk });
                }
            }
        }
    }

    pairs
}

fn names_target(fk: &ColumnProfile, pk_profiles: &[ColumnProfile]) -> bool {
    pk_profiles
        .first()
        .is_some_and(|any| is_fk_name_for(&fk.name_clean, &any.table_clean))
}

/// PK-side candidates for a table: its PK-like columns plus any column with
/// a primary-key name, falling back to every column when none qualify.
fn pk_targets(profiles: &[ColumnProfile]) -> Vec<&ColumnProfile> {
    let keyish: Vec<&ColumnProfile> = profiles
        .iter()
        .filter(|p| p.is_pk_like() || is_pk_name(&p.name_clean, &p.table_clean))
        .collect();
    if keyish.is_empty() {
        profiles.iter().collect()
    } else {
        keyish
    }
}

/// Skip pairs of near-unique free-text columns, unless naming vouches for
/// the pair, which always forces inclusion.
fn prune(fk: &ColumnProfile, pk: &ColumnProfile) -> bool {
    use crate::types::FormatTag::FreeText;
    let both_prose = fk.format == FreeText && pk.format == FreeText;
    let both_near_unique = fk.cardinality_ratio > FREE_TEXT_PRUNE_RATIO
        && pk.cardinality_ratio > FREE_TEXT_PRUNE_RATIO;
    if !(both_prose && both_near_unique) {
        return false;
    }
    !naming_applies(fk, pk)
}

fn naming_applies(fk: &ColumnProfile, pk: &ColumnProfile) -> bool {
    use crate::naming::looks_like_identifier;
    looks_like_identifier(&fk.name_clean) || looks_like_identifier(&pk.name_clean)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::signals::test_support::profiled;

    fn pair_names(pairs: &[CandidatePair]) -> Vec<(String, String)> {
        pairs
            .iter()
            .map(|p| {
                (
                    format!("{}.{}", p.fk.table, p.fk.name),
                    format!("{}.{}", p.pk.table, p.pk.name),
                )
            })
            .collect()
    }

    #[test]
    fn generates_cross_table_pairs_only() {
        let orders = vec![
            profiled("orders", "order_id", &[Some("1"), Some("2")]),
            profiled("orders", "customer_id", &[Some("1"), Some("1")]),
        ];
        let customers = vec![profiled("customers", "customer_id", &[Some("1"), Some("2")])];
        let tables = vec![orders, customers];
        let pairs = generate(&tables);
        let names = pair_names(&pairs);
        assert!(names.contains(&("orders.customer_id".into(), "customers.customer_id".into())));
        assert!(names.iter().all(|(fk, pk)| {
            fk.split('.').next() != pk.split('.').next()
        }));
    }

    #[test]
    fn own_unique_key_is_not_an_fk_candidate() {
        let orders = vec![
            profiled("orders", "order_id", &[Some("1"), Some("2")]),
            profiled("orders", "customer_id", &[Some("1"), Some("1")]),
        ];
        let customers = vec![profiled("customers", "customer_id", &[Some("1"), Some("2")])];
        let tables = vec![orders, customers];
        let names = pair_names(&generate(&tables));
        assert!(!names
            .iter()
            .any(|(fk, _)| fk == "orders.order_id"));
    }

    #[test]
    fn unique_conventionally_named_fk_survives() {
        // profiles table keyed 1:1 by user_id: unique, but named for users
        let profiles_table = vec![profiled("profiles", "user_id", &[Some("1"), Some("2")])];
        let users = vec![profiled("users", "user_id", &[Some("1"), Some("2")])];
        let tables = vec![profiles_table, users];
        let names = pair_names(&generate(&tables));
        assert!(names.contains(&("profiles.user_id".into(), "users.user_id".into())));
    }

    /// 20 rows of near-unique prose with one null, so the column is not
    /// PK-like but its cardinality ratio stays above the prune threshold.
    fn prose_column(table: &str, name: &str, seed: &str) -> Vec<ColumnProfile> {
        let values: Vec<Option<String>> = (0..20)
            .map(|i| {
                if i == 0 {
                    None
                } else {
                    Some(format!("{seed} free text value {i}"))
                }
            })
            .collect();
        let column = crate::types::ColumnData {
            name: name.to_string(),
            data_type: None,
            values,
        };
        vec![crate::profiler::profile_column(
            table,
            &column,
            &crate::profiler::ResourceCaps::default(),
        )]
    }

    #[test]
    fn near_unique_free_text_pairs_are_pruned() {
        let tables = vec![
            prose_column("notes", "body", "note"),
            prose_column("posts", "content", "post"),
        ];
        assert!(generate(&tables).is_empty());
    }

    #[test]
    fn identifier_name_overrides_free_text_pruning() {
        let tables = vec![
            prose_column("a", "session_key", "alpha"),
            prose_column("b", "token", "beta"),
        ];
        let names = pair_names(&generate(&tables));
        assert!(names.contains(&("a.session_key".into(), "b.token".into())));
    }
}
