//! Naming: foreign-key naming conventions.
//!
//! An FK column named `{pk_table}_id` pointing at a PK-like column is the
//! strongest single piece of evidence a schema offers; bare `_id`/`_key`
//! suffixes without a table-name match earn graded partial credit.

use crate::naming::{is_fk_name_for, is_pk_name, key_stem, looks_like_identifier, singularize};
use crate::signals::{Signal, SignalContext, SignalResult};
use crate::types::SignalKind;

/// Partial credit when the FK stem resembles the PK table but is not an
/// exact convention match.
const STEM_MATCH_SCORE: f64 = 0.8;

/// Partial credit for a bare key suffix with no table-name evidence.
const SUFFIX_ONLY_SCORE: f64 = 0.4;

pub struct NamingConvention;

impl Signal for NamingConvention {
    fn kind(&self) -> SignalKind {
        SignalKind::Naming
    }

    fn name(&self) -> &'static str {
        "Naming convention"
    }

    fn evaluate(&self, ctx: &SignalContext) -> Option<SignalResult> {
        let fk = &ctx.fk.name_clean;
        let pk = &ctx.pk.name_clean;

        if !looks_like_identifier(fk) && !looks_like_identifier(pk) {
            return None;
        }

        let pk_table = &ctx.pk.table_clean;
        let pk_is_key_shaped =
            ctx.pk.is_pk_like() || is_pk_name(pk, pk_table);

        if pk_is_key_shaped && (is_fk_name_for(fk, pk_table) || (fk == "id" && pk == "id")) {
            return Some(SignalResult {
                kind: self.kind(),
                score: 1.0,
                evidence: format!("`{}` follows the FK naming convention for `{}`", ctx.fk.name, ctx.pk.table),
            });
        }

        if fk.ends_with("_id") || fk.ends_with("_key") {
            let stem = key_stem(fk);
            let table_singular = singularize(pk_table);
            if !stem.is_empty()
                && (pk_table.starts_with(stem) || table_singular.starts_with(stem)
                    || stem.starts_with(table_singular))
            {
                return Some(SignalResult {
                    kind: self.kind(),
                    score: STEM_MATCH_SCORE,
                    evidence: format!("`{}` stem resembles table `{}`", ctx.fk.name, ctx.pk.table),
                });
            }
            return Some(SignalResult {
                kind: self.kind(),
                score: SUFFIX_ONLY_SCORE,
                evidence: format!("`{}` carries a key suffix", ctx.fk.name),
            });
        }

        None
    }
}
