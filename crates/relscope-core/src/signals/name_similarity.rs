//! Name-Similarity: fuzzy similarity between the two column names.
//!
//! Independent of FK naming conventions: `account_no` vs `account_num`
//! scores high here even though neither matches a `{table}_id` pattern.
//! Key suffixes are stripped before comparison so `customer_id` and
//! `customer_key` compare on their shared stem.

use strsim::jaro_winkler;

use crate::naming::key_stem;
use crate::signals::{Signal, SignalContext, SignalResult};
use crate::types::SignalKind;

pub struct NameSimilarity;

impl Signal for NameSimilarity {
    fn kind(&self) -> SignalKind {
        SignalKind::NameSimilarity
    }

    fn name(&self) -> &'static str {
        "Name similarity"
    }

    // Always applicable; two empty names are trivially identical.
    fn evaluate(&self, ctx: &SignalContext) -> Option<SignalResult> {
        let a = key_stem(&ctx.fk.name_clean);
        let b = key_stem(&ctx.pk.name_clean);
        let score = jaro_winkler(a, b).clamp(0.0, 1.0);
        Some(SignalResult {
            kind: self.kind(),
            score,
            evidence: format!("name similarity {score:.2}"),
        })
    }
}
