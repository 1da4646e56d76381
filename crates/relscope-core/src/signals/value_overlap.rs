//! Value-Overlap: fraction of the FK candidate's distinct values found in
//! the PK candidate.
//!
//! Directional by design: a valid FK is a subset of its PK, so the overlap
//! is measured from the FK side. `overlap(A→B)` and `overlap(B→A)` differ
//! whenever the value sets do.

use crate::signals::{Signal, SignalContext, SignalResult};
use crate::types::SignalKind;

pub struct ValueOverlap;

impl Signal for ValueOverlap {
    fn kind(&self) -> SignalKind {
        SignalKind::ValueOverlap
    }

    fn name(&self) -> &'static str {
        "Value overlap"
    }

    fn evaluate(&self, ctx: &SignalContext) -> Option<SignalResult> {
        let fk_values = &ctx.fk.distinct_values;
        let pk_values = &ctx.pk.distinct_values;
        if fk_values.is_empty() || pk_values.is_empty() {
            return None;
        }
        let shared = fk_values.iter().filter(|v| pk_values.contains(*v)).count();
        let score = shared as f64 / fk_values.len() as f64;
        Some(SignalResult {
            kind: self.kind(),
            score,
            evidence: format!("{:.0}% of FK values found in PK column", score * 100.0),
        })
    }
}
