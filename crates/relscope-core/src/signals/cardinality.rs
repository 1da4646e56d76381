//! Cardinality: PK columns are (near-)unique, FK columns repeat.
//!
//! The score is the cardinality-ratio gap between the PK side and the FK
//! side, clipped to [0, 1]. A unique PK referenced by a heavily repeated FK
//! scores close to 1; two columns of similar cardinality score near 0.

use crate::signals::{Signal, SignalContext, SignalResult};
use crate::types::SignalKind;

pub struct Cardinality;

impl Signal for Cardinality {
    fn kind(&self) -> SignalKind {
        SignalKind::Cardinality
    }

    fn name(&self) -> &'static str {
        "Cardinality"
    }

    fn evaluate(&self, ctx: &SignalContext) -> Option<SignalResult> {
        if ctx.fk.row_count == 0 || ctx.pk.row_count == 0 {
            return None;
        }
        let score = (ctx.pk.cardinality_ratio - ctx.fk.cardinality_ratio).clamp(0.0, 1.0);
        Some(SignalResult {
            kind: self.kind(),
            score,
            evidence: format!(
                "cardinality {:.2} (PK side) vs {:.2} (FK side)",
                ctx.pk.cardinality_ratio, ctx.fk.cardinality_ratio
            ),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::signals::test_support::profiled;

    #[test]
    fn unique_pk_with_repetitive_fk_scores_high() {
        let fk = profiled(
            "orders",
            "customer_id",
            &[Some("1"), Some("1"), Some("1"), Some("2")],
        );
        let pk = profiled("customers", "id", &[Some("1"), Some("2"), Some("3"), Some("4")]);
        let result = Cardinality
            .evaluate(&SignalContext { fk: &fk, pk: &pk })
            .unwrap();
        assert!((result.score - 0.5).abs() < 1e-9);
    }

    #[test]
    fn reversed_direction_clips_to_zero() {
        let unique = profiled("a", "x", &[Some("1"), Some("2")]);
        let repeated = profiled("b", "y", &[Some("1"), Some("1")]);
        let result = Cardinality
            .evaluate(&SignalContext {
                fk: &unique,
                pk: &repeated,
            })
            .unwrap();
        assert_eq!(result.score, 0.0);
    }

    #[test]
    fn abstains_on_empty_column() {
        let empty = profiled("a", "x", &[]);
        let full = profiled("b", "y", &[Some("1")]);
        assert!(Cardinality
            .evaluate(&SignalContext { fk: &empty, pk: &full })
            .is_none());
    }
}
