//! Null-Pattern-Correlation: Pearson correlation of null positions.
//!
//! Columns that go null on the same rows hint at a shared origin. Only
//! meaningful when rows align by position, so unequal row counts abstain, as
//! does a bitmap with zero variance (no nulls, or all nulls) where
//! correlation is undefined and the divisor would be zero.

use crate::profiler::ColumnProfile;
use crate::signals::{Signal, SignalContext, SignalResult};
use crate::types::SignalKind;

pub struct NullPatternCorrelation;

impl Signal for NullPatternCorrelation {
    fn kind(&self) -> SignalKind {
        SignalKind::NullPattern
    }

    fn name(&self) -> &'static str {
        "Null pattern correlation"
    }

    fn evaluate(&self, ctx: &SignalContext) -> Option<SignalResult> {
        let r = null_correlation(ctx.fk, ctx.pk)?;
        // Anti-correlation is not FK evidence; clip instead of abstaining so
        // the signal still participates with zero weight in the numerator.
        let score = r.max(0.0);
        Some(SignalResult {
            kind: self.kind(),
            score,
            evidence: format!("null pattern correlation {r:.2}"),
        })
    }
}

fn null_correlation(a: &ColumnProfile, b: &ColumnProfile) -> Option<f64> {
    let x = &a.null_bitmap;
    let y = &b.null_bitmap;
    if x.len() != y.len() || x.is_empty() {
        return None;
    }
    let n = x.len() as f64;
    let mean_x = a.null_count as f64 / n;
    let mean_y = b.null_count as f64 / n;
    let var_x = mean_x * (1.0 - mean_x);
    let var_y = mean_y * (1.0 - mean_y);
    if var_x == 0.0 || var_y == 0.0 {
        return None;
    }
    let both = x
        .iter()
        .zip(y.iter())
        .filter(|(&xi, &yi)| xi && yi)
        .count() as f64;
    let cov = both / n - mean_x * mean_y;
    Some(cov / (var_x * var_y).sqrt())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::signals::test_support::profiled;

    #[test]
    fn identical_null_patterns_correlate_fully() {
        let pattern = &[Some("1"), None, Some("2"), None];
        let fk = profiled("a", "x", pattern);
        let pk = profiled("b", "y", pattern);
        let result = NullPatternCorrelation
            .evaluate(&SignalContext { fk: &fk, pk: &pk })
            .unwrap();
        assert!((result.score - 1.0).abs() < 1e-9);
    }

    #[test]
    fn opposite_patterns_clip_to_zero() {
        let fk = profiled("a", "x", &[Some("1"), None]);
        let pk = profiled("b", "y", &[None, Some("1")]);
        let result = NullPatternCorrelation
            .evaluate(&SignalContext { fk: &fk, pk: &pk })
            .unwrap();
        assert_eq!(result.score, 0.0);
    }

    #[test]
    fn abstains_on_unequal_row_counts() {
        let fk = profiled("a", "x", &[Some("1"), None]);
        let pk = profiled("b", "y", &[Some("1"), None, Some("2")]);
        assert!(NullPatternCorrelation
            .evaluate(&SignalContext { fk: &fk, pk: &pk })
            .is_none());
    }

    #[test]
    fn abstains_on_zero_variance() {
        // No nulls on one side: constant bitmap, undefined correlation
        let no_nulls = profiled("a", "x", &[Some("1"), Some("2")]);
        let with_nulls = profiled("b", "y", &[Some("1"), None]);
        assert!(NullPatternCorrelation
            .evaluate(&SignalContext {
                fk: &no_nulls,
                pk: &with_nulls
            })
            .is_none());

        // All nulls on both sides is constant too
        let all_a = profiled("a", "x", &[None, None]);
        let all_b = profiled("b", "y", &[None, None]);
        assert!(NullPatternCorrelation
            .evaluate(&SignalContext { fk: &all_a, pk: &all_b })
            .is_none());
    }
}
