//! Distribution-Similarity: two-sample Kolmogorov-Smirnov test over the
//! numeric distribution samples.
//!
//! A FK drawn from a PK's domain has a similar empirical distribution, so a
//! low KS statistic (max gap between the two empirical CDFs) maps to a high
//! score. Abstains unless both profiles carry a numeric sample.

use crate::profiler::ColumnProfile;
use crate::signals::{Signal, SignalContext, SignalResult};
use crate::types::SignalKind;

pub struct DistributionSimilarity;

impl Signal for DistributionSimilarity {
    fn kind(&self) -> SignalKind {
        SignalKind::Distribution
    }

    fn name(&self) -> &'static str {
        "Distribution similarity"
    }

    fn evaluate(&self, ctx: &SignalContext) -> Option<SignalResult> {
        let a = numeric_sample(ctx.fk)?;
        let b = numeric_sample(ctx.pk)?;
        let d = ks_statistic(a, b);
        let score = (1.0 - d).clamp(0.0, 1.0);
        Some(SignalResult {
            kind: self.kind(),
            score,
            evidence: format!("KS statistic {d:.2}"),
        })
    }
}

fn numeric_sample(profile: &ColumnProfile) -> Option<&[f64]> {
    profile.numeric_sample.as_deref().filter(|s| !s.is_empty())
}

/// Two-sample KS statistic: max |F1(x) − F2(x)| over both sorted samples.
///
/// Both inputs come pre-sorted from the profiler, so a single merge walk
/// suffices.
fn ks_statistic(a: &[f64], b: &[f64]) -> f64 {
    let (mut i, mut j) = (0usize, 0usize);
    let (n1, n2) = (a.len() as f64, b.len() as f64);
    let mut d: f64 = 0.0;
    while i < a.len() && j < b.len() {
        // Advance both sides past the current value so ties move the two
        // CDFs together before the gap is measured.
        let x = a[i].min(b[j]);
        while i < a.len() && a[i] <= x {
            i += 1;
        }
        while j < b.len() && b[j] <= x {
            j += 1;
        }
        d = d.max((i as f64 / n1 - j as f64 / n2).abs());
    }
    // Tail: once one sample is exhausted the gap only shrinks toward the
    // final |1 - 1| = 0, so no further updates are needed.
    d
}
