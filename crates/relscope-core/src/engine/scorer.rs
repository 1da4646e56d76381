//! Composite scoring: fold the per-signal results for one pair into a
//! single confidence.
//!
//! A weighted sum renormalized over the signals that actually spoke: a pair
//! with no numeric columns is judged on the remaining applicable signals
//! instead of being penalized for the abstentions. Commutative, so the
//! evaluation order of signals can never change the score.

use crate::engine::config::EngineConfig;
use crate::signals::SignalResult;
use crate::types::{Confidence, SignalKind};

/// The combined verdict for one candidate pair.
#[derive(Debug, Clone)]
pub struct ScoredPair {
    /// Renormalized weighted sum in [0, 1].
    pub score: f64,
    pub confidence: Confidence,
    /// The non-abstaining signal with the largest weighted contribution.
    pub detected_by: SignalKind,
    /// Evidence strings from the contributing signals.
    pub reasons: Vec<String>,
}

/// Combine the non-abstaining results for one pair.
///
/// Returns `None` when nothing contributed: every signal abstained, or all
/// the signals that spoke are weighted to zero. Such a pair produces no
/// relationship candidate at all.
pub fn combine(results: &[SignalResult], config: &EngineConfig) -> Option<ScoredPair> {
    let mut weight_sum = 0.0;
    let mut weighted_score = 0.0;
    let mut reasons = Vec::new();
    let mut top: Option<(f64, SignalKind)> = None;

    // Fold in canonical signal order. Float addition is not associative, so
    // summing in arrival order would let the evaluation order shift the
    // score by an ulp; walking `SignalKind::ALL` also makes the strict `>`
    // below break `detected_by` ties toward the canonical order.
    for kind in SignalKind::ALL {
        let Some(result) = results.iter().find(|r| r.kind == kind) else {
            continue;
        };
        let weight = config.weight(kind);
        if weight == 0.0 {
            continue;
        }
        weight_sum += weight;
        let contribution = weight * result.score;
        weighted_score += contribution;
        reasons.push(result.evidence.clone());

        let better = match top {
            None => true,
            Some((best, _)) => contribution > best,
        };
        if better {
            top = Some((contribution, kind));
        }
    }

    if weight_sum == 0.0 {
        return None;
    }

    let score = (weighted_score / weight_sum).clamp(0.0, 1.0);
    Some(ScoredPair {
        score,
        confidence: label(score, config),
        detected_by: top.map(|(_, kind)| kind)?,
        reasons,
    })
}

/// Map a composite score to its discrete label via the two thresholds.
pub fn label(score: f64, config: &EngineConfig) -> Confidence {
    if score >= config.thresholds.high {
        Confidence::High
    } else if score >= config.thresholds.medium {
        Confidence::Medium
    } else {
        Confidence::Low
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn result(kind: SignalKind, score: f64) -> SignalResult {
        SignalResult {
            kind,
            score,
            evidence: format!("{kind} {score}"),
        }
    }

    fn config() -> EngineConfig {
        EngineConfig::default()
    }

    #[test]
    fn empty_results_produce_no_candidate() {
        assert!(combine(&[], &config()).is_none());
    }

    #[test]
    fn single_signal_scores_itself() {
        let scored = combine(&[result(SignalKind::Naming, 1.0)], &config()).unwrap();
        assert_eq!(scored.score, 1.0);
        assert_eq!(scored.confidence, Confidence::High);
        assert_eq!(scored.detected_by, SignalKind::Naming);
    }

    #[test]
    fn renormalizes_over_participating_signals() {
        // naming (w=1.0) at 1.0, name_similarity (w=0.6) at 0.0
        let scored = combine(
            &[
                result(SignalKind::Naming, 1.0),
                result(SignalKind::NameSimilarity, 0.0),
            ],
            &config(),
        )
        .unwrap();
        assert!((scored.score - 1.0 / 1.6).abs() < 1e-9);
    }

    #[test]
    fn order_invariant_to_the_bit() {
        let forward = vec![
            result(SignalKind::Naming, 0.8),
            result(SignalKind::ValueOverlap, 0.4),
            result(SignalKind::Cardinality, 0.9),
        ];
        let baseline = combine(&forward, &config()).unwrap();

        // Every arrival order must reproduce the identical float, not just
        // an approximately equal one.
        let mut permuted = forward;
        for _ in 0..permuted.len() {
            permuted.rotate_left(1);
            let mut reversed = permuted.clone();
            reversed.reverse();
            for variant in [&permuted, &reversed] {
                let scored = combine(variant, &config()).unwrap();
                assert_eq!(scored.score.to_bits(), baseline.score.to_bits());
                assert_eq!(scored.confidence, baseline.confidence);
                assert_eq!(scored.detected_by, baseline.detected_by);
                assert_eq!(scored.reasons, baseline.reasons);
            }
        }
    }

    #[test]
    fn zero_weighted_signals_are_excluded() {
        let mut config = config();
        config.weights.name_similarity = 0.0;
        let scored = combine(
            &[
                result(SignalKind::Naming, 0.5),
                result(SignalKind::NameSimilarity, 1.0),
            ],
            &config,
        )
        .unwrap();
        assert!((scored.score - 0.5).abs() < 1e-9);
        assert_eq!(scored.reasons.len(), 1);
    }

    #[test]
    fn all_zero_weighted_yields_none() {
        let mut config = config();
        config.weights.name_similarity = 0.0;
        assert!(combine(&[result(SignalKind::NameSimilarity, 1.0)], &config).is_none());
    }

    #[test]
    fn labels_follow_thresholds() {
        let config = config();
        assert_eq!(label(0.9, &config), Confidence::High);
        assert_eq!(label(0.85, &config), Confidence::High);
        assert_eq!(label(0.6, &config), Confidence::Medium);
        assert_eq!(label(0.1, &config), Confidence::Low);
    }

    #[test]
    fn raising_one_signal_never_lowers_the_score() {
        let low = combine(
            &[
                result(SignalKind::Naming, 0.5),
                result(SignalKind::ValueOverlap, 0.3),
            ],
            &config(),
        )
        .unwrap();
        let high = combine(
            &[
                result(SignalKind::Naming, 0.5),
                result(SignalKind::ValueOverlap, 0.9),
            ],
            &config(),
        )
        .unwrap();
        assert!(high.score >= low.score);
        assert!(high.confidence >= low.confidence);
    }
}
