//! Signal evaluators: independent heuristics scoring one candidate
//! column pair each.
//!
//! Every signal takes the pair of column profiles (FK side, PK side) and
//! returns either a bounded score with its evidence, or abstains by
//! returning `None` when its preconditions are not met. Abstention is not
//! zero: an abstaining signal is excluded from composite scoring entirely.
//!
//! Signals are pure functions over immutable profiles, so pairs can be
//! evaluated in any order (or in parallel) with identical results.

mod cardinality;
mod distribution;
mod format;
mod name_similarity;
mod naming;
mod null_pattern;
mod value_overlap;

pub use cardinality::Cardinality;
pub use distribution::DistributionSimilarity;
pub use format::FormatFingerprint;
pub use name_similarity::NameSimilarity;
pub use naming::NamingConvention;
pub use null_pattern::NullPatternCorrelation;
pub use value_overlap::ValueOverlap;

use crate::profiler::ColumnProfile;
use crate::types::SignalKind;

/// Context provided to signal evaluators: one directed candidate pair.
///
/// `fk` is the column being tested as the foreign key, `pk` the column being
/// tested as the referenced primary key. The two always come from different
/// tables; same-table pairs are never generated.
pub struct SignalContext<'a> {
    pub fk: &'a ColumnProfile,
    pub pk: &'a ColumnProfile,
}

/// The outcome of one signal for one pair.
#[derive(Debug, Clone)]
pub struct SignalResult {
    pub kind: SignalKind,
    /// Score in [0, 1].
    pub score: f64,
    /// Human-readable evidence, surfaced in the relationship report.
    pub evidence: String,
}

/// A single inference signal.
pub trait Signal: Send + Sync {
    /// Which of the seven signals this is.
    fn kind(&self) -> SignalKind;

    /// Short human-readable name (e.g. "Value overlap").
    fn name(&self) -> &'static str;

    /// Score the pair, or `None` to abstain.
    fn evaluate(&self, ctx: &SignalContext) -> Option<SignalResult>;
}

/// All seven signals in canonical order.
pub fn all_signals() -> Vec<Box<dyn Signal>> {
    vec![
        Box::new(NamingConvention),
        Box::new(NameSimilarity),
        Box::new(ValueOverlap),
        Box::new(Cardinality),
        Box::new(FormatFingerprint),
        Box::new(DistributionSimilarity),
        Box::new(NullPatternCorrelation),
    ]
}
