//! Validated engine configuration.
//!
//! [`InferenceOptions`] is the wire-facing, all-optional form; `EngineConfig`
//! is the checked form the run actually uses. Validation happens before any
//! profiling starts, so a bad configuration never produces partial output.

use crate::error::ConfigError;
use crate::profiler::{ResourceCaps, MIN_NUMERIC_SAMPLE};
use crate::types::{
    ConfidenceThresholds, InferenceOptions, MinConfidence, SignalKind, SignalWeights,
};

#[derive(Debug, Clone, Copy)]
pub struct EngineConfig {
    pub min_confidence: MinConfidence,
    pub weights: SignalWeights,
    pub thresholds: ConfidenceThresholds,
    pub caps: ResourceCaps,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            min_confidence: MinConfidence::default(),
            weights: SignalWeights::default(),
            thresholds: ConfidenceThresholds::default(),
            caps: ResourceCaps::default(),
        }
    }
}

impl EngineConfig {
    pub fn from_options(options: Option<&InferenceOptions>) -> Result<Self, ConfigError> {
        let Some(options) = options else {
            return Ok(Self::default());
        };

        let weights = options.weights.unwrap_or_default();
        validate_weights(&weights)?;

        let thresholds = options.thresholds.unwrap_or_default();
        validate_thresholds(&thresholds)?;

        let defaults = ResourceCaps::default();
        let caps = ResourceCaps {
            distinct_cap: options.distinct_cap.unwrap_or(defaults.distinct_cap),
            numeric_sample_cap: options
                .numeric_sample_cap
                .unwrap_or(defaults.numeric_sample_cap),
        };
        if caps.distinct_cap < 1 {
            return Err(ConfigError::InvalidCap {
                name: "distinctCap",
                min: 1,
                value: caps.distinct_cap,
            });
        }
        if caps.numeric_sample_cap < MIN_NUMERIC_SAMPLE {
            return Err(ConfigError::InvalidCap {
                name: "numericSampleCap",
                min: MIN_NUMERIC_SAMPLE,
                value: caps.numeric_sample_cap,
            });
        }

        Ok(Self {
            min_confidence: options.min_confidence,
            weights,
            thresholds,
            caps,
        })
    }

    /// Weight for one signal. Zero disables the signal entirely.
    pub fn weight(&self, kind: SignalKind) -> f64 {
        match kind {
            SignalKind::Naming => self.weights.naming,
            SignalKind::NameSimilarity => self.weights.name_similarity,
            SignalKind::ValueOverlap => self.weights.value_overlap,
            SignalKind::Cardinality => self.weights.cardinality,
            SignalKind::Format => self.weights.format,
            SignalKind::Distribution => self.weights.distribution,
            SignalKind::NullPattern => self.weights.null_pattern,
        }
    }
}

fn validate_weights(weights: &SignalWeights) -> Result<(), ConfigError> {
    let named = [
        ("naming", weights.naming),
        ("nameSimilarity", weights.name_similarity),
        ("valueOverlap", weights.value_overlap),
        ("cardinality", weights.cardinality),
        ("format", weights.format),
        ("distribution", weights.distribution),
        ("nullPattern", weights.null_pattern),
    ];
    for (name, value) in named {
        if !value.is_finite() || !(0.0..=1.0).contains(&value) {
            return Err(ConfigError::InvalidWeight { name, value });
        }
    }
    if named.iter().all(|(_, v)| *v == 0.0) {
        return Err(ConfigError::AllWeightsZero);
    }
    Ok(())
}

fn validate_thresholds(thresholds: &ConfidenceThresholds) -> Result<(), ConfigError> {
    let ConfidenceThresholds { medium, high } = *thresholds;
    let ordered = medium.is_finite()
        && high.is_finite()
        && (0.0..=1.0).contains(&medium)
        && (0.0..=1.0).contains(&high)
        && medium <= high;
    if ordered {
        Ok(())
    } else {
        Err(ConfigError::InvalidThresholds { medium, high })
    }
}
