//! Error types for the inference engine.
//!
//! # Error Handling Strategy
//!
//! This crate uses two complementary error handling patterns:
//!
//! - [`ConfigError`]: Fatal configuration problems (invalid weights,
//!   thresholds, caps, duplicate table names). Returned as
//!   `Result<T, ConfigError>` before any work starts; a run with a bad
//!   configuration never begins.
//!
//! - [`crate::types::Issue`]: Non-fatal warnings collected during a run
//!   (authority conflicts, bounded sampling, empty tables). These are
//!   accumulated in a vector and returned alongside the result, allowing the
//!   run to complete with partial evidence instead of failing.
//!
//! Data insufficiency is not an error at all: a signal that cannot be
//! computed abstains and is simply excluded from composite scoring.

use thiserror::Error;

/// Fatal configuration error; the run does not start.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum ConfigError {
    #[error("signal weight `{name}` must be a finite value in [0, 1], got {value}")]
    InvalidWeight { name: &'static str, value: f64 },

    #[error("all signal weights are zero; at least one signal must participate")]
    AllWeightsZero,

    #[error(
        "confidence thresholds must satisfy 0 <= medium <= high <= 1, got medium={medium}, high={high}"
    )]
    InvalidThresholds { medium: f64, high: f64 },

    #[error("resource cap `{name}` must be at least {min}, got {value}")]
    InvalidCap {
        name: &'static str,
        min: usize,
        value: usize,
    },

    #[error("duplicate table name `{0}` in request")]
    DuplicateTable(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_messages() {
        let err = ConfigError::InvalidWeight {
            name: "naming",
            value: f64::NAN,
        };
        assert!(err.to_string().contains("naming"));

        let err = ConfigError::InvalidThresholds {
            medium: 0.9,
            high: 0.5,
        };
        assert!(err.to_string().contains("medium=0.9"));

        let err = ConfigError::DuplicateTable("orders".into());
        assert_eq!(err.to_string(), "duplicate table name `orders` in request");
    }
}
