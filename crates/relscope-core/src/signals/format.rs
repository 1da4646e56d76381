//! Format-Fingerprint: key and reference must share a value format.
//!
//! Matching tags (both UUID, both integer, ...) score 1.0; mismatching
//! determinate tags are a hard 0.0 since a UUID column cannot reference a
//! free-text one. Undetermined tags abstain.

use crate::signals::{Signal, SignalContext, SignalResult};
use crate::types::{FormatTag, SignalKind};

pub struct FormatFingerprint;

impl Signal for FormatFingerprint {
    fn kind(&self) -> SignalKind {
        SignalKind::Format
    }

    fn name(&self) -> &'static str {
        "Format fingerprint"
    }

    fn evaluate(&self, ctx: &SignalContext) -> Option<SignalResult> {
        if ctx.fk.format == FormatTag::Unknown || ctx.pk.format == FormatTag::Unknown {
            return None;
        }
        let matched = ctx.fk.format == ctx.pk.format;
        Some(SignalResult {
            kind: self.kind(),
            score: if matched { 1.0 } else { 0.0 },
            evidence: if matched {
                format!("shared value format [{}]", ctx.fk.format)
            } else {
                format!("format mismatch [{} vs {}]", ctx.fk.format, ctx.pk.format)
            },
        })
    }
}
