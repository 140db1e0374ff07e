//! Error types for the risk-synthesis core
//!
//! The core is pure arithmetic, so the taxonomy is minimal: every documented
//! numeric edge case degrades to clamped or defaulted output instead of
//! failing. The one reportable condition is an empty observation series
//! handed to the threshold calculator.

use std::fmt;

/// Errors produced by the risk-synthesis core.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CoreError {
    /// The threshold calculator was given an empty observation series.
    EmptyObservations,
}

impl fmt::Display for CoreError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CoreError::EmptyObservations => {
                write!(f, "cannot compute thresholds from an empty observation series")
            }
        }
    }
}

impl std::error::Error for CoreError {}
