//! Value types for synthesized discharge series
//!
//! A series is an ordered sequence of [`SeriesPoint`]s spanning three
//! contiguous day-ranges. The segments are chronological and never overlap;
//! the forecast segment is always last.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Which portion of the synthesized series a point belongs to.
///
/// The three segments communicate "known past, validated recent, uncertain
/// future" to the chart layer without any real forecasting model behind
/// them:
/// - **Historical**: the longest span, full seasonal swing and noise.
/// - **Validation**: recent data with a tighter noise band.
/// - **Forecast**: dampened seasonal swing and the widest noise band.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Segment {
    Historical,
    Validation,
    Forecast,
}

impl fmt::Display for Segment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Segment::Historical => write!(f, "historical"),
            Segment::Validation => write!(f, "validation"),
            Segment::Forecast => write!(f, "forecast"),
        }
    }
}

/// One sample of the synthetic discharge signal.
///
/// `day` is a fractional offset in day-units from the start of the series;
/// a full series is sorted ascending by `day`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SeriesPoint {
    /// Fractional day offset from the series start.
    pub day: f64,
    /// Synthesized discharge value (dimensionless display units).
    pub discharge: f64,
    /// Segment this sample belongs to.
    pub segment: Segment,
}
