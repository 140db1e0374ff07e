//! Value types for multi-factor risk assessment
//!
//! A [`RiskAssessment`] bundles two independent hazard judgments (fire and
//! flood) produced from one weather observation. Assessments are immutable
//! once returned; callers re-invoke the classifier for a fresh one.

use crate::core_types::units::{
    Celsius, Hectopascals, KilometersPerHour, MillimetersPerHour, Percent,
};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Discrete risk severity, in ascending order.
///
/// The derived `Ord` follows declaration order, so rule escalation is a
/// plain `max`: a rule can never lower the level.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub enum RiskLevel {
    Low,
    Medium,
    High,
    Extreme,
}

impl fmt::Display for RiskLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RiskLevel::Low => write!(f, "Low"),
            RiskLevel::Medium => write!(f, "Medium"),
            RiskLevel::High => write!(f, "High"),
            RiskLevel::Extreme => write!(f, "Extreme"),
        }
    }
}

/// One instantaneous weather observation, as handed over by the ingestion
/// layer (already parsed and validated; the classifier does not defend
/// against NaN or infinite values).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeatherObservation {
    pub temperature: Celsius,
    pub humidity: Percent,
    pub wind_speed: KilometersPerHour,
    pub precipitation: MillimetersPerHour,
    pub pressure: Hectopascals,
    /// Free-form condition description, e.g. "clear", "thunderstorm".
    pub condition_text: String,
}

/// Classified severity for a single hazard, with the evidence behind it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RiskJudgment {
    /// Discrete severity level.
    pub level: RiskLevel,
    /// Probability estimate in percent, clamped to [0, 95].
    pub probability_percent: f64,
    /// Contributing factors, in the order the rules fired.
    pub factors: Vec<String>,
    /// Fixed recommendation text for the level.
    pub recommendation: String,
}

/// Combined fire and flood judgment for one observation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RiskAssessment {
    pub fire: RiskJudgment,
    pub flood: RiskJudgment,
    /// Overall confidence in percent, drawn fresh per assessment.
    pub confidence: f64,
    /// When the assessment was produced.
    pub generated_at: DateTime<Utc>,
}
