//! Multi-factor fire and flood risk classification
//!
//! Turns one weather observation into two independent hazard judgments.
//! This is weighted threshold accumulation, not a statistical model: each
//! rule that fires raises the severity level (never lowers it), adds to the
//! probability estimate and records a human-readable factor. Probabilities
//! are clamped to `[0, 95]`; the classifier never claims certainty.
//!
//! Unlike series synthesis, the confidence scalar here is deliberately
//! unseeded: assessments should feel live, varying between invocations,
//! while synthetic series must replay bit-identically per station.

use crate::core_types::{RiskAssessment, RiskJudgment, RiskLevel, WeatherObservation};
use chrono::Utc;
use rand::Rng;
use tracing::debug;

/// Probability estimates never leave this range.
const PROBABILITY_RANGE: (f64, f64) = (0.0, 95.0);

/// Range the per-assessment confidence scalar is drawn from.
const CONFIDENCE_RANGE: (f64, f64) = (75.0, 95.0);

/// 0-based calendar months counted as wet season (May–September).
const WET_SEASON_MONTHS: std::ops::RangeInclusive<u32> = 4..=8;

/// Accumulates one hazard's judgment as rules fire.
///
/// Escalation is `max(current, candidate)` over the ordered level scale, so
/// the no-downgrade invariant holds structurally rather than by discipline
/// in each rule.
struct RiskAccumulator {
    level: RiskLevel,
    probability: f64,
    factors: Vec<String>,
}

impl RiskAccumulator {
    fn new(base_probability: f64) -> Self {
        Self {
            level: RiskLevel::Low,
            probability: base_probability,
            factors: Vec::new(),
        }
    }

    /// Raise the level to at least `candidate`, add weight, record a factor.
    fn escalate(&mut self, candidate: RiskLevel, weight: f64, factor: &str) {
        self.level = self.level.max(candidate);
        self.add(weight, factor);
    }

    /// Add weight and record a factor without touching the level.
    fn add(&mut self, weight: f64, factor: &str) {
        self.probability += weight;
        self.factors.push(factor.to_string());
    }

    fn finish(self, recommendation: fn(RiskLevel) -> &'static str) -> RiskJudgment {
        let factors = if self.factors.is_empty() {
            vec![
                "Stable weather conditions".to_string(),
                "Normal temperature and humidity".to_string(),
            ]
        } else {
            self.factors
        };
        RiskJudgment {
            level: self.level,
            probability_percent: self.probability.clamp(PROBABILITY_RANGE.0, PROBABILITY_RANGE.1),
            factors,
            recommendation: recommendation(self.level).to_string(),
        }
    }
}

/// Classify fire and flood risk from one observation.
///
/// `month` is the current 0-based calendar month (0 = January), used only by
/// the flood wet-season rule. Non-finite observation values are not
/// filtered; callers validate input, and NaN-tainted input propagates to
/// NaN-tainted output.
#[must_use]
pub fn classify_risk(obs: &WeatherObservation, month: u32) -> RiskAssessment {
    let fire = assess_fire(obs);
    let flood = assess_flood(obs, month);

    debug!(
        fire_level = %fire.level,
        flood_level = %flood.level,
        "classified observation"
    );

    RiskAssessment {
        fire,
        flood,
        confidence: rand::rng().random_range(CONFIDENCE_RANGE.0..CONFIDENCE_RANGE.1),
        generated_at: Utc::now(),
    }
}

fn assess_fire(obs: &WeatherObservation) -> RiskJudgment {
    let mut acc = RiskAccumulator::new(10.0);
    let condition = obs.condition_text.to_lowercase();

    if *obs.temperature > 40.0 {
        acc.escalate(RiskLevel::Extreme, 30.0, "Very high temperature");
    } else if *obs.temperature > 35.0 {
        acc.escalate(RiskLevel::High, 30.0, "Very high temperature");
    } else if *obs.temperature > 30.0 {
        acc.escalate(RiskLevel::Medium, 15.0, "High temperature");
    }

    if *obs.humidity < 20.0 {
        // One-tier jump: low humidity alone warrants High, combined with
        // anything else it is Extreme.
        let jumped = if acc.level == RiskLevel::Low {
            RiskLevel::High
        } else {
            RiskLevel::Extreme
        };
        acc.escalate(jumped, 25.0, "Very low humidity");
    } else if *obs.humidity < 40.0 {
        acc.escalate(RiskLevel::Medium, 10.0, "Low humidity");
    }

    if *obs.wind_speed > 20.0 {
        acc.escalate(RiskLevel::High, 20.0, "Strong winds");
    } else if *obs.wind_speed > 10.0 {
        acc.add(10.0, "Moderate winds");
    }

    if *obs.precipitation < 0.1 && (condition.contains("clear") || condition.contains("sunny")) {
        acc.add(15.0, "Dry conditions");
    }

    acc.finish(fire_recommendation)
}

fn assess_flood(obs: &WeatherObservation, month: u32) -> RiskJudgment {
    let mut acc = RiskAccumulator::new(5.0);
    let condition = obs.condition_text.to_lowercase();

    if *obs.precipitation > 50.0 {
        acc.escalate(RiskLevel::Extreme, 40.0, "Heavy rainfall");
    } else if *obs.precipitation > 20.0 {
        acc.escalate(RiskLevel::High, 25.0, "Moderate to heavy rain");
    } else if *obs.precipitation > 5.0 {
        acc.escalate(RiskLevel::Medium, 10.0, "Light to moderate rain");
    }

    if condition.contains("storm") || condition.contains("thunder") {
        let jumped = if acc.level == RiskLevel::Low {
            RiskLevel::High
        } else {
            RiskLevel::Extreme
        };
        acc.escalate(jumped, 30.0, "Storm conditions");
    }

    if *obs.pressure < 1000.0 {
        acc.add(15.0, "Low atmospheric pressure");
    }

    if *obs.humidity > 90.0 {
        acc.add(10.0, "Very high humidity");
    }

    if WET_SEASON_MONTHS.contains(&month) {
        acc.add(5.0, "Wet season period");
    }

    acc.finish(flood_recommendation)
}

/// Fixed recommendation text per fire severity tier.
fn fire_recommendation(level: RiskLevel) -> &'static str {
    match level {
        RiskLevel::Low => "No special fire precautions required",
        RiskLevel::Medium => "Avoid open flames outdoors and monitor local advisories",
        RiskLevel::High => "Postpone burning activities and prepare an evacuation plan",
        RiskLevel::Extreme => {
            "Extreme fire danger - follow emergency services instructions immediately"
        }
    }
}

/// Fixed recommendation text per flood severity tier.
fn flood_recommendation(level: RiskLevel) -> &'static str {
    match level {
        RiskLevel::Low => "No flood action needed",
        RiskLevel::Medium => "Monitor water levels and keep drainage clear",
        RiskLevel::High => "Move valuables above ground level and avoid low-lying roads",
        RiskLevel::Extreme => {
            "Severe flooding likely - move to higher ground and follow evacuation orders"
        }
    }
}
