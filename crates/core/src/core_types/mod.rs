//! Core types and utilities

pub mod risk;
pub mod series;
pub mod units;

pub use risk::{RiskAssessment, RiskJudgment, RiskLevel, WeatherObservation};
pub use series::{Segment, SeriesPoint};
pub use units::*;
