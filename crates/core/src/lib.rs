//! Risk-Synthesis Core Library
//!
//! The deterministic computation core behind an emergency-monitoring
//! dashboard. The UI layer, station registries and data ingestion live
//! elsewhere; this crate only transforms plain inputs into plain value
//! objects:
//!
//! - Coordinate-seeded pseudo-randomness, so every station replays the same
//!   synthetic series on every visit
//! - Three-segment synthetic discharge series (historical / validation /
//!   forecast)
//! - Adaptive display thresholds and risk bands for arbitrary data ranges
//! - Multi-factor fire and flood risk classification from weather
//!   observations
//!
//! Everything is synchronous and side-effect free apart from each seeded
//! generator's own state, the classifier's unseeded confidence draw, and
//! `tracing` events. The crate performs no I/O and installs no subscriber.

// Core types and utilities
pub mod core_types;

// Deterministic randomness
pub mod rng;

// Risk-synthesis components
pub mod classify;
pub mod synthesis;
pub mod thresholds;

// Error handling
pub mod error;

// Re-export core types
pub use core_types::{RiskAssessment, RiskJudgment, RiskLevel, WeatherObservation};
pub use core_types::{Segment, SeriesPoint};

// Re-export the four call contracts
pub use classify::classify_risk;
pub use rng::{derive_seed, SeededRng, DEFAULT_SEED};
pub use synthesis::{synthesize_default_series, synthesize_series, synthesize_series_at};
pub use thresholds::{compute_thresholds, ThresholdBand};

pub use error::CoreError;
