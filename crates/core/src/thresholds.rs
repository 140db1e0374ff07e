//! Adaptive display thresholds for observation series
//!
//! Given an arbitrary run of numeric observations (water-stage readings,
//! discharge values), computes a padded display window and two boundaries
//! splitting it into low / medium / high risk regions. The padding policy
//! adapts to the magnitude of the data range so flat signals still show a
//! visible band instead of collapsing to a line.

use crate::error::CoreError;
use serde::{Deserialize, Serialize};
use tracing::trace;

/// Half-width of the display window pinned around near-constant signals.
const FLAT_HALF_WIDTH: f64 = 0.005;

/// Below this range the signal is treated as flat.
const FLAT_RANGE_LIMIT: f64 = 0.005;

/// Below this range padding gets a fixed minimum.
const NARROW_RANGE_LIMIT: f64 = 0.02;

/// Minimum per-side padding for narrow ranges.
const NARROW_PAD_MIN: f64 = 0.002;

/// Per-side padding as a fraction of the data range.
const PAD_FRACTION: f64 = 0.1;

/// Fractions of the visible window at which the two risk boundaries sit,
/// yielding a fixed 30/40/30 tri-band split of the display window (not of
/// the raw data).
const LOW_BOUNDARY_FRACTION: f64 = 0.3;
const HIGH_BOUNDARY_FRACTION: f64 = 0.7;

/// A display window with two internal risk boundaries.
///
/// Invariant: `domain_min <= low_boundary <= high_boundary <= domain_max`.
/// Derived fresh from each input series; carries no identity beyond the call
/// that produced it.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ThresholdBand {
    pub domain_min: f64,
    pub domain_max: f64,
    pub low_boundary: f64,
    pub high_boundary: f64,
}

/// Compute the display window and risk boundaries for a series.
///
/// The padding policy has three tiers, smallest range first:
/// - flat (`range < 0.005`): fixed half-width window around the midpoint;
/// - narrow (`range < 0.02`): pad each side by `max(0.002, range * 0.1)`;
/// - normal: pad each side by `range * 0.1`.
///
/// If the data is entirely positive but padding would push the window below
/// zero, the lower edge is raised to `max(0, data_min - 0.01)`; a chart
/// implying negative stage readings would be misleading. Genuinely negative
/// data keeps its padded window.
///
/// # Errors
///
/// Returns [`CoreError::EmptyObservations`] for an empty input series.
pub fn compute_thresholds(values: &[f64]) -> Result<ThresholdBand, CoreError> {
    if values.is_empty() {
        return Err(CoreError::EmptyObservations);
    }

    let data_min = values.iter().copied().fold(f64::INFINITY, f64::min);
    let data_max = values.iter().copied().fold(f64::NEG_INFINITY, f64::max);
    let range = data_max - data_min;

    let (mut chart_min, chart_max) = if range < FLAT_RANGE_LIMIT {
        let midpoint = f64::midpoint(data_min, data_max);
        trace!(midpoint, "flat signal, pinning fixed display window");
        (midpoint - FLAT_HALF_WIDTH, midpoint + FLAT_HALF_WIDTH)
    } else if range < NARROW_RANGE_LIMIT {
        let pad = (range * PAD_FRACTION).max(NARROW_PAD_MIN);
        trace!(range, pad, "narrow range, padding with fixed minimum");
        (data_min - pad, data_max + pad)
    } else {
        let pad = range * PAD_FRACTION;
        trace!(range, pad, "proportional padding");
        (data_min - pad, data_max + pad)
    };

    // Positive data must not imply negative physical levels.
    if data_min > 0.0 && chart_min < 0.0 {
        chart_min = (data_min - 0.01).max(0.0);
    }

    let visible_range = chart_max - chart_min;
    Ok(ThresholdBand {
        domain_min: chart_min,
        domain_max: chart_max,
        low_boundary: chart_min + LOW_BOUNDARY_FRACTION * visible_range,
        high_boundary: chart_min + HIGH_BOUNDARY_FRACTION * visible_range,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn assert_band_ordered(band: &ThresholdBand) {
        assert!(
            band.domain_min <= band.low_boundary
                && band.low_boundary <= band.high_boundary
                && band.high_boundary <= band.domain_max,
            "band ordering violated: {band:?}"
        );
    }

    #[test]
    fn test_empty_input_is_an_error() {
        assert_eq!(compute_thresholds(&[]), Err(CoreError::EmptyObservations));
    }

    #[test]
    fn test_constant_series_gets_fixed_flat_window() {
        let band = compute_thresholds(&[5.0, 5.0, 5.0]).unwrap();
        assert_relative_eq!(band.domain_min, 4.995, epsilon = 1e-12);
        assert_relative_eq!(band.domain_max, 5.005, epsilon = 1e-12);
        assert_band_ordered(&band);
    }

    #[test]
    fn test_band_ordering_holds_across_magnitudes() {
        let cases: [&[f64]; 5] = [
            &[0.001, 0.002],
            &[0.1, 0.115],
            &[1.0, 2.0, 3.0],
            &[-50.0, 125.0],
            &[14.2, 14.7, 16.1, 13.9],
        ];
        for values in cases {
            let band = compute_thresholds(values).unwrap();
            assert_band_ordered(&band);
        }
    }

    #[test]
    fn test_flat_tier_boundary() {
        // Just below the flat limit: fixed half-width window. Note that
        // [1.0, 1.005] also lands here: 1.005 - 1.0 rounds to just under
        // 0.005 in IEEE arithmetic.
        let band = compute_thresholds(&[1.0, 1.004]).unwrap();
        assert_relative_eq!(band.domain_max - band.domain_min, 2.0 * FLAT_HALF_WIDTH, epsilon = 1e-9);
        let band = compute_thresholds(&[1.0, 1.005]).unwrap();
        assert_relative_eq!(band.domain_max - band.domain_min, 2.0 * FLAT_HALF_WIDTH, epsilon = 1e-9);

        // At the limit, with an exactly representable range of 0.005, the
        // narrow-tier padding takes over.
        let band = compute_thresholds(&[0.0, 0.005]).unwrap();
        assert_relative_eq!(band.domain_min, -0.002, epsilon = 1e-12);
        assert_relative_eq!(band.domain_max, 0.005 + 0.002, epsilon = 1e-12);
    }

    #[test]
    fn test_narrow_tier_uses_minimum_pad() {
        // range 0.01 → proportional pad would be 0.001, minimum 0.002 wins.
        let band = compute_thresholds(&[2.0, 2.01]).unwrap();
        assert_relative_eq!(band.domain_min, 1.998, epsilon = 1e-12);
        assert_relative_eq!(band.domain_max, 2.012, epsilon = 1e-12);
    }

    #[test]
    fn test_normal_tier_pads_proportionally() {
        // range 10 → pad 1.0 per side.
        let band = compute_thresholds(&[10.0, 20.0]).unwrap();
        assert_relative_eq!(band.domain_min, 9.0, epsilon = 1e-12);
        assert_relative_eq!(band.domain_max, 21.0, epsilon = 1e-12);
    }

    #[test]
    fn test_boundaries_split_visible_window_30_70() {
        let band = compute_thresholds(&[10.0, 20.0]).unwrap();
        let visible = band.domain_max - band.domain_min;
        assert_relative_eq!(band.low_boundary, band.domain_min + 0.3 * visible, epsilon = 1e-12);
        assert_relative_eq!(band.high_boundary, band.domain_min + 0.7 * visible, epsilon = 1e-12);
    }

    #[test]
    fn test_positive_data_never_implies_negative_window() {
        // range 4.8 → pad 0.48 would put the minimum at -0.38.
        let band = compute_thresholds(&[0.1, 4.9]).unwrap();
        assert_relative_eq!(band.domain_min, 0.09, epsilon = 1e-12);
        assert_band_ordered(&band);
    }

    #[test]
    fn test_positive_data_very_near_zero_clamps_to_zero() {
        let band = compute_thresholds(&[0.005, 4.9]).unwrap();
        assert_relative_eq!(band.domain_min, 0.0, epsilon = 1e-12);
    }

    #[test]
    fn test_negative_data_keeps_padded_window() {
        let band = compute_thresholds(&[-5.0, 5.0]).unwrap();
        assert_relative_eq!(band.domain_min, -6.0, epsilon = 1e-12);
        assert_relative_eq!(band.domain_max, 6.0, epsilon = 1e-12);
    }
}
