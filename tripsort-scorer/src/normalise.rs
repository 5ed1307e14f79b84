//! Normalise raw numeric attributes onto the shared 0..=100 score scale.
#![forbid(unsafe_code)]

use tripsort_core::MAX_SCORE;

/// Normalise a raw attribute value against the cohort's observed values.
///
/// Absent values score `default` (unknown is neutral). A cohort with no
/// observed values also scores `default`. When the cohort carries no
/// discriminating signal (`hi == lo`, which covers single-candidate
/// cohorts and cohorts where every candidate reports the same value) every
/// present value scores [`MAX_SCORE`]; this is a deliberate policy, not a
/// degenerate fallback. Otherwise the value is linearly interpolated
/// between the cohort extremes, with `prefer_low` selecting the direction,
/// and the result is clamped against floating-point overshoot.
///
/// # Examples
///
/// ```
/// use tripsort_scorer::normalise;
///
/// let prices = [100.0, 150.0, 200.0];
/// assert_eq!(normalise(Some(100.0), &prices, true, 50.0), 100.0);
/// assert_eq!(normalise(Some(150.0), &prices, true, 50.0), 50.0);
/// assert_eq!(normalise(Some(200.0), &prices, true, 50.0), 0.0);
/// assert_eq!(normalise(None, &prices, true, 50.0), 50.0);
/// ```
#[must_use]
#[expect(
    clippy::float_arithmetic,
    reason = "normalisation interpolates between cohort extremes"
)]
pub fn normalise(value: Option<f32>, observed: &[f32], prefer_low: bool, default: f32) -> f32 {
    let Some(present) = value else {
        return default;
    };
    if observed.is_empty() {
        return default;
    }
    let lo = observed.iter().copied().fold(f32::INFINITY, f32::min);
    let hi = observed.iter().copied().fold(f32::NEG_INFINITY, f32::max);
    if hi == lo {
        return MAX_SCORE;
    }
    let span = hi - lo;
    let score = if prefer_low {
        MAX_SCORE * (hi - present) / span
    } else {
        MAX_SCORE * (present - lo) / span
    };
    score.clamp(0.0, MAX_SCORE)
}
