//! Numeric guard helpers used across the project.
//!
//! These utilities keep the per-tick state transition total over its input
//! domain: path progress stays inside the unit interval and tick durations
//! stay strictly positive, so no input can stall or reverse the integration.

use crate::MIN_DELTA_TIME;

/// Clamp a progress value into the unit interval `[0, 1]`.
///
/// Non-finite inputs collapse to `0.0` rather than propagating through the
/// path sampler.
///
/// # Examples
///
/// ```
/// use pathwalk::clamp_unit;
/// assert_eq!(clamp_unit(0.5), 0.5);
/// assert_eq!(clamp_unit(1.7), 1.0);
/// assert_eq!(clamp_unit(-0.3), 0.0);
/// assert_eq!(clamp_unit(f32::NAN), 0.0);
/// ```
#[must_use]
pub fn clamp_unit(value: f32) -> f32 {
    if !value.is_finite() {
        return 0.0;
    }
    value.clamp(0.0, 1.0)
}

/// Clamp a tick duration to a strictly positive value.
///
/// Zero, negative, and non-finite durations are replaced by
/// [`MIN_DELTA_TIME`] so a misbehaving host clock cannot freeze or rewind
/// the simulation.
///
/// # Examples
///
/// ```
/// use pathwalk::{sanitize_delta, MIN_DELTA_TIME};
/// assert_eq!(sanitize_delta(0.016), 0.016);
/// assert_eq!(sanitize_delta(0.0), MIN_DELTA_TIME);
/// assert_eq!(sanitize_delta(-1.0), MIN_DELTA_TIME);
/// ```
#[must_use]
pub fn sanitize_delta(delta: f32) -> f32 {
    if !delta.is_finite() || delta <= 0.0 {
        return MIN_DELTA_TIME;
    }
    delta
}
