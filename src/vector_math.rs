//! Basic vector math helper functions.
//! Small helpers for deriving facing directions from path tangents.

use glam::Vec3;

/// Returns the unit vector in the direction of the supplied vector.
///
/// The function checks that all components are finite and the vector is
/// non-zero before normalising. If the input is invalid or the zero vector,
/// it returns `None` so callers can keep their previous heading.
///
/// # Examples
///
/// ```
/// use glam::Vec3;
/// use pathwalk::safe_normalize;
///
/// let unit = safe_normalize(Vec3::new(3.0, 0.0, 4.0)).unwrap();
/// assert!((unit.x - 0.6).abs() < 1e-6);
/// assert!((unit.z - 0.8).abs() < 1e-6);
///
/// assert!(safe_normalize(Vec3::ZERO).is_none());
/// assert!(safe_normalize(Vec3::new(f32::NAN, 0.0, 0.0)).is_none());
/// ```
#[must_use]
pub fn safe_normalize(vector: Vec3) -> Option<Vec3> {
    if !vector.is_finite() {
        return None;
    }
    vector.try_normalize()
}

/// Derives a facing direction from a path tangent and a signed travel
/// direction.
///
/// Walking backward mirrors the tangent so the character looks the way it is
/// moving. A zero direction or a degenerate tangent yields `None`.
///
/// # Examples
///
/// ```
/// use glam::Vec3;
/// use pathwalk::facing_toward;
///
/// let forward = facing_toward(Vec3::X, 1.0).unwrap();
/// assert_eq!(forward, Vec3::X);
/// let backward = facing_toward(Vec3::X, -1.0).unwrap();
/// assert_eq!(backward, -Vec3::X);
/// assert!(facing_toward(Vec3::X, 0.0).is_none());
/// ```
#[must_use]
pub fn facing_toward(tangent: Vec3, direction: f32) -> Option<Vec3> {
    if direction == 0.0 {
        return None;
    }
    safe_normalize(tangent * direction.signum())
}
