//! Ground probing boundary.
//!
//! The collision engine performing the actual probe is out of scope; the
//! controller only needs a downward distance query. An unreachable probe
//! means "still airborne", never an error.

use glam::Vec3;

/// Downward ground probe implemented by the host's collision engine.
pub trait GroundQuery {
    /// Probes straight down from `origin` for at most `max_distance` world
    /// units.
    ///
    /// Returns the world-space height of the contact surface, or `None` when
    /// no surface lies within reach.
    fn probe_downward(&self, origin: Vec3, max_distance: f32) -> Option<f32>;
}

/// An infinite horizontal plane at a fixed height.
///
/// Enough ground for demos and tests. A character that tunnelled below the
/// plane during a long tick still reports contact, so landing can snap it
/// back up to the surface.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FlatGround {
    height: f32,
}

impl FlatGround {
    /// Creates a plane at `height`.
    #[must_use]
    pub const fn new(height: f32) -> Self {
        Self { height }
    }

    /// World-space height of the plane.
    #[must_use]
    pub const fn height(&self) -> f32 {
        self.height
    }
}

impl GroundQuery for FlatGround {
    fn probe_downward(&self, origin: Vec3, max_distance: f32) -> Option<f32> {
        (origin.y - self.height <= max_distance).then_some(self.height)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn contact_reported_within_probe_distance() {
        let ground = FlatGround::new(2.0);
        assert_eq!(
            ground.probe_downward(Vec3::new(0.0, 2.4, 0.0), 0.5),
            Some(2.0)
        );
    }

    #[test]
    fn no_contact_beyond_probe_distance() {
        let ground = FlatGround::new(0.0);
        assert_eq!(ground.probe_downward(Vec3::new(0.0, 0.6, 0.0), 0.5), None);
    }

    #[test]
    fn tunnelled_origin_still_reports_contact() {
        let ground = FlatGround::new(1.0);
        assert_eq!(
            ground.probe_downward(Vec3::new(0.0, 0.2, 0.0), 0.5),
            Some(1.0)
        );
    }
}
