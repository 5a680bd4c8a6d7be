//! Per-character locomotion state.
//! One [`LocomotionState`] exists per character, owned by its controller's
//! host and rewritten once per simulation tick.

use glam::Vec3;
use serde::Serialize;

/// Snapshot of a character's locomotion at the end of a tick.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LocomotionState {
    /// World-space position of the character.
    pub position: Vec3,
    /// Unit vector the character is looking along.
    pub facing: Vec3,
    /// Vertical speed in world units per second.
    ///
    /// Integrated only while airborne. Landing does not zero this field; it
    /// keeps its last airborne value until the next jump recomputes it,
    /// matching the behaviour this controller was ported from.
    pub vertical_velocity: f32,
    /// Normalised distance travelled along the path, always in `[0, 1]`.
    pub progress: f32,
    /// Whether the character is standing on a surface.
    pub grounded: bool,
}

impl LocomotionState {
    /// Creates the spawn-time state: at the start of the path, standing, at
    /// rest.
    #[must_use]
    pub const fn at_spawn(position: Vec3, facing: Vec3) -> Self {
        Self {
            position,
            facing,
            vertical_velocity: 0.0,
            progress: 0.0,
            grounded: true,
        }
    }
}
