//! Locomotion constants used across the crate.
//!
//! These values were previously tuned per character in the editing tool but
//! are now hardcoded defaults; per-character overrides go through
//! [`crate::LocomotionConfig`].

/// Magnitude of engine gravity before scaling, in world units per second squared.
pub const STANDARD_GRAVITY: f32 = 9.81;
/// How far below the character the ground probe reaches while descending.
pub const GROUND_PROBE_DISTANCE: f32 = 0.5;
/// Smallest tick duration accepted by the controller.
///
/// Non-positive deltas would stall or reverse the integration, so they are
/// clamped up to this epsilon instead.
pub const MIN_DELTA_TIME: f32 = 1e-6;
/// Default path traversal speed in progress units per second.
pub const DEFAULT_SPEED: f32 = 0.01;
/// Default jump apex height in world units.
pub const DEFAULT_JUMP_HEIGHT: f32 = 10.0;
/// Default multiplier applied to [`STANDARD_GRAVITY`].
pub const DEFAULT_GRAVITY_SCALE: f32 = 5.0;
/// Name of the animator blend parameter driven by the horizontal axis.
pub const BLEND_PARAM_SPEED: &str = "Speed";
