//! Grounded/airborne path-following locomotion.
//!
//! The controller decouples lateral traversal (one-dimensional progress along
//! an arbitrary 3-D curve) from vertical free-fall (one-dimensional motion
//! under gravity) and recombines them into a single world transform each
//! tick. The host owns the loop: it calls [`LocomotionController::tick`] once
//! per frame with the previous state, an input snapshot, and the elapsed
//! time, and receives the next state back.

use glam::Vec3;
use log::{debug, trace};

use crate::animator::AnimatorSink;
use crate::config::{ConfigError, LocomotionConfig};
use crate::ground::GroundQuery;
use crate::input::{InputSnapshot, TravelDirection};
use crate::numeric::{clamp_unit, sanitize_delta};
use crate::path::{PathSample, PathSampler};
use crate::state::LocomotionState;
use crate::vector_math::facing_toward;
use crate::{BLEND_PARAM_SPEED, GROUND_PROBE_DISTANCE};

/// Per-character locomotion state machine.
///
/// Holds the validated configuration and the previous jump-button state used
/// for edge detection; all simulation state lives in the
/// [`LocomotionState`] passed through [`LocomotionController::tick`].
#[derive(Debug, Clone)]
pub struct LocomotionController {
    config: LocomotionConfig,
    jump_was_held: bool,
}

impl LocomotionController {
    /// Creates a controller from a validated configuration.
    ///
    /// # Errors
    ///
    /// Returns the [`ConfigError`] produced by
    /// [`LocomotionConfig::validate`] so malformed parameters are rejected
    /// before the first tick rather than surfacing as NaN positions at
    /// runtime.
    pub fn new(config: LocomotionConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self {
            config,
            jump_was_held: false,
        })
    }

    /// The configuration this controller was built with.
    #[must_use]
    pub const fn config(&self) -> &LocomotionConfig {
        &self.config
    }

    /// Builds the spawn-time state: at the start of the path, standing,
    /// facing forward along the curve.
    #[must_use]
    pub fn spawn_state(&self, path: &dyn PathSampler) -> LocomotionState {
        let sample = PathSample::at(path, 0.0);
        let facing = facing_toward(sample.tangent, 1.0).unwrap_or(Vec3::X);
        LocomotionState::at_spawn(sample.position + self.config.lateral_offset, facing)
    }

    /// Advances the state machine by one tick.
    ///
    /// The horizontal axis is clamped into `[-1, 1]` and `delta` into a
    /// strictly positive range, so the transition is total over its inputs.
    /// The jump edge (held transition from released to pressed) is derived
    /// here from consecutive snapshots. Every tick publishes the axis
    /// magnitude to `animator` as the [`BLEND_PARAM_SPEED`] parameter,
    /// driving idle/walk blending externally.
    #[must_use]
    pub fn tick(
        &mut self,
        state: &LocomotionState,
        input: &InputSnapshot,
        delta: f32,
        path: &dyn PathSampler,
        ground: &dyn GroundQuery,
        animator: &mut dyn AnimatorSink,
    ) -> LocomotionState {
        let dt = sanitize_delta(delta);
        let axis = input.horizontal_axis.clamp(-1.0, 1.0);
        let jump_edge = input.jump_held && !self.jump_was_held;
        self.jump_was_held = input.jump_held;

        animator.set_blend_parameter(BLEND_PARAM_SPEED, axis.abs());

        let mut next = state.clone();
        if state.grounded {
            if jump_edge {
                self.launch(&mut next, dt);
            } else {
                self.walk(&mut next, axis, dt, path);
            }
        } else {
            self.fall(&mut next, dt, ground);
        }
        next
    }

    /// GROUNDED → AIRBORNE: force-set the launch velocity and apply one tick
    /// of vertical displacement immediately.
    ///
    /// Jumping takes the whole tick; path progress is frozen until landing.
    fn launch(&self, next: &mut LocomotionState, dt: f32) {
        next.vertical_velocity = self.config.launch_velocity();
        next.position.y += next.vertical_velocity * dt;
        next.grounded = false;
        debug!(
            "launched at progress {:.3} with velocity {:.2}",
            next.progress, next.vertical_velocity
        );
    }

    /// GROUNDED self-loop: advance progress along the path and re-derive the
    /// transform from the sampled curve.
    fn walk(&self, next: &mut LocomotionState, axis: f32, dt: f32, path: &dyn PathSampler) {
        let direction = TravelDirection::from_axis(axis);
        if direction == TravelDirection::Stationary {
            return;
        }
        next.progress = clamp_unit(next.progress + axis * self.config.speed * dt);
        let sample = PathSample::at(path, next.progress);
        next.position = sample.position + self.config.lateral_offset;
        // A degenerate tangent keeps the previous heading.
        if let Some(facing) = facing_toward(sample.tangent, direction.signum()) {
            next.facing = facing;
        }
        trace!(
            "walked to progress {:.3} at {:?}",
            next.progress,
            next.position
        );
    }

    /// AIRBORNE: integrate gravity (velocity before position), then resolve
    /// ground contact while descending.
    ///
    /// Probing only on descent avoids catching the ground on the way up.
    fn fall(&self, next: &mut LocomotionState, dt: f32, ground: &dyn GroundQuery) {
        next.vertical_velocity -= self.config.gravity_magnitude() * dt;
        next.position.y += next.vertical_velocity * dt;
        if next.vertical_velocity <= 0.0 {
            if let Some(contact) = ground.probe_downward(next.position, GROUND_PROBE_DISTANCE) {
                next.position.y = contact;
                next.grounded = true;
                // vertical_velocity keeps its last airborne value until the
                // next launch recomputes it. See the field docs on
                // LocomotionState.
                debug!("landed at height {contact:.3}");
            }
        }
    }
}
