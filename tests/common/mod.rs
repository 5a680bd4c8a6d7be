//! Shared fixtures for locomotion integration tests.

use glam::Vec3;
use pathwalk::{
    AnimatorSink, GroundQuery, InputSnapshot, LocomotionConfig, LocomotionController, PathSampler,
};

/// Straight-line sampler: position `(progress, 0, 0)`, tangent `+X`.
///
/// Keeps progress arithmetic directly visible in position assertions.
#[allow(dead_code)]
pub struct LinePath;

impl PathSampler for LinePath {
    fn evaluate_position(&self, progress: f32) -> Vec3 {
        Vec3::new(progress, 0.0, 0.0)
    }

    fn evaluate_tangent(&self, _progress: f32) -> Vec3 {
        Vec3::X
    }
}

/// Ground that never reports contact.
#[allow(dead_code)]
pub struct NoGround;

impl GroundQuery for NoGround {
    fn probe_downward(&self, _origin: Vec3, _max_distance: f32) -> Option<f32> {
        None
    }
}

/// Animator recording every parameter write in order.
#[derive(Default)]
#[allow(dead_code)]
pub struct RecordingAnimator {
    pub writes: Vec<(String, f32)>,
}

impl AnimatorSink for RecordingAnimator {
    fn set_blend_parameter(&mut self, name: &str, value: f32) {
        self.writes.push((name.to_owned(), value));
    }
}

/// Create a controller for tests.
///
/// Panics if the configuration is invalid.
#[allow(dead_code)]
pub fn controller(config: LocomotionConfig) -> LocomotionController {
    LocomotionController::new(config).expect("failed to build locomotion controller")
}

/// Convenience constructor for a walking input without jump.
#[allow(dead_code)]
pub fn walk(horizontal_axis: f32) -> InputSnapshot {
    InputSnapshot::new(horizontal_axis, false)
}

/// Convenience constructor for a jump tap without travel.
#[allow(dead_code)]
pub fn jump() -> InputSnapshot {
    InputSnapshot::new(0.0, true)
}
