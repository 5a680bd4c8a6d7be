//! Animator boundary.
//!
//! Blend parameter writes are fire-and-forget; the animation graph consuming
//! them is out of scope.

use log::debug;

/// Sink for animation blend parameters.
pub trait AnimatorSink {
    /// Publishes one named blend parameter for this tick.
    fn set_blend_parameter(&mut self, name: &str, value: f32);
}

/// Discards every parameter write. For headless hosts.
#[derive(Debug, Clone, Copy, Default)]
pub struct NullAnimator;

impl AnimatorSink for NullAnimator {
    fn set_blend_parameter(&mut self, _name: &str, _value: f32) {}
}

/// Logs every parameter write at debug level. For headless inspection.
#[derive(Debug, Clone, Copy, Default)]
pub struct LogAnimator;

impl AnimatorSink for LogAnimator {
    fn set_blend_parameter(&mut self, name: &str, value: f32) {
        debug!("blend parameter {name} = {value:.3}");
    }
}
