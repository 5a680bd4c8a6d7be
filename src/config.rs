//! Character locomotion configuration.
//!
//! Configuration is validated once, before the first tick. A rejected config
//! is a programming or asset-authoring error; the tick path itself has no
//! runtime error kind.

use glam::Vec3;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::{DEFAULT_GRAVITY_SCALE, DEFAULT_JUMP_HEIGHT, DEFAULT_SPEED, STANDARD_GRAVITY};

/// Errors raised when locomotion parameters cannot produce a well-defined
/// simulation.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ConfigError {
    /// Travel speed must be strictly positive.
    #[error("travel speed must be positive, got {speed}")]
    NonPositiveSpeed {
        /// The rejected speed value.
        speed: f32,
    },
    /// Jump apex height must be strictly positive.
    #[error("jump height must be positive, got {jump_height}")]
    NonPositiveJumpHeight {
        /// The rejected jump height value.
        jump_height: f32,
    },
    /// Gravity scale must be strictly positive.
    #[error("gravity scale must be positive, got {gravity_scale}")]
    NonPositiveGravityScale {
        /// The rejected gravity scale value.
        gravity_scale: f32,
    },
    /// A path needs at least two distinct waypoints to define a curve.
    #[error("path needs at least two distinct waypoints, got {waypoints} spanning length {length}")]
    DegeneratePath {
        /// Number of waypoints supplied.
        waypoints: usize,
        /// Total arc length of the supplied waypoints.
        length: f32,
    },
}

/// Tunable locomotion parameters for one character.
///
/// Defaults match the authored values of the character this controller was
/// ported from. All fields are optional when deserialised, so a config file
/// only needs to name the values it overrides.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LocomotionConfig {
    /// Path traversal speed in progress units per second.
    pub speed: f32,
    /// Jump apex height in world units.
    pub jump_height: f32,
    /// Multiplier applied to [`STANDARD_GRAVITY`].
    pub gravity_scale: f32,
    /// Fixed offset from the sampled path position to the character origin.
    pub lateral_offset: Vec3,
}

impl Default for LocomotionConfig {
    fn default() -> Self {
        Self {
            speed: DEFAULT_SPEED,
            jump_height: DEFAULT_JUMP_HEIGHT,
            gravity_scale: DEFAULT_GRAVITY_SCALE,
            lateral_offset: Vec3::ZERO,
        }
    }
}

impl LocomotionConfig {
    /// Checks that every parameter yields a well-defined simulation.
    ///
    /// # Errors
    ///
    /// Returns a [`ConfigError`] naming the first offending parameter when
    /// `speed`, `jump_height`, or `gravity_scale` is non-positive or
    /// non-finite.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.speed.is_finite() || self.speed <= 0.0 {
            return Err(ConfigError::NonPositiveSpeed { speed: self.speed });
        }
        if !self.jump_height.is_finite() || self.jump_height <= 0.0 {
            return Err(ConfigError::NonPositiveJumpHeight {
                jump_height: self.jump_height,
            });
        }
        if !self.gravity_scale.is_finite() || self.gravity_scale <= 0.0 {
            return Err(ConfigError::NonPositiveGravityScale {
                gravity_scale: self.gravity_scale,
            });
        }
        Ok(())
    }

    /// Effective downward acceleration, always strictly positive for a
    /// validated config.
    #[must_use]
    pub fn gravity_magnitude(&self) -> f32 {
        STANDARD_GRAVITY * self.gravity_scale
    }

    /// Launch speed that makes the jump apex equal `jump_height` exactly,
    /// ignoring tick discretisation: `v = sqrt(2 * g * h)`.
    #[must_use]
    pub fn launch_velocity(&self) -> f32 {
        (2.0 * self.jump_height * self.gravity_magnitude()).sqrt()
    }
}
