//! Library crate providing the path-following locomotion core.
//! Re-exports the controller, its boundary traits, and shared helpers for the
//! demo binary and tests.
//!
//! A character's movement is split into two independent one-dimensional
//! problems: normalised progress along a designer-authored curve, and
//! vertical free-fall under gravity. [`LocomotionController`] recombines the
//! two into a world transform once per host-driven tick, behind three trait
//! seams: [`PathSampler`] for the curve, [`GroundQuery`] for the downward
//! probe, and [`AnimatorSink`] for blend parameters.

pub mod animator;
pub mod config;
pub mod constants;
pub mod controller;
pub mod ground;
pub mod input;
pub mod logging;
pub mod numeric;
pub mod path;
pub mod state;
pub mod vector_math;

pub use constants::*;

// Re-export commonly used items
pub use animator::{AnimatorSink, LogAnimator, NullAnimator};
pub use config::{ConfigError, LocomotionConfig};
pub use controller::LocomotionController;
pub use ground::{FlatGround, GroundQuery};
pub use input::{InputSnapshot, TravelDirection};
pub use logging::init as init_logging;
pub use numeric::{clamp_unit, sanitize_delta};
pub use path::{PathSample, PathSampler, PolylinePath};
pub use state::LocomotionState;
pub use vector_math::{facing_toward, safe_normalize};

pub mod prelude {
    //! Prelude exports used in documentation examples.
    //!
    //! ```rust,no_run
    //! use pathwalk::prelude::*;
    //! ```

    pub use crate::AnimatorSink;
    pub use crate::FlatGround;
    pub use crate::GroundQuery;
    pub use crate::InputSnapshot;
    pub use crate::LocomotionConfig;
    pub use crate::LocomotionController;
    pub use crate::LocomotionState;
    pub use crate::NullAnimator;
    pub use crate::PathSampler;
    pub use crate::PolylinePath;
}
