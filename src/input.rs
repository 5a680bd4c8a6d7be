//! Per-tick input snapshots.
//!
//! Polling and device abstraction belong to the host; the controller only
//! sees one [`InputSnapshot`] per tick and derives the jump edge itself by
//! comparing consecutive snapshots.

use serde::{Deserialize, Serialize};

/// Input sampled by the host once per tick.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct InputSnapshot {
    /// Signed travel axis in `[-1, 1]`; sign selects the direction along the
    /// path, magnitude scales the travel speed.
    pub horizontal_axis: f32,
    /// Raw held state of the jump control. Edge detection happens in the
    /// controller, not here.
    pub jump_held: bool,
}

impl InputSnapshot {
    /// Creates a snapshot, clamping the axis into `[-1, 1]`.
    #[must_use]
    pub fn new(horizontal_axis: f32, jump_held: bool) -> Self {
        Self {
            horizontal_axis: horizontal_axis.clamp(-1.0, 1.0),
            jump_held,
        }
    }
}

/// Direction of travel along the path.
///
/// Replaces the signed-integer enum the original controller cast to a
/// multiplier; the scalar mapping is explicit via [`TravelDirection::signum`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TravelDirection {
    /// Travelling toward progress 1.
    Forward,
    /// Travelling toward progress 0.
    Backward,
    /// Not moving along the path this tick.
    Stationary,
}

impl TravelDirection {
    /// Classifies a horizontal axis value.
    #[must_use]
    pub fn from_axis(axis: f32) -> Self {
        if axis > 0.0 {
            Self::Forward
        } else if axis < 0.0 {
            Self::Backward
        } else {
            Self::Stationary
        }
    }

    /// The signed scalar this direction contributes to progress updates.
    #[must_use]
    pub const fn signum(self) -> f32 {
        match self {
            Self::Forward => 1.0,
            Self::Backward => -1.0,
            Self::Stationary => 0.0,
        }
    }
}
