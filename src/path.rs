//! Path sampling boundary and a concrete piecewise-linear sampler.
//!
//! The controller treats the path as a black-box continuous curve in 3-space,
//! addressed by normalised progress. Hosts with their own spline libraries
//! implement [`PathSampler`]; [`PolylinePath`] covers tools, tests, and hosts
//! without one.

use glam::Vec3;

use crate::config::ConfigError;

/// A designer-authored curve sampled by normalised progress.
///
/// Implementations must be deterministic and side-effect-free. Callers clamp
/// `progress` into `[0, 1]` before sampling; behaviour outside the unit
/// interval is implementation-defined.
pub trait PathSampler {
    /// World-space position of the curve at `progress`.
    fn evaluate_position(&self, progress: f32) -> Vec3;
    /// Direction of travel along the curve at `progress`; not required to be
    /// unit length.
    fn evaluate_tangent(&self, progress: f32) -> Vec3;
}

/// Position and tangent sampled at a single progress value.
///
/// Transient; recomputed every tick from the character's progress.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PathSample {
    /// World-space position on the curve.
    pub position: Vec3,
    /// Travel direction along the curve at the same point.
    pub tangent: Vec3,
}

impl PathSample {
    /// Samples both position and tangent at `progress`.
    #[must_use]
    pub fn at(path: &dyn PathSampler, progress: f32) -> Self {
        Self {
            position: path.evaluate_position(progress),
            tangent: path.evaluate_tangent(progress),
        }
    }
}

/// One straight span between consecutive waypoints.
#[derive(Debug, Clone, Copy)]
struct Span {
    start: Vec3,
    end: Vec3,
    length: f32,
    start_length: f32,
}

/// An arc-length-parameterised piecewise-linear curve.
///
/// Built once at character initialisation from designer-authored waypoints.
/// Progress maps linearly to distance travelled, so a constant-speed walk
/// covers equal world distance per tick regardless of how densely the
/// waypoints were authored.
#[derive(Debug, Clone)]
pub struct PolylinePath {
    spans: Vec<Span>,
    total_length: f32,
}

impl PolylinePath {
    /// Builds a path through `waypoints` in order.
    ///
    /// Coincident consecutive waypoints are merged.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::DegeneratePath`] when fewer than two distinct
    /// waypoints remain, since no curve can be defined.
    pub fn new(waypoints: &[Vec3]) -> Result<Self, ConfigError> {
        let mut spans = Vec::new();
        let mut total_length = 0.0_f32;
        for (start, end) in waypoints.iter().zip(waypoints.iter().skip(1)) {
            let length = start.distance(*end);
            if length <= f32::EPSILON {
                continue;
            }
            spans.push(Span {
                start: *start,
                end: *end,
                length,
                start_length: total_length,
            });
            total_length += length;
        }
        if spans.is_empty() {
            return Err(ConfigError::DegeneratePath {
                waypoints: waypoints.len(),
                length: total_length,
            });
        }
        Ok(Self {
            spans,
            total_length,
        })
    }

    /// Total arc length of the curve in world units.
    #[must_use]
    pub const fn total_length(&self) -> f32 {
        self.total_length
    }

    /// The span containing `progress` and the normalised offset within it.
    fn span_at(&self, progress: f32) -> Option<(&Span, f32)> {
        let target = progress * self.total_length;
        let found = self
            .spans
            .partition_point(|span| span.start_length + span.length < target);
        let index = found.min(self.spans.len().saturating_sub(1));
        self.spans.get(index).map(|span| {
            let along = ((target - span.start_length) / span.length).clamp(0.0, 1.0);
            (span, along)
        })
    }
}

impl PathSampler for PolylinePath {
    fn evaluate_position(&self, progress: f32) -> Vec3 {
        self.span_at(progress)
            .map_or(Vec3::ZERO, |(span, along)| span.start.lerp(span.end, along))
    }

    fn evaluate_tangent(&self, progress: f32) -> Vec3 {
        self.span_at(progress)
            .map_or(Vec3::X, |(span, _)| (span.end - span.start) / span.length)
    }
}
