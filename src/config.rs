//! Construction-time configuration for a rope.

use crate::error::RopeError;
use crate::float::Float;
use crate::vec::Vec3;

/// Floor applied to segment lengths so constraint math never divides by zero.
pub(crate) const MIN_SEGMENT_LENGTH: f32 = 1e-4;

/// Configuration for a [`RopeSolver`](crate::RopeSolver).
///
/// Frozen once the solver is built. Out-of-range values are clamped by the
/// solver rather than rejected; call [`RopeConfig::validate`] to find out
/// whether that will happen.
///
/// # Builder Pattern
/// ```
/// use hawser::{RopeConfig, Vec3};
///
/// let config: RopeConfig<f32> = RopeConfig::new(40, 0.25)
///     .with_gravity(Vec3::new(0.0, -9.81, 0.0))
///     .with_iterations(8)
///     .with_bending_stiffness(0.3)
///     .with_friction(0.4);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RopeConfig<F: Float> {
    /// Number of mass points. Clamped to at least 2.
    pub point_count: usize,
    /// Rest distance between adjacent points. Clamped to a small positive floor.
    pub segment_length: F,
    /// Visual radius of the rope; inflates the collider radius.
    pub rope_radius: F,
    /// Gravity acceleration vector. Default: (0, -9.81, 0).
    pub gravity: Vec3<F>,
    /// Velocity damping factor [0, 1]. 1.0 = no damping. Default: 0.995.
    pub damping: F,
    /// Constraint relaxation passes per step. Default: 6.
    pub iterations: usize,
    /// Bending smoothing strength [0, 1]. Default: 0.2.
    pub bending_stiffness: F,
    /// Tangential friction against the collider [0, 1]. Default: 0.2.
    pub friction: F,
    /// How strongly the last point follows the head target [0, 1]. Default: 0.5.
    pub head_follow_strength: F,
}

impl<F: Float> RopeConfig<F> {
    /// Create a config with default tuning for `point_count` points spaced
    /// `segment_length` apart.
    pub fn new(point_count: usize, segment_length: F) -> Self {
        RopeConfig {
            point_count,
            segment_length,
            rope_radius: F::from_f32(0.05),
            gravity: Vec3::new(F::zero(), F::from_f32(-9.81), F::zero()),
            damping: F::from_f32(0.995),
            iterations: 6,
            bending_stiffness: F::from_f32(0.2),
            friction: F::from_f32(0.2),
            head_follow_strength: F::half(),
        }
    }

    /// Set the gravity vector.
    pub fn with_gravity(mut self, gravity: Vec3<F>) -> Self {
        self.gravity = gravity;
        self
    }

    /// Set the damping factor.
    pub fn with_damping(mut self, damping: F) -> Self {
        self.damping = damping;
        self
    }

    /// Set the number of constraint iterations.
    pub fn with_iterations(mut self, iterations: usize) -> Self {
        self.iterations = iterations;
        self
    }

    /// Set the bending stiffness.
    pub fn with_bending_stiffness(mut self, stiffness: F) -> Self {
        self.bending_stiffness = stiffness;
        self
    }

    /// Set the collider friction.
    pub fn with_friction(mut self, friction: F) -> Self {
        self.friction = friction;
        self
    }

    /// Set the rope's visual radius.
    pub fn with_rope_radius(mut self, radius: F) -> Self {
        self.rope_radius = radius;
        self
    }

    /// Set the initial head-follow strength.
    pub fn with_head_follow_strength(mut self, strength: F) -> Self {
        self.head_follow_strength = strength;
        self
    }

    /// Report the first field the solver would have to clamp.
    pub fn validate(&self) -> Result<(), RopeError> {
        if self.point_count < 2 {
            return Err(RopeError::TooFewPoints { count: self.point_count });
        }
        if !self.segment_length.is_finite() || self.segment_length <= F::zero() {
            return Err(RopeError::InvalidSegmentLength);
        }
        if !in_unit_range(self.damping) {
            return Err(RopeError::InvalidDamping);
        }
        if !in_unit_range(self.bending_stiffness) {
            return Err(RopeError::InvalidBendingStiffness);
        }
        if !in_unit_range(self.friction) {
            return Err(RopeError::InvalidFriction);
        }
        if !self.rope_radius.is_finite() || self.rope_radius < F::zero() {
            return Err(RopeError::InvalidRopeRadius);
        }
        if !in_unit_range(self.head_follow_strength) {
            return Err(RopeError::InvalidHeadStrength);
        }
        Ok(())
    }

    /// Copy of this config with every field pulled into its valid range.
    pub(crate) fn sanitized(&self) -> Self {
        let segment_length = if self.segment_length.is_finite() {
            self.segment_length.max(F::from_f32(MIN_SEGMENT_LENGTH))
        } else {
            F::from_f32(MIN_SEGMENT_LENGTH)
        };
        RopeConfig {
            point_count: self.point_count.max(2),
            segment_length,
            rope_radius: self.rope_radius.max(F::zero()),
            gravity: self.gravity,
            damping: self.damping.clamp_unit(),
            iterations: self.iterations,
            bending_stiffness: self.bending_stiffness.clamp_unit(),
            friction: self.friction.clamp_unit(),
            head_follow_strength: self.head_follow_strength.clamp_unit(),
        }
    }
}

fn in_unit_range<F: Float>(v: F) -> bool {
    v >= F::zero() && v <= F::one()
}
