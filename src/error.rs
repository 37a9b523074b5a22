//! Error types for rope configuration checks.

use core::fmt;

/// Configuration the solver would have to clamp.
///
/// The solver itself never fails; these come only from
/// [`RopeConfig::validate`](crate::RopeConfig::validate).
#[derive(Debug, Clone, PartialEq)]
pub enum RopeError {
    /// A rope needs at least two points.
    TooFewPoints { count: usize },
    /// Segment length must be positive and finite.
    InvalidSegmentLength,
    /// Damping must be in [0, 1].
    InvalidDamping,
    /// Bending stiffness must be in [0, 1].
    InvalidBendingStiffness,
    /// Friction must be in [0, 1].
    InvalidFriction,
    /// Rope radius must be non-negative and finite.
    InvalidRopeRadius,
    /// Head-follow strength must be in [0, 1].
    InvalidHeadStrength,
}

impl fmt::Display for RopeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RopeError::TooFewPoints { count } => {
                write!(f, "rope needs at least 2 points (got {})", count)
            }
            RopeError::InvalidSegmentLength => write!(f, "segment length must be positive and finite"),
            RopeError::InvalidDamping => write!(f, "damping must be in [0, 1]"),
            RopeError::InvalidBendingStiffness => write!(f, "bending stiffness must be in [0, 1]"),
            RopeError::InvalidFriction => write!(f, "friction must be in [0, 1]"),
            RopeError::InvalidRopeRadius => write!(f, "rope radius must be non-negative and finite"),
            RopeError::InvalidHeadStrength => write!(f, "head follow strength must be in [0, 1]"),
        }
    }
}

impl core::error::Error for RopeError {}
