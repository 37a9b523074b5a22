//! Verlet rope simulation for mooring-line animation.
//!
//! `hawser` simulates a rope as a chain of mass points advanced with Verlet
//! integration and relaxed with position-based constraints. Built for
//! per-frame visual animation: a line made fast at one end, draped around a
//! bollard, and hauled in at the other.
//!
//! # Features
//!
//! - **Verlet integration**: Implicit velocity, derived as `pos - prev`
//! - **Constraint passes**: Segment length, cylinder collision with friction,
//!   bending smoothing, pins, relaxed iteratively
//! - **Head target**: Pull the working end toward a dragged point
//! - **Polyline utilities**: Arc-length resampling and point-at-fraction
//! - **Never fails**: Every numeric input is clamped, never rejected
//! - **Observable**: Monitor solver steps via the `StepObserver` trait
//! - **`no_std` compatible**: Works in embedded and WASM environments

#![no_std]

extern crate alloc;

pub mod float;
pub mod vec;
pub mod polyline;
pub mod pins;
pub mod collider;
pub mod integrate;
pub mod constraint;
pub mod rope;
pub mod observer;
pub mod config;
pub mod error;

// Re-export primary API
pub use float::Float;
pub use vec::Vec3;
pub use polyline::{point_at_fraction, polyline_length, resample_polyline};
pub use pins::PinSet;
pub use collider::CylinderCollider;
pub use rope::RopeSolver;
pub use config::RopeConfig;
pub use observer::{StepObserver, NoOpStepObserver};
pub use error::RopeError;
