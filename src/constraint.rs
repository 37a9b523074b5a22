//! Constraint passes run once per relaxation iteration, in this order:
//! segment length, collider, bending, pins.

use crate::collider::{CylinderCollider, ROPE_RADIUS_INFLATION};
use crate::float::Float;
use crate::pins::PinSet;
use crate::vec::Vec3;

/// Distances below this are floored before dividing.
const MIN_DISTANCE: f32 = 1e-6;

/// Pull every adjacent pair back toward `rest_length`.
///
/// A pinned endpoint takes no share of the correction; two free endpoints
/// split it evenly; two pinned endpoints are skipped.
pub fn solve_segment_lengths<F: Float>(pos: &mut [Vec3<F>], pins: &PinSet, rest_length: F) {
    for i in 0..pos.len().saturating_sub(1) {
        let (a_pinned, b_pinned) = (pins.contains(i), pins.contains(i + 1));
        let (a_share, b_share) = match (a_pinned, b_pinned) {
            (true, true) => continue,
            (true, false) => (F::zero(), F::one()),
            (false, true) => (F::one(), F::zero()),
            (false, false) => (F::half(), F::half()),
        };

        let delta = pos[i + 1] - pos[i];
        let dist = delta.length().max(F::from_f32(MIN_DISTANCE));
        let correction = delta.scale((dist - rest_length) / dist);

        pos[i] = pos[i] + correction.scale(a_share);
        pos[i + 1] = pos[i + 1] - correction.scale(b_share);
    }
}

/// Project free points out of `collider`, damping their tangential motion.
///
/// The contact radius is the collider radius plus most of the rope radius so
/// the rendered rope surface rests on the obstacle. Friction writes into
/// `prev` on every call, so it compounds across iterations.
pub fn solve_collider<F: Float>(
    pos: &mut [Vec3<F>],
    prev: &mut [Vec3<F>],
    pins: &PinSet,
    collider: &CylinderCollider<F>,
    rope_radius: F,
    friction: F,
) -> usize {
    let contact_radius = collider.radius + rope_radius * F::from_f32(ROPE_RADIUS_INFLATION);
    let mut contacts = 0;
    for (i, (p, q)) in pos.iter_mut().zip(prev.iter_mut()).enumerate() {
        if pins.contains(i) {
            continue;
        }
        if collider.resolve_point(p, q, contact_radius, friction) {
            contacts += 1;
        }
    }
    contacts
}

/// Nudge interior free points toward their neighbours' midpoint by
/// `stiffness / 2`. Laplacian smoothing, not flexural stiffness.
pub fn smooth_bending<F: Float>(pos: &mut [Vec3<F>], pins: &PinSet, stiffness: F) {
    let k = stiffness * F::half();
    if k <= F::zero() {
        return;
    }
    for i in 1..pos.len().saturating_sub(1) {
        if pins.contains(i) {
            continue;
        }
        let mid = pos[i - 1].midpoint(pos[i + 1]);
        pos[i] = pos[i].lerp(mid, k);
    }
}

/// Put every pinned point back where it was when the step began.
pub fn enforce_pins<F: Float>(pos: &mut [Vec3<F>], pins: &PinSet, anchors: &[Vec3<F>]) {
    for i in pins.iter() {
        if let (Some(p), Some(&a)) = (pos.get_mut(i), anchors.get(i)) {
            *p = a;
        }
    }
}
