//! Verlet integration over struct-of-arrays position buffers.
//!
//! Velocity is never stored. It is always `pos - prev`, so moving `pos`
//! during constraint projection implicitly changes it.

use crate::float::Float;
use crate::pins::PinSet;
use crate::vec::Vec3;

/// Advance every free point by its damped implicit velocity plus
/// `gravity * dt²`. Pinned points are left untouched, previous position
/// included.
pub fn integrate<F: Float>(
    pos: &mut [Vec3<F>],
    prev: &mut [Vec3<F>],
    pins: &PinSet,
    gravity: Vec3<F>,
    damping: F,
    dt: F,
) {
    let accel_step = gravity.scale(dt * dt);
    for (i, (p, q)) in pos.iter_mut().zip(prev.iter_mut()).enumerate() {
        if pins.contains(i) {
            continue;
        }
        let velocity = (*p - *q).scale(damping);
        *q = *p;
        *p = *p + velocity + accel_step;
    }
}

/// Lerp the last point toward `target` by `strength` (1 snaps, 0 does nothing).
pub fn pull_head<F: Float>(pos: &mut [Vec3<F>], target: Vec3<F>, strength: F) {
    if let Some(head) = pos.last_mut() {
        *head = head.lerp(target, strength);
    }
}
