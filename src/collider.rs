//! Vertical-axis cylinder obstacle (a bollard, bitt or capstan drum).

use crate::float::Float;
use crate::vec::Vec3;

/// Share of the rope radius added to the collider radius on contact.
pub const ROPE_RADIUS_INFLATION: f32 = 0.98;

/// Horizontal distances below this use a fixed push-out direction.
const MIN_AXIS_DISTANCE: f32 = 1e-6;

/// A cylinder whose axis runs along Y through `center`, spanning
/// `center.y - half_height ..= center.y + half_height`.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CylinderCollider<F: Float> {
    pub center: Vec3<F>,
    pub radius: F,
    pub half_height: F,
}

impl<F: Float> CylinderCollider<F> {
    /// Negative radius or half-height clamp to zero.
    pub fn new(center: Vec3<F>, radius: F, half_height: F) -> Self {
        CylinderCollider {
            center,
            radius: radius.max(F::zero()),
            half_height: half_height.max(F::zero()),
        }
    }

    /// Whether height `y` lies within the vertical span.
    pub fn contains_height(&self, y: F) -> bool {
        (y - self.center.y).abs() <= self.half_height
    }

    /// Signed horizontal distance from `point` to the curved surface.
    /// Negative inside.
    pub fn surface_distance(&self, point: Vec3<F>) -> F {
        point.horizontal_distance(self.center) - self.radius
    }

    /// Push one point out of the cylinder and apply tangential friction.
    ///
    /// `contact_radius` is the collider radius already inflated by the rope.
    /// Friction scales the tangential part of `pos - prev` by
    /// `1 - friction`; the result is written back into `prev` so the next
    /// integration sees the slowed motion. Returns true on contact.
    pub(crate) fn resolve_point(
        &self,
        pos: &mut Vec3<F>,
        prev: &mut Vec3<F>,
        contact_radius: F,
        friction: F,
    ) -> bool {
        if !self.contains_height(pos.y) {
            return false;
        }
        let dx = pos.x - self.center.x;
        let dz = pos.z - self.center.z;
        let dist = (dx * dx + dz * dz).sqrt();
        if dist >= contact_radius {
            return false;
        }

        let normal = if dist < F::from_f32(MIN_AXIS_DISTANCE) {
            Vec3::new(F::one(), F::zero(), F::zero())
        } else {
            Vec3::new(dx / dist, F::zero(), dz / dist)
        };
        pos.x = self.center.x + normal.x * contact_radius;
        pos.z = self.center.z + normal.z * contact_radius;

        let velocity = *pos - *prev;
        let radial = normal.scale(velocity.dot(normal));
        let tangential = velocity - radial;
        let damped = radial + tangential.scale(F::one() - friction);
        *prev = *pos - damped;
        true
    }
}
