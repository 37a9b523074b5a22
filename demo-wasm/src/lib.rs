use hawser::{CylinderCollider, RopeConfig, RopeSolver, Vec3};
use wasm_bindgen::prelude::*;

// ---- Mooring Demo ----

/// A mooring line made fast at one end, optionally led round a bollard and
/// hauled in by dragging its head.
#[wasm_bindgen]
pub struct MooringDemo {
    rope: RopeSolver<f32>,
}

#[wasm_bindgen]
impl MooringDemo {
    #[wasm_bindgen(constructor)]
    pub fn new(points: usize, segment_length: f32) -> Self {
        let mut rope = RopeSolver::new(
            RopeConfig::new(points, segment_length)
                .with_iterations(8)
                .with_rope_radius(segment_length * 0.25),
        );
        rope.set_pinned_range(0, 1);
        MooringDemo { rope }
    }

    /// Lay the rope along a flat `[x0, y0, z0, x1, ...]` curve.
    pub fn lay_along(&mut self, curve: &[f32], slack: f32) {
        let points: Vec<Vec3<f32>> = curve
            .chunks_exact(3)
            .map(|c| Vec3::new(c[0], c[1], c[2]))
            .collect();
        self.rope.initialize_from_polyline(&points, slack);
    }

    pub fn set_bollard(&mut self, x: f32, y: f32, z: f32, radius: f32, half_height: f32) {
        self.rope.set_cylinder_collider(Some(CylinderCollider::new(
            Vec3::new(x, y, z),
            radius,
            half_height,
        )));
    }

    pub fn clear_bollard(&mut self) {
        self.rope.set_cylinder_collider(None);
    }

    pub fn haul_to(&mut self, x: f32, y: f32, z: f32) {
        self.rope.set_head_target(Some(Vec3::new(x, y, z)));
    }

    pub fn release(&mut self) {
        self.rope.set_head_target(None);
    }

    pub fn set_haul_strength(&mut self, strength: f32) {
        self.rope.set_head_follow_strength(strength);
    }

    pub fn update(&mut self, dt: f32) {
        self.rope.step(dt);
    }

    /// Returns flat [x0, y0, z0, x1, y1, z1, ...] positions
    pub fn positions(&self) -> Vec<f32> {
        let pos = self.rope.positions();
        let mut out = Vec::with_capacity(pos.len() * 3);
        for p in pos {
            out.push(p.x);
            out.push(p.y);
            out.push(p.z);
        }
        out
    }

    pub fn point_count(&self) -> usize {
        self.rope.len()
    }
}
