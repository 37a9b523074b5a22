//! The rope solver: a pinned, optionally hauled Verlet chain that can wrap
//! around one cylinder.

use crate::collider::CylinderCollider;
use crate::config::{RopeConfig, MIN_SEGMENT_LENGTH};
use crate::constraint::{enforce_pins, smooth_bending, solve_collider, solve_segment_lengths};
use crate::float::Float;
use crate::integrate::{integrate, pull_head};
use crate::observer::{NoOpStepObserver, StepObserver};
use crate::pins::PinSet;
use crate::polyline::{polyline_length, resample_polyline};
use crate::vec::Vec3;
use alloc::vec::Vec as AllocVec;

/// Points pinned at construction, emulating the made-fast standing end.
pub const DEFAULT_PINNED: usize = 10;

/// Smallest time step `step` will simulate, in seconds.
pub const MIN_DT: f32 = 1.0 / 240.0;

/// Largest time step `step` will simulate, in seconds.
pub const MAX_DT: f32 = 1.0 / 30.0;

const MIN_SLACK: f32 = 1e-3;
const MIN_POLYLINE_LENGTH: f32 = 1e-6;

/// A mooring line simulated as a chain of Verlet points.
///
/// The chain length is fixed at construction. Only the collider, the head
/// target and the head-follow strength change afterwards, plus the rest
/// length when the rope is re-laid with
/// [`initialize_from_polyline`](RopeSolver::initialize_from_polyline).
///
/// ```
/// use hawser::{CylinderCollider, RopeConfig, RopeSolver, Vec3};
///
/// let mut rope: RopeSolver<f32> = RopeSolver::new(RopeConfig::new(30, 0.2));
/// rope.set_pinned_range(0, 2);
/// rope.set_cylinder_collider(Some(CylinderCollider::new(
///     Vec3::new(3.0, -1.0, 0.5),
///     0.4,
///     1.0,
/// )));
/// rope.set_head_target(Some(Vec3::new(4.0, 0.5, 2.0)));
/// for _ in 0..60 {
///     rope.step(1.0 / 60.0);
/// }
/// assert_eq!(rope.positions().len(), 30);
/// ```
#[derive(Clone, Debug)]
pub struct RopeSolver<F: Float> {
    config: RopeConfig<F>,
    positions: AllocVec<Vec3<F>>,
    prev_positions: AllocVec<Vec3<F>>,
    step_start: AllocVec<Vec3<F>>,
    pins: PinSet,
    collider: Option<CylinderCollider<F>>,
    head_target: Option<Vec3<F>>,
    head_follow_strength: F,
}

impl<F: Float> RopeSolver<F> {
    /// Build a straight rope along +X from the origin with the first
    /// `min(10, N)` points pinned.
    pub fn new(config: RopeConfig<F>) -> Self {
        if let Err(err) = config.validate() {
            log::debug!("rope config clamped: {}", err);
        }
        let config = config.sanitized();
        let n = config.point_count;

        let positions: AllocVec<Vec3<F>> = (0..n)
            .map(|i| Vec3::new(config.segment_length * F::from_usize(i), F::zero(), F::zero()))
            .collect();

        RopeSolver {
            prev_positions: positions.clone(),
            step_start: positions.clone(),
            positions,
            pins: PinSet::leading(n, DEFAULT_PINNED),
            collider: None,
            head_target: None,
            head_follow_strength: config.head_follow_strength,
            config,
        }
    }

    /// Re-lay the rope to match `points`.
    ///
    /// The rest length becomes the polyline's length times `slack_ratio`,
    /// shared over the segments. The chain is placed straight from the
    /// polyline's start toward its first resampled step, at rest, so the
    /// constraints ease it onto the curve instead of snapping in one frame.
    pub fn initialize_from_polyline(&mut self, points: &[Vec3<F>], slack_ratio: F) {
        let Some(&start) = points.first() else {
            log::warn!("initialize_from_polyline called with an empty polyline; rope unchanged");
            return;
        };
        let n = self.positions.len();
        let slack = if slack_ratio.is_finite() {
            slack_ratio.max(F::from_f32(MIN_SLACK))
        } else {
            F::from_f32(MIN_SLACK)
        };

        let resampled = resample_polyline(points, n);
        let measured = polyline_length(points);
        let segment_length = (measured * slack / F::from_usize(n - 1))
            .max(F::from_f32(MIN_SEGMENT_LENGTH));
        self.config.segment_length = segment_length;

        let direction = match resampled.get(1) {
            Some(&next) if measured >= F::from_f32(MIN_POLYLINE_LENGTH) => (next - start).normalize(),
            _ => Vec3::zero(),
        };
        // A zero direction leaves every point on `start`.
        for (i, p) in self.positions.iter_mut().enumerate() {
            *p = start + direction.scale(segment_length * F::from_usize(i));
        }
        self.prev_positions.copy_from_slice(&self.positions);

        log::debug!(
            "rope re-laid from {} points: length {:?}, slack {:?}, segment {:?}",
            points.len(),
            measured,
            slack,
            segment_length
        );
    }

    /// Replace the pinned set with the inclusive range `start..=end`,
    /// clamped into bounds and reordered if reversed.
    pub fn set_pinned_range(&mut self, start: usize, end_inclusive: usize) {
        self.pins.set_range(start, end_inclusive);
        self.sync_pinned_history();
    }

    /// Pin one point. Out-of-range indices are ignored.
    pub fn pin(&mut self, index: usize) {
        if self.pins.insert(index) {
            self.prev_positions[index] = self.positions[index];
        }
    }

    /// Release one point. Out-of-range indices are ignored.
    pub fn unpin(&mut self, index: usize) {
        self.pins.remove(index);
    }

    pub fn clear_pins(&mut self) {
        self.pins.clear();
    }

    pub fn is_pinned(&self, index: usize) -> bool {
        self.pins.contains(index)
    }

    pub fn pins(&self) -> &PinSet {
        &self.pins
    }

    /// Set or remove the obstacle. Only one collider is active at a time.
    pub fn set_cylinder_collider(&mut self, collider: Option<CylinderCollider<F>>) {
        self.collider = collider;
    }

    pub fn collider(&self) -> Option<&CylinderCollider<F>> {
        self.collider.as_ref()
    }

    /// Set or clear the point the last rope point is hauled toward.
    pub fn set_head_target(&mut self, target: Option<Vec3<F>>) {
        self.head_target = target;
    }

    pub fn head_target(&self) -> Option<Vec3<F>> {
        self.head_target
    }

    /// Clamped to [0, 1].
    pub fn set_head_follow_strength(&mut self, strength: F) {
        self.head_follow_strength = strength.clamp_unit();
    }

    pub fn head_follow_strength(&self) -> F {
        self.head_follow_strength
    }

    /// Advance the simulation by `dt` seconds.
    pub fn step(&mut self, dt: F) {
        self.step_with_observer(dt, &mut NoOpStepObserver);
    }

    /// Advance the simulation by `dt` seconds, reporting progress to `observer`.
    ///
    /// `dt` is clamped to [`MIN_DT`, `MAX_DT`] so tab-switch pauses and
    /// frame spikes cannot destabilise the chain.
    pub fn step_with_observer<O: StepObserver>(&mut self, dt: F, observer: &mut O) {
        let dt = clamp_dt(dt);
        let config = &self.config;

        self.step_start.copy_from_slice(&self.positions);

        integrate(
            &mut self.positions,
            &mut self.prev_positions,
            &self.pins,
            config.gravity,
            config.damping,
            dt,
        );
        observer.on_integrate();

        if let Some(target) = self.head_target {
            pull_head(&mut self.positions, target, self.head_follow_strength);
            observer.on_head_pull();
        }

        for i in 0..config.iterations {
            solve_segment_lengths(&mut self.positions, &self.pins, config.segment_length);

            let contacts = match &self.collider {
                Some(collider) => solve_collider(
                    &mut self.positions,
                    &mut self.prev_positions,
                    &self.pins,
                    collider,
                    config.rope_radius,
                    config.friction,
                ),
                None => 0,
            };

            smooth_bending(&mut self.positions, &self.pins, config.bending_stiffness);
            enforce_pins(&mut self.positions, &self.pins, &self.step_start);
            observer.on_constraint_iteration(i, contacts);
        }
        if config.iterations == 0 {
            enforce_pins(&mut self.positions, &self.pins, &self.step_start);
        }

        observer.on_step_complete();
    }

    /// Current point positions, head last.
    pub fn positions(&self) -> &[Vec3<F>] {
        &self.positions
    }

    /// Positions as of the previous step; `positions()[i] - previous_positions()[i]`
    /// is the implicit velocity of point `i`.
    pub fn previous_positions(&self) -> &[Vec3<F>] {
        &self.prev_positions
    }

    pub fn rest_segment_length(&self) -> F {
        self.config.segment_length
    }

    /// Total rest length of the rope.
    pub fn rest_length(&self) -> F {
        self.config.segment_length * F::from_usize(self.positions.len() - 1)
    }

    /// Effective (clamped) configuration.
    pub fn config(&self) -> &RopeConfig<F> {
        &self.config
    }

    pub fn len(&self) -> usize {
        self.positions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }

    /// Newly pinned points must not carry velocity into a later release.
    fn sync_pinned_history(&mut self) {
        for i in self.pins.iter() {
            self.prev_positions[i] = self.positions[i];
        }
    }
}

fn clamp_dt<F: Float>(dt: F) -> F {
    let (lo, hi) = (F::from_f32(MIN_DT), F::from_f32(MAX_DT));
    let clamped = dt.clamp(lo, hi);
    if clamped != dt {
        log::trace!("step dt {:?} clamped to {:?}", dt, clamped);
    }
    clamped
}
