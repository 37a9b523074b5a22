//! Arc-length utilities over ordered 3D point sequences.
//!
//! Used to lay a rope out along a curve supplied by the scene (a fairlead to
//! bollard path, a hand-drawn line) and to place markers partway along it.

use crate::float::Float;
use crate::vec::Vec3;
use alloc::vec::Vec as AllocVec;

/// Total lengths below this are treated as a collapsed polyline.
const MIN_LENGTH: f32 = 1e-6;

/// Sum of the segment lengths of `points`. Zero for fewer than two points.
pub fn polyline_length<F: Float>(points: &[Vec3<F>]) -> F {
    points
        .windows(2)
        .fold(F::zero(), |acc, w| acc + w[0].distance(w[1]))
}

/// Resample `points` to exactly `samples` points evenly spaced by arc length.
///
/// The first and last samples are copies of the input endpoints. A single
/// input point is repeated `samples` times. A polyline whose total length is
/// near zero cannot be resampled meaningfully, so the input points are
/// returned unchanged.
pub fn resample_polyline<F: Float>(points: &[Vec3<F>], samples: usize) -> AllocVec<Vec3<F>> {
    let (first, last) = match (points.first(), points.last()) {
        (Some(&first), Some(&last)) => (first, last),
        _ => return AllocVec::new(),
    };
    if samples == 0 {
        return AllocVec::new();
    }
    if points.len() == 1 {
        return alloc::vec![first; samples];
    }

    let total = polyline_length(points);
    if total < F::from_f32(MIN_LENGTH) {
        return points.to_vec();
    }

    let mut out = AllocVec::with_capacity(samples);
    out.push(first);
    if samples == 1 {
        return out;
    }

    let step = total / F::from_usize(samples - 1);
    let mut cursor = SegmentCursor::new(points);
    for i in 1..samples - 1 {
        out.push(cursor.advance_to(step * F::from_usize(i)));
    }
    out.push(last);
    out
}

/// Point at arc-length fraction `t` (clamped to [0, 1]) along `points`.
///
/// Returns `None` for an empty polyline. `t = 0` and `t = 1` give the exact
/// endpoints.
pub fn point_at_fraction<F: Float>(points: &[Vec3<F>], t: F) -> Option<Vec3<F>> {
    let (&first, &last) = (points.first()?, points.last()?);
    let t = t.clamp_unit();
    if t <= F::zero() {
        return Some(first);
    }
    if t >= F::one() {
        return Some(last);
    }

    let total = polyline_length(points);
    if total < F::from_f32(MIN_LENGTH) {
        return Some(first);
    }
    Some(SegmentCursor::new(points).advance_to(total * t))
}

/// Forward-only walk over a polyline's segments.
///
/// Targets passed to `advance_to` must be non-decreasing; the cursor never
/// rewinds, so a full resample costs O(samples + points).
struct SegmentCursor<'a, F: Float> {
    points: &'a [Vec3<F>],
    segment: usize,
    walked: F,
}

impl<'a, F: Float> SegmentCursor<'a, F> {
    fn new(points: &'a [Vec3<F>]) -> Self {
        SegmentCursor { points, segment: 0, walked: F::zero() }
    }

    fn advance_to(&mut self, target: F) -> Vec3<F> {
        let last_segment = self.points.len() - 2;
        loop {
            let a = self.points[self.segment];
            let b = self.points[self.segment + 1];
            let seg_len = a.distance(b);
            let end = self.walked + seg_len;
            if target <= end || self.segment == last_segment {
                if seg_len < F::from_f32(MIN_LENGTH) {
                    return b;
                }
                let t = ((target - self.walked) / seg_len).clamp_unit();
                return a.lerp(b, t);
            }
            self.walked = end;
            self.segment += 1;
        }
    }
}
