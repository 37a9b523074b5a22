use hawser::{NoOpStepObserver, RopeConfig, RopeSolver, StepObserver, Vec3};

fn hanging_rope(bending: f32) -> RopeSolver<f32> {
    let mut rope = RopeSolver::new(RopeConfig::new(20, 1.0).with_bending_stiffness(bending));
    rope.set_pinned_range(0, 4);
    rope
}

fn segment_lengths(rope: &RopeSolver<f32>) -> Vec<f32> {
    rope.positions().windows(2).map(|w| w[0].distance(w[1])).collect()
}

#[test]
fn positions_have_point_count() {
    let rope: RopeSolver<f32> = RopeSolver::new(RopeConfig::new(12, 0.5));
    assert_eq!(rope.positions().len(), 12);
    assert_eq!(rope.len(), 12);
    assert!((rope.rest_length() - 5.5).abs() < 1e-6);
}

#[test]
fn hanging_rope_sags_and_keeps_its_length() {
    let mut rope = hanging_rope(0.2);
    let initial: Vec<Vec3<f32>> = rope.positions().to_vec();

    for _ in 0..1000 {
        rope.step(1.0 / 60.0);
    }

    for (i, len) in segment_lengths(&rope).iter().enumerate() {
        assert!(*len <= 1.01, "segment {} stretched to {:.4}", i, len);
    }
    for i in 0..5 {
        assert_eq!(rope.positions()[i], initial[i], "pinned point {} moved", i);
    }
    let head = rope.positions()[19];
    assert!(head.y < -10.0, "free end should hang well below the pins, y = {}", head.y);
}

#[test]
fn length_converges_without_bending() {
    let mut rope = hanging_rope(0.0);
    for _ in 0..1000 {
        rope.step(1.0 / 60.0);
    }
    for (i, len) in segment_lengths(&rope).iter().enumerate() {
        assert!((len - 1.0).abs() < 0.01, "segment {} length {:.4}", i, len);
    }
}

#[test]
fn fully_free_rope_keeps_its_length() {
    let mut rope: RopeSolver<f32> =
        RopeSolver::new(RopeConfig::new(10, 1.0).with_bending_stiffness(0.0));
    rope.clear_pins();
    for _ in 0..200 {
        rope.step(1.0 / 60.0);
    }
    // Free fall with no pins: nothing stretches the chain.
    for len in segment_lengths(&rope) {
        assert!((len - 1.0).abs() < 0.01, "segment length {:.4}", len);
    }
}

#[test]
fn pinned_points_never_move() {
    let mut rope: RopeSolver<f32> = RopeSolver::new(
        RopeConfig::new(15, 0.5)
            .with_gravity(Vec3::new(3.0, -20.0, 1.0))
            .with_damping(1.0),
    );
    rope.set_pinned_range(2, 5);
    rope.pin(14);
    rope.set_head_target(Some(Vec3::new(-5.0, 5.0, 5.0)));
    rope.set_head_follow_strength(1.0);

    for _ in 0..120 {
        let before: Vec<Vec3<f32>> = rope.positions().to_vec();
        rope.step(1.0 / 60.0);
        for i in [2, 3, 4, 5, 14] {
            assert_eq!(rope.positions()[i], before[i], "pinned point {} moved", i);
        }
    }
}

#[test]
fn pins_hold_with_zero_iterations() {
    let mut rope: RopeSolver<f32> = RopeSolver::new(RopeConfig::new(4, 1.0).with_iterations(0));
    rope.set_pinned_range(3, 3);
    rope.set_head_target(Some(Vec3::new(10.0, 10.0, 10.0)));
    let before = rope.positions()[3];
    rope.step(1.0 / 60.0);
    assert_eq!(rope.positions()[3], before);
}

#[test]
fn straight_rope_at_rest_stays_put() {
    let mut rope: RopeSolver<f32> = RopeSolver::new(
        RopeConfig::new(20, 1.0)
            .with_gravity(Vec3::zero())
            .with_damping(0.0),
    );
    let initial: Vec<Vec3<f32>> = rope.positions().to_vec();
    for _ in 0..500 {
        rope.step(1.0 / 60.0);
    }
    for (p, q) in rope.positions().iter().zip(&initial) {
        assert!(p.distance(*q) < 1e-4, "{:?} drifted from {:?}", p, q);
    }
}

#[test]
fn head_target_hauls_the_free_end() {
    let target = Vec3::new(10.0, -5.0, 6.0);

    let mut hauled = hanging_rope(0.2);
    hauled.set_head_target(Some(target));
    let mut slack = hanging_rope(0.2);

    for _ in 0..300 {
        hauled.step(1.0 / 60.0);
        slack.step(1.0 / 60.0);
    }

    let hauled_gap = hauled.positions()[19].distance(target);
    let slack_gap = slack.positions()[19].distance(target);
    assert!(hauled_gap < 1.5, "hauled end is {:.3} from target", hauled_gap);
    assert!(hauled_gap < slack_gap);
}

#[test]
fn clearing_head_target_releases_the_end() {
    let mut rope = hanging_rope(0.2);
    rope.set_head_target(Some(Vec3::new(19.0, 0.0, 0.0)));
    assert!(rope.head_target().is_some());
    rope.set_head_target(None);
    for _ in 0..300 {
        rope.step(1.0 / 60.0);
    }
    assert!(rope.positions()[19].y < -5.0);
}

#[test]
fn huge_dt_does_not_explode() {
    let mut rope = hanging_rope(0.2);
    for _ in 0..50 {
        rope.step(5.0);
        rope.step(0.0);
        rope.step(f32::NAN);
    }
    for p in rope.positions() {
        assert!(p.x.is_finite() && p.y.is_finite() && p.z.is_finite());
    }
    for len in segment_lengths(&rope) {
        assert!(len < 1.2, "segment length {:.4}", len);
    }
}

#[test]
fn initialize_from_polyline_lays_rope_straight_from_start() {
    let mut rope: RopeSolver<f32> = RopeSolver::new(RopeConfig::new(11, 1.0));
    let curve = [
        Vec3::new(1.0, 2.0, 3.0),
        Vec3::new(1.0, 2.0, 7.0),
        Vec3::new(5.0, 2.0, 7.0),
    ];
    rope.initialize_from_polyline(&curve, 1.25);

    // 8 units of curve with 25% slack over 10 segments.
    assert!((rope.rest_segment_length() - 1.0).abs() < 1e-6);
    let pos = rope.positions();
    assert_eq!(pos[0], curve[0]);
    for (i, p) in pos.iter().enumerate() {
        assert!((p.x - 1.0).abs() < 1e-5 && (p.y - 2.0).abs() < 1e-5);
        assert!((p.z - (3.0 + i as f32)).abs() < 1e-4, "point {} at {:?}", i, p);
    }
    assert_eq!(rope.previous_positions(), rope.positions());
}

#[test]
fn initialize_from_single_point_collapses_rope() {
    let mut rope: RopeSolver<f32> = RopeSolver::new(RopeConfig::new(6, 1.0));
    let anchor = Vec3::new(-2.0, 4.0, 1.0);
    rope.initialize_from_polyline(&[anchor], 1.0);
    assert!(rope.positions().iter().all(|p| *p == anchor));
    assert!(rope.rest_segment_length() > 0.0);

    rope.initialize_from_polyline(&[anchor, anchor, anchor], 1.0);
    assert!(rope.positions().iter().all(|p| *p == anchor));
}

#[test]
fn initialize_from_empty_polyline_is_ignored() {
    let mut rope: RopeSolver<f32> = RopeSolver::new(RopeConfig::new(6, 1.0));
    let before = rope.positions().to_vec();
    rope.initialize_from_polyline(&[], 1.0);
    assert_eq!(rope.positions(), &before[..]);
    assert_eq!(rope.rest_segment_length(), 1.0);
}

#[test]
fn reinitialized_rope_settles_onto_new_length() {
    let mut rope: RopeSolver<f32> = RopeSolver::new(
        RopeConfig::new(12, 1.0)
            .with_gravity(Vec3::zero())
            .with_bending_stiffness(0.0),
    );
    rope.clear_pins();
    let arc: Vec<Vec3<f32>> = (0..=16)
        .map(|i| {
            let a = i as f32 / 16.0 * core::f32::consts::PI;
            Vec3::new(a.cos() * 3.0, a.sin() * 3.0, 0.0)
        })
        .collect();
    rope.initialize_from_polyline(&arc, 1.0);
    let seg = rope.rest_segment_length();
    for _ in 0..60 {
        rope.step(1.0 / 60.0);
    }
    for len in segment_lengths(&rope) {
        assert!((len - seg).abs() < seg * 0.01);
    }
}

#[derive(Default)]
struct CountingObserver {
    integrations: usize,
    head_pulls: usize,
    iterations: usize,
    completed: usize,
}

impl StepObserver for CountingObserver {
    fn on_integrate(&mut self) {
        self.integrations += 1;
    }
    fn on_head_pull(&mut self) {
        self.head_pulls += 1;
    }
    fn on_constraint_iteration(&mut self, _iteration: usize, _contacts: usize) {
        self.iterations += 1;
    }
    fn on_step_complete(&mut self) {
        self.completed += 1;
    }
}

#[test]
fn observer_sees_every_phase() {
    let mut rope: RopeSolver<f32> = RopeSolver::new(RopeConfig::new(8, 1.0).with_iterations(4));
    let mut obs = CountingObserver::default();
    rope.step_with_observer(1.0 / 60.0, &mut obs);
    rope.set_head_target(Some(Vec3::zero()));
    rope.step_with_observer(1.0 / 60.0, &mut obs);
    rope.step_with_observer(1.0 / 60.0, &mut NoOpStepObserver);

    assert_eq!(obs.integrations, 2);
    assert_eq!(obs.head_pulls, 1);
    assert_eq!(obs.iterations, 8);
    assert_eq!(obs.completed, 2);
}
