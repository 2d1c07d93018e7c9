//! Property tests for the body, boundary and tick pipeline

use bounce_box::SimConfig;
use bounce_box::sim::{
    Axis, Body, Bound, Floor, ForceField, Gravity, Rect, TickInput, TickOutcome, Velocity, World,
    rect_exceeds_axis, rect_in_bound, tick,
};
use proptest::prelude::*;

const DAMPING: f32 = 0.8;

fn bound() -> Bound {
    Bound::from_size(640, 480)
}

fn velocity() -> impl Strategy<Value = Velocity> {
    (-5000i32..5000, -5000i32..5000).prop_map(|(x, y)| Velocity::new(x, y))
}

/// Rectangles that sit fully inside the 640x480 bound
fn inside_rect() -> impl Strategy<Value = Rect> {
    (1i32..200, 1i32..200).prop_flat_map(|(w, h)| {
        (0..=640 - w, 0..=480 - h).prop_map(move |(x, y)| Rect::new(x, y, w, h))
    })
}

proptest! {
    #[test]
    fn rollback_never_moves_the_body(start in inside_rect(), v in velocity()) {
        let mut body = Body::new(start);
        body.set_velocity(v);
        body.integrate(24);
        Floor::new(bound(), DAMPING).actuate(&mut body);
        let v_after = body.velocity();

        body.rollback();

        prop_assert_eq!(body.current(), start);
        prop_assert_eq!(body.tentative(), start);
        prop_assert_eq!(body.velocity(), v_after);
    }

    #[test]
    fn inside_bound_always_commits(start in inside_rect()) {
        let mut world = World::new(&SimConfig::default(), bound());
        // No gravity and no motion keeps the tentative rect where it is
        world.forces.clear();
        world.body = Body::new(start);

        prop_assert!(rect_in_bound(&start, &world.floor.bound));
        prop_assert_eq!(tick(&mut world, &TickInput::default()), TickOutcome::Committed);
        prop_assert_eq!(world.body.current(), start);
    }

    #[test]
    fn single_axis_violation_reflects_only_that_axis(
        x in 0i32..=540,
        overshoot in 1i32..200,
        v in velocity(),
    ) {
        // Past the floor, horizontally fine
        let rect = Rect::new(x, 380 + overshoot, 100, 100);
        prop_assume!(!rect_exceeds_axis(&rect, &bound(), Axis::X));

        let mut body = Body::new(rect);
        body.set_velocity(v);
        Floor::new(bound(), DAMPING).actuate(&mut body);

        prop_assert_eq!(body.velocity().x, v.x);
        prop_assert_eq!(body.velocity().y, (v.y as f32 * -DAMPING) as i32);
    }

    #[test]
    fn damping_shrinks_speed(vy in prop_oneof![-5000i32..=-1, 1i32..=5000]) {
        let mut body = Body::new(Rect::new(100, 100, 10, 10));
        body.set_velocity(Velocity::new(0, vy));
        body.reflect_axis(Axis::Y, DAMPING);

        let reflected = body.velocity().y;
        prop_assert!(reflected.abs() < vy.abs());
        prop_assert!(reflected == 0 || reflected.signum() == -vy.signum());
        // Truncation toward zero loses at most one unit
        let exact = vy.abs() as f32 * DAMPING;
        prop_assert!((exact - reflected.abs() as f32) < 1.0 + 1e-3);
    }

    #[test]
    fn gravity_is_linear_in_ticks(n in 0u32..500, g in 1i32..100) {
        let mut body = Body::new(Rect::new(0, 0, 1, 1));
        let gravity = Gravity::new(g);
        for _ in 0..n {
            gravity.apply(&mut body);
        }
        prop_assert_eq!(body.velocity(), Velocity::new(0, n as i32 * g));
    }
}
