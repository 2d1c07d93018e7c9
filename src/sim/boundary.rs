//! Boundary test and bounce response

use log::debug;

use super::body::Body;
use super::geometry::{Axis, Bound, rect_exceeds_axis, rect_in_bound};

/// Reflect and damp every velocity axis on which the tentative footprint
/// leaves the bound. Axes are handled independently.
pub fn resolve_boundary(body: &mut Body, bound: &Bound, damping: f32) {
    let tentative = body.tentative();
    for axis in Axis::BOTH {
        if rect_exceeds_axis(&tentative, bound, axis) {
            body.reflect_axis(axis, damping);
            debug!(
                "Bounce on {:?} at {}: velocity now {}",
                axis,
                tentative,
                body.velocity()
            );
        }
    }
}

/// The walls and floor of the window
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Floor {
    pub bound: Bound,
    pub damping: f32,
}

impl Floor {
    pub fn new(bound: Bound, damping: f32) -> Self {
        Self { bound, damping }
    }

    /// Is the tentative footprint fully inside?
    pub fn test(&self, body: &Body) -> bool {
        rect_in_bound(&body.tentative(), &self.bound)
    }

    pub fn resolve(&self, body: &mut Body) {
        resolve_boundary(body, &self.bound, self.damping);
    }

    /// Bounce the body if its tentative footprint is outside
    pub fn actuate(&self, body: &mut Body) {
        if !self.test(body) {
            self.resolve(body);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::geometry::{Rect, Velocity};

    fn floor() -> Floor {
        Floor::new(Bound::from_size(640, 480), 0.8)
    }

    /// Body whose tentative footprint is `rect` moving at `velocity`
    fn body_heading_to(rect: Rect, velocity: Velocity) -> Body {
        let mut body = Body::new(rect);
        body.set_velocity(velocity);
        body
    }

    #[test]
    fn test_inside_is_untouched() {
        let f = floor();
        let mut body = body_heading_to(Rect::new(100, 100, 100, 100), Velocity::new(50, 60));
        assert!(f.test(&body));
        f.actuate(&mut body);
        assert_eq!(body.velocity(), Velocity::new(50, 60));
    }

    #[test]
    fn test_floor_reflects_only_vertical() {
        let f = floor();
        let mut body = body_heading_to(Rect::new(100, 390, 100, 100), Velocity::new(50, 500));
        assert!(!f.test(&body));
        f.actuate(&mut body);
        assert_eq!(body.velocity(), Velocity::new(50, -400));
    }

    #[test]
    fn test_left_wall_reflects_only_horizontal() {
        let f = floor();
        let mut body = body_heading_to(Rect::new(-5, 100, 100, 100), Velocity::new(-400, 90));
        f.actuate(&mut body);
        assert_eq!(body.velocity(), Velocity::new(320, 90));
    }

    #[test]
    fn test_corner_reflects_both_axes() {
        let f = floor();
        let mut body = body_heading_to(Rect::new(560, 400, 100, 100), Velocity::new(400, 300));
        f.actuate(&mut body);
        assert_eq!(body.velocity(), Velocity::new(-320, -240));
    }
}
