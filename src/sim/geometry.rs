//! Integer rectangles, bounds and containment tests

use std::fmt;

use glam::IVec2;
use serde::{Deserialize, Serialize};

/// Velocity in distance units per second
pub type Velocity = IVec2;

/// One of the two screen axes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Axis {
    X,
    Y,
}

impl Axis {
    pub const BOTH: [Axis; 2] = [Axis::X, Axis::Y];

    /// Component of `v` along this axis
    #[inline]
    pub fn of(self, v: IVec2) -> i32 {
        match self {
            Axis::X => v.x,
            Axis::Y => v.y,
        }
    }

    /// Mutable component of `v` along this axis
    #[inline]
    pub fn of_mut(self, v: &mut IVec2) -> &mut i32 {
        match self {
            Axis::X => &mut v.x,
            Axis::Y => &mut v.y,
        }
    }
}

/// Axis-aligned rectangle: top-left corner plus extent
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Rect {
    pub pos: IVec2,
    pub size: IVec2,
}

impl Rect {
    pub const fn new(x: i32, y: i32, w: i32, h: i32) -> Self {
        Self {
            pos: IVec2::new(x, y),
            size: IVec2::new(w, h),
        }
    }

    /// Bottom-right corner (exclusive)
    #[inline]
    pub fn far(&self) -> IVec2 {
        self.pos + self.size
    }
}

impl fmt::Display for Rect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "({},{}-{},{})",
            self.pos.x, self.pos.y, self.size.x, self.size.y
        )
    }
}

/// The playable area, from `min` to `max` inclusive
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Bound {
    pub min: IVec2,
    pub max: IVec2,
}

impl Bound {
    /// Bound covering a window of the given pixel size
    pub fn from_size(width: u32, height: u32) -> Self {
        Self {
            min: IVec2::ZERO,
            max: IVec2::new(
                i32::try_from(width).unwrap_or(i32::MAX),
                i32::try_from(height).unwrap_or(i32::MAX),
            ),
        }
    }
}

impl fmt::Display for Bound {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "<({},{}),({},{})>",
            self.min.x, self.min.y, self.max.x, self.max.y
        )
    }
}

/// Check if a point lies within the bound (edges included)
pub fn point_in_bound(point: IVec2, bound: &Bound) -> bool {
    point.x >= bound.min.x
        && point.x <= bound.max.x
        && point.y >= bound.min.y
        && point.y <= bound.max.y
}

/// Check if the whole rectangle lies within the bound (edges included)
pub fn rect_in_bound(rect: &Rect, bound: &Bound) -> bool {
    point_in_bound(rect.pos, bound) && point_in_bound(rect.far(), bound)
}

/// Check if the rectangle sticks out of the bound along one axis
pub fn rect_exceeds_axis(rect: &Rect, bound: &Bound, axis: Axis) -> bool {
    axis.of(rect.pos) < axis.of(bound.min) || axis.of(rect.far()) > axis.of(bound.max)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn window() -> Bound {
        Bound::from_size(640, 480)
    }

    #[test]
    fn test_point_in_bound_edges() {
        let bound = window();
        assert!(point_in_bound(IVec2::new(0, 0), &bound));
        assert!(point_in_bound(IVec2::new(640, 480), &bound));
        assert!(!point_in_bound(IVec2::new(-1, 10), &bound));
        assert!(!point_in_bound(IVec2::new(10, 481), &bound));
    }

    #[test]
    fn test_rect_in_bound() {
        let bound = window();
        assert!(rect_in_bound(&Rect::new(100, 100, 100, 100), &bound));
        // Touching the floor still counts as inside
        assert!(rect_in_bound(&Rect::new(100, 380, 100, 100), &bound));
        assert!(!rect_in_bound(&Rect::new(100, 381, 100, 100), &bound));
        assert!(!rect_in_bound(&Rect::new(-1, 100, 100, 100), &bound));
    }

    #[test]
    fn test_rect_exceeds_axis_is_per_axis() {
        let bound = window();
        let below_floor = Rect::new(100, 400, 100, 100);
        assert!(rect_exceeds_axis(&below_floor, &bound, Axis::Y));
        assert!(!rect_exceeds_axis(&below_floor, &bound, Axis::X));

        let past_right = Rect::new(600, 100, 100, 100);
        assert!(rect_exceeds_axis(&past_right, &bound, Axis::X));
        assert!(!rect_exceeds_axis(&past_right, &bound, Axis::Y));
    }

    #[test]
    fn test_display_formats() {
        assert_eq!(Rect::new(1, 2, 3, 4).to_string(), "(1,2-3,4)");
        assert_eq!(window().to_string(), "<(0,0),(640,480)>");
    }
}
