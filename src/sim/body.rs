//! The simulated body
//!
//! A body keeps its committed footprint and a speculative (tentative) one.
//! Each tick the tentative footprint is advanced from the velocity, then
//! either committed or rolled back.

use serde::{Deserialize, Serialize};

use super::geometry::{Axis, Rect, Velocity};

/// A rectangular body with a committed and a tentative footprint
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Body {
    current: Rect,
    tentative: Rect,
    velocity: Velocity,
}

impl Body {
    /// Create a body at rest
    pub fn new(rect: Rect) -> Self {
        Self {
            current: rect,
            tentative: rect,
            velocity: Velocity::ZERO,
        }
    }

    /// Last committed footprint (what gets drawn)
    pub fn current(&self) -> Rect {
        self.current
    }

    /// Footprint produced by the last integration step
    pub fn tentative(&self) -> Rect {
        self.tentative
    }

    pub fn velocity(&self) -> Velocity {
        self.velocity
    }

    /// Accumulate a velocity change (force generators)
    pub fn add_velocity(&mut self, delta: Velocity) {
        self.velocity += delta;
    }

    /// Overwrite both velocity components
    pub fn set_velocity(&mut self, velocity: Velocity) {
        self.velocity = velocity;
    }

    /// Overwrite a single velocity component, leaving the other alone
    pub fn set_velocity_axis(&mut self, axis: Axis, value: i32) {
        *axis.of_mut(&mut self.velocity) = value;
    }

    /// Reverse one velocity component and scale it by `damping`.
    ///
    /// The product is truncated toward zero, so small speeds die out.
    pub fn reflect_axis(&mut self, axis: Axis, damping: f32) {
        let v = axis.of_mut(&mut self.velocity);
        *v = (*v as f32 * -damping) as i32;
    }

    /// Advance the tentative footprint by one tick of `1 / tick_rate` seconds.
    ///
    /// Integer division: the fractional part of each step is dropped.
    pub fn integrate(&mut self, tick_rate: u32) {
        let rate = i32::try_from(tick_rate.max(1)).unwrap_or(i32::MAX);
        self.tentative.pos += self.velocity / rate;
    }

    /// Accept the tentative footprint
    pub fn commit(&mut self) {
        self.current = self.tentative;
    }

    /// Discard the tentative footprint
    pub fn rollback(&mut self) {
        self.tentative = self.current;
    }
}
