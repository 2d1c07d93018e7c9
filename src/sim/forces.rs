//! Force generators applied to the body every tick

use super::body::Body;
use super::geometry::Velocity;

/// Something that changes a body's velocity once per tick
pub trait ForceField: Send {
    fn apply(&self, body: &mut Body);
}

/// Constant downward pull.
///
/// Adds a flat velocity increment per tick rather than an acceleration
/// scaled by elapsed time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Gravity {
    delta: Velocity,
}

impl Gravity {
    pub fn new(strength: i32) -> Self {
        Self {
            delta: Velocity::new(0, strength),
        }
    }
}

impl ForceField for Gravity {
    fn apply(&self, body: &mut Body) {
        body.add_velocity(self.delta);
    }
}
