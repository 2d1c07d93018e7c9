//! Deterministic simulation module
//!
//! All physics lives here. This module must be pure and deterministic:
//! - Fixed timestep only
//! - Integer positions and velocities
//! - No rendering or platform dependencies

pub mod body;
pub mod boundary;
pub mod clock;
pub mod forces;
pub mod geometry;
pub mod tick;

pub use body::Body;
pub use boundary::{Floor, resolve_boundary};
pub use clock::FixedClock;
pub use forces::{ForceField, Gravity};
pub use geometry::{Axis, Bound, Rect, Velocity, point_in_bound, rect_exceeds_axis, rect_in_bound};
pub use tick::{Command, Frame, TickInput, TickOutcome, World, tick};
