//! Fixed timestep simulation tick
//!
//! Per tick: queued commands, forces, integration, boundary response,
//! then commit or rollback. Drawing is left to the caller.

use log::trace;
use serde::{Deserialize, Serialize};

use super::body::Body;
use super::boundary::Floor;
use super::forces::{ForceField, Gravity};
use super::geometry::{Axis, Bound, Rect};
use crate::settings::SimConfig;

/// A request from the input side, applied at the start of the next tick
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Command {
    /// Overwrite one velocity component
    SetVelocityAxis { axis: Axis, value: i32 },
}

impl Command {
    fn apply(self, body: &mut Body) {
        match self {
            Command::SetVelocityAxis { axis, value } => body.set_velocity_axis(axis, value),
        }
    }
}

/// Input commands for a single tick
#[derive(Debug, Clone, Default)]
pub struct TickInput {
    pub commands: Vec<Command>,
}

/// Whether the tick's speculative move was kept
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickOutcome {
    Committed,
    RolledBack,
}

/// What the renderer needs after a tick
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Frame {
    pub tick: u64,
    pub rect: Rect,
}

/// Everything the simulation owns
pub struct World {
    pub body: Body,
    pub forces: Vec<Box<dyn ForceField>>,
    pub floor: Floor,
    pub tick_rate: u32,
    pub ticks: u64,
}

impl World {
    /// Build the world for a run: one body at rest, gravity, and the window bound
    pub fn new(config: &SimConfig, bound: Bound) -> Self {
        Self {
            body: Body::new(config.body_start),
            forces: vec![Box::new(Gravity::new(config.gravity))],
            floor: Floor::new(bound, config.damping),
            tick_rate: config.tick_rate,
            ticks: 0,
        }
    }

    /// Snapshot of the committed footprint
    pub fn frame(&self) -> Frame {
        Frame {
            tick: self.ticks,
            rect: self.body.current(),
        }
    }
}

/// Advance the world by one fixed timestep
pub fn tick(world: &mut World, input: &TickInput) -> TickOutcome {
    for command in &input.commands {
        command.apply(&mut world.body);
    }

    // Apply forces
    for force in &world.forces {
        force.apply(&mut world.body);
    }

    // Integrate
    world.body.integrate(world.tick_rate);

    // Resolve boundary (velocity only, no re-integration)
    world.floor.actuate(&mut world.body);

    // Decide commit
    let outcome = if world.floor.test(&world.body) {
        world.body.commit();
        TickOutcome::Committed
    } else {
        trace!("Rollback at tick {}: {}", world.ticks, world.body.tentative());
        world.body.rollback();
        TickOutcome::RolledBack
    };

    world.ticks += 1;
    outcome
}
