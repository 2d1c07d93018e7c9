//! Bounce Box - a single box falling and bouncing inside a window
//!
//! Core modules:
//! - `sim`: Deterministic simulation (body, forces, boundary, tick)
//! - `renderer`: wgpu rendering pipeline
//! - `platform`: Input mapping and the simulation worker thread
//! - `settings`: Typed bundle of the compiled-in tuning constants

pub mod error;
pub mod platform;
pub mod renderer;
pub mod settings;
pub mod sim;

pub use error::DemoError;
pub use settings::SimConfig;

/// Demo configuration constants
pub mod consts {
    /// Window size in pixels
    pub const WINDOW_WIDTH: u32 = 640;
    pub const WINDOW_HEIGHT: u32 = 480;
    pub const WINDOW_TITLE: &str = "Bounce Box";

    /// Fixed simulation rate (ticks per second)
    pub const TICK_RATE: u32 = 24;
    /// Maximum ticks run per wake to prevent spiral of death
    pub const MAX_SUBSTEPS: u32 = 8;

    /// Velocity added every tick (not scaled by dt)
    pub const GRAVITY: i32 = 30;
    /// Fraction of speed kept when bouncing off the bound
    pub const DAMPING: f32 = 0.8;
    /// Velocity set by an arrow key release
    pub const KEY_IMPULSE: i32 = 400;

    /// Initial body footprint (x, y, w, h)
    pub const BODY_START: (i32, i32, i32, i32) = (100, 100, 100, 100);

    /// Colors (RGBA, 0-1)
    pub const BACKGROUND: [f32; 4] = [1.0, 1.0, 1.0, 1.0];
    pub const BODY_COLOR: [f32; 4] = [1.0, 0.0, 0.0, 1.0];
}
