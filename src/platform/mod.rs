//! Platform layer
//!
//! Handles the native side of the demo:
//! - Keyboard mapping to simulation commands
//! - The simulation worker thread and its command queue

pub mod input;
pub mod worker;

pub use input::command_for_key;
pub use worker::{FrameSink, SimWorker};
