//! wgpu rendering module
//!
//! Clears to the background color and draws the body as a flat rectangle.

pub mod pipeline;
pub mod shapes;
pub mod vertex;

pub use pipeline::RenderState;
pub use vertex::Vertex;
