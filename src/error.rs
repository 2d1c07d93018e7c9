//! Setup errors
//!
//! Only window/graphics bring-up and worker spawning can fail. The physics
//! itself is total.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum DemoError {
    #[error("failed to initialize event loop: {0}")]
    EventLoop(#[from] winit::error::EventLoopError),

    #[error("failed to create window: {0}")]
    Window(#[from] winit::error::OsError),

    #[error("failed to create rendering surface: {0}")]
    Surface(#[from] wgpu::CreateSurfaceError),

    #[error("no compatible graphics adapter: {0}")]
    Adapter(#[from] wgpu::RequestAdapterError),

    #[error("failed to create graphics device: {0}")]
    Device(#[from] wgpu::RequestDeviceError),

    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("failed to spawn simulation thread: {0}")]
    WorkerSpawn(#[source] std::io::Error),
}
