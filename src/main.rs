//! Bounce Box entry point
//!
//! The main thread owns the window and renderer and pumps platform events.
//! The simulation runs on its own thread and wakes the event loop with each
//! finished frame.

use std::sync::Arc;

use anyhow::Context;
use log::{debug, error, info, warn};
use winit::application::ApplicationHandler;
use winit::dpi::PhysicalSize;
use winit::event::{ElementState, KeyEvent, WindowEvent};
use winit::event_loop::{ActiveEventLoop, ControlFlow, EventLoop, EventLoopProxy};
use winit::keyboard::PhysicalKey;
use winit::window::{Window, WindowId};

use bounce_box::consts::WINDOW_TITLE;
use bounce_box::platform::{SimWorker, command_for_key};
use bounce_box::renderer::RenderState;
use bounce_box::sim::{Bound, Frame};
use bounce_box::{DemoError, SimConfig};

/// Everything tied to the open window.
///
/// Field order is teardown order: the worker is joined before the renderer
/// goes, and the renderer goes before the window.
struct Shell {
    worker: SimWorker,
    render_state: RenderState,
    window: Arc<Window>,
    /// Latest frame from the simulation
    frame: Option<Frame>,
}

impl Shell {
    fn redraw(&mut self) {
        let Some(frame) = self.frame else {
            return;
        };
        match self.render_state.render(&frame.rect) {
            Ok(()) => {}
            Err(wgpu::SurfaceError::Lost | wgpu::SurfaceError::Outdated) => {
                let (w, h) = self.render_state.size;
                self.render_state.resize(w, h);
            }
            Err(wgpu::SurfaceError::OutOfMemory) => {
                error!("Out of memory!");
            }
            Err(e) => warn!("Render error: {:?}", e),
        }
    }

    fn shutdown(self) {
        let Shell {
            mut worker,
            render_state,
            window,
            ..
        } = self;
        worker.shutdown();
        drop(render_state);
        drop(window);
        debug!("Window and renderer released");
    }
}

struct App {
    config: SimConfig,
    proxy: EventLoopProxy<Frame>,
    shell: Option<Shell>,
    /// Setup failure to report once the loop has exited
    error: Option<DemoError>,
}

impl App {
    fn new(config: SimConfig, proxy: EventLoopProxy<Frame>) -> Self {
        Self {
            config,
            proxy,
            shell: None,
            error: None,
        }
    }

    fn init_shell(&self, event_loop: &ActiveEventLoop) -> Result<Shell, DemoError> {
        let attrs = Window::default_attributes()
            .with_title(WINDOW_TITLE)
            .with_inner_size(PhysicalSize::new(
                self.config.window_width,
                self.config.window_height,
            ))
            .with_resizable(false);
        let window = Arc::new(event_loop.create_window(attrs)?);

        // The window manager has the final say on size
        let size = window.inner_size();
        let bound = Bound::from_size(size.width, size.height);
        info!("Window: {}x{}, bound {}", size.width, size.height, bound);

        let render_state = pollster::block_on(RenderState::new(Arc::clone(&window)))?;
        let worker = SimWorker::spawn(&self.config, bound, self.proxy.clone())?;

        Ok(Shell {
            worker,
            render_state,
            window,
            frame: None,
        })
    }
}

impl ApplicationHandler<Frame> for App {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.shell.is_some() {
            return;
        }
        match self.init_shell(event_loop) {
            Ok(shell) => self.shell = Some(shell),
            Err(e) => {
                error!("Setup failed: {e}");
                self.error = Some(e);
                event_loop.exit();
            }
        }
    }

    fn user_event(&mut self, _event_loop: &ActiveEventLoop, frame: Frame) {
        if let Some(shell) = self.shell.as_mut() {
            shell.frame = Some(frame);
            shell.window.request_redraw();
        }
    }

    fn window_event(&mut self, event_loop: &ActiveEventLoop, _id: WindowId, event: WindowEvent) {
        let Some(shell) = self.shell.as_mut() else {
            return;
        };
        match event {
            WindowEvent::CloseRequested => {
                info!("Quit requested");
                event_loop.exit();
            }
            WindowEvent::KeyboardInput {
                event:
                    KeyEvent {
                        physical_key: PhysicalKey::Code(key),
                        state: ElementState::Released,
                        ..
                    },
                ..
            } => {
                if let Some(command) = command_for_key(key, self.config.key_impulse) {
                    debug!("{:?} released: {:?}", key, command);
                    if !shell.worker.send(command) {
                        warn!("Simulation not running, dropped {:?}", command);
                    }
                }
            }
            WindowEvent::Resized(size) => {
                shell.render_state.resize(size.width, size.height);
            }
            WindowEvent::RedrawRequested => shell.redraw(),
            _ => {}
        }
    }

    fn exiting(&mut self, _event_loop: &ActiveEventLoop) {
        if let Some(shell) = self.shell.take() {
            shell.shutdown();
        }
    }
}

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config = SimConfig::default();
    config.validate().context("built-in configuration is invalid")?;
    info!("Bounce Box starting: {}", config.to_log_string());

    let event_loop = EventLoop::<Frame>::with_user_event()
        .build()
        .map_err(DemoError::from)
        .context("could not initialize the windowing system")?;
    event_loop.set_control_flow(ControlFlow::Wait);

    let mut app = App::new(config, event_loop.create_proxy());
    event_loop
        .run_app(&mut app)
        .map_err(DemoError::from)
        .context("event loop terminated abnormally")?;

    if let Some(e) = app.error.take() {
        return Err(anyhow::Error::new(e).context("startup failed"));
    }

    info!("Bounce Box exited cleanly");
    Ok(())
}
