//! Simulation worker thread
//!
//! The worker owns the `World` outright. Input reaches it as `Command`s
//! over a channel and is applied at the start of the next tick; finished
//! frames go back out through a `FrameSink`.

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::thread::{self, JoinHandle};
use std::time::Instant;

use crossbeam_channel::{Receiver, Sender, TryRecvError};
use log::{error, info, trace};
use winit::event_loop::EventLoopProxy;

use crate::error::DemoError;
use crate::settings::SimConfig;
use crate::sim::{Bound, Command, FixedClock, Frame, TickInput, World, tick};

/// Where the worker publishes frames for drawing
pub trait FrameSink: Send + 'static {
    /// Hand off a frame. Returns false once nobody is listening.
    fn publish(&self, frame: Frame) -> bool;
}

impl FrameSink for EventLoopProxy<Frame> {
    fn publish(&self, frame: Frame) -> bool {
        self.send_event(frame).is_ok()
    }
}

impl FrameSink for Sender<Frame> {
    fn publish(&self, frame: Frame) -> bool {
        self.send(frame).is_ok()
    }
}

/// Handle to the running simulation thread
#[derive(Debug)]
pub struct SimWorker {
    commands: Sender<Command>,
    exit: Arc<AtomicBool>,
    handle: Option<JoinHandle<()>>,
}

impl SimWorker {
    pub fn spawn<S: FrameSink>(config: &SimConfig, bound: Bound, sink: S) -> Result<Self, DemoError> {
        config.validate()?;

        let (commands, recv_commands) = crossbeam_channel::unbounded();
        let exit = Arc::new(AtomicBool::new(false));

        let world = World::new(config, bound);
        let clock = FixedClock::new(config.tick_rate);
        let thread_exit = Arc::clone(&exit);

        let handle = thread::Builder::new()
            .name("sim-world".into())
            .spawn(move || run(world, clock, recv_commands, sink, thread_exit))
            .map_err(DemoError::WorkerSpawn)?;

        info!("Simulation started at {} ticks/s in {}", config.tick_rate, bound);

        Ok(Self {
            commands,
            exit,
            handle: Some(handle),
        })
    }

    /// Queue a command for the next tick. Returns false if the worker is gone.
    pub fn send(&self, command: Command) -> bool {
        self.commands.send(command).is_ok()
    }

    /// Whether the simulation thread is still looping
    pub fn is_running(&self) -> bool {
        self.handle.as_ref().is_some_and(|h| !h.is_finished())
    }

    /// Raise the exit flag and wait for the thread to return
    pub fn shutdown(&mut self) {
        self.exit.store(true, Ordering::Release);
        if let Some(handle) = self.handle.take() {
            if handle.join().is_err() {
                error!("Simulation thread panicked");
            } else {
                info!("Simulation stopped");
            }
        }
    }
}

impl Drop for SimWorker {
    fn drop(&mut self) {
        self.shutdown();
    }
}

fn run<S: FrameSink>(
    mut world: World,
    mut clock: FixedClock,
    commands: Receiver<Command>,
    sink: S,
    exit: Arc<AtomicBool>,
) {
    if !sink.publish(world.frame()) {
        return;
    }

    let mut input = TickInput::default();
    let mut last = Instant::now();

    while !exit.load(Ordering::Acquire) {
        thread::sleep(clock.until_next_tick());

        let now = Instant::now();
        let due = clock.advance(now - last);
        last = now;

        for _ in 0..due {
            // Drain input queued since the last tick
            loop {
                match commands.try_recv() {
                    Ok(command) => input.commands.push(command),
                    Err(TryRecvError::Empty) => break,
                    Err(TryRecvError::Disconnected) => return,
                }
            }

            tick(&mut world, &input);
            input.commands.clear();

            let frame = world.frame();
            trace!("Frame {}: {}", frame.tick, frame.rect);
            if !sink.publish(frame) {
                return;
            }
        }
    }
}
