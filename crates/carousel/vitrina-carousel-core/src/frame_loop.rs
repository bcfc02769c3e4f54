//! Optional self-driving frame loop.
//!
//! The simulation core never reads a clock; this adapter wraps a
//! [`Carousel`] for hosts that do not have their own frame loop. It is a
//! thin convenience outside the engine's tested per-frame contract —
//! callers with a render loop should call [`Carousel::update`] themselves.

use std::panic::{catch_unwind, AssertUnwindSafe};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex, PoisonError};
use std::thread;
use std::time::{Duration, Instant};

use crate::engine::Carousel;
use crate::outputs::TransformRecord;

/// Smallest delta fed to the simulation, seconds.
const MIN_DT: f32 = 0.001;
/// Largest delta fed to the simulation, seconds; long pauses (suspended
/// host, debugger) are clamped rather than integrated in one step.
const MAX_DT: f32 = 0.05;
/// Target frame interval for the self-driving loop.
const FRAME_INTERVAL: Duration = Duration::from_millis(16);

/// Monotonic delta source with the loop's dt clamp.
#[derive(Debug)]
pub struct FrameClock {
    last: Instant,
}

impl FrameClock {
    pub fn new() -> Self {
        Self {
            last: Instant::now(),
        }
    }

    /// Seconds since the previous tick, clamped to `[MIN_DT, MAX_DT]`.
    pub fn tick(&mut self) -> f32 {
        let now = Instant::now();
        let dt = now.duration_since(self.last).as_secs_f32();
        self.last = now;
        dt.clamp(MIN_DT, MAX_DT)
    }
}

impl Default for FrameClock {
    fn default() -> Self {
        Self::new()
    }
}

/// Self-scheduling wrapper around a [`Carousel`].
///
/// The carousel stays reachable through [`FrameLoop::carousel`] so commands
/// (hover, select, scroll impulses) can be issued between frames; the lock
/// serializes them against `update`.
#[derive(Debug)]
pub struct FrameLoop<P> {
    shared: Arc<Mutex<Carousel<P>>>,
    stop: Arc<AtomicBool>,
    handle: Option<thread::JoinHandle<()>>,
}

impl<P: Clone + Send + 'static> FrameLoop<P> {
    pub fn new(carousel: Carousel<P>) -> Self {
        Self {
            shared: Arc::new(Mutex::new(carousel)),
            stop: Arc::new(AtomicBool::new(false)),
            handle: None,
        }
    }

    /// Start the loop, invoking `apply` with each frame's transforms.
    /// No-op if already running. A panic inside `apply` is isolated and
    /// reported; the loop keeps running.
    pub fn start<F>(&mut self, mut apply: F)
    where
        F: FnMut(&[TransformRecord<P>]) + Send + 'static,
    {
        if self.handle.is_some() {
            return;
        }
        self.stop.store(false, Ordering::SeqCst);

        let shared = Arc::clone(&self.shared);
        let stop = Arc::clone(&self.stop);
        self.handle = Some(thread::spawn(move || {
            let mut clock = FrameClock::new();
            while !stop.load(Ordering::SeqCst) {
                let dt = clock.tick();
                let records = {
                    let mut carousel = shared.lock().unwrap_or_else(PoisonError::into_inner);
                    carousel.update(dt).records.clone()
                };
                if catch_unwind(AssertUnwindSafe(|| apply(&records))).is_err() {
                    log::error!("frame loop: apply callback panicked; continuing");
                }
                thread::park_timeout(FRAME_INTERVAL);
            }
        }));
    }
}

impl<P> FrameLoop<P> {
    /// Shared handle to the wrapped carousel.
    pub fn carousel(&self) -> Arc<Mutex<Carousel<P>>> {
        Arc::clone(&self.shared)
    }

    /// Whether the loop thread is currently running.
    pub fn is_running(&self) -> bool {
        self.handle.is_some()
    }

    /// Stop the loop and wait for the thread to exit. No-op if not running.
    pub fn stop(&mut self) {
        if let Some(handle) = self.handle.take() {
            self.stop.store(true, Ordering::SeqCst);
            handle.thread().unpark();
            let _ = handle.join();
        }
    }
}

impl<P> Drop for FrameLoop<P> {
    fn drop(&mut self) {
        self.stop();
    }
}
