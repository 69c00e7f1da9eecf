use crate::render::{FrameStats, Painter};
use crate::simulation::Simulation;
use std::fmt;

/// Lifecycle of the render loop. `Stopped` is terminal.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LoopState {
    Running,
    Stopped,
}

/// Converts host timestamps (milliseconds) into seconds since loop start.
///
/// Seconds stay `f64`: a page left open for days still resolves single
/// frames. Consumers narrow to `f32` only after taking a difference or
/// reducing a phase.
#[derive(Clone, Copy, Debug)]
pub struct FrameClock {
    start_ms: f64,
}

impl FrameClock {
    pub fn starting_at(start_ms: f64) -> Self {
        Self { start_ms }
    }

    pub fn seconds(&self, now_ms: f64) -> f64 {
        (now_ms - self.start_ms) / 1000.0
    }
}

/// A frame that failed to draw. The loop is already stopped when this is
/// returned.
#[derive(Debug)]
pub struct FrameError<E> {
    pub frame: u64,
    pub source: E,
}

impl<E: fmt::Debug> fmt::Display for FrameError<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "frame {} failed: {:?}", self.frame, self.source)
    }
}

impl<E: fmt::Debug> std::error::Error for FrameError<E> {}

/// Two-state loop driver.
///
/// The host calls [`tick`](Self::tick) once per display refresh and
/// schedules the next refresh only while [`is_running`](Self::is_running)
/// holds. A failing frame halts the loop; there is no retry.
#[derive(Debug)]
pub struct LoopDriver {
    state: LoopState,
    clock: FrameClock,
    frames: u64,
    last_frame_ms: f64,
}

impl LoopDriver {
    pub fn new(clock: FrameClock) -> Self {
        Self {
            state: LoopState::Running,
            clock,
            frames: 0,
            last_frame_ms: clock.start_ms,
        }
    }

    pub fn state(&self) -> LoopState {
        self.state
    }

    pub fn is_running(&self) -> bool {
        self.state == LoopState::Running
    }

    pub fn clock(&self) -> FrameClock {
        self.clock
    }

    /// Loop time of the latest frame, in seconds.
    ///
    /// Host events are stamped with this rather than a separate clock so a
    /// shockwave never starts ahead of the frame that first sees it.
    pub fn now(&self) -> f64 {
        self.clock.seconds(self.last_frame_ms)
    }

    /// Frames rendered successfully so far.
    pub fn frames(&self) -> u64 {
        self.frames
    }

    /// Run one frame at host time `now_ms`.
    ///
    /// Returns `Ok(None)` without touching the simulation once stopped.
    pub fn tick<P: Painter>(
        &mut self,
        sim: &mut Simulation,
        painter: &mut P,
        now_ms: f64,
    ) -> Result<Option<FrameStats>, FrameError<P::Error>>
    where
        P::Error: fmt::Debug,
    {
        if !self.is_running() {
            return Ok(None);
        }
        self.last_frame_ms = self.last_frame_ms.max(now_ms);
        let now = self.now();
        match sim.frame(painter, now) {
            Ok(stats) => {
                self.frames += 1;
                Ok(Some(stats))
            }
            Err(source) => {
                self.state = LoopState::Stopped;
                let err = FrameError {
                    frame: self.frames,
                    source,
                };
                log::error!("backdrop loop halted: {}", err);
                Err(err)
            }
        }
    }

    /// Enter the terminal state. Idempotent.
    pub fn stop(&mut self) {
        if self.state == LoopState::Running {
            log::debug!("backdrop loop stopped after {} frames", self.frames);
        }
        self.state = LoopState::Stopped;
    }
}
