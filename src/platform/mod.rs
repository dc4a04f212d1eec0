//! Platform abstraction layer
//!
//! Handles the pieces the simulation must not touch directly:
//! - Input events (keyboard, scripted)
//! - Time (sleeping between ticks)

pub mod keyboard;
pub mod scripted;

use std::time::Duration;

pub use keyboard::KeyboardInput;
pub use scripted::ScriptedInput;

use crate::error::FrontendError;
use crate::sim::Command;

/// Something the input collaborator observed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputEvent {
    Command(Command),
    /// The player closed the surface; the driver must stop
    Close,
}

/// Source of player input, polled without blocking
pub trait InputSource {
    /// Next pending event, or `None` when nothing is queued
    fn poll(&mut self) -> Result<Option<InputEvent>, FrontendError>;
}

/// Input source that never produces anything
#[derive(Debug, Default, Clone, Copy)]
pub struct NoInput;

impl InputSource for NoInput {
    fn poll(&mut self) -> Result<Option<InputEvent>, FrontendError> {
        Ok(None)
    }
}

/// Wall-clock pacing for the driver
pub trait Clock {
    fn sleep(&mut self, duration: Duration);
}

/// Real sleeping clock
#[derive(Debug, Default, Clone, Copy)]
pub struct ThreadClock;

impl Clock for ThreadClock {
    fn sleep(&mut self, duration: Duration) {
        std::thread::sleep(duration);
    }
}

/// Clock that only counts requested sleeps (tests, headless runs)
#[derive(Debug, Default, Clone, Copy)]
pub struct ManualClock {
    pub sleeps: u64,
    pub elapsed: Duration,
}

impl Clock for ManualClock {
    fn sleep(&mut self, duration: Duration) {
        self.sleeps += 1;
        self.elapsed += duration;
    }
}
