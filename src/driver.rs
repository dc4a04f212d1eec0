//! Fixed-interval game loop
//!
//! Single-threaded polling: sleep one tick interval, drain input, tick the
//! field, forward its events to the renderer, present, repeat. Waiting for
//! the start command uses the same cadence. Input and ticks happen on the
//! same turn of the loop, so the field never needs locking.

use std::time::Duration;

use rand::Rng;

use crate::error::FrontendError;
use crate::platform::{Clock, InputEvent, InputSource, ThreadClock};
use crate::renderer::Renderer;
use crate::sim::{GamePhase, Outcome, PlayField, tick};

/// Why the loop stopped
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoopExit {
    /// The round reached a terminal tick
    Finished(Outcome),
    /// The surface was closed before the round ended
    Cancelled,
}

pub struct GameLoop<R, I, C = ThreadClock> {
    renderer: R,
    input: I,
    clock: C,
    interval: Duration,
    autopilot: bool,
}

impl<R: Renderer, I: InputSource> GameLoop<R, I, ThreadClock> {
    /// Loop paced by real sleeps
    pub fn new(renderer: R, input: I, interval: Duration) -> Self {
        Self::with_clock(renderer, input, ThreadClock, interval)
    }
}

impl<R: Renderer, I: InputSource, C: Clock> GameLoop<R, I, C> {
    pub fn with_clock(renderer: R, input: I, clock: C, interval: Duration) -> Self {
        Self {
            renderer,
            input,
            clock,
            interval,
            autopilot: false,
        }
    }

    /// Demo mode: start immediately and steer the paddle automatically
    pub fn autopilot(mut self, enabled: bool) -> Self {
        self.autopilot = enabled;
        self
    }

    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    pub fn clock(&self) -> &C {
        &self.clock
    }

    pub fn into_parts(self) -> (R, I, C) {
        (self.renderer, self.input, self.clock)
    }

    /// Play one round: wait for start, then tick until the round ends or
    /// the surface is closed
    pub fn run<G: Rng>(&mut self, field: &mut PlayField<G>) -> Result<LoopExit, FrontendError> {
        if !self.wait_for_start(field)? {
            return Ok(LoopExit::Cancelled);
        }
        if let Some(outcome) = field.outcome() {
            return Ok(LoopExit::Finished(outcome));
        }

        loop {
            self.clock.sleep(self.interval);

            if !self.pump_input(field)? {
                log::warn!("Surface closed after {} ticks, stopping", field.ticks);
                return Ok(LoopExit::Cancelled);
            }
            if self.autopilot {
                let command = field.autopilot_command();
                field.apply(command);
            }

            tick(field);
            self.flush(field)?;

            if let Some(outcome) = field.outcome() {
                log::info!("{} (score {})", outcome.message(), field.score);
                return Ok(LoopExit::Finished(outcome));
            }
        }
    }

    /// Poll at the tick interval until the field leaves WaitingToStart.
    /// Returns false if the surface was closed first.
    pub fn wait_for_start<G: Rng>(
        &mut self,
        field: &mut PlayField<G>,
    ) -> Result<bool, FrontendError> {
        loop {
            if !self.pump_input(field)? {
                log::warn!("Surface closed while waiting for start");
                return Ok(false);
            }
            if self.autopilot {
                field.start();
            }
            self.flush(field)?;
            if field.phase != GamePhase::WaitingToStart {
                return Ok(true);
            }
            self.clock.sleep(self.interval);
        }
    }

    /// Keep the final screen up until the player closes it
    pub fn linger(&mut self) -> Result<(), FrontendError> {
        loop {
            while let Some(event) = self.input.poll()? {
                if event == InputEvent::Close {
                    return Ok(());
                }
            }
            if !self.renderer.is_open() {
                return Ok(());
            }
            self.renderer.present()?;
            self.clock.sleep(self.interval);
        }
    }

    /// Apply every pending input event. Returns false as soon as a close is
    /// seen, without applying anything queued after it.
    fn pump_input<G: Rng>(&mut self, field: &mut PlayField<G>) -> Result<bool, FrontendError> {
        while let Some(event) = self.input.poll()? {
            match event {
                InputEvent::Command(command) => field.apply(command),
                InputEvent::Close => return Ok(false),
            }
        }
        Ok(self.renderer.is_open())
    }

    /// Forward queued field events and present the frame
    fn flush<G: Rng>(&mut self, field: &mut PlayField<G>) -> Result<(), FrontendError> {
        for event in field.drain_events() {
            self.renderer.apply(&event)?;
        }
        self.renderer.present()
    }
}
