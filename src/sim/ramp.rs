//! Fall-speed ramp
//!
//! Session-wide difficulty state. Survives block respawns and only grows.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FallRamp {
    speed: f32,
    acceleration: f32,
}

impl FallRamp {
    /// `acceleration` must be non-negative; config validation guarantees it.
    pub fn new(speed: f32, acceleration: f32) -> Self {
        debug_assert!(acceleration >= 0.0);
        Self {
            speed,
            acceleration,
        }
    }

    /// Current fall speed (units per tick)
    pub fn speed(&self) -> f32 {
        self.speed
    }

    pub fn acceleration(&self) -> f32 {
        self.acceleration
    }

    /// Apply one tick of acceleration
    pub fn advance(&mut self) {
        self.speed += self.acceleration;
    }
}
