//! Paddle and block entities
//!
//! Both are built on the same [`Motion`] record. Only the paddle exposes
//! velocity mutators; the block is pushed down by the field's fall speed.

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// Renderer-facing identifier for anything drawn on the field
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct EntityId(pub u32);

/// Fill colours known to the renderers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Color {
    Green,
    Blue,
    DarkGray,
    Pink,
    Red,
    Yellow,
    Brown,
    Gray,
}

/// Colours a block may be spawned with
pub const BLOCK_COLORS: [Color; 6] = [
    Color::Green,
    Color::Blue,
    Color::DarkGray,
    Color::Pink,
    Color::Red,
    Color::Yellow,
];

/// Colours the paddle may be given at setup
pub const PADDLE_COLORS: [Color; 6] = [
    Color::Blue,
    Color::Red,
    Color::Green,
    Color::Yellow,
    Color::Brown,
    Color::Gray,
];

/// Position, size and per-tick velocity in field units.
/// `pos` is the top-left corner.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Motion {
    pub pos: Vec2,
    pub size: Vec2,
    pub vel: Vec2,
}

impl Motion {
    pub fn at_rest(pos: Vec2, size: Vec2) -> Self {
        Self {
            pos,
            size,
            vel: Vec2::ZERO,
        }
    }

    /// Advance by one tick of velocity. No bounds checking.
    #[inline]
    pub fn step(&mut self) {
        self.pos += self.vel;
    }

    #[inline]
    pub fn left(&self) -> f32 {
        self.pos.x
    }

    #[inline]
    pub fn right(&self) -> f32 {
        self.pos.x + self.size.x
    }

    #[inline]
    pub fn top(&self) -> f32 {
        self.pos.y
    }

    #[inline]
    pub fn bottom(&self) -> f32 {
        self.pos.y + self.size.y
    }

    pub fn center_x(&self) -> f32 {
        self.pos.x + self.size.x / 2.0
    }
}

/// The player's paddle
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Paddle {
    pub id: EntityId,
    pub motion: Motion,
    pub color: Color,
}

impl Paddle {
    pub fn new(id: EntityId, pos: Vec2, size: Vec2, color: Color) -> Self {
        Self {
            id,
            motion: Motion::at_rest(pos, size),
            color,
        }
    }

    /// Set horizontal velocity (units per tick). Vertical velocity stays zero.
    pub fn set_velocity(&mut self, vx: f32) {
        self.motion.vel = Vec2::new(vx, 0.0);
    }

    pub fn stop(&mut self) {
        self.set_velocity(0.0);
    }

    /// Advance one tick
    pub fn step(&mut self) {
        self.motion.step();
    }

    /// Pull the paddle back inside `[west, east]`
    pub fn clamp_x(&mut self, west: f32, east: f32) {
        if self.motion.left() < west {
            self.motion.pos.x = west;
        } else if self.motion.right() > east {
            self.motion.pos.x = east - self.motion.size.x;
        }
    }
}

/// The falling block
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Block {
    pub id: EntityId,
    pub motion: Motion,
    pub points: u32,
    /// Index into [`BLOCK_COLORS`]
    pub color_index: usize,
}

impl Block {
    pub fn new(id: EntityId, pos: Vec2, size: Vec2, points: u32, color_index: usize) -> Self {
        Self {
            id,
            motion: Motion::at_rest(pos, size),
            points,
            color_index,
        }
    }

    pub fn color(&self) -> Color {
        BLOCK_COLORS[self.color_index % BLOCK_COLORS.len()]
    }

    /// Drop by the shared fall speed
    pub fn fall(&mut self, speed: f32) {
        self.motion.vel = Vec2::new(0.0, speed);
        self.motion.step();
    }
}
