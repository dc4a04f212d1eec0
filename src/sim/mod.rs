//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - One fixed step per tick
//! - Seeded RNG only
//! - No rendering or platform dependencies

pub mod autopilot;
pub mod collision;
pub mod entity;
pub mod event;
pub mod ramp;
pub mod state;
pub mod tick;

pub use collision::{edge_overlap, is_caught, reached_floor};
pub use entity::{BLOCK_COLORS, Block, Color, EntityId, Motion, PADDLE_COLORS, Paddle};
pub use event::{DrawCommand, GameEvent, TextSlot, score_text};
pub use ramp::FallRamp;
pub use state::{Bounds, Command, GamePhase, Outcome, PlayField, START_PROMPT};
pub use tick::tick;
