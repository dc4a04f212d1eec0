//! Events the simulation hands to the renderer
//!
//! Plain data. The core never draws; it queues these and the driver forwards
//! them to whatever [`crate::renderer::Renderer`] is attached.

use serde::{Deserialize, Serialize};

use super::entity::{Color, EntityId, Motion};

/// Place (or move) a rectangle. `color: None` means outline only.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DrawCommand {
    pub id: EntityId,
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
    pub color: Option<Color>,
}

impl DrawCommand {
    pub fn from_motion(id: EntityId, motion: &Motion, color: Option<Color>) -> Self {
        Self {
            id,
            x: motion.pos.x,
            y: motion.pos.y,
            width: motion.size.x,
            height: motion.size.y,
            color,
        }
    }
}

/// Text areas on the screen
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TextSlot {
    /// Above the field's top-left corner
    Score,
    /// Centre of the field (start prompt / end message)
    Banner,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum GameEvent {
    Draw(DrawCommand),
    Erase { id: EntityId },
    /// Empty text clears the slot
    Text { slot: TextSlot, text: String },
}

/// Score line as shown in the [`TextSlot::Score`] slot
pub fn score_text(score: u32) -> String {
    format!("score: {score}")
}
