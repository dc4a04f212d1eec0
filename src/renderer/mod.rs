//! Renderer collaborators
//!
//! The simulation only emits [`GameEvent`]s. A renderer turns them into
//! something visible. Backends:
//! - `terminal`: crossterm full-screen view
//! - `json`: one JSON object per event, for headless runs
//! - [`RecordingRenderer`]: keeps everything in memory, used by tests

pub mod json;
pub mod terminal;

use std::collections::BTreeMap;

pub use json::JsonLinesRenderer;
pub use terminal::{TerminalGuard, TerminalRenderer};

use crate::error::FrontendError;
use crate::sim::{DrawCommand, EntityId, GameEvent, TextSlot};

/// Presentation surface driven by the game loop
pub trait Renderer {
    /// Place or move a rectangle
    fn draw(&mut self, cmd: &DrawCommand) -> Result<(), FrontendError>;

    /// Remove a rectangle (no-op for unknown ids)
    fn erase(&mut self, id: EntityId) -> Result<(), FrontendError>;

    /// Replace the text in a slot; empty text clears it
    fn set_text(&mut self, slot: TextSlot, text: &str) -> Result<(), FrontendError>;

    /// Flush everything received since the last call to the screen
    fn present(&mut self) -> Result<(), FrontendError>;

    /// False once the surface has been closed by the user
    fn is_open(&self) -> bool {
        true
    }

    /// Dispatch one simulation event
    fn apply(&mut self, event: &GameEvent) -> Result<(), FrontendError> {
        match event {
            GameEvent::Draw(cmd) => self.draw(cmd),
            GameEvent::Erase { id } => self.erase(*id),
            GameEvent::Text { slot, text } => self.set_text(*slot, text),
        }
    }
}

/// Retained copy of what should be on screen
#[derive(Debug, Clone, Default)]
pub struct Scene {
    pub items: BTreeMap<EntityId, DrawCommand>,
    pub texts: BTreeMap<TextSlot, String>,
}

impl Scene {
    pub fn apply(&mut self, event: &GameEvent) {
        match event {
            GameEvent::Draw(cmd) => {
                self.items.insert(cmd.id, cmd.clone());
            }
            GameEvent::Erase { id } => {
                self.items.remove(id);
            }
            GameEvent::Text { slot, text } => {
                if text.is_empty() {
                    self.texts.remove(slot);
                } else {
                    self.texts.insert(*slot, text.clone());
                }
            }
        }
    }

    /// The field outline: the first item drawn without a fill colour
    pub fn frame(&self) -> Option<&DrawCommand> {
        self.items.values().find(|d| d.color.is_none())
    }

    pub fn text(&self, slot: TextSlot) -> Option<&str> {
        self.texts.get(&slot).map(String::as_str)
    }
}

/// In-memory renderer for tests and tooling
#[derive(Debug, Default)]
pub struct RecordingRenderer {
    pub events: Vec<GameEvent>,
    pub scene: Scene,
    pub presents: usize,
    /// Report closed once this many frames have been presented
    pub close_after: Option<usize>,
    /// Fail the present call with this index (0-based)
    pub fail_on_present: Option<usize>,
}

impl RecordingRenderer {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Renderer for RecordingRenderer {
    fn draw(&mut self, cmd: &DrawCommand) -> Result<(), FrontendError> {
        let event = GameEvent::Draw(cmd.clone());
        self.scene.apply(&event);
        self.events.push(event);
        Ok(())
    }

    fn erase(&mut self, id: EntityId) -> Result<(), FrontendError> {
        let event = GameEvent::Erase { id };
        self.scene.apply(&event);
        self.events.push(event);
        Ok(())
    }

    fn set_text(&mut self, slot: TextSlot, text: &str) -> Result<(), FrontendError> {
        let event = GameEvent::Text {
            slot,
            text: text.to_string(),
        };
        self.scene.apply(&event);
        self.events.push(event);
        Ok(())
    }

    fn present(&mut self) -> Result<(), FrontendError> {
        if self.fail_on_present == Some(self.presents) {
            return Err(FrontendError::Io(std::io::Error::other("simulated present failure")));
        }
        self.presents += 1;
        Ok(())
    }

    fn is_open(&self) -> bool {
        self.close_after.is_none_or(|n| self.presents < n)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::Color;

    fn rect(id: u32, color: Option<Color>) -> DrawCommand {
        DrawCommand {
            id: EntityId(id),
            x: 0.0,
            y: 0.0,
            width: 10.0,
            height: 10.0,
            color,
        }
    }

    #[test]
    fn test_scene_tracks_draw_erase_and_text() {
        let mut r = RecordingRenderer::new();
        r.apply(&GameEvent::Draw(rect(1, None))).unwrap();
        r.apply(&GameEvent::Draw(rect(2, Some(Color::Red)))).unwrap();
        r.apply(&GameEvent::Erase { id: EntityId(2) }).unwrap();
        r.set_text(TextSlot::Banner, "hello").unwrap();

        assert_eq!(r.scene.items.len(), 1);
        assert_eq!(r.scene.frame().map(|d| d.id), Some(EntityId(1)));
        assert_eq!(r.scene.text(TextSlot::Banner), Some("hello"));

        r.set_text(TextSlot::Banner, "").unwrap();
        assert_eq!(r.scene.text(TextSlot::Banner), None);
        assert_eq!(r.events.len(), 5);
    }

    #[test]
    fn test_recording_close_and_failure() {
        let mut r = RecordingRenderer {
            close_after: Some(2),
            fail_on_present: Some(3),
            ..Default::default()
        };
        assert!(r.is_open());
        r.present().unwrap();
        r.present().unwrap();
        assert!(!r.is_open());
        r.present().unwrap();
        assert!(r.present().is_err());
    }
}
