//! Headless renderer: one JSON object per event, one line each

use std::io::Write;

use super::Renderer;
use crate::error::FrontendError;
use crate::sim::{DrawCommand, EntityId, GameEvent, TextSlot};

pub struct JsonLinesRenderer<W: Write> {
    out: W,
    frame: u64,
}

impl<W: Write> JsonLinesRenderer<W> {
    pub fn new(out: W) -> Self {
        Self { out, frame: 0 }
    }

    /// Frames presented so far
    pub fn frames(&self) -> u64 {
        self.frame
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    fn write_event(&mut self, event: &GameEvent) -> Result<(), FrontendError> {
        serde_json::to_writer(&mut self.out, event)?;
        self.out.write_all(b"\n")?;
        Ok(())
    }
}

impl<W: Write> Renderer for JsonLinesRenderer<W> {
    fn draw(&mut self, cmd: &DrawCommand) -> Result<(), FrontendError> {
        self.write_event(&GameEvent::Draw(cmd.clone()))
    }

    fn erase(&mut self, id: EntityId) -> Result<(), FrontendError> {
        self.write_event(&GameEvent::Erase { id })
    }

    fn set_text(&mut self, slot: TextSlot, text: &str) -> Result<(), FrontendError> {
        self.write_event(&GameEvent::Text {
            slot,
            text: text.to_string(),
        })
    }

    fn present(&mut self) -> Result<(), FrontendError> {
        self.frame += 1;
        self.out.flush()?;
        Ok(())
    }
}
