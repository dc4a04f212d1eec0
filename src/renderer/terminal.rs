//! Full-screen terminal renderer
//!
//! Keeps a retained [`Scene`] and repaints it on `present()` when something
//! changed. Field units are scaled onto the terminal grid; the canvas is the
//! field plus a margin on every side.

use std::io::{self, Stdout, Write};

use crossterm::{
    cursor, execute,
    event::{
        KeyboardEnhancementFlags, PopKeyboardEnhancementFlags, PushKeyboardEnhancementFlags,
    },
    queue,
    style::{self, Print, ResetColor, SetBackgroundColor},
    terminal::{
        self, BeginSynchronizedUpdate, DisableLineWrap, EnableLineWrap, EndSynchronizedUpdate,
        EnterAlternateScreen, LeaveAlternateScreen,
    },
};
use glam::Vec2;

use super::{Renderer, Scene};
use crate::error::FrontendError;
use crate::sim::{Color, DrawCommand, EntityId, GameEvent, TextSlot};

/// Puts the terminal in raw/alternate-screen mode and restores it on drop
pub struct TerminalGuard {
    enhanced_keys: bool,
}

impl TerminalGuard {
    pub fn enter() -> io::Result<Self> {
        let mut out = io::stdout();
        terminal::enable_raw_mode()?;
        execute!(
            out,
            EnterAlternateScreen,
            cursor::Hide,
            DisableLineWrap,
            terminal::Clear(terminal::ClearType::All)
        )?;

        // Key release events let the paddle stop when an arrow key is let go
        let enhanced_keys = terminal::supports_keyboard_enhancement().unwrap_or(false);
        if enhanced_keys {
            execute!(
                out,
                PushKeyboardEnhancementFlags(KeyboardEnhancementFlags::REPORT_EVENT_TYPES)
            )?;
        }
        Ok(Self { enhanced_keys })
    }

    /// Whether key release events will be delivered
    pub fn reports_key_release(&self) -> bool {
        self.enhanced_keys
    }
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        let mut out = io::stdout();
        if self.enhanced_keys {
            let _ = execute!(out, PopKeyboardEnhancementFlags);
        }
        let _ = execute!(
            out,
            EnableLineWrap,
            cursor::Show,
            LeaveAlternateScreen,
            ResetColor
        );
        let _ = terminal::disable_raw_mode();
    }
}

fn to_terminal_color(color: Color) -> style::Color {
    match color {
        Color::Green => style::Color::Green,
        Color::Blue => style::Color::Blue,
        Color::DarkGray => style::Color::DarkGrey,
        Color::Pink => style::Color::Magenta,
        Color::Red => style::Color::Red,
        Color::Yellow => style::Color::Yellow,
        Color::Brown => style::Color::DarkYellow,
        Color::Gray => style::Color::Grey,
    }
}

/// Cell rectangle `[col0, col1) x [row0, row1)`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct CellRect {
    col0: u16,
    row0: u16,
    col1: u16,
    row1: u16,
}

pub struct TerminalRenderer<W: Write> {
    out: W,
    scene: Scene,
    /// Field-unit size of the whole drawing area, origin at (0, 0)
    canvas: Vec2,
    /// Terminal size in cells (columns, rows)
    size: (u16, u16),
    /// Re-query the terminal size before each repaint
    track_size: bool,
    dirty: bool,
}

impl TerminalRenderer<Stdout> {
    /// Render to stdout, following terminal resizes
    pub fn stdout(canvas: Vec2) -> io::Result<Self> {
        let size = terminal::size()?;
        let mut renderer = Self::new(io::stdout(), canvas, size);
        renderer.track_size = true;
        Ok(renderer)
    }
}

impl<W: Write> TerminalRenderer<W> {
    pub fn new(out: W, canvas: Vec2, size: (u16, u16)) -> Self {
        Self {
            out,
            scene: Scene::default(),
            canvas,
            size,
            track_size: false,
            dirty: true,
        }
    }

    pub fn resize(&mut self, cols: u16, rows: u16) {
        if (cols, rows) != self.size {
            self.size = (cols, rows);
            self.dirty = true;
        }
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    fn col(&self, x: f32) -> u16 {
        let cols = self.size.0 as f32;
        (x / self.canvas.x * cols).round().clamp(0.0, cols) as u16
    }

    fn row(&self, y: f32) -> u16 {
        let rows = self.size.1 as f32;
        (y / self.canvas.y * rows).round().clamp(0.0, rows) as u16
    }

    /// Map a field rect to cells; never thinner than one cell
    fn cells(&self, d: &DrawCommand) -> CellRect {
        let col0 = self.col(d.x).min(self.size.0.saturating_sub(1));
        let row0 = self.row(d.y).min(self.size.1.saturating_sub(1));
        let col1 = self.col(d.x + d.width).max(col0 + 1).min(self.size.0);
        let row1 = self.row(d.y + d.height).max(row0 + 1).min(self.size.1);
        CellRect {
            col0,
            row0,
            col1,
            row1,
        }
    }

    fn paint_fill(&mut self, r: CellRect, color: Color) -> io::Result<()> {
        let width = (r.col1 - r.col0) as usize;
        let line = " ".repeat(width);
        queue!(self.out, SetBackgroundColor(to_terminal_color(color)))?;
        for row in r.row0..r.row1 {
            queue!(self.out, cursor::MoveTo(r.col0, row), Print(&line))?;
        }
        queue!(self.out, ResetColor)
    }

    fn paint_outline(&mut self, r: CellRect) -> io::Result<()> {
        let (left, right) = (r.col0, r.col1.saturating_sub(1).max(r.col0));
        let (top, bottom) = (r.row0, r.row1.saturating_sub(1).max(r.row0));
        let inner = (right - left).saturating_sub(1) as usize;
        let edge = "─".repeat(inner);

        queue!(self.out, cursor::MoveTo(left, top), Print(format!("┌{edge}┐")))?;
        for row in top + 1..bottom {
            queue!(
                self.out,
                cursor::MoveTo(left, row),
                Print('│'),
                cursor::MoveTo(right, row),
                Print('│')
            )?;
        }
        if bottom > top {
            queue!(self.out, cursor::MoveTo(left, bottom), Print(format!("└{edge}┘")))?;
        }
        Ok(())
    }

    /// Score sits just above the frame's top-left corner, banner in its centre
    fn text_position(&self, slot: TextSlot, text: &str) -> (u16, u16) {
        let frame = self
            .scene
            .frame()
            .map(|d| self.cells(d))
            .unwrap_or(CellRect {
                col0: 0,
                row0: 1,
                col1: self.size.0,
                row1: self.size.1,
            });
        match slot {
            TextSlot::Score => (frame.col0, frame.row0.saturating_sub(1)),
            TextSlot::Banner => {
                let len = text.chars().count() as u16;
                let mid_col = (frame.col0 + frame.col1) / 2;
                let mid_row = (frame.row0 + frame.row1) / 2;
                (mid_col.saturating_sub(len / 2), mid_row)
            }
        }
    }

    fn repaint(&mut self) -> io::Result<()> {
        queue!(
            self.out,
            BeginSynchronizedUpdate,
            terminal::Clear(terminal::ClearType::All)
        )?;

        let items: Vec<DrawCommand> = self.scene.items.values().cloned().collect();
        for item in &items {
            let cells = self.cells(item);
            match item.color {
                Some(color) => self.paint_fill(cells, color)?,
                None => self.paint_outline(cells)?,
            }
        }

        let texts: Vec<(TextSlot, String)> = self
            .scene
            .texts
            .iter()
            .map(|(slot, text)| (*slot, text.clone()))
            .collect();
        for (slot, text) in texts {
            let (col, row) = self.text_position(slot, &text);
            queue!(self.out, cursor::MoveTo(col, row), Print(&text))?;
        }

        queue!(self.out, ResetColor, EndSynchronizedUpdate)?;
        self.out.flush()
    }

    fn record(&mut self, event: GameEvent) {
        self.scene.apply(&event);
        self.dirty = true;
    }
}

impl<W: Write> Renderer for TerminalRenderer<W> {
    fn draw(&mut self, cmd: &DrawCommand) -> Result<(), FrontendError> {
        self.record(GameEvent::Draw(cmd.clone()));
        Ok(())
    }

    fn erase(&mut self, id: EntityId) -> Result<(), FrontendError> {
        self.record(GameEvent::Erase { id });
        Ok(())
    }

    fn set_text(&mut self, slot: TextSlot, text: &str) -> Result<(), FrontendError> {
        self.record(GameEvent::Text {
            slot,
            text: text.to_string(),
        });
        Ok(())
    }

    fn present(&mut self) -> Result<(), FrontendError> {
        if self.track_size {
            let (cols, rows) = terminal::size()?;
            self.resize(cols, rows);
        }
        if self.dirty {
            self.repaint()?;
            self.dirty = false;
        }
        Ok(())
    }
}
