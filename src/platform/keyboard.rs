//! Keyboard input via crossterm
//!
//! Left/Right (or A/D) start moving the paddle, releasing them stops it.
//! Terminals that can't report releases can use Down/S to stop. Space starts
//! the round; Q, Esc or Ctrl+C close the game.

use std::time::Duration;

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use super::{InputEvent, InputSource};
use crate::error::FrontendError;
use crate::sim::Command;

#[derive(Debug, Default)]
pub struct KeyboardInput;

impl KeyboardInput {
    pub fn new() -> Self {
        Self
    }
}

/// Translate one key event
pub fn map_key(key: &KeyEvent) -> Option<InputEvent> {
    let pressed = matches!(key.kind, KeyEventKind::Press | KeyEventKind::Repeat);

    if pressed && key.modifiers.contains(KeyModifiers::CONTROL) {
        return match key.code {
            KeyCode::Char('c') | KeyCode::Char('C') => Some(InputEvent::Close),
            _ => None,
        };
    }

    let command = match (key.code, pressed) {
        (KeyCode::Left | KeyCode::Char('a') | KeyCode::Char('A'), true) => Command::MoveLeft,
        (KeyCode::Right | KeyCode::Char('d') | KeyCode::Char('D'), true) => Command::MoveRight,
        (KeyCode::Left | KeyCode::Char('a') | KeyCode::Char('A'), false)
        | (KeyCode::Right | KeyCode::Char('d') | KeyCode::Char('D'), false) => Command::Stop,
        (KeyCode::Down | KeyCode::Char('s') | KeyCode::Char('S'), true) => Command::Stop,
        (KeyCode::Char(' '), true) => Command::Start,
        (KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc, true) => {
            return Some(InputEvent::Close);
        }
        _ => return None,
    };
    Some(InputEvent::Command(command))
}

impl InputSource for KeyboardInput {
    fn poll(&mut self) -> Result<Option<InputEvent>, FrontendError> {
        while event::poll(Duration::ZERO)? {
            if let Event::Key(key) = event::read()? {
                if let Some(input) = map_key(&key) {
                    return Ok(Some(input));
                }
            }
        }
        Ok(None)
    }
}
