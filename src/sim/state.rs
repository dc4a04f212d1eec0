//! Play-field state and core simulation types

use glam::Vec2;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::entity::{BLOCK_COLORS, Block, EntityId, PADDLE_COLORS, Paddle};
use super::event::{DrawCommand, GameEvent, TextSlot, score_text};
use super::ramp::FallRamp;
use crate::error::ConfigError;
use crate::settings::SessionConfig;

/// Shown until the player starts the round
pub const START_PROMPT: &str = "Press 'SPACE' to start";

/// Field edges in field units
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Bounds {
    pub west: f32,
    pub north: f32,
    pub east: f32,
    pub south: f32,
}

impl Bounds {
    pub fn width(&self) -> f32 {
        self.east - self.west
    }

    pub fn height(&self) -> f32 {
        self.south - self.north
    }
}

/// How a finished round is rated
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Outcome {
    /// Score at or above the excellent threshold
    Excellent,
    /// Score at or above the good threshold
    Good,
    GameOver,
}

impl Outcome {
    /// Rate a final score against the two thresholds
    pub fn from_score(score: u32, excellent: u32, good: u32) -> Self {
        if score >= excellent {
            Outcome::Excellent
        } else if score >= good {
            Outcome::Good
        } else {
            Outcome::GameOver
        }
    }

    pub fn message(&self) -> &'static str {
        match self {
            Outcome::Excellent => "Excellent!!",
            Outcome::Good => "Good!",
            Outcome::GameOver => "Game Over..",
        }
    }

    pub fn is_win(&self) -> bool {
        !matches!(self, Outcome::GameOver)
    }
}

/// Current phase of a round
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    /// Set up, waiting for the start command
    WaitingToStart,
    Running,
    /// Terminal; no further ticks are processed
    Ended(Outcome),
}

/// Player commands routed to the field
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Command {
    MoveLeft,
    MoveRight,
    Stop,
    Start,
}

/// One game session: paddle, block, ramp, score and phase
///
/// Generic over the random source so tests can inject their own; the default
/// is a seeded [`Pcg32`].
#[derive(Debug, Clone)]
pub struct PlayField<R = Pcg32> {
    pub bounds: Bounds,
    pub paddle: Paddle,
    pub block: Block,
    pub ramp: FallRamp,
    pub score: u32,
    pub phase: GamePhase,
    /// Ticks processed while running
    pub ticks: u64,
    pub(crate) config: SessionConfig,
    pub(crate) rng: R,
    pub(crate) events: Vec<GameEvent>,
    walls_id: EntityId,
    next_id: u32,
}

impl PlayField<Pcg32> {
    /// Build a field with a seeded PCG random source
    pub fn new(config: &SessionConfig, seed: u64) -> Result<Self, ConfigError> {
        Self::with_rng(config, Pcg32::seed_from_u64(seed))
    }
}

impl<R: Rng> PlayField<R> {
    /// Validate the config, create paddle and first block, and queue the
    /// setup events (walls, score, paddle, block, start prompt)
    pub fn with_rng(config: &SessionConfig, mut rng: R) -> Result<Self, ConfigError> {
        config.validate()?;
        let bounds = config.bounds();

        let walls_id = EntityId(1);
        let paddle_x = bounds.west + (bounds.width() - config.paddle_width) / 2.0;
        let paddle_color = PADDLE_COLORS[rng.random_range(0..PADDLE_COLORS.len())];
        let paddle = Paddle::new(
            EntityId(2),
            Vec2::new(paddle_x, config.paddle_top()),
            Vec2::new(config.paddle_width, config.paddle_height),
            paddle_color,
        );
        let block = spawn_block(config, &bounds, &mut rng, EntityId(3));

        let mut field = Self {
            bounds,
            paddle,
            block,
            ramp: FallRamp::new(config.fall_speed, config.fall_acceleration),
            score: 0,
            phase: GamePhase::WaitingToStart,
            ticks: 0,
            config: config.clone(),
            rng,
            events: Vec::new(),
            walls_id,
            next_id: 4,
        };

        field.events.push(GameEvent::Draw(DrawCommand {
            id: walls_id,
            x: bounds.west,
            y: bounds.north,
            width: bounds.width(),
            height: bounds.height(),
            color: None,
        }));
        field.push_text(TextSlot::Score, score_text(0));
        field.push_paddle();
        field.push_block();
        field.push_text(TextSlot::Banner, START_PROMPT.to_string());

        log::info!(
            "Field ready: {}x{}, paddle at x={}, first block at x={}",
            bounds.width(),
            bounds.height(),
            paddle_x,
            field.block.motion.pos.x
        );
        Ok(field)
    }

    /// Allocate a new entity ID
    pub fn next_entity_id(&mut self) -> EntityId {
        let id = EntityId(self.next_id);
        self.next_id += 1;
        id
    }

    pub fn config(&self) -> &SessionConfig {
        &self.config
    }

    pub fn fall_speed(&self) -> f32 {
        self.ramp.speed()
    }

    pub fn is_running(&self) -> bool {
        self.phase == GamePhase::Running
    }

    pub fn outcome(&self) -> Option<Outcome> {
        match self.phase {
            GamePhase::Ended(outcome) => Some(outcome),
            _ => None,
        }
    }

    /// Route a player command. Ignored once the round has ended.
    pub fn apply(&mut self, command: Command) {
        if matches!(self.phase, GamePhase::Ended(_)) {
            return;
        }
        match command {
            Command::MoveLeft => self.paddle.set_velocity(-self.config.paddle_speed),
            Command::MoveRight => self.paddle.set_velocity(self.config.paddle_speed),
            Command::Stop => self.paddle.stop(),
            Command::Start => self.start(),
        }
    }

    /// WaitingToStart -> Running. No effect in any other phase.
    pub fn start(&mut self) {
        if self.phase == GamePhase::WaitingToStart {
            self.phase = GamePhase::Running;
            self.push_text(TextSlot::Banner, String::new());
            log::info!("Round started");
        }
    }

    /// Take every event queued since the last drain
    pub fn drain_events(&mut self) -> std::vec::Drain<'_, GameEvent> {
        self.events.drain(..)
    }

    /// Replace the current block with a fresh one at the spawn row
    pub(crate) fn respawn_block(&mut self) {
        let id = self.next_entity_id();
        let old = self.block.id;
        self.block = spawn_block(&self.config, &self.bounds, &mut self.rng, id);
        self.events.push(GameEvent::Erase { id: old });
        self.push_block();
        log::debug!(
            "Respawned block {:?} -> {:?} at x={}",
            old,
            id,
            self.block.motion.pos.x
        );
    }

    pub(crate) fn push_paddle(&mut self) {
        self.events.push(GameEvent::Draw(DrawCommand::from_motion(
            self.paddle.id,
            &self.paddle.motion,
            Some(self.paddle.color),
        )));
    }

    pub(crate) fn push_block(&mut self) {
        self.events.push(GameEvent::Draw(DrawCommand::from_motion(
            self.block.id,
            &self.block.motion,
            Some(self.block.color()),
        )));
    }

    pub(crate) fn push_text(&mut self, slot: TextSlot, text: String) {
        self.events.push(GameEvent::Text { slot, text });
    }
}

/// Create a block at a random whole-unit x in `[west, east - width]`
fn spawn_block<R: Rng>(
    config: &SessionConfig,
    bounds: &Bounds,
    rng: &mut R,
    id: EntityId,
) -> Block {
    let lo = bounds.west.ceil() as i64;
    let hi = (bounds.east - config.block_width).floor() as i64;
    // Non-integral bounds can leave no whole position; fall back to the west edge
    let x = if hi >= lo {
        rng.random_range(lo..=hi) as f32
    } else {
        bounds.west
    };
    let color_index = rng.random_range(0..BLOCK_COLORS.len());
    Block::new(
        id,
        Vec2::new(x, config.spawn_top()),
        Vec2::new(config.block_width, config.block_height),
        config.block_points,
        color_index,
    )
}
