//! Falling Block - catch the block before it hits the floor
//!
//! Core modules:
//! - `sim`: Deterministic simulation (entities, catch test, scoring, ramp)
//! - `driver`: Fixed-interval game loop that feeds input and forwards events
//! - `renderer`: Renderer collaborator trait plus terminal/JSON/recording backends
//! - `platform`: Input and clock abstraction (keyboard, scripted input)
//! - `settings`: Session parameters loaded from JSON

pub mod driver;
pub mod error;
pub mod platform;
pub mod renderer;
pub mod settings;
pub mod sim;

pub use driver::{GameLoop, LoopExit};
pub use error::{ConfigError, FrontendError};
pub use settings::SessionConfig;

/// Game configuration constants
pub mod consts {
    /// Play-field origin and size (field-local units)
    pub const BOX_MARGIN: f32 = 50.0;
    pub const BOX_TOP_X: f32 = BOX_MARGIN;
    pub const BOX_TOP_Y: f32 = BOX_MARGIN;
    pub const BOX_WIDTH: f32 = 700.0;
    pub const BOX_HEIGHT: f32 = 500.0;

    /// Seconds between ticks
    pub const TICK_INTERVAL: f64 = 0.01;

    /// Block defaults
    pub const BLOCK_WIDTH: f32 = 80.0;
    pub const BLOCK_HEIGHT: f32 = 30.0;
    /// Gap between the field's north edge and a freshly spawned block
    pub const BLOCK_TOP: f32 = 50.0;
    pub const BLOCK_POINTS: u32 = 10;
    pub const BLOCK_FALL_SPEED: f32 = 1.0;
    /// Added to the fall speed once per tick
    pub const BLOCK_FALL_ACCELERATION: f32 = 0.001;

    /// Paddle defaults
    pub const PADDLE_WIDTH: f32 = 100.0;
    pub const PADDLE_HEIGHT: f32 = 20.0;
    /// Distance from the field's south edge to the paddle's top edge
    pub const PADDLE_BOTTOM_OFFSET: f32 = 60.0;
    pub const PADDLE_SPEED: f32 = 10.0;

    /// Score bands checked when the block reaches the floor
    pub const EXCELLENT_SCORE: u32 = 500;
    pub const GOOD_SCORE: u32 = 300;
}
