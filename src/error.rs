//! Error types
//!
//! Configuration problems are caught before the first tick. Frontend errors
//! come from the renderer or input collaborators and stop the driver loop.

use std::path::PathBuf;

use thiserror::Error;

/// Invalid or unreadable session parameters
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse config {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("field bounds are inverted or empty (west {west}, north {north}, east {east}, south {south})")]
    InvalidBounds {
        west: f32,
        north: f32,
        east: f32,
        south: f32,
    },

    #[error("{what} size must be positive, got {width}x{height}")]
    NonPositiveSize {
        what: &'static str,
        width: f32,
        height: f32,
    },

    #[error("{what} is {width} wide but the field is only {field_width} wide")]
    TooWide {
        what: &'static str,
        width: f32,
        field_width: f32,
    },

    #[error("paddle does not fit inside the field (top {paddle_top}, bottom {paddle_bottom}, field {north}..{south})")]
    PaddleOutsideField {
        paddle_top: f32,
        paddle_bottom: f32,
        north: f32,
        south: f32,
    },

    #[error("blocks spawn with their bottom at {spawn_bottom}, which is not above the paddle top {paddle_top}")]
    SpawnOverlapsPaddle { spawn_bottom: f32, paddle_top: f32 },

    #[error("tick interval must be a positive number of seconds, got {0}")]
    InvalidTickInterval(f64),

    #[error("{what} must be finite and {requirement}, got {value}")]
    InvalidSpeed {
        what: &'static str,
        requirement: &'static str,
        value: f32,
    },

    #[error("{what} must be finite and non-negative, got {value}")]
    InvalidOffset { what: &'static str, value: f32 },

    #[error("good score threshold {good} is above the excellent threshold {excellent}")]
    ThresholdsOutOfOrder { good: u32, excellent: u32 },
}

/// Failure in a renderer or input collaborator
#[derive(Debug, Error)]
pub enum FrontendError {
    #[error("terminal I/O failed: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to encode event: {0}")]
    Encode(#[from] serde_json::Error),

    #[error("presentation surface is closed")]
    Closed,
}
