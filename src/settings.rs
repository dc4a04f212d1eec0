//! Session parameters
//!
//! Fixed for the lifetime of a play-field. Loaded from an optional JSON file;
//! any field left out falls back to the defaults in [`crate::consts`].

use std::path::Path;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::consts::*;
use crate::error::ConfigError;
use crate::sim::Bounds;

/// Session parameters
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SessionConfig {
    // === Field ===
    /// Left edge of the field
    pub field_x: f32,
    /// Top edge of the field
    pub field_y: f32,
    pub field_width: f32,
    pub field_height: f32,
    /// Seconds between ticks
    pub tick_interval: f64,

    // === Paddle ===
    pub paddle_width: f32,
    pub paddle_height: f32,
    /// Horizontal distance covered per tick while a direction key is held
    pub paddle_speed: f32,
    /// Distance from the south edge up to the paddle's top edge
    pub paddle_bottom_offset: f32,

    // === Block ===
    pub block_width: f32,
    pub block_height: f32,
    pub block_points: u32,
    /// Distance from the north edge down to a freshly spawned block
    pub block_top_offset: f32,
    /// Fall speed at the first tick
    pub fall_speed: f32,
    /// Added to the fall speed after every tick
    pub fall_acceleration: f32,

    // === Scoring ===
    pub excellent_score: u32,
    pub good_score: u32,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            field_x: BOX_TOP_X,
            field_y: BOX_TOP_Y,
            field_width: BOX_WIDTH,
            field_height: BOX_HEIGHT,
            tick_interval: TICK_INTERVAL,

            paddle_width: PADDLE_WIDTH,
            paddle_height: PADDLE_HEIGHT,
            paddle_speed: PADDLE_SPEED,
            paddle_bottom_offset: PADDLE_BOTTOM_OFFSET,

            block_width: BLOCK_WIDTH,
            block_height: BLOCK_HEIGHT,
            block_points: BLOCK_POINTS,
            block_top_offset: BLOCK_TOP,
            fall_speed: BLOCK_FALL_SPEED,
            fall_acceleration: BLOCK_FALL_ACCELERATION,

            excellent_score: EXCELLENT_SCORE,
            good_score: GOOD_SCORE,
        }
    }
}

impl SessionConfig {
    /// Field edges derived from origin and size
    pub fn bounds(&self) -> Bounds {
        Bounds {
            west: self.field_x,
            north: self.field_y,
            east: self.field_x + self.field_width,
            south: self.field_y + self.field_height,
        }
    }

    /// Y coordinate of the paddle's top edge
    pub fn paddle_top(&self) -> f32 {
        self.bounds().south - self.paddle_bottom_offset
    }

    /// Y coordinate of a freshly spawned block's top edge
    pub fn spawn_top(&self) -> f32 {
        self.bounds().north + self.block_top_offset
    }

    /// Wall-clock time between ticks. Only meaningful after [`Self::validate`].
    pub fn tick_duration(&self) -> Duration {
        Duration::from_secs_f64(self.tick_interval)
    }

    /// Reject parameter sets the simulation cannot run with
    pub fn validate(&self) -> Result<(), ConfigError> {
        let b = self.bounds();
        let finite = [b.west, b.north, b.east, b.south].iter().all(|v| v.is_finite());
        if !(finite && b.east > b.west && b.south > b.north) {
            return Err(ConfigError::InvalidBounds {
                west: b.west,
                north: b.north,
                east: b.east,
                south: b.south,
            });
        }

        check_size("paddle", self.paddle_width, self.paddle_height)?;
        check_size("block", self.block_width, self.block_height)?;
        check_width("paddle", self.paddle_width, self.field_width)?;
        check_width("block", self.block_width, self.field_width)?;

        if !(self.tick_interval > 0.0 && self.tick_interval.is_finite()) {
            return Err(ConfigError::InvalidTickInterval(self.tick_interval));
        }

        check_speed("paddle speed", "non-negative", self.paddle_speed, |v| v >= 0.0)?;
        check_speed("fall speed", "positive", self.fall_speed, |v| v > 0.0)?;
        check_speed("fall acceleration", "non-negative", self.fall_acceleration, |v| {
            v >= 0.0
        })?;

        // At the floor's magnitude a step must still change the block's y
        if b.south + self.fall_speed <= b.south {
            return Err(ConfigError::InvalidSpeed {
                what: "fall speed",
                requirement: "large enough to move a block near the floor",
                value: self.fall_speed,
            });
        }

        check_offset("paddle bottom offset", self.paddle_bottom_offset)?;
        check_offset("block top offset", self.block_top_offset)?;

        let paddle_top = self.paddle_top();
        let paddle_bottom = paddle_top + self.paddle_height;
        if paddle_top < b.north || paddle_bottom > b.south {
            return Err(ConfigError::PaddleOutsideField {
                paddle_top,
                paddle_bottom,
                north: b.north,
                south: b.south,
            });
        }

        // A block spawning at or below the paddle row would be caught on every tick
        let spawn_bottom = self.spawn_top() + self.block_height;
        if spawn_bottom >= paddle_top {
            return Err(ConfigError::SpawnOverlapsPaddle {
                spawn_bottom,
                paddle_top,
            });
        }

        if self.good_score > self.excellent_score {
            return Err(ConfigError::ThresholdsOutOfOrder {
                good: self.good_score,
                excellent: self.excellent_score,
            });
        }

        Ok(())
    }

    /// Load and validate a JSON config file
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let json = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let config: Self = serde_json::from_str(&json).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })?;
        config.validate()?;
        log::info!("Loaded session config from {}", path.display());
        Ok(config)
    }
}

fn check_size(what: &'static str, width: f32, height: f32) -> Result<(), ConfigError> {
    if width > 0.0 && height > 0.0 && width.is_finite() && height.is_finite() {
        Ok(())
    } else {
        Err(ConfigError::NonPositiveSize {
            what,
            width,
            height,
        })
    }
}

fn check_width(what: &'static str, width: f32, field_width: f32) -> Result<(), ConfigError> {
    if width <= field_width {
        Ok(())
    } else {
        Err(ConfigError::TooWide {
            what,
            width,
            field_width,
        })
    }
}

fn check_offset(what: &'static str, value: f32) -> Result<(), ConfigError> {
    if value.is_finite() && value >= 0.0 {
        Ok(())
    } else {
        Err(ConfigError::InvalidOffset { what, value })
    }
}

fn check_speed(
    what: &'static str,
    requirement: &'static str,
    value: f32,
    ok: impl Fn(f32) -> bool,
) -> Result<(), ConfigError> {
    if value.is_finite() && ok(value) {
        Ok(())
    } else {
        Err(ConfigError::InvalidSpeed {
            what,
            requirement,
            value,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_valid() {
        let config = SessionConfig::default();
        config.validate().unwrap();

        let b = config.bounds();
        assert_eq!((b.west, b.north, b.east, b.south), (50.0, 50.0, 750.0, 550.0));
        assert_eq!(config.paddle_top(), 490.0);
        assert_eq!(config.spawn_top(), 100.0);
        assert_eq!(config.tick_duration(), Duration::from_millis(10));
    }

    #[test]
    fn test_block_wider_than_field_rejected() {
        let config = SessionConfig {
            block_width: 701.0,
            ..Default::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ConfigError::TooWide { what: "block", .. })
        ));
    }

    #[test]
    fn test_block_as_wide_as_field_accepted() {
        let config = SessionConfig {
            block_width: 700.0,
            ..Default::default()
        };
        config.validate().unwrap();
    }

    #[test]
    fn test_tick_interval_must_be_positive() {
        for interval in [0.0, -0.5, f64::NAN, f64::INFINITY] {
            let config = SessionConfig {
                tick_interval: interval,
                ..Default::default()
            };
            assert!(matches!(
                config.validate(),
                Err(ConfigError::InvalidTickInterval(_))
            ));
        }
    }

    #[test]
    fn test_inverted_bounds_rejected() {
        let config = SessionConfig {
            field_height: -10.0,
            ..Default::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ConfigError::InvalidBounds { .. })
        ));
    }

    #[test]
    fn test_zero_sized_paddle_rejected() {
        let config = SessionConfig {
            paddle_height: 0.0,
            ..Default::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ConfigError::NonPositiveSize { what: "paddle", .. })
        ));
    }

    #[test]
    fn test_negative_acceleration_rejected() {
        let config = SessionConfig {
            fall_acceleration: -0.001,
            ..Default::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ConfigError::InvalidSpeed { what: "fall acceleration", .. })
        ));
    }

    #[test]
    fn test_spawn_row_must_be_above_paddle() {
        let config = SessionConfig {
            block_top_offset: 420.0,
            ..Default::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ConfigError::SpawnOverlapsPaddle { .. })
        ));
    }

    #[test]
    fn test_offsets_must_be_finite_and_inside_field() {
        for (paddle_offset, block_offset) in [
            (60.0, -1.0),
            (60.0, f32::NEG_INFINITY),
            (60.0, f32::NAN),
            (f32::NAN, 50.0),
            (f32::INFINITY, 50.0),
        ] {
            let config = SessionConfig {
                paddle_bottom_offset: paddle_offset,
                block_top_offset: block_offset,
                ..Default::default()
            };
            assert!(
                matches!(config.validate(), Err(ConfigError::InvalidOffset { .. })),
                "offsets {paddle_offset}/{block_offset} accepted"
            );
        }
    }

    #[test]
    fn test_overflowing_json_offset_rejected() {
        // serde_json reads an out-of-range f32 as infinity
        let config: SessionConfig =
            serde_json::from_str(r#"{ "block_top_offset": -1e39 }"#).unwrap();
        assert!(matches!(
            config.validate(),
            Err(ConfigError::InvalidOffset { what: "block top offset", .. })
        ));
    }

    #[test]
    fn test_non_finite_field_rejected() {
        let config = SessionConfig {
            field_width: f32::INFINITY,
            ..Default::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ConfigError::InvalidBounds { .. })
        ));
    }

    #[test]
    fn test_fall_speed_lost_in_rounding_rejected() {
        let config = SessionConfig {
            fall_speed: 1e-30,
            fall_acceleration: 0.0,
            ..Default::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ConfigError::InvalidSpeed { what: "fall speed", .. })
        ));
    }

    #[test]
    fn test_paddle_below_floor_rejected() {
        let config = SessionConfig {
            paddle_bottom_offset: 10.0,
            ..Default::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ConfigError::PaddleOutsideField { .. })
        ));
    }

    #[test]
    fn test_thresholds_out_of_order_rejected() {
        let config = SessionConfig {
            good_score: 600,
            ..Default::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ConfigError::ThresholdsOutOfOrder { good: 600, excellent: 500 })
        ));
    }

    #[test]
    fn test_partial_json_uses_defaults() {
        let config: SessionConfig =
            serde_json::from_str(r#"{ "block_points": 25, "fall_acceleration": 0.01 }"#).unwrap();
        assert_eq!(config.block_points, 25);
        assert_eq!(config.fall_acceleration, 0.01);
        assert_eq!(config.field_width, BOX_WIDTH);
        assert_eq!(config.excellent_score, EXCELLENT_SCORE);
    }

    #[test]
    fn test_load_missing_file() {
        let err = SessionConfig::load(Path::new("/nonexistent/falling-block.json")).unwrap_err();
        assert!(matches!(err, ConfigError::Io { .. }));
    }

    #[test]
    fn test_load_rejects_invalid_file() {
        let path = std::env::temp_dir().join(format!(
            "falling-block-config-{}.json",
            std::process::id()
        ));
        std::fs::write(&path, r#"{ "block_width": 9000 }"#).unwrap();
        let err = SessionConfig::load(&path).unwrap_err();
        std::fs::remove_file(&path).ok();
        assert!(matches!(err, ConfigError::TooWide { .. }));
    }
}
