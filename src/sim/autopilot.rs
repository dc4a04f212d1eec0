//! Demo mode - the paddle steers itself toward the falling block

use super::state::{Command, PlayField};

impl<R> PlayField<R> {
    /// Command that moves the paddle centre toward the block centre.
    ///
    /// Stops once the centres are within half a paddle step, so the paddle
    /// doesn't jitter around the target.
    pub fn autopilot_command(&self) -> Command {
        let offset = self.block.motion.center_x() - self.paddle.motion.center_x();
        let dead_zone = self.config.paddle_speed / 2.0;
        if offset > dead_zone {
            Command::MoveRight
        } else if offset < -dead_zone {
            Command::MoveLeft
        } else {
            Command::Stop
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::settings::SessionConfig;
    use crate::sim::{Command, PlayField, tick};

    #[test]
    fn test_autopilot_direction() {
        let mut field = PlayField::new(&SessionConfig::default(), 1).unwrap();
        let paddle_center = field.paddle.motion.center_x();

        field.block.motion.pos.x = paddle_center + 100.0;
        assert_eq!(field.autopilot_command(), Command::MoveRight);

        field.block.motion.pos.x = paddle_center - 200.0;
        assert_eq!(field.autopilot_command(), Command::MoveLeft);

        field.block.motion.pos.x = paddle_center - field.block.motion.size.x / 2.0 + 2.0;
        assert_eq!(field.autopilot_command(), Command::Stop);
    }

    #[test]
    fn test_autopilot_catches_early_blocks() {
        let mut field = PlayField::new(&SessionConfig::default(), 31337).unwrap();
        field.apply(Command::Start);
        for _ in 0..3_000 {
            let cmd = field.autopilot_command();
            field.apply(cmd);
            tick(&mut field);
            if !field.is_running() {
                break;
            }
        }
        // Early on the paddle easily outruns the block, so the first catches are guaranteed
        assert!(field.score >= 50, "score {}", field.score);
    }
}
