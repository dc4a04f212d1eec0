//! Fixed-interval simulation tick
//!
//! One call advances the field by one frame: block falls, catch test,
//! floor test, paddle step and clamp, then the fall-speed ramp.

use rand::Rng;

use super::collision::{is_caught, reached_floor};
use super::event::{TextSlot, score_text};
use super::state::{GamePhase, Outcome, PlayField};

/// Advance the field by one tick and return the phase afterwards.
///
/// Does nothing unless the field is running. The tick that ends the round
/// stops after the floor test: the paddle is not moved and the ramp is not
/// advanced.
pub fn tick<R: Rng>(field: &mut PlayField<R>) -> GamePhase {
    if field.phase != GamePhase::Running {
        return field.phase;
    }
    field.ticks += 1;

    // 1. Block falls by the shared speed
    field.block.fall(field.ramp.speed());
    field.push_block();

    // 2. Catch test on the block's leading edge
    if is_caught(&field.block, &field.paddle) {
        field.score = field.score.saturating_add(field.block.points);
        log::debug!(
            "Caught block {:?} at tick {} (score {})",
            field.block.id,
            field.ticks,
            field.score
        );
        field.push_text(TextSlot::Score, score_text(field.score));
        field.respawn_block();
    }

    // 3. Floor test against the current (possibly fresh) block
    if reached_floor(&field.block, field.bounds.south) {
        let outcome = Outcome::from_score(
            field.score,
            field.config.excellent_score,
            field.config.good_score,
        );
        field.phase = GamePhase::Ended(outcome);
        field.push_text(TextSlot::Banner, outcome.message().to_string());
        log::info!(
            "Round ended after {} ticks: {:?} with score {} (fall speed {:.3})",
            field.ticks,
            outcome,
            field.score,
            field.ramp.speed()
        );
        return field.phase;
    }

    // 4. Paddle moves, then is pulled back inside the walls
    field.paddle.step();
    field.paddle.clamp_x(field.bounds.west, field.bounds.east);
    field.push_paddle();

    // 5. Difficulty ramp, once per tick regardless of catches
    field.ramp.advance();

    log::trace!(
        "tick {}: block y={:.2} paddle x={:.1} speed={:.3}",
        field.ticks,
        field.block.motion.pos.y,
        field.paddle.motion.pos.x,
        field.ramp.speed()
    );
    field.phase
}
