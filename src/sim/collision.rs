//! Catch detection
//!
//! The catch test only looks at the block's leading (bottom) edge against the
//! paddle's top edge, combined with horizontal span overlap. It is not a full
//! rectangle intersection: a block whose bottom edge is anywhere at or below
//! the paddle's top counts as caught as long as the spans overlap.

use super::entity::{Block, Motion, Paddle};

/// Edge-overlap test on raw motion records
#[inline]
pub fn edge_overlap(block: &Motion, paddle: &Motion) -> bool {
    block.bottom() >= paddle.top()
        && block.right() >= paddle.left()
        && block.left() <= paddle.right()
}

/// Whether the paddle has caught the block
pub fn is_caught(block: &Block, paddle: &Paddle) -> bool {
    edge_overlap(&block.motion, &paddle.motion)
}

/// Whether the block's bottom edge has reached the floor
pub fn reached_floor(block: &Block, south: f32) -> bool {
    block.motion.bottom() >= south
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::Vec2;
    use proptest::prelude::*;

    fn rect(x: f32, y: f32, w: f32, h: f32) -> Motion {
        Motion::at_rest(Vec2::new(x, y), Vec2::new(w, h))
    }

    /// Mirror a rect across the vertical centre line of `[west, east]`
    fn mirror(m: &Motion, west: f32, east: f32) -> Motion {
        rect(west + east - m.right(), m.top(), m.size.x, m.size.y)
    }

    #[test]
    fn test_overlapping_block_at_paddle_row_is_caught() {
        let paddle = rect(300.0, 490.0, 100.0, 20.0);
        let block = rect(310.0, 490.0, 80.0, 30.0);
        assert!(edge_overlap(&block, &paddle));
    }

    #[test]
    fn test_block_beside_paddle_is_missed() {
        let paddle = rect(300.0, 490.0, 100.0, 20.0);
        let block = rect(450.0, 490.0, 80.0, 30.0);
        assert!(!edge_overlap(&block, &paddle));
    }

    #[test]
    fn test_block_above_paddle_is_not_caught() {
        let paddle = rect(300.0, 490.0, 100.0, 20.0);
        let block = rect(310.0, 459.0, 80.0, 30.0);
        assert!(!edge_overlap(&block, &paddle));
        let block = rect(310.0, 460.0, 80.0, 30.0);
        assert!(edge_overlap(&block, &paddle));
    }

    #[test]
    fn test_touching_edges_count() {
        let paddle = rect(300.0, 490.0, 100.0, 20.0);
        // Block's right edge touches paddle's left edge
        assert!(edge_overlap(&rect(220.0, 470.0, 80.0, 30.0), &paddle));
        // Block's left edge touches paddle's right edge
        assert!(edge_overlap(&rect(400.0, 470.0, 80.0, 30.0), &paddle));
        assert!(!edge_overlap(&rect(400.5, 470.0, 80.0, 30.0), &paddle));
    }

    #[test]
    fn test_block_below_paddle_top_still_caught() {
        // Fast block whose top already passed the paddle: bottom edge test still holds
        let paddle = rect(300.0, 490.0, 100.0, 20.0);
        let block = rect(320.0, 515.0, 80.0, 30.0);
        assert!(edge_overlap(&block, &paddle));
    }

    proptest! {
        #[test]
        fn prop_catch_is_mirror_symmetric(
            px in 0i32..=600,
            bx in 0i32..=620,
            by in 0i32..=520,
            pw in 1i32..=100,
            bw in 1i32..=80,
        ) {
            let (west, east) = (0.0, 700.0);
            let paddle = rect(px as f32, 490.0, pw as f32, 20.0);
            let block = rect(bx as f32, by as f32, bw as f32, 30.0);

            let direct = edge_overlap(&block, &paddle);
            let mirrored = edge_overlap(&mirror(&block, west, east), &mirror(&paddle, west, east));
            prop_assert_eq!(direct, mirrored);
            // Deterministic
            prop_assert_eq!(direct, edge_overlap(&block, &paddle));
        }
    }
}
