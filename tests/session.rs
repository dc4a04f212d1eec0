//! Whole-session tests through the public API

use std::time::Duration;

use falling_block::platform::{InputEvent, ManualClock, NoInput, ScriptedInput};
use falling_block::renderer::{JsonLinesRenderer, RecordingRenderer};
use falling_block::sim::{Command, GameEvent, GamePhase, Outcome, PlayField, TextSlot, tick};
use falling_block::{GameLoop, LoopExit, SessionConfig};

const INTERVAL: Duration = Duration::from_millis(10);

fn headless_run(seed: u64) -> (LoopExit, u32, u64, String) {
    let mut field = PlayField::new(&SessionConfig::default(), seed).unwrap();
    let mut game = GameLoop::with_clock(
        JsonLinesRenderer::new(Vec::new()),
        NoInput,
        ManualClock::default(),
        INTERVAL,
    )
    .autopilot(true);
    let exit = game.run(&mut field).unwrap();
    let (renderer, _, _) = game.into_parts();
    let output = String::from_utf8(renderer.into_inner()).unwrap();
    (exit, field.score, field.ticks, output)
}

#[test]
fn test_headless_runs_are_reproducible() {
    let a = headless_run(2718);
    let b = headless_run(2718);
    assert_eq!(a, b);

    let (exit, score, _, output) = a;
    let LoopExit::Finished(outcome) = exit else {
        panic!("autopilot run was cancelled");
    };
    assert_eq!(outcome, Outcome::from_score(score, 500, 300));

    // Every line is one event; the last one is the end banner
    let last: GameEvent = serde_json::from_str(output.lines().last().unwrap()).unwrap();
    assert_eq!(
        last,
        GameEvent::Text {
            slot: TextSlot::Banner,
            text: outcome.message().to_string()
        }
    );
}

#[test]
fn test_score_text_tracks_catches() {
    let mut field = PlayField::new(&SessionConfig::default(), 5).unwrap();
    let mut game = GameLoop::with_clock(
        RecordingRenderer::new(),
        NoInput,
        ManualClock::default(),
        INTERVAL,
    )
    .autopilot(true);
    game.run(&mut field).unwrap();

    let renderer = game.renderer();
    let expected = format!("score: {}", field.score);
    assert_eq!(renderer.scene.text(TextSlot::Score), Some(expected.as_str()));

    let score_updates = renderer
        .events
        .iter()
        .filter(|e| matches!(e, GameEvent::Text { slot: TextSlot::Score, .. }))
        .count() as u32;
    // One initial "score: 0" plus one per catch
    assert_eq!(score_updates, 1 + field.score / 10);

    // Caught blocks were erased; only walls, paddle and the last block remain
    assert_eq!(renderer.scene.items.len(), 3);
    assert!(renderer.scene.items.contains_key(&field.block.id));
    assert!(renderer.scene.items.contains_key(&field.paddle.id));
}

#[test]
fn test_player_holding_left_loses() {
    // Paddle pinned to the west wall while blocks spawn anywhere: eventually one is missed
    let mut field = PlayField::new(&SessionConfig::default(), 99).unwrap();
    let mut game = GameLoop::with_clock(
        RecordingRenderer::new(),
        ScriptedInput::new([
            (1, InputEvent::Command(Command::Start)),
            (1, InputEvent::Command(Command::MoveLeft)),
        ]),
        ManualClock::default(),
        INTERVAL,
    );

    let exit = game.run(&mut field).unwrap();
    assert!(matches!(exit, LoopExit::Finished(_)));
    assert_eq!(field.paddle.motion.pos.x, field.bounds.west);
    assert!(field.block.motion.bottom() >= field.bounds.south);
}

#[test]
fn test_custom_thresholds_and_points() {
    let config = SessionConfig {
        block_points: 50,
        good_score: 50,
        excellent_score: 100,
        ..Default::default()
    };
    let mut field = PlayField::new(&config, 1).unwrap();
    field.apply(Command::Start);

    // Catch exactly one block, then let the next one fall
    while field.score == 0 {
        field.paddle.motion.pos.x = field.block.motion.pos.x.min(field.bounds.east - 100.0);
        tick(&mut field);
    }
    let far_x = if field.block.motion.center_x() > 400.0 {
        field.bounds.west
    } else {
        field.bounds.east - 100.0
    };
    while field.is_running() {
        field.paddle.motion.pos.x = far_x;
        tick(&mut field);
    }
    assert_eq!(field.score, 50);
    assert_eq!(field.phase, GamePhase::Ended(Outcome::Good));
}
