//! Pong Arena headless host
//!
//! Runs an unattended match at 60 Hz and logs the result. The left paddle
//! takes human-style key state from a second chaser that watches the
//! tracked ball. Usage:
//!
//! ```text
//! pong-arena [settings.json] [seconds]
//! ```

use anyhow::Context;
use pong_arena::renderer::ShapeBatch;
use pong_arena::sim::{Arena, Direction, GameEvent, Side};
use pong_arena::{PlayerKind, Settings};

/// Key state a player holding the left paddle on the ball would press
fn chase(arena: &Arena, dead_zone: f32) -> Option<Direction> {
    let ball = arena.body(arena.observer().current_target()?)?;
    let paddle = arena.paddle(Side::Left)?.body();
    let dy = ball.center().y - paddle.center().y;
    if dy.abs() <= dead_zone {
        None
    } else if dy < 0.0 {
        Some(Direction::Up)
    } else {
        Some(Direction::Down)
    }
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    log::info!("Pong Arena (headless) starting...");

    let mut args = std::env::args().skip(1);
    let mut settings = match args.next() {
        Some(path) => Settings::load(&path).with_context(|| format!("loading {path}"))?,
        None => Settings::default(),
    };
    let seconds: u32 = match args.next() {
        Some(s) => s.parse().with_context(|| format!("invalid duration {s:?}"))?,
        None => 30,
    };

    settings.left_player = PlayerKind::Human;
    settings.right_player = PlayerKind::Ai;
    let dead_zone = settings.ai_dead_zone;

    let mut arena = Arena::new(settings).context("building arena")?;
    let keys = arena.controls(Side::Left).clone();
    let mut batch = ShapeBatch::new();
    let dt = 1.0 / 60.0;

    for _ in 0..seconds * 60 {
        keys.set(chase(&arena, dead_zone));
        arena.frame(dt, &mut batch);
        for event in arena.events() {
            if let GameEvent::Goal { scorer, .. } = event {
                log::debug!("{:?} player scores", scorer);
            }
        }
    }

    let scores = arena.scores();
    log::info!(
        "Final score after {}s: {} - {} ({} steps, {} vertices last frame)",
        seconds,
        scores.left,
        scores.right,
        arena.steps(),
        batch.vertices().len()
    );
    println!("{}", serde_json::to_string_pretty(&arena.snapshot())?);
    Ok(())
}
