//! Pong Arena - simulation core for a two-paddle ball-bounce table
//!
//! Core modules:
//! - `sim`: Deterministic simulation (entities, capabilities, collisions, scoring)
//! - `renderer`: CPU-side shape batch the host uploads or draws
//! - `settings`: Data-driven table configuration
//! - `error`: Construction and configuration failures

pub mod error;
pub mod renderer;
pub mod settings;
pub mod sim;

pub use error::{Error, Result};
pub use settings::{PlayerKind, Settings};

use glam::Vec2;

/// Game configuration constants
pub mod consts {
    use std::f32::consts::PI;

    /// Ball travel angle bounds (radians). Excludes near-vertical and
    /// near-zero-horizontal headings.
    pub const MIN_ANGLE: f32 = 4.0 * PI / 6.0;
    pub const MAX_ANGLE: f32 = 8.0 * PI / 6.0;

    /// Playfield defaults (pixels)
    pub const PLAYFIELD_WIDTH: f32 = 800.0;
    pub const PLAYFIELD_HEIGHT: f32 = 600.0;

    /// Paddle defaults
    pub const PADDLE_WIDTH: f32 = 20.0;
    pub const PADDLE_HEIGHT: f32 = 100.0;
    pub const PADDLE_SPEED: f32 = 400.0; // pixels per second
    /// Paddles sit this many paddle widths in from their edge
    pub const PADDLE_INSET: f32 = 5.0;

    /// Ball defaults
    pub const BALL_SIZE: f32 = 20.0;
    pub const BALL_START_SPEED: f32 = 300.0;
    /// Speed the ball is set to on every paddle hit
    pub const BALL_RALLY_SPEED: f32 = 500.0;

    /// AI ignores offsets smaller than this (pixels)
    pub const AI_DEAD_ZONE: f32 = 10.0;

    /// Largest frame delta accepted from the host (seconds)
    pub const MAX_FRAME_DT: f32 = 1.0;
    /// Largest single integration step (120 Hz)
    pub const MAX_STEP_DT: f32 = 1.0 / 120.0;
    /// Upper bound on update passes per frame
    pub const MAX_SUBSTEPS: u32 = 240;

    /// Default RNG seed
    pub const DEFAULT_SEED: u64 = 0x5EED_BA11;
}

/// Sign of `value` as ±1.0, treating exactly zero as +1.0
///
/// `value / value.abs()` is NaN at zero; a zero horizontal velocity picks
/// the positive direction instead.
#[inline]
pub fn sign_or_positive(value: f32) -> f32 {
    if value < 0.0 { -1.0 } else { 1.0 }
}

/// Direction vector for a travel angle with an explicit horizontal sign
#[inline]
pub fn direction_from_angle(angle: f32, horizontal_sign: f32) -> Vec2 {
    Vec2::new(angle.cos() * horizontal_sign, angle.sin())
}
