//! Table settings
//!
//! Loaded from JSON on startup; any field left out falls back to its default.

use std::path::Path;

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::consts::*;
use crate::{Error, Result};

/// Who drives a paddle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PlayerKind {
    /// Host-supplied key state via `Controls`
    Human,
    /// Chases the ball through the observer
    Ai,
}

/// Table configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    // === Playfield ===
    /// Playfield width, fixed for the match
    pub width: f32,
    /// Playfield height, fixed for the match
    pub height: f32,

    // === Paddles ===
    pub paddle_width: f32,
    pub paddle_height: f32,
    /// Paddle travel speed (pixels per second)
    pub paddle_speed: f32,
    /// Keep paddles inside [0, height - paddle_height]
    pub clamp_paddles: bool,
    /// AI ignores vertical offsets smaller than this
    pub ai_dead_zone: f32,
    /// Player 1, defending the left edge
    pub left_player: PlayerKind,
    /// Player 2, defending the right edge
    pub right_player: PlayerKind,

    // === Ball ===
    pub ball_width: f32,
    pub ball_height: f32,
    /// Speed of a freshly served ball
    pub ball_speed: f32,
    /// Speed set on every paddle hit
    pub rally_speed: f32,

    // === Simulation ===
    /// RNG seed for serve angles
    pub seed: u64,
    /// Frame deltas above this are clamped
    pub max_frame_dt: f32,
    /// Frames are split into steps no longer than this
    pub max_step_dt: f32,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            width: PLAYFIELD_WIDTH,
            height: PLAYFIELD_HEIGHT,

            paddle_width: PADDLE_WIDTH,
            paddle_height: PADDLE_HEIGHT,
            paddle_speed: PADDLE_SPEED,
            clamp_paddles: true,
            ai_dead_zone: AI_DEAD_ZONE,
            left_player: PlayerKind::Human,
            right_player: PlayerKind::Ai,

            ball_width: BALL_SIZE,
            ball_height: BALL_SIZE,
            ball_speed: BALL_START_SPEED,
            rally_speed: BALL_RALLY_SPEED,

            seed: DEFAULT_SEED,
            max_frame_dt: MAX_FRAME_DT,
            max_step_dt: MAX_STEP_DT,
        }
    }
}

impl Settings {
    /// Defaults for a playfield of the given size (as reported by the display)
    pub fn for_playfield(width: f32, height: f32) -> Self {
        Self {
            width,
            height,
            ..Self::default()
        }
    }

    /// Playfield dimensions
    pub fn bounds(&self) -> Vec2 {
        Vec2::new(self.width, self.height)
    }

    /// Reject settings that describe an unplayable table
    pub fn validate(&self) -> Result<()> {
        let positive = [
            ("width", self.width),
            ("height", self.height),
            ("paddle_width", self.paddle_width),
            ("paddle_height", self.paddle_height),
            ("ball_width", self.ball_width),
            ("ball_height", self.ball_height),
            ("max_step_dt", self.max_step_dt),
        ];
        for (name, value) in positive {
            if !(value.is_finite() && value > 0.0) {
                return Err(Error::InvalidSettings(format!(
                    "{name} must be positive, got {value}"
                )));
            }
        }

        let non_negative = [
            ("paddle_speed", self.paddle_speed),
            ("ball_speed", self.ball_speed),
            ("rally_speed", self.rally_speed),
            ("ai_dead_zone", self.ai_dead_zone),
            ("max_frame_dt", self.max_frame_dt),
        ];
        for (name, value) in non_negative {
            if !(value.is_finite() && value >= 0.0) {
                return Err(Error::InvalidSettings(format!(
                    "{name} must be non-negative, got {value}"
                )));
            }
        }

        if self.paddle_height > self.height || self.ball_height > self.height {
            return Err(Error::InvalidSettings(
                "paddle and ball must fit the playfield height".to_string(),
            ));
        }
        if self.max_frame_dt / self.max_step_dt > MAX_SUBSTEPS as f32 + 1e-3 {
            return Err(Error::InvalidSettings(format!(
                "max_step_dt {} splits a {}s frame into more than {} steps",
                self.max_step_dt, self.max_frame_dt, MAX_SUBSTEPS
            )));
        }
        // Both paddles sit PADDLE_INSET widths in from their edge
        if 2.0 * (PADDLE_INSET + 1.0) * self.paddle_width + self.ball_width > self.width {
            return Err(Error::InvalidSettings(
                "playfield too narrow for two paddles and a ball".to_string(),
            ));
        }

        Ok(())
    }

    /// Parse and validate settings from JSON
    pub fn from_json(json: &str) -> Result<Self> {
        let settings: Settings = serde_json::from_str(json)?;
        settings.validate()?;
        Ok(settings)
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Load settings from a JSON file
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path)?;
        let settings = Self::from_json(&json)?;
        log::info!("Loaded settings from {}", path.display());
        Ok(settings)
    }

    /// Save settings to a JSON file
    pub fn save(&self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        std::fs::write(path, self.to_json()?)?;
        log::info!("Settings saved to {}", path.display());
        Ok(())
    }
}
