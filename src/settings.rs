//! Simulation settings
//!
//! Loaded from JSON once at start-up and validated before any state is built.
//! The simulation itself never sees an invalid configuration.

use std::path::Path;

use glam::DVec2;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::consts::*;
use crate::level::LevelLayout;
use crate::sim::{Arena, Ball, Heading, Paddle, SimulationState};

/// Errors raised while loading or validating settings
#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("failed to read settings: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to parse settings: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("invalid settings: {0}")]
    Invalid(String),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ArenaSettings {
    pub width: f64,
    pub height: f64,
}

impl Default for ArenaSettings {
    fn default() -> Self {
        Self {
            width: ARENA_WIDTH,
            height: ARENA_HEIGHT,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BallSettings {
    pub radius: f64,
    /// Distance per tick
    pub speed: f64,
    /// Launch heading (radians)
    pub heading: f64,
    /// Start centre; arena centre when omitted
    pub start: Option<(f64, f64)>,
}

impl Default for BallSettings {
    fn default() -> Self {
        Self {
            radius: BALL_RADIUS,
            speed: BALL_SPEED,
            heading: BALL_START_HEADING,
            start: None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PaddleSettings {
    pub y: f64,
    pub width: i32,
    pub height: i32,
}

impl Default for PaddleSettings {
    fn default() -> Self {
        Self {
            y: PADDLE_Y,
            width: PADDLE_WIDTH,
            height: PADDLE_HEIGHT,
        }
    }
}

/// Full simulation configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub arena: ArenaSettings,
    pub ball: BallSettings,
    pub paddle: PaddleSettings,
    pub level: LevelLayout,
}

impl Default for Settings {
    fn default() -> Self {
        let arena = ArenaSettings::default();
        Self {
            level: LevelLayout::default_for(&Arena::new(arena.width, arena.height)),
            arena,
            ball: BallSettings::default(),
            paddle: PaddleSettings::default(),
        }
    }
}

impl Settings {
    /// Parse settings from a JSON string (not yet validated)
    pub fn from_json(json: &str) -> Result<Self, SettingsError> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn to_json(&self) -> Result<String, SettingsError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Read, parse and validate a settings file
    pub fn load_from_path(path: impl AsRef<Path>) -> Result<Self, SettingsError> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path)?;
        let settings = Self::from_json(&json)?;
        settings.validate()?;
        log::info!("Loaded settings from {}", path.display());
        Ok(settings)
    }

    fn arena(&self) -> Arena {
        Arena::new(self.arena.width, self.arena.height)
    }

    fn ball_start(&self) -> DVec2 {
        self.ball
            .start
            .map(|(x, y)| DVec2::new(x, y))
            .unwrap_or_else(|| self.arena().center())
    }

    /// Reject configurations the simulation cannot run
    pub fn validate(&self) -> Result<(), SettingsError> {
        let invalid =
            |msg: String| -> Result<(), SettingsError> { Err(SettingsError::Invalid(msg)) };

        let a = &self.arena;
        if !(a.width.is_finite() && a.height.is_finite()) || a.width <= 0.0 || a.height <= 0.0 {
            return invalid(format!("arena must be positive, got {}x{}", a.width, a.height));
        }

        let b = &self.ball;
        if !b.radius.is_finite() || b.radius <= 0.0 {
            return invalid(format!("ball.radius must be > 0, got {}", b.radius));
        }
        if !b.speed.is_finite() || b.speed <= 0.0 {
            return invalid(format!("ball.speed must be > 0, got {}", b.speed));
        }
        if !b.heading.is_finite() {
            return invalid(format!("ball.heading must be finite, got {}", b.heading));
        }
        let start = self.ball_start();
        if start.x - b.radius < 0.0
            || start.x + b.radius > a.width
            || start.y - b.radius < 0.0
            || start.y + b.radius > a.height
        {
            return invalid(format!(
                "ball at ({}, {}) with radius {} does not fit in the arena",
                start.x, start.y, b.radius
            ));
        }

        let p = &self.paddle;
        if p.width <= 0 || p.height <= 0 {
            return invalid(format!("paddle must be positive, got {}x{}", p.width, p.height));
        }
        if !(0.0..=a.height).contains(&p.y) {
            return invalid(format!("paddle.y {} outside the arena", p.y));
        }

        // Size the grid before expanding it
        if let LevelLayout::Grid { rows, cols, .. } = self.level {
            let count = rows as u64 * cols as u64;
            if count == 0 || count > MAX_GRID_BLOCKS {
                return invalid(format!(
                    "level grid must hold 1..={MAX_GRID_BLOCKS} blocks, got {rows}x{cols}"
                ));
            }
        }
        for (i, spec) in self.level.specs().iter().enumerate() {
            if spec.width <= 0 || spec.height <= 0 {
                return invalid(format!(
                    "block {i} must be positive, got {}x{}",
                    spec.width, spec.height
                ));
            }
            if !(1..=MAX_BLOCK_HIT_POINTS).contains(&spec.hit_points) {
                return invalid(format!(
                    "block {i} hit_points must be 1..={MAX_BLOCK_HIT_POINTS}, got {}",
                    spec.hit_points
                ));
            }
        }

        Ok(())
    }

    /// Validate and build the initial simulation state
    pub fn into_state(self) -> Result<SimulationState, SettingsError> {
        self.validate()?;
        let arena = self.arena();
        let ball = Ball::new(
            self.ball_start(),
            self.ball.radius,
            Heading::new(self.ball.heading),
            self.ball.speed,
        );
        let paddle = Paddle {
            y: self.paddle.y,
            width: self.paddle.width,
            height: self.paddle.height,
        };
        Ok(SimulationState::new(arena, ball, paddle, self.level.build()))
    }
}
