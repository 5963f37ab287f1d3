//! Block Breaker - a breakout-style ball simulation
//!
//! Core modules:
//! - `sim`: Deterministic simulation (ball motion, collisions, block state)
//! - `game`: Drives the simulation from an input source
//! - `platform`: Input source abstraction (pointer/touch polling)
//! - `level`: Block layouts (explicit lists or seeded grids)
//! - `settings`: Data-driven configuration with validation

pub mod game;
pub mod level;
pub mod platform;
pub mod settings;
pub mod sim;

pub use game::Game;
pub use level::{BlockSpec, LevelLayout};
pub use settings::{Settings, SettingsError};

/// Game configuration constants
pub mod consts {
    /// Arena dimensions (wall-collision boundary)
    pub const ARENA_WIDTH: f64 = 240.0;
    pub const ARENA_HEIGHT: f64 = 360.0;

    /// Ball defaults
    pub const BALL_RADIUS: f64 = 3.0;
    /// Distance travelled per tick
    pub const BALL_SPEED: f64 = 5.0;
    /// Launch heading (radians)
    pub const BALL_START_HEADING: f64 = std::f64::consts::FRAC_PI_4;

    /// Paddle defaults - y is fixed, x follows the pointer
    pub const PADDLE_Y: f64 = 320.0;
    pub const PADDLE_WIDTH: i32 = 20;
    pub const PADDLE_HEIGHT: i32 = 5;

    /// Blocks start with 1..=MAX_BLOCK_HIT_POINTS
    pub const MAX_BLOCK_HIT_POINTS: i32 = 3;
    /// Largest generated grid a level may ask for
    pub const MAX_GRID_BLOCKS: u64 = 4_096;
}

/// Normalized angle to [0, 2π)
#[inline]
pub fn normalize_angle(angle: f64) -> f64 {
    angle.rem_euclid(std::f64::consts::TAU)
}
