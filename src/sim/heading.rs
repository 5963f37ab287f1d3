//! Ball heading and its axis reflections
//!
//! The per-tick displacement is the base vector `(0, -speed)` rotated by the
//! heading angle:
//!
//! ```text
//! | cos h  -sin h | |    0   |   |  speed * sin h |
//! | sin h   cos h | | -speed | = | -speed * cos h |
//! ```
//!
//! Heading 0 travels up the screen; increasing the heading swings the ball
//! toward +X. Under this form `2π - h` mirrors the X component and `π - h`
//! mirrors the Y component.

use std::f64::consts::{PI, TAU};

use glam::{DMat2, DVec2};
use serde::{Deserialize, Serialize};

use crate::normalize_angle;

/// Direction of travel in radians
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Heading(pub f64);

impl Heading {
    pub fn new(radians: f64) -> Self {
        Self(radians)
    }

    #[inline]
    pub fn radians(self) -> f64 {
        self.0
    }

    /// Mirror the horizontal component of travel (`2π - h`)
    #[inline]
    pub fn reflect_x(self) -> Self {
        Self(TAU - self.0)
    }

    /// Mirror the vertical component of travel (`π - h`)
    #[inline]
    pub fn reflect_y(self) -> Self {
        Self(PI - self.0)
    }

    /// Per-tick displacement for the given speed
    pub fn displacement(self, speed: f64) -> DVec2 {
        DMat2::from_angle(self.0) * DVec2::new(0.0, -speed)
    }

    /// Same heading expressed in [0, 2π), for display
    pub fn normalized(self) -> Self {
        Self(normalize_angle(self.0))
    }
}
