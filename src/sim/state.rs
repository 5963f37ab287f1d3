//! Simulation state and core entity types
//!
//! The Simulation Step owns everything here; renderers only ever see the
//! copies produced by [`super::snapshot`].

use glam::DVec2;
use serde::{Deserialize, Serialize};

use super::collision::{
    BlockContact, EdgeSet, border_touch_sides, classify_block_contact, paddle_contact,
};
use super::geometry::Rect;
use super::heading::Heading;
use crate::consts::*;

/// Wall-collision boundary, origin at the top-left corner
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Arena {
    pub width: f64,
    pub height: f64,
}

impl Arena {
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    pub fn center(&self) -> DVec2 {
        DVec2::new(self.width / 2.0, self.height / 2.0)
    }

    /// Clamp a raw pointer X reading into the arena
    pub fn clamp_x(&self, x: f64) -> f64 {
        x.clamp(0.0, self.width)
    }
}

impl Default for Arena {
    fn default() -> Self {
        Self::new(ARENA_WIDTH, ARENA_HEIGHT)
    }
}

/// The ball. Speed and radius are fixed at creation; only the centre and the
/// heading change.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Ball {
    pub center: DVec2,
    pub heading: Heading,
    radius: f64,
    speed: f64,
}

impl Ball {
    pub fn new(center: DVec2, radius: f64, heading: Heading, speed: f64) -> Self {
        Self {
            center,
            heading,
            radius,
            speed,
        }
    }

    /// Ball at the arena centre with the default launch heading and speed
    pub fn launch(arena: &Arena) -> Self {
        Self::new(
            arena.center(),
            BALL_RADIUS,
            Heading::new(BALL_START_HEADING),
            BALL_SPEED,
        )
    }

    #[inline]
    pub fn radius(&self) -> f64 {
        self.radius
    }

    #[inline]
    pub fn speed(&self) -> f64 {
        self.speed
    }
}

/// A destructible block. `visible` always equals `hit_points > 0`; a spent
/// block stays in the collection so indices remain stable.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Block {
    /// Top-left corner
    pub position: DVec2,
    pub width: i32,
    pub height: i32,
    hit_points: i32,
    visible: bool,
}

impl Block {
    pub fn new(x: f64, y: f64, width: i32, height: i32, hit_points: i32) -> Self {
        Self {
            position: DVec2::new(x, y),
            width,
            height,
            hit_points,
            visible: hit_points > 0,
        }
    }

    #[inline]
    pub fn hit_points(&self) -> i32 {
        self.hit_points
    }

    #[inline]
    pub fn visible(&self) -> bool {
        self.visible
    }

    /// Bounding rectangle of the block
    pub fn rect(&self) -> Rect {
        Rect::new(self.position, self.width as f64, self.height as f64)
    }

    /// Boundary coordinates as `(left_x, top_y, bottom_y, right_x)`
    pub fn angle_coordinates(&self) -> (f64, f64, f64, f64) {
        let r = self.rect();
        (r.left, r.top, r.bottom, r.right)
    }

    /// Edges whose interior side a ball at `point` has crossed
    pub fn border_touch_sides(&self, point: DVec2, radius: f64) -> EdgeSet {
        border_touch_sides(&self.rect(), point, radius)
    }

    /// Test the ball's move `prev -> next` against this block and take one
    /// hit on contact (once per call, even for a corner).
    pub fn resolve_ball_contact(&mut self, prev: DVec2, next: DVec2, radius: f64) -> BlockContact {
        if !self.visible {
            return BlockContact::NONE;
        }

        let contact = classify_block_contact(&self.rect(), prev, next, radius);
        if contact.is_hit() {
            self.take_hit();
        }
        contact
    }

    fn take_hit(&mut self) {
        self.hit_points -= 1;
        if self.hit_points <= 0 {
            self.visible = false;
        }
    }
}

/// The player's paddle. Its X centre is never stored: it comes from the
/// pointer reading of the current tick.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Paddle {
    pub y: f64,
    pub width: i32,
    pub height: i32,
}

impl Default for Paddle {
    fn default() -> Self {
        Self {
            y: PADDLE_Y,
            width: PADDLE_WIDTH,
            height: PADDLE_HEIGHT,
        }
    }
}

impl Paddle {
    /// Does the ball bounce off the paddle centred at `pointer_x` this tick?
    ///
    /// `pointer_x` must be the current tick's reading.
    pub fn reflects(&self, _prev: DVec2, next: DVec2, radius: f64, pointer_x: f64) -> bool {
        paddle_contact(next, radius, self.y, self.width as f64, pointer_x)
    }
}

/// Complete simulation state (deterministic, serializable)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimulationState {
    pub arena: Arena,
    pub ball: Ball,
    pub paddle: Paddle,
    /// Fixed-size block collection in level order
    pub blocks: Vec<Block>,
    /// Completed ticks
    pub tick_count: u64,
}

impl SimulationState {
    pub fn new(arena: Arena, ball: Ball, paddle: Paddle, blocks: Vec<Block>) -> Self {
        log::info!(
            "Simulation ready: arena {}x{}, {} blocks",
            arena.width,
            arena.height,
            blocks.len()
        );
        Self {
            arena,
            ball,
            paddle,
            blocks,
            tick_count: 0,
        }
    }

    /// Blocks that can still be hit
    pub fn visible_blocks(&self) -> usize {
        self.blocks.iter().filter(|b| b.visible()).count()
    }

    /// Hit-points left across the whole level
    pub fn remaining_hit_points(&self) -> i32 {
        self.blocks.iter().map(|b| b.hit_points().max(0)).sum()
    }
}
