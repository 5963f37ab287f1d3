//! Read-only views of the simulation for the renderer
//!
//! Snapshots are owned copies: nothing a renderer does with them can reach
//! back into the simulation.

use glam::DVec2;
use serde::{Deserialize, Serialize};

use super::state::{Ball, Block, Paddle, SimulationState};

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BallSnapshot {
    pub center: DVec2,
    pub radius: f64,
    /// Heading in [0, 2π)
    pub heading: f64,
}

/// Indicator level for a block's remaining hit-points
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BlockShade {
    /// Three or more hits left
    Strong,
    Medium,
    /// One hit left
    Weak,
    Spent,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BlockSnapshot {
    pub position: DVec2,
    pub width: i32,
    pub height: i32,
    pub visible: bool,
    pub hit_points: i32,
}

impl BlockSnapshot {
    pub fn shade(&self) -> BlockShade {
        match self.hit_points {
            hp if hp >= 3 => BlockShade::Strong,
            2 => BlockShade::Medium,
            1 => BlockShade::Weak,
            _ => BlockShade::Spent,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PaddleSnapshot {
    pub x_center: f64,
    pub y: f64,
    pub width: i32,
    pub height: i32,
}

/// Everything a renderer needs for one frame
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FrameSnapshot {
    pub tick: u64,
    pub ball: BallSnapshot,
    pub blocks: Vec<BlockSnapshot>,
    pub paddle: PaddleSnapshot,
}

impl Ball {
    pub fn render_state(&self) -> BallSnapshot {
        BallSnapshot {
            center: self.center,
            radius: self.radius(),
            heading: self.heading.normalized().radians(),
        }
    }
}

impl Block {
    pub fn render_state(&self) -> BlockSnapshot {
        BlockSnapshot {
            position: self.position,
            width: self.width,
            height: self.height,
            visible: self.visible(),
            hit_points: self.hit_points(),
        }
    }
}

impl Paddle {
    /// Paddle drawn centred on the given pointer X
    pub fn render_state(&self, pointer_x: f64) -> PaddleSnapshot {
        PaddleSnapshot {
            x_center: pointer_x,
            y: self.y,
            width: self.width,
            height: self.height,
        }
    }
}

impl SimulationState {
    /// Frame view with the paddle placed at `pointer_x`
    pub fn snapshot(&self, pointer_x: f64) -> FrameSnapshot {
        FrameSnapshot {
            tick: self.tick_count,
            ball: self.ball.render_state(),
            blocks: self.blocks.iter().map(Block::render_state).collect(),
            paddle: self.paddle.render_state(pointer_x),
        }
    }
}
