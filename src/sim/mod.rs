//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - One fixed step per tick
//! - No randomness, no wall-clock time
//! - Stable block order (indices never change)
//! - No rendering or platform dependencies

pub mod collision;
pub mod geometry;
pub mod heading;
pub mod motion;
pub mod snapshot;
pub mod state;
pub mod tick;

pub use collision::{BlockContact, Edge, EdgeSet, Reflection, classify_block_contact};
pub use geometry::{Rect, Side, side_of_line};
pub use heading::Heading;
pub use motion::{commit, tentative_step, wall_reflection};
pub use snapshot::{BallSnapshot, BlockShade, BlockSnapshot, FrameSnapshot, PaddleSnapshot};
pub use state::{Arena, Ball, Block, Paddle, SimulationState};
pub use tick::{SimEvent, TickInput, TickReport, tick};
