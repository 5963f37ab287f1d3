//! Fixed-step simulation tick
//!
//! Core game loop step that advances the simulation deterministically.

use serde::{Deserialize, Serialize};

use super::collision::Reflection;
use super::motion::{commit, tentative_step, wall_reflection};
use super::state::SimulationState;

/// Input for a single tick (deterministic)
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TickInput {
    /// Pointer/touch position polled this tick
    pub pointer: (i32, i32),
}

impl TickInput {
    pub fn at(x: i32, y: i32) -> Self {
        Self { pointer: (x, y) }
    }
}

/// Something that happened during a tick, in evaluation order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SimEvent {
    /// Ball would have left the arena on these axes
    WallBounce { x: bool, y: bool },
    /// Block at `index` took a hit and has `hit_points` left
    BlockHit { index: usize, hit_points: i32 },
    /// Block at `index` ran out of hit-points
    BlockDestroyed { index: usize },
    /// Ball bounced off the paddle
    PaddleBounce,
}

/// Outcome of one tick
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TickReport {
    /// Final per-axis reversal applied to the ball
    pub reflection: Reflection,
    /// Paddle centre used this tick (pointer X clamped to the arena)
    pub pointer_x: f64,
    pub events: Vec<SimEvent>,
}

/// Advance the simulation by one tick
///
/// Wall, block and paddle contacts are evaluated independently against the
/// same tentative position and OR-ed per axis, so their order never changes
/// the outcome.
pub fn tick(state: &mut SimulationState, input: &TickInput) -> TickReport {
    let pointer_x = state.arena.clamp_x(input.pointer.0 as f64);
    let prev = state.ball.center;
    let radius = state.ball.radius();
    let next = tentative_step(&state.ball);

    let mut events = Vec::new();

    // --- WALLS ---
    let mut reflection = wall_reflection(next, radius, &state.arena);
    if reflection.any() {
        events.push(SimEvent::WallBounce {
            x: reflection.x_reversed,
            y: reflection.y_reversed,
        });
    }

    // --- BLOCKS ---
    // Every block is asked; spent blocks report no contact themselves
    for (index, block) in state.blocks.iter_mut().enumerate() {
        let contact = block.resolve_ball_contact(prev, next, radius);
        if !contact.is_hit() {
            continue;
        }
        reflection.absorb(contact);

        log::debug!(
            "Block {} hit (horizontal={}, vertical={}), {} hp left",
            index,
            contact.hit_horizontal,
            contact.hit_vertical,
            block.hit_points()
        );
        events.push(SimEvent::BlockHit {
            index,
            hit_points: block.hit_points(),
        });

        if !block.visible() {
            log::info!("Block {} destroyed", index);
            events.push(SimEvent::BlockDestroyed { index });
        }
    }

    // --- PADDLE ---
    if state.paddle.reflects(prev, next, radius, pointer_x) {
        log::debug!("Paddle bounce at x={:.1}", next.x);
        reflection.y_reversed = true;
        events.push(SimEvent::PaddleBounce);
    }

    commit(&mut state.ball, next, reflection);
    state.tick_count += 1;

    log::trace!(
        "Tick {}: ball ({:.2}, {:.2}) heading {:.4}",
        state.tick_count,
        state.ball.center.x,
        state.ball.center.y,
        state.ball.heading.normalized().radians()
    );

    TickReport {
        reflection,
        pointer_x,
        events,
    }
}
