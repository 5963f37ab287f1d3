//! Pointer input sources
//!
//! The simulation polls exactly one reading per tick. Sources keep no
//! history beyond what they need to produce the next reading.

use crate::sim::{SimulationState, tentative_step};

/// Anything that can report where the pointer (mouse or touch) is right now
pub trait PointerSource {
    /// Current pointer position in arena pixels
    fn current_pointer_position(&mut self) -> (i32, i32);
}

/// A pointer that never moves
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FixedPointer(pub i32, pub i32);

impl PointerSource for FixedPointer {
    fn current_pointer_position(&mut self) -> (i32, i32) {
        (self.0, self.1)
    }
}

/// Replays recorded pointer readings, holding the last one when exhausted
#[derive(Debug, Clone, Default)]
pub struct ScriptedPointer {
    samples: Vec<(i32, i32)>,
    cursor: usize,
}

impl ScriptedPointer {
    pub fn new(samples: Vec<(i32, i32)>) -> Self {
        Self { samples, cursor: 0 }
    }

    /// Readings not yet replayed
    pub fn remaining(&self) -> usize {
        self.samples.len().saturating_sub(self.cursor)
    }
}

impl PointerSource for ScriptedPointer {
    fn current_pointer_position(&mut self) -> (i32, i32) {
        let Some(&last) = self.samples.last() else {
            return (0, 0);
        };
        let sample = self.samples.get(self.cursor).copied().unwrap_or(last);
        if self.cursor < self.samples.len() {
            self.cursor += 1;
        }
        sample
    }
}

impl<F> PointerSource for F
where
    F: FnMut() -> (i32, i32),
{
    fn current_pointer_position(&mut self) -> (i32, i32) {
        self()
    }
}

/// Demo-mode pointer: sit under where the ball is about to be.
///
/// Reads state only; feed the result to the next tick like any other reading.
pub fn autopilot_pointer(state: &SimulationState) -> (i32, i32) {
    let next = tentative_step(&state.ball);
    let x = state.arena.clamp_x(next.x).round() as i32;
    (x, state.paddle.y.round() as i32)
}
