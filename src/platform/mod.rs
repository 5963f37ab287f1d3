//! Platform abstraction layer
//!
//! Handles host differences for:
//! - Pointer/touch input polling

pub mod input;

pub use input::{FixedPointer, PointerSource, ScriptedPointer, autopilot_pointer};
