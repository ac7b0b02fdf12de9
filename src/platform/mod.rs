//! Platform abstraction layer
//!
//! Sits between the host's window/event loop and the simulation:
//! - Input: raw key presses to edge-triggered actions
//! - Time: variable frame deltas to fixed simulation steps

pub mod input;
pub mod runner;

pub use input::{Action, InputTracker, Key};
pub use runner::FrameRunner;
