//! Fixed-step frame runner
//!
//! Converts the variable frame delta from the host's clock into whole
//! simulation steps of `SIM_DT`.

use crate::consts::{MAX_FRAME_DT, MAX_SUBSTEPS, SIM_DT};
use crate::sim::{GameEvent, GameState, TickInput, tick};

#[derive(Debug, Default)]
pub struct FrameRunner {
    accumulator: f32,
    /// Input not yet seen by any step
    pending: TickInput,
    /// Events from every step of the last frame
    events: Vec<GameEvent>,
}

impl FrameRunner {
    pub fn new() -> Self {
        Self::default()
    }

    /// Run the steps owed for a frame of `frame_dt` seconds; returns how many ran
    pub fn frame(&mut self, state: &mut GameState, frame_dt: f32, input: TickInput) -> u32 {
        self.merge(input);
        self.events.clear();

        let dt = frame_dt.clamp(0.0, MAX_FRAME_DT);
        self.accumulator += dt;

        let mut substeps = 0;
        while self.accumulator >= SIM_DT && substeps < MAX_SUBSTEPS {
            tick(state, &self.pending, SIM_DT);
            self.events.extend_from_slice(&state.events);
            self.accumulator -= SIM_DT;
            substeps += 1;

            // Clear one-shot inputs after processing
            self.pending.jump = false;
            self.pending.reset = false;
            self.pending.toggle_collision = false;
            self.pending.toggle_debug = false;
        }

        if substeps == MAX_SUBSTEPS {
            // Drop the backlog instead of spiralling
            self.accumulator = self.accumulator.min(SIM_DT);
        }
        substeps
    }

    pub fn events(&self) -> &[GameEvent] {
        &self.events
    }

    /// Fraction of a step left over, for render interpolation
    pub fn alpha(&self) -> f32 {
        self.accumulator / SIM_DT
    }

    fn merge(&mut self, input: TickInput) {
        self.pending.jump |= input.jump;
        self.pending.reset |= input.reset;
        self.pending.toggle_collision |= input.toggle_collision;
        self.pending.toggle_debug |= input.toggle_debug;
        self.pending.autopilot = input.autopilot;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::GamePhase;

    #[test]
    fn test_steps_per_frame() {
        let mut state = GameState::new(1);
        let mut runner = FrameRunner::new();
        // Two and a half steps
        let steps = runner.frame(&mut state, SIM_DT * 2.5, TickInput::default());
        assert_eq!(steps, 2);
        assert!((runner.alpha() - 0.5).abs() < 1e-3);
    }

    #[test]
    fn test_long_frame_is_clamped() {
        let mut state = GameState::new(1);
        let mut runner = FrameRunner::new();
        let steps = runner.frame(&mut state, 5.0, TickInput::default());
        assert_eq!(steps, MAX_SUBSTEPS);
        assert!(runner.alpha() <= 1.0);
    }

    #[test]
    fn test_jump_waits_for_a_step() {
        let mut state = GameState::new(1);
        let mut runner = FrameRunner::new();
        let jump = TickInput {
            jump: true,
            ..Default::default()
        };
        // Too short for a step: the jump is kept
        assert_eq!(runner.frame(&mut state, SIM_DT * 0.5, jump), 0);
        assert_eq!(state.phase, GamePhase::Menu);

        runner.frame(&mut state, SIM_DT * 0.6, TickInput::default());
        assert_eq!(state.phase, GamePhase::Playing);
        assert!(runner.events().contains(&GameEvent::Started));
    }

    #[test]
    fn test_jump_delivered_to_first_step_only() {
        let mut state = GameState::new(1);
        let mut runner = FrameRunner::new();
        let jump = TickInput {
            jump: true,
            ..Default::default()
        };
        runner.frame(&mut state, SIM_DT * 4.0, jump);
        let jumps = runner
            .events()
            .iter()
            .filter(|e| **e == GameEvent::Jumped)
            .count();
        assert_eq!(jumps, 1);
        assert_eq!(state.phase, GamePhase::Playing);
    }
}
