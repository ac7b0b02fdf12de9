//! Keyboard/mouse to tick input
//!
//! The windowing layer reports raw presses and releases. Each action fires
//! once per press: holding a key does nothing until it is released.

use std::collections::HashSet;

use crate::sim::TickInput;

/// Physical inputs the game listens to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Key {
    Space,
    MouseLeft,
    R,
    C,
    D,
    A,
    Q,
    Escape,
}

/// What a key does
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Jump,
    Reset,
    ToggleCollision,
    ToggleDebug,
    ToggleAutopilot,
    Quit,
}

impl Key {
    pub fn action(self) -> Action {
        match self {
            Key::Space | Key::MouseLeft => Action::Jump,
            Key::R => Action::Reset,
            Key::C => Action::ToggleCollision,
            Key::D => Action::ToggleDebug,
            Key::A => Action::ToggleAutopilot,
            Key::Q | Key::Escape => Action::Quit,
        }
    }
}

/// Collects edge-triggered actions between polls
#[derive(Debug, Default)]
pub struct InputTracker {
    held: HashSet<Key>,
    pending: TickInput,
    autopilot: bool,
    quit: bool,
}

impl InputTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Key went down; repeats while held are ignored
    pub fn press(&mut self, key: Key) {
        if !self.held.insert(key) {
            return;
        }

        match key.action() {
            Action::Jump => self.pending.jump = true,
            Action::Reset => self.pending.reset = true,
            Action::ToggleCollision => self.pending.toggle_collision = true,
            Action::ToggleDebug => self.pending.toggle_debug = true,
            Action::ToggleAutopilot => {
                self.autopilot = !self.autopilot;
                log::info!("Autopilot: {}", self.autopilot);
            }
            Action::Quit => self.quit = true,
        }
    }

    pub fn release(&mut self, key: Key) {
        self.held.remove(&key);
    }

    /// Actions since the last call; one-shot flags are consumed
    pub fn take_input(&mut self) -> TickInput {
        let mut input = std::mem::take(&mut self.pending);
        input.autopilot = self.autopilot;
        input
    }

    pub fn autopilot(&self) -> bool {
        self.autopilot
    }

    pub fn quit_requested(&self) -> bool {
        self.quit
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_press_fires_once() {
        let mut tracker = InputTracker::new();
        tracker.press(Key::Space);
        assert!(tracker.take_input().jump);
        // Still held: no new jump
        tracker.press(Key::Space);
        assert!(!tracker.take_input().jump);

        tracker.release(Key::Space);
        tracker.press(Key::Space);
        assert!(tracker.take_input().jump);
    }

    #[test]
    fn test_mouse_and_space_both_jump() {
        let mut tracker = InputTracker::new();
        tracker.press(Key::MouseLeft);
        let input = tracker.take_input();
        assert!(input.jump);
        assert!(!input.reset);
    }

    #[test]
    fn test_toggles_and_quit() {
        let mut tracker = InputTracker::new();
        tracker.press(Key::C);
        tracker.press(Key::D);
        tracker.press(Key::R);
        let input = tracker.take_input();
        assert!(input.toggle_collision && input.toggle_debug && input.reset);

        assert!(!tracker.quit_requested());
        tracker.press(Key::Escape);
        assert!(tracker.quit_requested());
    }

    #[test]
    fn test_autopilot_persists_across_polls() {
        let mut tracker = InputTracker::new();
        tracker.press(Key::A);
        assert!(tracker.take_input().autopilot);
        assert!(tracker.take_input().autopilot);
        tracker.release(Key::A);
        tracker.press(Key::A);
        assert!(!tracker.take_input().autopilot);
    }
}
