//! Entity animation pose
//!
//! Chooses which animation the entity shows and which frame of it. Mapping
//! frames to sprite-sheet cells is the renderer backend's concern.

use serde::{Deserialize, Serialize};

/// Seconds each animation frame is shown
pub const FRAME_DURATION: f32 = 0.16;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Pose {
    #[default]
    Standing,
    Jumping,
    Falling,
    /// Plays once and holds its last frame
    Dead,
}

impl Pose {
    pub fn frame_count(&self) -> u32 {
        match self {
            Pose::Standing => 1,
            Pose::Jumping => 2,
            Pose::Falling => 4,
            Pose::Dead => 12,
        }
    }

    pub fn loops(&self) -> bool {
        *self != Pose::Dead
    }
}

/// Pose plus elapsed animation time
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PoseAnimator {
    pose: Pose,
    elapsed: f32,
    finished: bool,
}

impl PoseAnimator {
    pub fn pose(&self) -> Pose {
        self.pose
    }

    pub fn is_finished(&self) -> bool {
        self.finished
    }

    /// Switch animation, restarting it
    pub fn set(&mut self, pose: Pose) {
        self.pose = pose;
        self.elapsed = 0.0;
        self.finished = false;
    }

    /// Advance time; a rising jump turns into a fall once velocity goes negative
    pub fn update(&mut self, dt: f32, velocity: f32) {
        if !self.finished {
            self.elapsed += dt;
            if !self.pose.loops() && self.raw_frame() >= self.pose.frame_count() - 1 {
                self.finished = true;
            }
        }

        if self.pose == Pose::Jumping && velocity < 0.0 {
            self.set(Pose::Falling);
        }
    }

    /// Current frame index within the active animation
    pub fn frame(&self) -> u32 {
        let count = self.pose.frame_count();
        let raw = self.raw_frame();
        if self.pose.loops() {
            raw % count
        } else {
            raw.min(count - 1)
        }
    }

    fn raw_frame(&self) -> u32 {
        (self.elapsed / FRAME_DURATION) as u32
    }
}
