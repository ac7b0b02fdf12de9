//! Presentation layer
//!
//! Turns a read-only `GameState` into a draw list. The graphics backend
//! receives the list through `Presenter`; textures, cameras and windows
//! belong to the backend and are never shared through the simulation.

pub mod scene;
pub mod sprite;

pub use scene::{Frame, RenderContext, build_frame};
pub use sprite::{SpriteInstance, SpriteKind};

/// A graphics backend that can show a frame
pub trait Presenter {
    fn present(&mut self, frame: &Frame);
}

/// Headless backend: logs HUD changes instead of drawing
#[derive(Debug, Default)]
pub struct LogPresenter {
    last_hud: Vec<String>,
    frames: u64,
}

impl LogPresenter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn frames(&self) -> u64 {
        self.frames
    }
}

impl Presenter for LogPresenter {
    fn present(&mut self, frame: &Frame) {
        self.frames += 1;
        if frame.hud != self.last_hud {
            log::debug!(
                "frame {}: {} sprites ({} bytes) | {}",
                self.frames,
                frame.sprites.len(),
                frame.as_bytes().len(),
                frame.hud.join(" | ")
            );
            self.last_hud.clone_from(&frame.hud);
        }
    }
}
