//! Parallax background layers
//!
//! Each layer scrolls left at its own speed and wraps once it has moved a
//! full span. Layers are drawn twice side by side by the renderer.

use serde::{Deserialize, Serialize};

/// Default layer speeds, far to near (pixels/s)
pub const LAYER_SPEEDS: [f32; 3] = [0.1, 125.0, 250.0];

/// One horizontally scrolling layer
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ParallaxLayer {
    pub x: f32,
    pub speed: f32,
    /// Scaled layer width; the offset wraps after this many pixels
    pub span: f32,
}

impl ParallaxLayer {
    pub fn new(speed: f32, span: f32) -> Self {
        Self { x: 0.0, speed, span }
    }

    pub fn update(&mut self, dt: f32) {
        self.x -= self.speed * dt;
        if self.x <= -self.span {
            self.x = 0.0;
        }
    }

    pub fn reset(&mut self) {
        self.x = 0.0;
    }
}

/// The stacked background
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Background {
    pub layers: Vec<ParallaxLayer>,
}

impl Background {
    pub fn new(span: f32) -> Self {
        Self {
            layers: LAYER_SPEEDS
                .iter()
                .map(|&speed| ParallaxLayer::new(speed, span))
                .collect(),
        }
    }

    pub fn update(&mut self, dt: f32) {
        for layer in &mut self.layers {
            layer.update(dt);
        }
    }

    pub fn reset(&mut self) {
        for layer in &mut self.layers {
            layer.reset();
        }
    }
}
