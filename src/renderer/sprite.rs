//! Sprite instance data handed to the graphics backend

use bytemuck::{Pod, Zeroable};

/// What a sprite instance depicts
#[repr(u32)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SpriteKind {
    Background = 0,
    Filler = 1,
    TopSegment = 2,
    BottomSegment = 3,
    Entity = 4,
}

/// One textured quad, in screen space (bottom-left origin)
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, Pod, Zeroable)]
pub struct SpriteInstance {
    pub position: [f32; 2],
    pub size: [f32; 2],
    pub tint: [f32; 4],
    /// `SpriteKind` discriminant
    pub kind: u32,
    /// Layer index for backgrounds, pose index for the entity
    pub variant: u32,
    /// Animation frame
    pub frame: u32,
}

impl SpriteInstance {
    pub fn new(kind: SpriteKind, position: [f32; 2], size: [f32; 2], tint: [f32; 4]) -> Self {
        Self {
            position,
            size,
            tint,
            kind: kind as u32,
            variant: 0,
            frame: 0,
        }
    }

    pub fn with_variant(mut self, variant: u32, frame: u32) -> Self {
        self.variant = variant;
        self.frame = frame;
        self
    }

    pub fn is(&self, kind: SpriteKind) -> bool {
        self.kind == kind as u32
    }
}

/// Tints for game elements
pub mod colors {
    pub const WHITE: [f32; 4] = [1.0, 1.0, 1.0, 1.0];
    /// Obstacles flash red after a crash
    pub const CRASHED: [f32; 4] = [1.0, 0.45, 0.45, 1.0];
    /// Entity drawn translucent while collision is off
    pub const GHOST: [f32; 4] = [1.0, 1.0, 1.0, 0.5];
}
