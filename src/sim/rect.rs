//! Axis-aligned rectangle geometry for the entity and obstacle segments
//!
//! A rectangle is anchored at its bottom-left corner (y axis points up):
//! - pos: bottom-left corner
//! - size: width and height, never negative

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// An axis-aligned rectangle in world space
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Rect {
    /// Bottom-left corner
    pub pos: Vec2,
    /// Width and height
    pub size: Vec2,
}

impl Rect {
    pub const ZERO: Self = Self {
        pos: Vec2::ZERO,
        size: Vec2::ZERO,
    };

    pub const fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            pos: Vec2::new(x, y),
            size: Vec2::new(width, height),
        }
    }

    /// Square rectangle of one tile
    pub const fn tile(x: f32, y: f32, tile_size: f32) -> Self {
        Self::new(x, y, tile_size, tile_size)
    }

    #[inline]
    pub fn x(&self) -> f32 {
        self.pos.x
    }

    #[inline]
    pub fn y(&self) -> f32 {
        self.pos.y
    }

    #[inline]
    pub fn width(&self) -> f32 {
        self.size.x
    }

    #[inline]
    pub fn height(&self) -> f32 {
        self.size.y
    }

    /// Right edge (x + width)
    #[inline]
    pub fn right(&self) -> f32 {
        self.pos.x + self.size.x
    }

    /// Top edge (y + height)
    #[inline]
    pub fn top(&self) -> f32 {
        self.pos.y + self.size.y
    }

    pub fn center(&self) -> Vec2 {
        self.pos + self.size * 0.5
    }

    /// Strict intersection test: rectangles that only share an edge do not overlap
    #[inline]
    pub fn overlaps(&self, other: &Rect) -> bool {
        self.pos.x < other.right()
            && self.right() > other.pos.x
            && self.pos.y < other.top()
            && self.top() > other.pos.y
    }

    /// Whether the horizontal extents intersect (strict, same rule as `overlaps`)
    #[inline]
    pub fn overlaps_x_span(&self, other: &Rect) -> bool {
        self.pos.x < other.right() && self.right() > other.pos.x
    }

    /// Check if a point is inside the rectangle (edges inclusive)
    pub fn contains_point(&self, point: Vec2) -> bool {
        point.x >= self.pos.x
            && point.x <= self.right()
            && point.y >= self.pos.y
            && point.y <= self.top()
    }

    /// Shift horizontally in place
    #[inline]
    pub fn translate_x(&mut self, dx: f32) {
        self.pos.x += dx;
    }
}
