//! Gated obstacles
//!
//! An obstacle is a column of tile-sized segments sharing one x:
//! - top segment at a random grid row
//! - bottom segment exactly `gap` pixels above the top segment
//! - filler segments on every grid row outside the opening
//!
//! Obstacles are never created or destroyed during play. One that scrolls
//! fully off the left edge is recycled to the right with a fresh row.

use rand::Rng;
use serde::{Deserialize, Serialize};

use super::rect::Rect;
use crate::consts::MAX_GRID_ROWS;

/// Filler segments in fixed storage, sized to the largest supported grid
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FillerRows {
    rects: [Rect; MAX_GRID_ROWS],
    len: usize,
}

impl Default for FillerRows {
    fn default() -> Self {
        Self {
            rects: [Rect::ZERO; MAX_GRID_ROWS],
            len: 0,
        }
    }
}

impl FillerRows {
    pub fn as_slice(&self) -> &[Rect] {
        &self.rects[..self.len]
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    fn clear(&mut self) {
        self.len = 0;
    }

    fn push(&mut self, rect: Rect) {
        if self.len < MAX_GRID_ROWS {
            self.rects[self.len] = rect;
            self.len += 1;
        }
    }

    fn translate_x(&mut self, dx: f32) {
        for rect in &mut self.rects[..self.len] {
            rect.translate_x(dx);
        }
    }
}

/// Construction parameters for an obstacle
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ObstacleParams {
    /// Initial x in tile units
    pub column: f32,
    /// Exclusive upper bound of the top segment's row
    pub max_y: u32,
    /// Top-to-bottom segment distance (pixels)
    pub gap: f32,
    /// Horizontal speed (pixels/s)
    pub speed: f32,
    pub tile_size: f32,
    pub grid_rows: usize,
    /// Where the obstacle reappears after leaving the screen
    pub reset_x: f32,
}

/// A recyclable gated barrier
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Obstacle {
    pub id: u32,
    top: Rect,
    bottom: Rect,
    fillers: FillerRows,
    initial_x: f32,
    max_y: u32,
    gap: f32,
    tile_size: f32,
    grid_rows: usize,
    reset_x: f32,
    /// Horizontal speed (pixels/s)
    speed: f32,
    /// Set once the entity clears this obstacle, cleared on recycle/reset
    pub passed: bool,
}

impl Obstacle {
    pub fn new(id: u32, params: ObstacleParams, rng: &mut impl Rng) -> Self {
        let mut obstacle = Self {
            id,
            top: Rect::ZERO,
            bottom: Rect::ZERO,
            fillers: FillerRows::default(),
            initial_x: params.column * params.tile_size,
            max_y: params.max_y,
            gap: params.gap,
            tile_size: params.tile_size,
            grid_rows: params.grid_rows.min(MAX_GRID_ROWS),
            reset_x: params.reset_x,
            speed: params.speed,
            passed: false,
        };
        obstacle.reset(rng);
        obstacle
    }

    /// Scroll left; recycle to the right once fully off screen
    pub fn update(&mut self, dt: f32, rng: &mut impl Rng) -> bool {
        self.translate_x(-self.speed * dt);

        if self.top.right() < 0.0 {
            self.place(self.reset_x, rng);
            log::debug!("Obstacle {} recycled to x={}", self.id, self.reset_x);
            return true;
        }
        false
    }

    /// Whether `entity` intersects any segment of this obstacle
    pub fn check_collision(&self, entity: &Rect) -> bool {
        // Every segment shares the top segment's x-span
        if !entity.overlaps_x_span(&self.top) {
            return false;
        }

        entity.overlaps(&self.top)
            || entity.overlaps(&self.bottom)
            || self.fillers.as_slice().iter().any(|f| entity.overlaps(f))
    }

    /// Back to the starting column with a fresh row
    pub fn reset(&mut self, rng: &mut impl Rng) {
        self.place(self.initial_x, rng);
    }

    pub fn set_speed(&mut self, speed: f32) {
        self.speed = speed;
    }

    pub fn speed(&self) -> f32 {
        self.speed
    }

    /// Update the recycle position (viewport resize)
    pub fn set_reset_x(&mut self, reset_x: f32) {
        self.reset_x = reset_x;
    }

    pub fn reset_x(&self) -> f32 {
        self.reset_x
    }

    pub fn initial_x(&self) -> f32 {
        self.initial_x
    }

    pub fn x(&self) -> f32 {
        self.top.pos.x
    }

    /// Trailing (right) edge
    pub fn right(&self) -> f32 {
        self.top.right()
    }

    pub fn width(&self) -> f32 {
        self.tile_size
    }

    pub fn gap(&self) -> f32 {
        self.gap
    }

    pub fn max_y(&self) -> u32 {
        self.max_y
    }

    pub fn top_rect(&self) -> &Rect {
        &self.top
    }

    pub fn bottom_rect(&self) -> &Rect {
        &self.bottom
    }

    pub fn filler_rects(&self) -> &[Rect] {
        self.fillers.as_slice()
    }

    /// Center of the passable opening between the two segments
    pub fn opening_center_y(&self) -> f32 {
        (self.top.top() + self.bottom.pos.y) * 0.5
    }

    fn place(&mut self, x: f32, rng: &mut impl Rng) {
        self.passed = false;
        let row = if self.max_y == 0 {
            0
        } else {
            rng.random_range(0..self.max_y)
        };
        self.set_y(x, row as f32 * self.tile_size);
    }

    fn set_y(&mut self, x: f32, y: f32) {
        self.top = Rect::tile(x, y, self.tile_size);
        self.bottom = Rect::tile(x, y + self.gap, self.tile_size);
        self.rebuild_fillers();
    }

    fn rebuild_fillers(&mut self) {
        self.fillers.clear();

        let top_row = (self.top.pos.y / self.tile_size).floor() as i64;
        let bottom_row = (self.bottom.pos.y / self.tile_size).floor() as i64;

        for row in 0..self.grid_rows {
            let r = row as i64;
            if r < top_row || r > bottom_row {
                self.fillers.push(Rect::tile(
                    self.top.pos.x,
                    self.tile_size * row as f32,
                    self.tile_size,
                ));
            }
        }
    }

    fn translate_x(&mut self, dx: f32) {
        self.top.translate_x(dx);
        self.bottom.translate_x(dx);
        self.fillers.translate_x(dx);
    }
}
