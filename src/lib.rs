//! Bouncy Asep - a side-scrolling gated-obstacle arcade game
//!
//! Core modules:
//! - `sim`: Deterministic simulation (entity physics, obstacles, scoring, game state)
//! - `renderer`: Presentation layer (draw lists for an external graphics backend)
//! - `platform`: Input edge detection and the fixed-step frame runner
//! - `audio`: Sound cues derived from simulation events
//! - `settings`: Data-driven game configuration

pub mod audio;
pub mod platform;
pub mod renderer;
pub mod settings;
pub mod sim;

pub use settings::Settings;

/// Game configuration constants
pub mod consts {
    /// Fixed simulation timestep (120 Hz)
    pub const SIM_DT: f32 = 1.0 / 120.0;
    /// Maximum substeps per frame to prevent spiral of death
    pub const MAX_SUBSTEPS: u32 = 8;
    /// Largest frame delta accepted from the frame clock (seconds)
    pub const MAX_FRAME_DT: f32 = 0.1;

    /// World dimensions (pixels, y axis points up)
    pub const WORLD_WIDTH: f32 = 1024.0;
    pub const WORLD_HEIGHT: f32 = 768.0;
    /// Edge length of one grid cell
    pub const TILE_SIZE: f32 = 64.0;
    /// Rows in the vertical obstacle grid (WORLD_HEIGHT / TILE_SIZE)
    pub const GRID_ROWS: usize = 12;
    /// Capacity of an obstacle's filler storage
    pub const MAX_GRID_ROWS: usize = 32;

    /// Entity defaults
    pub const ENTITY_WIDTH: f32 = 64.0;
    pub const ENTITY_HEIGHT: f32 = 64.0;
    pub const ENTITY_GRAVITY: f32 = 1000.0;
    pub const ENTITY_JUMP_POWER: f32 = 500.0;
    /// Distance kept between the entity and the world top/bottom
    pub const ENTITY_TOP_MARGIN: f32 = 20.0;
    pub const ENTITY_BOTTOM_MARGIN: f32 = 20.0;

    /// Obstacle defaults
    pub const OBSTACLE_COUNT: usize = 5;
    /// Column (tile units) of the first obstacle
    pub const OBSTACLE_FIRST_COLUMN: f32 = 14.0;
    /// Columns between consecutive obstacles
    pub const OBSTACLE_COLUMN_SPACING: f32 = 4.0;
    /// Exclusive upper bound of the random row of the top segment
    pub const OBSTACLE_MAX_Y: u32 = 7;
    /// Vertical distance from top segment to bottom segment (pixels)
    pub const OBSTACLE_GAP: f32 = 256.0;
    pub const OBSTACLE_SPEED: f32 = 250.0;
    /// Per-obstacle spacing added to the recycle position
    pub const OBSTACLE_RESET_MARGIN: f32 = 15.0;
    pub const OBSTACLE_RESET_PADDING: f32 = 24.0;

    /// Difficulty scaling
    pub const SCORE_THRESHOLD: u32 = 5;
    pub const SPEED_STEP: f32 = 25.0;
    pub const MAX_SPEED: f32 = 450.0;
}
