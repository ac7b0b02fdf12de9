//! Game settings and tuning
//!
//! Loaded from an optional JSON file. Every section falls back to the
//! reference defaults, so a partial file only overrides what it names.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::consts::*;

/// World geometry
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WorldSettings {
    pub width: f32,
    pub height: f32,
    /// Edge length of one grid cell (pixels)
    pub tile_size: f32,
    /// Rows in the vertical obstacle grid
    pub grid_rows: usize,
}

impl Default for WorldSettings {
    fn default() -> Self {
        Self {
            width: WORLD_WIDTH,
            height: WORLD_HEIGHT,
            tile_size: TILE_SIZE,
            grid_rows: GRID_ROWS,
        }
    }
}

/// Player entity physics
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EntitySettings {
    pub width: f32,
    pub height: f32,
    /// Downward acceleration (pixels/s²)
    pub gravity: f32,
    /// Upward velocity set by a jump (pixels/s)
    pub jump_power: f32,
    pub top_margin: f32,
    pub bottom_margin: f32,
}

impl Default for EntitySettings {
    fn default() -> Self {
        Self {
            width: ENTITY_WIDTH,
            height: ENTITY_HEIGHT,
            gravity: ENTITY_GRAVITY,
            jump_power: ENTITY_JUMP_POWER,
            top_margin: ENTITY_TOP_MARGIN,
            bottom_margin: ENTITY_BOTTOM_MARGIN,
        }
    }
}

impl EntitySettings {
    /// Highest y the entity may occupy in a world of the given height
    pub fn upper_bound(&self, world_height: f32) -> f32 {
        world_height - self.top_margin - self.height
    }

    /// Lowest y the entity may occupy
    pub fn lower_bound(&self) -> f32 {
        self.bottom_margin
    }
}

/// Obstacle layout and motion
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ObstacleSettings {
    pub count: usize,
    /// Column (tile units) of the first obstacle
    pub first_column: f32,
    /// Columns between consecutive obstacles
    pub column_spacing: f32,
    /// Exclusive upper bound of the top segment's random row
    pub max_y: u32,
    /// Vertical distance from top segment to bottom segment (pixels)
    pub gap: f32,
    /// Horizontal speed at the start of a run (pixels/s)
    pub initial_speed: f32,
    pub reset_margin: f32,
    pub reset_padding: f32,
}

impl Default for ObstacleSettings {
    fn default() -> Self {
        Self {
            count: OBSTACLE_COUNT,
            first_column: OBSTACLE_FIRST_COLUMN,
            column_spacing: OBSTACLE_COLUMN_SPACING,
            max_y: OBSTACLE_MAX_Y,
            gap: OBSTACLE_GAP,
            initial_speed: OBSTACLE_SPEED,
            reset_margin: OBSTACLE_RESET_MARGIN,
            reset_padding: OBSTACLE_RESET_PADDING,
        }
    }
}

impl ObstacleSettings {
    /// Initial column (tile units) of the obstacle at `index`
    pub fn column(&self, index: usize) -> f32 {
        self.first_column + self.column_spacing * index as f32
    }

    /// X an obstacle is moved to when it leaves the screen, for a given viewport width
    pub fn reset_position_x(&self, viewport_width: f32, tile_size: f32) -> f32 {
        let n = self.count as f32;
        viewport_width + tile_size * n + self.reset_margin * n + self.reset_padding * n
    }
}

/// Speed scaling as the score grows
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DifficultySettings {
    /// Speed increases each time the score reaches a multiple of this
    pub score_threshold: u32,
    pub speed_step: f32,
    pub max_speed: f32,
}

impl Default for DifficultySettings {
    fn default() -> Self {
        Self {
            score_threshold: SCORE_THRESHOLD,
            speed_step: SPEED_STEP,
            max_speed: MAX_SPEED,
        }
    }
}

/// Debug toggles
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DebugSettings {
    pub collision_enabled: bool,
    pub debug_enabled: bool,
}

impl Default for DebugSettings {
    fn default() -> Self {
        Self {
            collision_enabled: true,
            debug_enabled: false,
        }
    }
}

/// Audio levels
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AudioSettings {
    /// Master volume (0.0 - 1.0)
    pub master_volume: f32,
    /// Sound effects volume (0.0 - 1.0)
    pub sfx_volume: f32,
    pub muted: bool,
}

impl Default for AudioSettings {
    fn default() -> Self {
        Self {
            master_volume: 0.8,
            sfx_volume: 1.0,
            muted: false,
        }
    }
}

/// Complete game configuration
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub world: WorldSettings,
    pub entity: EntitySettings,
    pub obstacles: ObstacleSettings,
    pub difficulty: DifficultySettings,
    pub debug: DebugSettings,
    pub audio: AudioSettings,
    /// Run seed; the binary derives one from the clock when absent
    pub seed: Option<u64>,
}

impl Settings {
    /// Parse settings from a JSON document
    pub fn from_json_str(json: &str) -> serde_json::Result<Self> {
        serde_json::from_str(json)
    }

    /// Load settings from a JSON file, falling back to defaults
    pub fn load(path: impl AsRef<Path>) -> Self {
        let path = path.as_ref();
        let settings = match std::fs::read_to_string(path) {
            Ok(json) => match Self::from_json_str(&json) {
                Ok(settings) => {
                    log::info!("Loaded settings from {}", path.display());
                    settings
                }
                Err(e) => {
                    log::warn!("Invalid settings in {}: {}", path.display(), e);
                    Self::default()
                }
            },
            Err(e) => {
                log::warn!("Could not read {}: {}", path.display(), e);
                Self::default()
            }
        };

        if !settings.fits_world() {
            log::warn!("Obstacle geometry does not fit the world; segments may leave the screen");
        }
        settings
    }

    /// Whether every obstacle placement and the entity bounds fit inside the world
    pub fn fits_world(&self) -> bool {
        let world = &self.world;
        let obstacles = &self.obstacles;

        if obstacles.max_y == 0 || world.grid_rows > MAX_GRID_ROWS {
            return false;
        }
        if obstacles.gap < world.tile_size {
            return false;
        }

        let highest_top = (obstacles.max_y - 1) as f32 * world.tile_size;
        let highest_bottom_edge = highest_top + obstacles.gap + world.tile_size;
        let grid_height = world.grid_rows as f32 * world.tile_size;

        highest_bottom_edge <= world.height
            && grid_height <= world.height + f32::EPSILON
            && self.entity.lower_bound() < self.entity.upper_bound(world.height)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_fit_world() {
        let settings = Settings::default();
        assert!(settings.fits_world());
        assert_eq!(settings.entity.upper_bound(settings.world.height), 684.0);
        assert_eq!(settings.entity.lower_bound(), 20.0);
    }

    #[test]
    fn test_partial_json_keeps_defaults() {
        let settings =
            Settings::from_json_str(r#"{ "obstacles": { "gap": 320.0 }, "seed": 7 }"#).unwrap();
        assert_eq!(settings.obstacles.gap, 320.0);
        assert_eq!(settings.obstacles.count, OBSTACLE_COUNT);
        assert_eq!(settings.world, WorldSettings::default());
        assert_eq!(settings.seed, Some(7));
    }

    #[test]
    fn test_invalid_json_is_an_error() {
        assert!(Settings::from_json_str("{ not json").is_err());
        assert!(Settings::from_json_str(r#"{ "world": { "width": "wide" } }"#).is_err());
    }

    #[test]
    fn test_load_missing_file_falls_back() {
        let settings = Settings::load("/nonexistent/bouncy-asep/settings.json");
        assert_eq!(settings, Settings::default());
    }

    #[test]
    fn test_oversized_gap_does_not_fit() {
        let mut settings = Settings::default();
        settings.obstacles.gap = 512.0;
        assert!(!settings.fits_world());
    }

    #[test]
    fn test_reset_position() {
        let obstacles = ObstacleSettings::default();
        // 1024 + 5 * (64 + 15 + 24)
        assert_eq!(obstacles.reset_position_x(1024.0, 64.0), 1539.0);
        assert_eq!(obstacles.column(0), 14.0);
        assert_eq!(obstacles.column(4), 30.0);
    }
}
