//! Game state and core simulation types
//!
//! Everything the frame loop mutates lives here: the entity, the obstacle
//! ring, the parallax layers, score, phase and debug toggles.

use glam::Vec2;
use rand::SeedableRng;
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::background::Background;
use super::entity::Entity;
use super::obstacle::{Obstacle, ObstacleParams};
use super::pose::{Pose, PoseAnimator};
use crate::settings::Settings;

/// Current phase of gameplay
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum GamePhase {
    /// World frozen, waiting for the first jump
    #[default]
    Menu,
    /// Active gameplay
    Playing,
    /// Run ended, waiting for reset
    GameOver,
}

impl GamePhase {
    pub fn as_str(&self) -> &'static str {
        match self {
            GamePhase::Menu => "Menu",
            GamePhase::Playing => "Playing",
            GamePhase::GameOver => "Game Over",
        }
    }
}

/// Things that happened during a tick, for audio and HUD
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum GameEvent {
    /// Menu -> Playing
    Started,
    Jumped,
    Scored { score: u32 },
    /// Obstacles sped up
    SpeedUp { speed: f32 },
    /// Collision ended the run
    Crashed { obstacle_id: u32 },
    /// GameOver -> Menu
    Reset,
}

/// Values shown by the debug overlay
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DebugSnapshot {
    pub y: f32,
    pub velocity: f32,
    pub gravity: f32,
    pub speed: f32,
    pub score: u32,
    pub best_score: u32,
    pub phase: GamePhase,
    pub collision_enabled: bool,
    pub debug_enabled: bool,
}

/// Complete game state
#[derive(Debug, Clone)]
pub struct GameState {
    /// Run seed for reproducibility
    pub seed: u64,
    pub rng: Pcg32,
    pub settings: Settings,
    pub phase: GamePhase,
    pub score: u32,
    /// Best score this session
    pub best_score: u32,
    /// Collision detection on/off (debug)
    pub collision_enabled: bool,
    /// Debug overlay on/off
    pub debug_enabled: bool,
    pub entity: Entity,
    pub pose: PoseAnimator,
    /// Fixed ring of obstacles, ordered by id
    pub obstacles: Vec<Obstacle>,
    pub background: Background,
    /// Events raised during the last tick
    pub events: Vec<GameEvent>,
    /// Simulation tick counter
    pub time_ticks: u64,
}

impl GameState {
    /// Create a new game state with default settings
    pub fn new(seed: u64) -> Self {
        Self::with_settings(Settings::default(), seed)
    }

    pub fn with_settings(settings: Settings, seed: u64) -> Self {
        let mut rng = Pcg32::seed_from_u64(seed);
        let world = &settings.world;

        // Horizontally centred, vertically at mid-height
        let spawn = Vec2::new(
            world.width / 2.0 - settings.entity.width / 2.0,
            world.height / 2.0,
        );
        let entity = Entity::new(spawn, &settings.entity, world.height);

        let reset_x = settings
            .obstacles
            .reset_position_x(world.width, world.tile_size);
        let obstacles = (0..settings.obstacles.count)
            .map(|i| {
                let params = ObstacleParams {
                    column: settings.obstacles.column(i),
                    max_y: settings.obstacles.max_y,
                    gap: settings.obstacles.gap,
                    speed: settings.obstacles.initial_speed,
                    tile_size: world.tile_size,
                    grid_rows: world.grid_rows,
                    reset_x,
                };
                Obstacle::new(i as u32, params, &mut rng)
            })
            .collect();

        let background = Background::new(world.width);

        Self {
            seed,
            rng,
            phase: GamePhase::Menu,
            score: 0,
            best_score: 0,
            collision_enabled: settings.debug.collision_enabled,
            debug_enabled: settings.debug.debug_enabled,
            entity,
            pose: PoseAnimator::default(),
            obstacles,
            background,
            events: Vec::with_capacity(8),
            time_ticks: 0,
            settings,
        }
    }

    /// Restore the start-of-run world and return to the menu
    pub fn reset(&mut self) {
        self.entity.reset();
        self.pose.set(Pose::Standing);
        let base_speed = self.settings.obstacles.initial_speed;
        for obstacle in &mut self.obstacles {
            obstacle.reset(&mut self.rng);
            obstacle.set_speed(base_speed);
        }
        self.background.reset();
        self.score = 0;
        self.phase = GamePhase::Menu;
    }

    /// Recompute recycle positions for a new viewport width
    pub fn resize(&mut self, viewport_width: f32) {
        let reset_x = self
            .settings
            .obstacles
            .reset_position_x(viewport_width, self.settings.world.tile_size);
        for obstacle in &mut self.obstacles {
            obstacle.set_reset_x(reset_x);
        }
        log::debug!("Viewport width {} -> recycle x {}", viewport_width, reset_x);
    }

    pub fn toggle_collision(&mut self) {
        self.collision_enabled = !self.collision_enabled;
        log::info!("Collision detection: {}", self.collision_enabled);
    }

    pub fn toggle_debug(&mut self) {
        self.debug_enabled = !self.debug_enabled;
        log::info!("Debug overlay: {}", self.debug_enabled);
    }

    /// Current obstacle speed (all obstacles share it)
    pub fn obstacle_speed(&self) -> f32 {
        self.obstacles
            .first()
            .map(|o| o.speed())
            .unwrap_or(self.settings.obstacles.initial_speed)
    }

    /// Nearest obstacle the entity has not cleared yet
    pub fn next_obstacle(&self) -> Option<&Obstacle> {
        self.obstacles
            .iter()
            .filter(|o| o.right() >= self.entity.x())
            .min_by(|a, b| a.x().total_cmp(&b.x()))
    }

    pub fn debug_snapshot(&self) -> DebugSnapshot {
        DebugSnapshot {
            y: self.entity.y(),
            velocity: self.entity.velocity,
            gravity: self.entity.gravity,
            speed: self.obstacle_speed(),
            score: self.score,
            best_score: self.best_score,
            phase: self.phase,
            collision_enabled: self.collision_enabled,
            debug_enabled: self.debug_enabled,
        }
    }

    /// Overlay lines for the debug HUD
    pub fn debug_text(&self) -> String {
        format!(
            "Y: {}\nVelocity: {}\nGravity: {}\nSpeed: {}\nCollision: {}",
            self.entity.y().round(),
            self.entity.velocity,
            self.entity.gravity,
            self.obstacle_speed(),
            if self.collision_enabled { "on" } else { "off" },
        )
    }

    pub(crate) fn push_event(&mut self, event: GameEvent) {
        self.events.push(event);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_state_layout() {
        let state = GameState::new(12345);
        assert_eq!(state.phase, GamePhase::Menu);
        assert_eq!(state.score, 0);
        assert_eq!(state.obstacles.len(), 5);
        assert_eq!(state.entity.x(), 480.0);
        assert_eq!(state.entity.y(), 384.0);

        let xs: Vec<f32> = state.obstacles.iter().map(|o| o.x()).collect();
        assert_eq!(xs, vec![896.0, 1152.0, 1408.0, 1664.0, 1920.0]);
        assert!(state.obstacles.iter().all(|o| o.reset_x() == 1539.0));
    }

    #[test]
    fn test_same_seed_same_layout() {
        let a = GameState::new(777);
        let b = GameState::new(777);
        for (oa, ob) in a.obstacles.iter().zip(&b.obstacles) {
            assert_eq!(oa.top_rect(), ob.top_rect());
        }
    }

    #[test]
    fn test_resize_moves_recycle_point() {
        let mut state = GameState::new(1);
        state.resize(1280.0);
        assert!(state.obstacles.iter().all(|o| o.reset_x() == 1795.0));
    }

    #[test]
    fn test_next_obstacle() {
        let state = GameState::new(1);
        assert_eq!(state.next_obstacle().map(|o| o.id), Some(0));
    }

    #[test]
    fn test_debug_snapshot_serializes() {
        let state = GameState::new(1);
        let json = serde_json::to_value(state.debug_snapshot()).unwrap();
        assert_eq!(json["gravity"], 1000.0);
        assert_eq!(json["phase"], "Menu");
        assert!(state.debug_text().starts_with("Y: 384\nVelocity: 0\nGravity: 1000"));
    }
}
