//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Time only advances through the `dt` handed to `tick`
//! - Seeded RNG only
//! - Fixed obstacle ring, stable iteration order (by obstacle id)
//! - No rendering or platform dependencies

pub mod background;
pub mod collision;
pub mod entity;
pub mod obstacle;
pub mod pose;
pub mod rect;
pub mod state;
pub mod tick;

pub use background::{Background, ParallaxLayer};
pub use collision::{detect_passes, find_collision, speed_for_score};
pub use entity::Entity;
pub use obstacle::{FillerRows, Obstacle, ObstacleParams};
pub use pose::{Pose, PoseAnimator};
pub use rect::Rect;
pub use state::{DebugSnapshot, GameEvent, GamePhase, GameState};
pub use tick::{TickInput, tick};
