//! Collision, pass detection and difficulty scaling
//!
//! Runs after physics each frame while playing. Collision probes the entity
//! against every obstacle; pass detection is an edge detector that awards a
//! point once per obstacle per recycle cycle.

use super::entity::Entity;
use super::obstacle::Obstacle;
use crate::settings::DifficultySettings;

/// Index of the first obstacle the entity overlaps, if any
pub fn find_collision(entity: &Entity, obstacles: &[Obstacle]) -> Option<usize> {
    obstacles
        .iter()
        .position(|obstacle| obstacle.check_collision(&entity.rect))
}

/// Mark obstacles whose trailing edge the entity has cleared
///
/// Returns how many obstacles were newly passed this frame.
pub fn detect_passes(entity: &Entity, obstacles: &mut [Obstacle]) -> u32 {
    let mut newly_passed = 0;
    for obstacle in obstacles.iter_mut() {
        if !obstacle.passed && entity.x() > obstacle.right() {
            obstacle.passed = true;
            newly_passed += 1;
        }
    }
    newly_passed
}

/// Speed every obstacle should move at for the given score
///
/// Each multiple of the threshold adds one step, up to the cap.
pub fn speed_for_score(score: u32, base_speed: f32, difficulty: &DifficultySettings) -> f32 {
    if difficulty.score_threshold == 0 {
        return base_speed;
    }
    let steps = (score / difficulty.score_threshold) as f32;
    (base_speed + steps * difficulty.speed_step).min(difficulty.max_speed.max(base_speed))
}

/// Whether reaching `score` crosses a difficulty threshold
pub fn crosses_threshold(score: u32, difficulty: &DifficultySettings) -> bool {
    difficulty.score_threshold > 0 && score > 0 && score % difficulty.score_threshold == 0
}
