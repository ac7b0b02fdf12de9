//! Player entity: vertical-only kinematic body
//!
//! Gravity pulls the entity down, a jump sets its upward velocity, and the
//! position never leaves `[lower_bound, upper_bound]`. A step that would
//! leave the band is discarded and the velocity drops to zero.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::rect::Rect;
use crate::settings::EntitySettings;

/// The player-controlled entity
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Entity {
    pub rect: Rect,
    /// Vertical velocity (pixels/s, positive is up)
    pub velocity: f32,
    /// Downward acceleration (pixels/s²)
    pub gravity: f32,
    /// Velocity assigned by `jump`
    pub jump_power: f32,
    pub lower_bound: f32,
    pub upper_bound: f32,
    initial_y: f32,
}

impl Entity {
    /// Create an entity at `pos` for a world of the given height
    pub fn new(pos: Vec2, settings: &EntitySettings, world_height: f32) -> Self {
        Self {
            rect: Rect::new(pos.x, pos.y, settings.width, settings.height),
            velocity: 0.0,
            gravity: settings.gravity,
            jump_power: settings.jump_power,
            lower_bound: settings.lower_bound(),
            upper_bound: settings.upper_bound(world_height),
            initial_y: pos.y,
        }
    }

    #[inline]
    pub fn x(&self) -> f32 {
        self.rect.pos.x
    }

    #[inline]
    pub fn y(&self) -> f32 {
        self.rect.pos.y
    }

    pub fn initial_y(&self) -> f32 {
        self.initial_y
    }

    /// Set the velocity to the jump power, replacing whatever it was
    pub fn jump(&mut self) {
        self.velocity = self.jump_power;
    }

    /// Integrate one step of gravity
    pub fn update(&mut self, dt: f32) {
        self.velocity -= self.gravity * dt;
        let candidate = self.rect.pos.y + self.velocity * dt;

        if candidate > self.lower_bound && candidate < self.upper_bound {
            self.rect.pos.y = candidate;
        } else {
            // Hard stop: keep the last valid y, not the bound itself
            self.velocity = 0.0;
        }
    }

    /// Back to the spawn height, at rest
    pub fn reset(&mut self) {
        self.rect.pos.y = self.initial_y;
        self.velocity = 0.0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn entity_at(y: f32) -> Entity {
        Entity::new(Vec2::new(480.0, y), &EntitySettings::default(), 768.0)
    }

    #[test]
    fn test_jump_sets_velocity() {
        let mut entity = entity_at(384.0);
        entity.velocity = -300.0;
        entity.jump();
        assert_eq!(entity.velocity, 500.0);

        // Re-triggering does not stack
        entity.jump();
        assert_eq!(entity.velocity, 500.0);
    }

    #[test]
    fn test_gravity_integration() {
        let mut entity = entity_at(384.0);
        entity.update(0.1);
        // v = -1000 * 0.1 = -100, y = 384 - 100 * 0.1 = 374
        assert!((entity.velocity - (-100.0)).abs() < 1e-4);
        assert!((entity.y() - 374.0).abs() < 1e-4);
    }

    #[test]
    fn test_overshooting_upper_bound_freezes_in_place() {
        let mut entity = entity_at(680.0);
        entity.jump();
        entity.update(0.1);
        // Candidate 680 + 400 * 0.1 = 720 > 684: rejected
        assert_eq!(entity.y(), 680.0);
        assert_eq!(entity.velocity, 0.0);
        assert_ne!(entity.y(), entity.upper_bound);
    }

    #[test]
    fn test_overshooting_lower_bound_freezes_in_place() {
        let mut entity = entity_at(25.0);
        entity.velocity = -400.0;
        entity.update(0.05);
        assert_eq!(entity.y(), 25.0);
        assert_eq!(entity.velocity, 0.0);
    }

    #[test]
    fn test_resting_on_bound_until_jump() {
        let mut entity = entity_at(21.0);
        for _ in 0..30 {
            entity.update(1.0 / 60.0);
        }
        let rest_y = entity.y();
        for _ in 0..30 {
            entity.update(1.0 / 60.0);
            assert_eq!(entity.y(), rest_y);
        }

        entity.jump();
        entity.update(1.0 / 60.0);
        assert!(entity.y() > rest_y);
    }

    #[test]
    fn test_reset() {
        let mut entity = entity_at(384.0);
        entity.jump();
        entity.update(0.2);
        entity.reset();
        assert_eq!(entity.y(), 384.0);
        assert_eq!(entity.velocity, 0.0);
    }

    proptest! {
        #[test]
        fn prop_position_stays_in_bounds(
            start in 21.0f32..683.0,
            steps in proptest::collection::vec((0.0f32..0.25, any::<bool>()), 1..200),
        ) {
            let mut entity = entity_at(start);
            for (dt, jump) in steps {
                if jump {
                    entity.jump();
                }
                entity.update(dt);
                prop_assert!(entity.y() >= entity.lower_bound);
                prop_assert!(entity.y() <= entity.upper_bound);
            }
        }

        #[test]
        fn prop_rejected_step_keeps_previous_y(start in 21.0f32..683.0, dt in 0.001f32..0.5) {
            let mut entity = entity_at(start);
            entity.jump();
            let before = entity.y();
            let projected = before + (entity.velocity - entity.gravity * dt) * dt;
            entity.update(dt);
            if projected >= entity.upper_bound {
                prop_assert_eq!(entity.y(), before);
                prop_assert_eq!(entity.velocity, 0.0);
            }
        }
    }
}
