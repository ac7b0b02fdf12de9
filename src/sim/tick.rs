//! Per-frame simulation step
//!
//! Order within a tick: toggles, phase-specific input, entity physics,
//! obstacle motion, collision check, pass/score check.

use super::collision::{crosses_threshold, detect_passes, find_collision, speed_for_score};
use super::pose::Pose;
use super::state::{GameEvent, GamePhase, GameState};

/// How far below the opening centre the autopilot lets the entity sink
const AUTOPILOT_SLACK: f32 = 56.0;

/// Input commands for a single tick (each flag fires once per press)
#[derive(Debug, Clone, Default)]
pub struct TickInput {
    /// Jump trigger (space / click)
    pub jump: bool,
    /// Return to menu after game over
    pub reset: bool,
    /// Debug: toggle collision detection
    pub toggle_collision: bool,
    /// Debug: toggle the debug overlay
    pub toggle_debug: bool,
    /// Demo mode - the simulation decides when to jump
    pub autopilot: bool,
}

/// Advance the game state by one step of `dt` seconds
pub fn tick(state: &mut GameState, input: &TickInput, dt: f32) {
    state.events.clear();

    if input.toggle_collision {
        state.toggle_collision();
    }
    if input.toggle_debug {
        state.toggle_debug();
    }

    let mut input = input.clone();
    if input.autopilot && autopilot_wants_jump(state) {
        input.jump = true;
    }
    let input = &input;

    match state.phase {
        GamePhase::Menu => {
            // World stays frozen until the first jump
            if input.jump {
                state.phase = GamePhase::Playing;
                state.push_event(GameEvent::Started);
                jump(state);
                log::info!("Run started (seed {})", state.seed);
            }
        }

        GamePhase::Playing => {
            state.time_ticks += 1;

            if input.jump {
                jump(state);
            }

            state.entity.update(dt);
            state.pose.update(dt, state.entity.velocity);
            for obstacle in &mut state.obstacles {
                obstacle.update(dt, &mut state.rng);
            }
            state.background.update(dt);

            if state.collision_enabled {
                if let Some(index) = find_collision(&state.entity, &state.obstacles) {
                    crash(state, index);
                    return;
                }
            }

            update_score(state);
        }

        GamePhase::GameOver => {
            // Only the death animation keeps running
            state.pose.update(dt, 0.0);

            if input.reset {
                state.reset();
                state.push_event(GameEvent::Reset);
                log::info!("Back to menu");
            }
        }
    }
}

fn jump(state: &mut GameState) {
    state.entity.jump();
    state.pose.set(Pose::Jumping);
    state.push_event(GameEvent::Jumped);
}

fn crash(state: &mut GameState, index: usize) {
    let obstacle_id = state.obstacles[index].id;
    state.phase = GamePhase::GameOver;
    state.pose.set(Pose::Dead);
    state.best_score = state.best_score.max(state.score);
    state.push_event(GameEvent::Crashed { obstacle_id });
    log::info!(
        "Crashed into obstacle {} with score {} (best {})",
        obstacle_id,
        state.score,
        state.best_score
    );
}

/// Award points for cleared obstacles and scale the speed at thresholds
fn update_score(state: &mut GameState) {
    let passed = detect_passes(&state.entity, &mut state.obstacles);
    let base_speed = state.settings.obstacles.initial_speed;

    for _ in 0..passed {
        state.score += 1;
        let score = state.score;
        state.push_event(GameEvent::Scored { score });
        log::debug!("Score: {}", score);

        if crosses_threshold(score, &state.settings.difficulty) {
            let speed = speed_for_score(score, base_speed, &state.settings.difficulty);
            if speed > state.obstacle_speed() {
                for obstacle in &mut state.obstacles {
                    obstacle.set_speed(speed);
                }
                state.push_event(GameEvent::SpeedUp { speed });
                log::info!("Speed up: {} px/s at score {}", speed, score);
            }
        }
    }
}

/// Jump when the entity has sunk below the next opening and is not rising
fn autopilot_wants_jump(state: &GameState) -> bool {
    match state.phase {
        GamePhase::Menu => true,
        GamePhase::GameOver => false,
        GamePhase::Playing => {
            let target = match state.next_obstacle() {
                Some(obstacle) => obstacle.opening_center_y() - state.entity.rect.height() / 2.0,
                None => state.entity.initial_y(),
            };
            state.entity.velocity <= 0.0 && state.entity.y() < target - AUTOPILOT_SLACK
        }
    }
}
