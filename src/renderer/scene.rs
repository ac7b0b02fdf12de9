//! Draw list generation from a read-only game state

use glam::Vec2;

use super::sprite::{SpriteInstance, SpriteKind, colors};
use crate::sim::{GamePhase, GameState, Pose, Rect};

/// Per-frame view parameters supplied by the host
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RenderContext {
    /// Visible area in world pixels
    pub viewport: Vec2,
    /// World position shown at the bottom-left of the screen
    pub camera_offset: Vec2,
}

impl RenderContext {
    pub fn new(width: f32, height: f32) -> Self {
        Self {
            viewport: Vec2::new(width, height),
            camera_offset: Vec2::ZERO,
        }
    }

    fn to_screen(&self, world: Vec2) -> [f32; 2] {
        (world - self.camera_offset).to_array()
    }

    /// Whether a world rect intersects the viewport horizontally
    fn visible(&self, rect: &Rect) -> bool {
        let x = rect.x() - self.camera_offset.x;
        x + rect.width() > 0.0 && x < self.viewport.x
    }
}

/// Everything the backend needs to draw one frame
#[derive(Debug, Clone, Default)]
pub struct Frame {
    /// Back-to-front
    pub sprites: Vec<SpriteInstance>,
    /// HUD text, one entry per line
    pub hud: Vec<String>,
}

impl Frame {
    /// Raw instance buffer for upload
    pub fn as_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.sprites)
    }

    pub fn count(&self, kind: SpriteKind) -> usize {
        self.sprites.iter().filter(|s| s.is(kind)).count()
    }
}

/// Build the draw list for the current state
pub fn build_frame(state: &GameState, ctx: &RenderContext) -> Frame {
    let mut frame = Frame {
        sprites: Vec::with_capacity(64),
        hud: Vec::new(),
    };

    push_background(state, ctx, &mut frame);
    push_obstacles(state, ctx, &mut frame);
    push_entity(state, ctx, &mut frame);
    push_hud(state, &mut frame);

    frame
}

fn push_background(state: &GameState, ctx: &RenderContext, frame: &mut Frame) {
    for (index, layer) in state.background.layers.iter().enumerate() {
        // Two copies side by side cover the wrap
        for copy in 0..2 {
            let x = layer.x + layer.span * copy as f32;
            frame.sprites.push(
                SpriteInstance::new(
                    SpriteKind::Background,
                    [x, 0.0],
                    [layer.span, ctx.viewport.y],
                    colors::WHITE,
                )
                .with_variant(index as u32, 0),
            );
        }
    }
}

fn push_obstacles(state: &GameState, ctx: &RenderContext, frame: &mut Frame) {
    let tint = if state.phase == GamePhase::GameOver {
        colors::CRASHED
    } else {
        colors::WHITE
    };

    for obstacle in &state.obstacles {
        if !ctx.visible(obstacle.top_rect()) {
            continue;
        }

        for filler in obstacle.filler_rects() {
            frame.sprites.push(rect_sprite(SpriteKind::Filler, filler, ctx, tint));
        }
        frame.sprites.push(rect_sprite(
            SpriteKind::TopSegment,
            obstacle.top_rect(),
            ctx,
            tint,
        ));
        frame.sprites.push(rect_sprite(
            SpriteKind::BottomSegment,
            obstacle.bottom_rect(),
            ctx,
            tint,
        ));
    }
}

fn push_entity(state: &GameState, ctx: &RenderContext, frame: &mut Frame) {
    let tint = if state.collision_enabled {
        colors::WHITE
    } else {
        colors::GHOST
    };
    let pose = state.pose.pose();
    frame.sprites.push(
        rect_sprite(SpriteKind::Entity, &state.entity.rect, ctx, tint)
            .with_variant(pose_index(pose), state.pose.frame()),
    );
}

fn push_hud(state: &GameState, frame: &mut Frame) {
    frame.hud.push(format!("Score: {}", state.score));
    if state.best_score > 0 {
        frame.hud.push(format!("Best: {}", state.best_score));
    }

    match state.phase {
        GamePhase::Menu => frame.hud.push("Press SPACE to start".to_string()),
        GamePhase::GameOver => frame.hud.push("Game Over - press R".to_string()),
        GamePhase::Playing => {}
    }

    if state.debug_enabled {
        frame.hud.extend(state.debug_text().lines().map(str::to_string));
    }
}

fn rect_sprite(kind: SpriteKind, rect: &Rect, ctx: &RenderContext, tint: [f32; 4]) -> SpriteInstance {
    SpriteInstance::new(kind, ctx.to_screen(rect.pos), rect.size.to_array(), tint)
}

fn pose_index(pose: Pose) -> u32 {
    match pose {
        Pose::Standing => 0,
        Pose::Jumping => 1,
        Pose::Falling => 2,
        Pose::Dead => 3,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::{TickInput, tick};

    #[test]
    fn test_menu_frame() {
        let state = GameState::new(12345);
        let frame = build_frame(&state, &RenderContext::new(1024.0, 768.0));

        // 3 layers drawn twice
        assert_eq!(frame.count(SpriteKind::Background), 6);
        // Only the obstacle at x=896 is on screen
        assert_eq!(frame.count(SpriteKind::TopSegment), 1);
        assert_eq!(frame.count(SpriteKind::BottomSegment), 1);
        assert_eq!(
            frame.count(SpriteKind::Filler),
            state.obstacles[0].filler_rects().len()
        );
        assert_eq!(frame.count(SpriteKind::Entity), 1);
        assert_eq!(frame.sprites.last().map(|s| s.kind), Some(SpriteKind::Entity as u32));
        assert_eq!(frame.hud, vec!["Score: 0", "Press SPACE to start"]);
    }

    #[test]
    fn test_wider_viewport_shows_more() {
        let state = GameState::new(12345);
        let frame = build_frame(&state, &RenderContext::new(1600.0, 768.0));
        assert_eq!(frame.count(SpriteKind::TopSegment), 3);
    }

    #[test]
    fn test_camera_offset_shifts_sprites() {
        let state = GameState::new(1);
        let mut ctx = RenderContext::new(1024.0, 768.0);
        ctx.camera_offset = Vec2::new(100.0, 0.0);
        let frame = build_frame(&state, &ctx);
        let entity = frame.sprites.last().copied().unwrap();
        assert_eq!(entity.position, [380.0, 384.0]);
    }

    #[test]
    fn test_bytes_match_instance_layout() {
        let state = GameState::new(1);
        let frame = build_frame(&state, &RenderContext::new(1024.0, 768.0));
        assert_eq!(
            frame.as_bytes().len(),
            frame.sprites.len() * std::mem::size_of::<SpriteInstance>()
        );
    }

    #[test]
    fn test_debug_lines_and_pose() {
        let mut state = GameState::new(1);
        tick(
            &mut state,
            &TickInput {
                jump: true,
                toggle_debug: true,
                ..Default::default()
            },
            1.0 / 120.0,
        );
        let frame = build_frame(&state, &RenderContext::new(1024.0, 768.0));
        assert!(frame.hud.iter().any(|l| l.starts_with("Velocity: ")));
        let entity = frame.sprites.last().copied().unwrap();
        assert_eq!(entity.variant, 1);
    }
}
