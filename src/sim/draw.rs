//! Vertex query for the current state
//!
//! `produce_geometry` is a read-only snapshot: a fresh line list every frame.

use glam::Vec2;

use super::state::{BackgroundStar, GamePhase, GameState};
use crate::geometry::shapes::{crosshair, outline, segment, tick_mark, to_world};
use crate::geometry::{Vertex, colors, layout_text, text_width};

/// Length of a star tick in pixels
const STAR_TICK: f32 = 2.0;
/// Half-extent of the projectile crosshair
const PROJECTILE_HALF: f32 = 2.0;
/// Frames per invincibility blink phase
const BLINK_FRAMES: u32 = 8;
/// Score readout position
const SCORE_ORIGIN: Vec2 = Vec2::new(20.0, 20.0);

const GAME_OVER_TEXT: &str = "GAME OVER";
const RESTART_TEXT: &str = "PRESS FIRE TO RESTART";

/// Star brightness at `time` seconds, in `[0, 1]`
pub fn star_brightness(star: &BackgroundStar, time: f32) -> f32 {
    let twinkle = 0.5 + 0.5 * (time * star.twinkle_speed + star.phase).sin();
    (star.brightness * twinkle).clamp(0.0, 1.0)
}

impl GameState {
    /// Line-list geometry for this frame
    pub fn produce_geometry(&self, time: f32) -> Vec<Vertex> {
        let mut vertices = Vec::with_capacity(1024);

        for star in &self.stars {
            let b = star_brightness(star, time);
            vertices.extend(tick_mark(star.pos, STAR_TICK, [b, b, b, 1.0]));
        }

        if self.world.phase != GamePhase::GameOver {
            self.push_craft(&mut vertices);
        }

        for o in &self.world.obstacles {
            vertices.extend(outline(
                &o.outline,
                o.pos,
                o.rotation,
                o.size,
                colors::OBSTACLE,
            ));
        }

        for p in &self.world.projectiles {
            vertices.extend(crosshair(p.pos, PROJECTILE_HALF, colors::PROJECTILE));
        }

        let score = format!("SCORE: {}", self.world.score);
        vertices.extend(layout_text(&score, SCORE_ORIGIN, colors::SCORE));

        if self.world.phase == GamePhase::GameOver {
            let mid = self.height / 2.0;
            vertices.extend(self.centered_text(GAME_OVER_TEXT, mid - 30.0, colors::GAME_OVER));
            vertices.extend(self.centered_text(RESTART_TEXT, mid + 10.0, colors::PROMPT));
        }

        vertices
    }

    fn push_craft(&self, vertices: &mut Vec<Vertex>) {
        let craft = &self.world.craft;
        let ticks = self.world.invincible_ticks;
        let color = if ticks > 0 && (ticks / BLINK_FRAMES) % 2 == 1 {
            colors::CRAFT_BLINK
        } else {
            colors::CRAFT
        };
        vertices.extend(outline(&craft.outline, craft.pos, craft.rotation, 1.0, color));

        if craft.thrusting {
            let half = self.tuning.craft_size / 2.0;
            let length = half * (0.8 + 0.8 * craft.flame_jitter);
            let base = to_world(Vec2::new(-half, 0.0), craft.pos, craft.rotation);
            let tip = to_world(Vec2::new(-half - length, 0.0), craft.pos, craft.rotation);
            vertices.extend(segment(base, tip, colors::FLAME));
        }
    }

    fn centered_text(&self, text: &str, y: f32, color: [f32; 4]) -> Vec<Vertex> {
        let x = (self.width - text_width(text)) / 2.0;
        layout_text(text, Vec2::new(x, y), color)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::TickInput;
    use proptest::prelude::*;

    fn colors_in_range(vertices: &[Vertex]) -> bool {
        vertices
            .iter()
            .all(|v| v.color.iter().all(|c| (0.0..=1.0).contains(c)))
    }

    #[test]
    fn test_geometry_is_even_and_pure() {
        let state = GameState::new(800.0, 600.0, 1);
        let a = state.produce_geometry(1.25);
        let b = state.produce_geometry(1.25);
        assert_eq!(a.len() % 2, 0);
        assert_eq!(a, b);
        assert!(colors_in_range(&a));
    }

    #[test]
    fn test_stars_come_first_as_horizontal_ticks() {
        let state = GameState::new(800.0, 600.0, 2);
        let v = state.produce_geometry(0.0);
        for (i, star) in state.stars.iter().enumerate() {
            let (a, b) = (v[i * 2], v[i * 2 + 1]);
            assert_eq!(a.position, [star.pos.x, star.pos.y]);
            assert_eq!(b.position[1], star.pos.y);
            assert_eq!(b.position[0], star.pos.x + STAR_TICK);
        }
    }

    #[test]
    fn test_star_twinkle_depends_on_time() {
        let star = BackgroundStar {
            pos: Vec2::ZERO,
            brightness: 0.8,
            twinkle_speed: 2.0,
            phase: 0.0,
        };
        assert!((star_brightness(&star, 0.0) - 0.4).abs() < 1e-5);
        let peak = std::f32::consts::FRAC_PI_4;
        assert!((star_brightness(&star, peak) - 0.8).abs() < 1e-5);
    }

    #[test]
    fn test_craft_hidden_and_banner_shown_on_game_over() {
        let mut state = GameState::new(800.0, 600.0, 3);
        let playing = state.produce_geometry(0.0);
        state.world.phase = GamePhase::GameOver;
        let over = state.produce_geometry(0.0);

        let craft_len = 8;
        let banner_len = layout_text(GAME_OVER_TEXT, Vec2::ZERO, colors::GAME_OVER).len()
            + layout_text(RESTART_TEXT, Vec2::ZERO, colors::PROMPT).len();
        assert_eq!(over.len(), playing.len() - craft_len + banner_len);
        assert!(over.iter().any(|v| v.color == colors::GAME_OVER));
    }

    #[test]
    fn test_thrust_adds_flame_segment() {
        let mut state = GameState::new(800.0, 600.0, 4);
        let idle = state.produce_geometry(0.0).len();
        state.world.craft.thrusting = true;
        let v = state.produce_geometry(0.0);
        assert_eq!(v.len(), idle + 2);
        assert!(v.iter().any(|v| v.color == colors::FLAME));
    }

    #[test]
    fn test_invincible_craft_blinks() {
        let mut state = GameState::new(800.0, 600.0, 5);
        let craft_start = state.stars.len() * 2;

        state.world.invincible_ticks = BLINK_FRAMES;
        let v = state.produce_geometry(0.0);
        assert_eq!(v[craft_start].color, colors::CRAFT_BLINK);

        state.world.invincible_ticks = BLINK_FRAMES * 2;
        let v = state.produce_geometry(0.0);
        assert_eq!(v[craft_start].color, colors::CRAFT);

        state.world.invincible_ticks = 0;
        let v = state.produce_geometry(0.0);
        assert_eq!(v[craft_start].color, colors::CRAFT);
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(32))]

        #[test]
        fn prop_geometry_even_with_unit_colors(
            seed in any::<u64>(),
            frames in 0usize..150,
            time in 0.0f32..10_000.0,
        ) {
            let mut state = GameState::new(640.0, 480.0, seed);
            for f in 0..frames {
                let input = TickInput {
                    thrust: true,
                    rotate_left: true,
                    fire: f % 7 == 0,
                    ..Default::default()
                };
                state.update(&input);
            }
            let v = state.produce_geometry(time);
            prop_assert_eq!(v.len() % 2, 0);
            prop_assert!(colors_in_range(&v));
        }
    }
}
