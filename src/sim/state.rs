//! Game state and entity records
//!
//! Entities are plain data. All behavior lives in `tick`, `spawn` and `draw`.

use glam::Vec2;
use rand::{RngCore, SeedableRng};
use rand_pcg::Pcg32;

use super::spawn;
use crate::tuning::Tuning;

/// Current phase of gameplay
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GamePhase {
    /// Active gameplay
    Playing,
    /// Craft destroyed; waiting for fire to restart
    GameOver,
}

/// The player's craft
#[derive(Debug, Clone)]
pub struct Craft {
    pub pos: Vec2,
    pub vel: Vec2,
    /// Heading in radians (0 = +x, screen space with y down)
    pub rotation: f32,
    pub thrusting: bool,
    /// Flame length jitter in `[0, 1)`, resampled each thrusting frame
    pub flame_jitter: f32,
    /// Local-space outline, nose along +x
    pub outline: [Vec2; 4],
}

impl Craft {
    /// New craft at rest, pointing up
    pub fn new(pos: Vec2, size: f32) -> Self {
        let half = size / 2.0;
        Self {
            pos,
            vel: Vec2::ZERO,
            rotation: -std::f32::consts::FRAC_PI_2,
            thrusting: false,
            flame_jitter: 0.0,
            outline: [
                Vec2::new(half, 0.0),
                Vec2::new(-half, -half * 0.7),
                Vec2::new(-half * 0.5, 0.0),
                Vec2::new(-half, half * 0.7),
            ],
        }
    }

    /// Unit vector along the current heading
    pub fn heading(&self) -> Vec2 {
        crate::heading(self.rotation)
    }
}

/// A drifting, spinning rock
#[derive(Debug, Clone)]
pub struct Obstacle {
    pub pos: Vec2,
    pub vel: Vec2,
    pub rotation: f32,
    /// Radians per frame
    pub rotation_rate: f32,
    /// Collision radius and outline scale; always > 0
    pub size: f32,
    /// Unit-radius irregular outline, fixed at creation
    pub outline: Vec<Vec2>,
}

/// A shot fired by the craft
#[derive(Debug, Clone)]
pub struct Projectile {
    pub pos: Vec2,
    pub vel: Vec2,
    /// Frames remaining before the projectile expires
    pub ttl: u32,
}

/// Decorative background star
#[derive(Debug, Clone)]
pub struct BackgroundStar {
    pub pos: Vec2,
    /// Base brightness in `[0, 1]`
    pub brightness: f32,
    /// Twinkle angular speed (radians per second)
    pub twinkle_speed: f32,
    /// Twinkle phase offset (radians)
    pub phase: f32,
}

/// Everything a reset replaces
#[derive(Debug, Clone)]
pub struct World {
    pub phase: GamePhase,
    pub craft: Craft,
    pub obstacles: Vec<Obstacle>,
    pub projectiles: Vec<Projectile>,
    pub score: u64,
    /// Frames of invincibility left
    pub invincible_ticks: u32,
}

impl World {
    /// Fresh round: centered craft, no obstacles or projectiles
    pub fn new(width: f32, height: f32, tuning: &Tuning) -> Self {
        Self {
            phase: GamePhase::Playing,
            craft: Craft::new(Vec2::new(width / 2.0, height / 2.0), tuning.craft_size),
            obstacles: Vec::with_capacity(tuning.max_obstacles),
            projectiles: Vec::new(),
            score: 0,
            invincible_ticks: tuning.invincible_ticks,
        }
    }
}

/// Complete simulation state
pub struct GameState {
    /// Field width in pixels
    pub width: f32,
    /// Field height in pixels
    pub height: f32,
    pub tuning: Tuning,
    /// Starfield, regenerated only on construction and resize
    pub stars: Vec<BackgroundStar>,
    pub world: World,
    /// Fire level sampled on the previous update (edge detection)
    pub(crate) fire_held: bool,
    pub(crate) rng: Box<dyn RngCore>,
}

impl GameState {
    /// Create a new game state with default tuning and a seeded RNG
    pub fn new(width: f32, height: f32, seed: u64) -> Self {
        Self::with_rng(
            width,
            height,
            Tuning::default(),
            Box::new(Pcg32::seed_from_u64(seed)),
        )
    }

    /// Create a new game state with an injected random source
    ///
    /// Tuning that fails validation is replaced by the defaults.
    pub fn with_rng(width: f32, height: f32, tuning: Tuning, mut rng: Box<dyn RngCore>) -> Self {
        let tuning = match tuning.validate() {
            Ok(()) => tuning,
            Err(e) => {
                log::warn!("Rejected tuning ({}), using defaults", e);
                Tuning::default()
            }
        };
        let stars = spawn::generate_stars(width, height, tuning.star_count, &mut *rng);
        let mut state = Self {
            width,
            height,
            world: World::new(width, height, &tuning),
            tuning,
            stars,
            fire_held: false,
            rng,
        };
        state.seed_obstacles();
        state
    }

    pub fn phase(&self) -> GamePhase {
        self.world.phase
    }

    pub fn score(&self) -> u64 {
        self.world.score
    }

    /// Replace the round wholesale and reseed the obstacle field
    pub fn reset(&mut self) {
        self.world = World::new(self.width, self.height, &self.tuning);
        self.seed_obstacles();
        log::info!("Round reset");
    }

    /// Adopt a new field size; the round restarts and the starfield is rebuilt
    pub fn resize(&mut self, width: f32, height: f32) {
        if width <= 0.0 || height <= 0.0 {
            return;
        }
        self.width = width;
        self.height = height;
        self.stars =
            spawn::generate_stars(width, height, self.tuning.star_count, &mut *self.rng);
        log::info!("Field resized to {}x{}", width, height);
        self.reset();
    }

    fn seed_obstacles(&mut self) {
        for _ in 0..self.tuning.initial_obstacles {
            self.spawn_edge_obstacle();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_state_is_playing_with_seeded_field() {
        let state = GameState::new(800.0, 600.0, 1);
        assert_eq!(state.phase(), GamePhase::Playing);
        assert_eq!(state.world.obstacles.len(), state.tuning.initial_obstacles);
        assert_eq!(state.stars.len(), 100);
        assert!(state.world.projectiles.is_empty());
        assert_eq!(state.world.invincible_ticks, 120);
        assert_eq!(state.world.craft.pos, Vec2::new(400.0, 300.0));
    }

    #[test]
    fn test_invalid_tuning_falls_back_to_defaults() {
        let tuning = Tuning {
            spawn_size_min: 80.0,
            spawn_size_max: 50.0,
            ..Default::default()
        };
        let state = GameState::with_rng(
            800.0,
            600.0,
            tuning,
            Box::new(Pcg32::seed_from_u64(7)),
        );
        assert_eq!(state.tuning, Tuning::default());
        assert_eq!(state.world.obstacles.len(), 5);
    }

    #[test]
    fn test_reset_replaces_round() {
        let mut state = GameState::new(800.0, 600.0, 2);
        state.world.score = 500;
        state.world.phase = GamePhase::GameOver;
        state.world.craft.vel = Vec2::new(3.0, 1.0);
        state.world.projectiles.push(Projectile {
            pos: Vec2::ONE,
            vel: Vec2::ZERO,
            ttl: 10,
        });

        state.reset();

        assert_eq!(state.phase(), GamePhase::Playing);
        assert_eq!(state.score(), 0);
        assert_eq!(state.world.craft.vel, Vec2::ZERO);
        assert!(state.world.projectiles.is_empty());
        assert_eq!(state.world.obstacles.len(), state.tuning.initial_obstacles);
    }

    #[test]
    fn test_resize_recenters_craft_and_rebuilds_stars() {
        let mut state = GameState::new(800.0, 600.0, 3);
        state.resize(400.0, 200.0);
        assert_eq!(state.world.craft.pos, Vec2::new(200.0, 100.0));
        assert!(
            state
                .stars
                .iter()
                .all(|s| s.pos.x < 400.0 && s.pos.y < 200.0)
        );
    }

    #[test]
    fn test_resize_ignores_zero() {
        let mut state = GameState::new(800.0, 600.0, 4);
        state.resize(0.0, 600.0);
        assert_eq!(state.width, 800.0);
    }

    #[test]
    fn test_craft_outline_nose_forward() {
        let craft = Craft::new(Vec2::ZERO, 20.0);
        assert_eq!(craft.outline[0], Vec2::new(10.0, 0.0));
        let h = craft.heading();
        assert!(h.x.abs() < 1e-6 && (h.y + 1.0).abs() < 1e-6);
    }
}
