//! Obstacle and starfield generation
//!
//! All randomness comes from the injected RNG so seeded runs reproduce.

use glam::Vec2;
use rand::{Rng, RngCore};
use std::f32::consts::TAU;

use super::state::{BackgroundStar, GameState, Obstacle};
use crate::{heading, wrap_position};

/// Outline vertex count range (inclusive)
const OUTLINE_MIN_POINTS: usize = 8;
const OUTLINE_MAX_POINTS: usize = 12;
/// Per-vertex radius perturbation (±40%)
const OUTLINE_JITTER: f32 = 0.4;
/// Obstacle spin range (radians/frame)
const MAX_ROTATION_RATE: f32 = 0.02;

/// Obstacle drift speed: larger rocks move slower
#[inline]
pub fn obstacle_speed(size: f32) -> f32 {
    (3.0 - size * 0.02).max(0.2)
}

/// Irregular unit-radius polygon
pub fn random_outline(rng: &mut dyn RngCore) -> Vec<Vec2> {
    let count = rng.random_range(OUTLINE_MIN_POINTS..=OUTLINE_MAX_POINTS);
    (0..count)
        .map(|i| {
            let angle = i as f32 / count as f32 * TAU;
            let radius = rng.random_range(1.0 - OUTLINE_JITTER..1.0 + OUTLINE_JITTER);
            heading(angle) * radius
        })
        .collect()
}

/// New obstacle at `pos` with a random heading and spin
pub fn random_obstacle(pos: Vec2, size: f32, rng: &mut dyn RngCore) -> Obstacle {
    let direction = rng.random::<f32>() * TAU;
    Obstacle {
        pos,
        vel: heading(direction) * obstacle_speed(size),
        rotation: 0.0,
        rotation_rate: rng.random_range(-MAX_ROTATION_RATE..MAX_ROTATION_RATE),
        size,
        outline: random_outline(rng),
    }
}

/// Uniform point on a uniformly chosen screen edge
pub fn edge_position(width: f32, height: f32, rng: &mut dyn RngCore) -> Vec2 {
    let along = rng.random::<f32>();
    let pos = match rng.random_range(0..4u8) {
        0 => Vec2::new(along * width, 0.0),
        1 => Vec2::new((width - 1.0).max(0.0), along * height),
        2 => Vec2::new(along * width, (height - 1.0).max(0.0)),
        _ => Vec2::new(0.0, along * height),
    };
    wrap_position(pos, width, height)
}

/// Fixed starfield for a field size
pub fn generate_stars(
    width: f32,
    height: f32,
    count: usize,
    rng: &mut dyn RngCore,
) -> Vec<BackgroundStar> {
    (0..count)
        .map(|_| BackgroundStar {
            pos: wrap_position(
                Vec2::new(rng.random::<f32>() * width, rng.random::<f32>() * height),
                width,
                height,
            ),
            brightness: rng.random_range(0.3..1.0),
            twinkle_speed: rng.random_range(0.5..3.0),
            phase: rng.random::<f32>() * TAU,
        })
        .collect()
}

impl GameState {
    /// Add an obstacle unless the population is at its ceiling
    pub fn push_obstacle(&mut self, obstacle: Obstacle) -> bool {
        if self.world.obstacles.len() >= self.tuning.max_obstacles {
            log::debug!("Obstacle spawn dropped at capacity");
            return false;
        }
        self.world.obstacles.push(obstacle);
        true
    }

    /// Spawn a random-size obstacle on a random edge
    pub fn spawn_edge_obstacle(&mut self) -> bool {
        if self.world.obstacles.len() >= self.tuning.max_obstacles {
            log::debug!("Edge spawn dropped at capacity");
            return false;
        }
        let rng = &mut *self.rng;
        let pos = edge_position(self.width, self.height, rng);
        let size = rng.random_range(self.tuning.spawn_size_min..self.tuning.spawn_size_max);
        let obstacle = random_obstacle(pos, size, rng);
        self.push_obstacle(obstacle)
    }

    /// Two half-size children at the parent's position, each with its own heading
    pub fn split_obstacle(&mut self, parent: &Obstacle) -> usize {
        let child_size = parent.size / 2.0;
        let mut spawned = 0;
        for _ in 0..2 {
            let child = random_obstacle(parent.pos, child_size, &mut *self.rng);
            if self.push_obstacle(child) {
                spawned += 1;
            }
        }
        log::debug!(
            "Obstacle of size {} split into {} children",
            parent.size,
            spawned
        );
        spawned
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_pcg::Pcg32;

    #[test]
    fn test_outline_point_count_and_radius() {
        let mut rng = Pcg32::seed_from_u64(7);
        for _ in 0..50 {
            let outline = random_outline(&mut rng);
            assert!((OUTLINE_MIN_POINTS..=OUTLINE_MAX_POINTS).contains(&outline.len()));
            for p in &outline {
                let r = p.length();
                assert!((0.6 - 1e-4..1.4 + 1e-4).contains(&r), "radius {r}");
            }
        }
    }

    #[test]
    fn test_larger_obstacles_are_slower() {
        assert!(obstacle_speed(80.0) < obstacle_speed(50.0));
        assert!(obstacle_speed(50.0) < obstacle_speed(20.0));
        assert!(obstacle_speed(1000.0) > 0.0);
    }

    #[test]
    fn test_random_obstacle_speed_matches_size() {
        let mut rng = Pcg32::seed_from_u64(11);
        let o = random_obstacle(Vec2::new(10.0, 10.0), 60.0, &mut rng);
        assert!((o.vel.length() - obstacle_speed(60.0)).abs() < 1e-4);
        assert_eq!(o.size, 60.0);
    }

    #[test]
    fn test_edge_position_is_on_an_edge_and_in_field() {
        let mut rng = Pcg32::seed_from_u64(5);
        for _ in 0..200 {
            let p = edge_position(640.0, 480.0, &mut rng);
            assert!((0.0..640.0).contains(&p.x) && (0.0..480.0).contains(&p.y));
            let on_edge = p.x == 0.0 || p.y == 0.0 || p.x == 639.0 || p.y == 479.0;
            assert!(on_edge, "{p:?} not on an edge");
        }
    }

    #[test]
    fn test_stars_in_field() {
        let mut rng = Pcg32::seed_from_u64(9);
        let stars = generate_stars(300.0, 200.0, 100, &mut rng);
        assert_eq!(stars.len(), 100);
        for s in &stars {
            assert!((0.0..300.0).contains(&s.pos.x) && (0.0..200.0).contains(&s.pos.y));
            assert!((0.0..=1.0).contains(&s.brightness));
        }
    }

    #[test]
    fn test_edge_spawn_respects_capacity() {
        let mut state = GameState::new(800.0, 600.0, 1);
        while state.world.obstacles.len() < state.tuning.max_obstacles {
            assert!(state.spawn_edge_obstacle());
        }
        assert!(!state.spawn_edge_obstacle());
        assert_eq!(state.world.obstacles.len(), 15);
    }

    #[test]
    fn test_split_children_at_parent_position() {
        let mut state = GameState::new(800.0, 600.0, 1);
        state.world.obstacles.clear();
        let mut rng = Pcg32::seed_from_u64(3);
        let parent = random_obstacle(Vec2::new(123.0, 321.0), 40.0, &mut rng);
        assert_eq!(state.split_obstacle(&parent), 2);
        for child in &state.world.obstacles {
            assert_eq!(child.pos, parent.pos);
            assert_eq!(child.size, 20.0);
        }
    }
}
