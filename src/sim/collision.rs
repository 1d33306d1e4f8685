//! Circle-approximation hit tests
//!
//! Obstacle outlines are cosmetic. Every test here compares squared
//! distances against a squared radius.

use glam::Vec2;

use super::state::Obstacle;

/// True if `a` and `b` are closer than `radius`
#[inline]
pub fn circle_overlap(a: Vec2, b: Vec2, radius: f32) -> bool {
    a.distance_squared(b) < radius * radius
}

/// Index of the first obstacle (list order) whose circle contains `point`
pub fn first_obstacle_hit(point: Vec2, obstacles: &[Obstacle]) -> Option<usize> {
    obstacles
        .iter()
        .position(|o| circle_overlap(point, o.pos, o.size))
}

/// True if a craft at `pos` with half-length `craft_half` touches any obstacle
pub fn craft_hits_any(pos: Vec2, craft_half: f32, obstacles: &[Obstacle]) -> bool {
    obstacles
        .iter()
        .any(|o| circle_overlap(pos, o.pos, o.size + craft_half))
}
