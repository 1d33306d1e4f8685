//! Vertex record for 2D line rendering

use bytemuck::{Pod, Zeroable};
use glam::Vec2;

/// 2D vertex in surface-pixel space with a normalized RGBA color
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, Pod, Zeroable)]
pub struct Vertex {
    pub position: [f32; 2],
    pub color: [f32; 4],
}

impl Vertex {
    pub const fn new(x: f32, y: f32, color: [f32; 4]) -> Self {
        Self {
            position: [x, y],
            color,
        }
    }

    pub fn at(pos: Vec2, color: [f32; 4]) -> Self {
        Self::new(pos.x, pos.y, color)
    }
}

/// Colors for game elements
pub mod colors {
    pub const CRAFT: [f32; 4] = [1.0, 1.0, 1.0, 1.0];
    /// Alternate craft color while invincible
    pub const CRAFT_BLINK: [f32; 4] = [0.3, 0.8, 1.0, 0.6];
    pub const FLAME: [f32; 4] = [1.0, 0.55, 0.1, 1.0];
    pub const OBSTACLE: [f32; 4] = [0.75, 0.75, 0.8, 1.0];
    pub const PROJECTILE: [f32; 4] = [1.0, 1.0, 0.4, 1.0];
    pub const SCORE: [f32; 4] = [0.9, 0.9, 0.9, 1.0];
    pub const GAME_OVER: [f32; 4] = [1.0, 0.25, 0.25, 1.0];
    pub const PROMPT: [f32; 4] = [0.8, 0.8, 0.8, 1.0];
    pub const BACKGROUND: [f32; 4] = [0.0, 0.0, 0.08, 1.0];
}
