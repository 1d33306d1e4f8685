//! Vector Rocks - A vector-line arcade shooter
//!
//! Core modules:
//! - `geometry`: Vertex records, line-segment helpers and the line-stroke font
//! - `sim`: Frame-stepped simulation (physics, collisions, spawning, geometry query)
//! - `renderer`: WebGPU line-list pipeline
//! - `tuning`: Data-driven game balance
//! - `error`: Renderer and tuning errors

pub mod error;
pub mod geometry;
pub mod renderer;
pub mod sim;
pub mod tuning;

pub use error::{RenderError, TuningError};
pub use geometry::Vertex;
pub use sim::{GamePhase, GameState, Intent, IntentEvent, TickInput};
pub use tuning::Tuning;

use glam::Vec2;

/// Game configuration constants (defaults for [`Tuning`])
pub mod consts {
    /// Craft heading change per frame per held rotate intent (radians)
    pub const ROTATION_STEP: f32 = 0.08;
    /// Acceleration along heading while thrust is held (pixels/frame²)
    pub const THRUST_ACCEL: f32 = 0.15;
    /// Velocity damping applied every frame
    pub const DAMPING: f32 = 0.99;
    /// Craft length; half of it is the nose offset and the collision pad
    pub const CRAFT_SIZE: f32 = 20.0;

    /// Projectile muzzle speed (pixels/frame)
    pub const PROJECTILE_SPEED: f32 = 7.0;
    /// Projectile lifetime in frames
    pub const PROJECTILE_LIFETIME: u32 = 60;

    /// Frames of invincibility after each reset
    pub const INVINCIBLE_TICKS: u32 = 120;

    /// Obstacles seeded at every reset
    pub const INITIAL_OBSTACLES: usize = 5;
    /// Population floor kept by maintenance spawns
    pub const MIN_OBSTACLES: usize = 3;
    /// Population ceiling; spawns above it are dropped
    pub const MAX_OBSTACLES: usize = 15;
    /// Obstacles larger than this split in two when destroyed
    pub const SPLIT_THRESHOLD: f32 = 25.0;
    /// Edge-spawn size range (min inclusive, max exclusive)
    pub const SPAWN_SIZE_MIN: f32 = 50.0;
    pub const SPAWN_SIZE_MAX: f32 = 80.0;

    /// Background star count
    pub const STAR_COUNT: usize = 100;

    /// Score text origin and glyph metrics (pixels)
    pub const GLYPH_WIDTH: f32 = 10.0;
    pub const GLYPH_HEIGHT: f32 = 14.0;
    pub const GLYPH_ADVANCE: f32 = 14.0;
}

/// Wrap a coordinate into `[0, extent)` (torus field)
#[inline]
pub fn wrap(value: f32, extent: f32) -> f32 {
    if extent <= 0.0 {
        return 0.0;
    }
    let wrapped = value.rem_euclid(extent);
    // rem_euclid can round up to `extent` for tiny negative inputs
    if wrapped >= extent { 0.0 } else { wrapped }
}

/// Wrap a position into the `[0, width) x [0, height)` field
#[inline]
pub fn wrap_position(pos: Vec2, width: f32, height: f32) -> Vec2 {
    Vec2::new(wrap(pos.x, width), wrap(pos.y, height))
}

/// Unit vector for a heading angle (radians, screen space, y down)
#[inline]
pub fn heading(angle: f32) -> Vec2 {
    Vec2::new(angle.cos(), angle.sin())
}
