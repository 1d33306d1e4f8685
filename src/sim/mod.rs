//! Simulation module
//!
//! All gameplay logic lives here. This module has no GPU dependencies:
//! - One `update` per display frame, velocities in pixels/frame
//! - Injected RNG only
//! - Output is a plain vertex list from `produce_geometry`

pub mod collision;
pub mod draw;
pub mod input;
pub mod spawn;
pub mod state;
pub mod tick;

pub use collision::{circle_overlap, craft_hits_any, first_obstacle_hit};
pub use draw::star_brightness;
pub use input::{Intent, IntentEvent, TickInput};
pub use spawn::{edge_position, generate_stars, obstacle_speed, random_obstacle, random_outline};
pub use state::{BackgroundStar, Craft, GamePhase, GameState, Obstacle, Projectile, World};
pub use tick::score_for_size;
