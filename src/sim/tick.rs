//! Per-frame simulation step
//!
//! One call advances the game by exactly one display frame. Velocities are
//! pixel/frame deltas, so there is no dt.

use rand::Rng;

use super::collision::{craft_hits_any, first_obstacle_hit};
use super::input::TickInput;
use super::state::{GamePhase, GameState, Projectile};
use crate::wrap_position;

/// Points for destroying an obstacle of `size`
#[inline]
pub fn score_for_size(size: f32) -> u64 {
    (100.0 / size * 10.0).floor() as u64
}

impl GameState {
    /// Advance one frame
    pub fn update(&mut self, input: &TickInput) {
        let fire_edge = input.fire_pressed || (input.fire && !self.fire_held);
        self.fire_held = input.fire;

        if self.world.phase == GamePhase::GameOver {
            if fire_edge {
                log::info!("Restarting after game over");
                self.reset();
            }
            return;
        }

        if fire_edge {
            self.fire();
        }

        // Invincibility is judged on the counter as the frame starts
        let shielded = self.world.invincible_ticks > 0;
        if shielded {
            self.world.invincible_ticks -= 1;
        }

        self.steer(input);
        self.move_projectiles();
        self.move_obstacles();
        self.resolve_projectile_hits();

        if !shielded {
            self.resolve_craft_hit();
        }

        self.maintain_population();
    }

    /// Spawn a projectile at the craft's nose, inheriting half its velocity
    pub(crate) fn fire(&mut self) {
        if self.world.phase != GamePhase::Playing {
            return;
        }
        let craft = &self.world.craft;
        let heading = craft.heading();
        let nose = craft.pos + heading * (self.tuning.craft_size / 2.0);
        let projectile = Projectile {
            pos: wrap_position(nose, self.width, self.height),
            vel: heading * self.tuning.projectile_speed + craft.vel * 0.5,
            ttl: self.tuning.projectile_lifetime,
        };
        self.world.projectiles.push(projectile);
    }

    fn steer(&mut self, input: &TickInput) {
        let step = self.tuning.rotation_step;
        let craft = &mut self.world.craft;

        if input.rotate_left {
            craft.rotation -= step;
        }
        if input.rotate_right {
            craft.rotation += step;
        }

        craft.thrusting = input.thrust;
        if craft.thrusting {
            craft.vel += craft.heading() * self.tuning.thrust_accel;
            craft.flame_jitter = self.rng.random::<f32>();
        }
        craft.vel *= self.tuning.damping;

        craft.pos = wrap_position(craft.pos + craft.vel, self.width, self.height);
    }

    fn move_projectiles(&mut self) {
        let (width, height) = (self.width, self.height);
        for p in &mut self.world.projectiles {
            p.pos = wrap_position(p.pos + p.vel, width, height);
            p.ttl = p.ttl.saturating_sub(1);
        }
        self.world.projectiles.retain(|p| p.ttl > 0);
    }

    fn move_obstacles(&mut self) {
        let (width, height) = (self.width, self.height);
        for o in &mut self.world.obstacles {
            o.pos = wrap_position(o.pos + o.vel, width, height);
            o.rotation += o.rotation_rate;
        }
    }

    /// Each projectile destroys at most one obstacle, first in list order
    fn resolve_projectile_hits(&mut self) {
        let mut i = 0;
        while i < self.world.projectiles.len() {
            let pos = self.world.projectiles[i].pos;
            let Some(hit) = first_obstacle_hit(pos, &self.world.obstacles) else {
                i += 1;
                continue;
            };

            self.world.projectiles.remove(i);
            let destroyed = self.world.obstacles.remove(hit);
            self.world.score += score_for_size(destroyed.size);

            if destroyed.size > self.tuning.split_threshold {
                self.split_obstacle(&destroyed);
            }
        }
    }

    fn resolve_craft_hit(&mut self) {
        let craft = &self.world.craft;
        if craft_hits_any(craft.pos, self.tuning.craft_size / 2.0, &self.world.obstacles) {
            self.world.phase = GamePhase::GameOver;
            log::info!("Game over with score {}", self.world.score);
        }
    }

    fn maintain_population(&mut self) {
        while self.world.obstacles.len() < self.tuning.min_obstacles {
            if !self.spawn_edge_obstacle() {
                break;
            }
        }
    }
}
