//! Data-driven game balance
//!
//! Every gameplay number the simulation reads lives here. Defaults match
//! [`crate::consts`]; a JSON document may override any subset of fields.
//! Persisted in LocalStorage on the web.

use serde::{Deserialize, Serialize};

use crate::consts::*;
use crate::error::TuningError;

/// Gameplay tuning
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Tuning {
    // === Craft ===
    /// Heading change per frame per held rotate intent (radians)
    pub rotation_step: f32,
    /// Acceleration along heading while thrusting (pixels/frame²)
    pub thrust_accel: f32,
    /// Velocity multiplier applied every frame (< 1)
    pub damping: f32,
    /// Craft length in pixels
    pub craft_size: f32,
    /// Frames of invincibility after a reset
    pub invincible_ticks: u32,

    // === Projectiles ===
    pub projectile_speed: f32,
    pub projectile_lifetime: u32,

    // === Obstacles ===
    pub initial_obstacles: usize,
    pub min_obstacles: usize,
    pub max_obstacles: usize,
    pub split_threshold: f32,
    pub spawn_size_min: f32,
    pub spawn_size_max: f32,

    // === Background ===
    pub star_count: usize,
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            rotation_step: ROTATION_STEP,
            thrust_accel: THRUST_ACCEL,
            damping: DAMPING,
            craft_size: CRAFT_SIZE,
            invincible_ticks: INVINCIBLE_TICKS,

            projectile_speed: PROJECTILE_SPEED,
            projectile_lifetime: PROJECTILE_LIFETIME,

            initial_obstacles: INITIAL_OBSTACLES,
            min_obstacles: MIN_OBSTACLES,
            max_obstacles: MAX_OBSTACLES,
            split_threshold: SPLIT_THRESHOLD,
            spawn_size_min: SPAWN_SIZE_MIN,
            spawn_size_max: SPAWN_SIZE_MAX,

            star_count: STAR_COUNT,
        }
    }
}

impl Tuning {
    /// Parse and validate a JSON tuning document
    pub fn from_json(json: &str) -> Result<Self, TuningError> {
        let tuning: Tuning = serde_json::from_str(json)?;
        tuning.validate()?;
        Ok(tuning)
    }

    /// Reject values the simulation cannot run with
    pub fn validate(&self) -> Result<(), TuningError> {
        if !(self.damping > 0.0 && self.damping <= 1.0) {
            return Err(TuningError::Invalid("damping must be in (0, 1]"));
        }
        if self.craft_size <= 0.0 {
            return Err(TuningError::Invalid("craft_size must be positive"));
        }
        if self.split_threshold <= 0.0 {
            return Err(TuningError::Invalid("split_threshold must be positive"));
        }
        if self.spawn_size_min <= 0.0 || self.spawn_size_min >= self.spawn_size_max {
            return Err(TuningError::Invalid(
                "spawn size range must be positive and non-empty",
            ));
        }
        if self.min_obstacles > self.max_obstacles {
            return Err(TuningError::Invalid("min_obstacles exceeds max_obstacles"));
        }
        if self.projectile_lifetime == 0 {
            return Err(TuningError::Invalid("projectile_lifetime must be non-zero"));
        }
        Ok(())
    }

    /// Serialize for storage
    pub fn to_json(&self) -> Result<String, TuningError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// LocalStorage key
    #[allow(dead_code)]
    const STORAGE_KEY: &'static str = "vector_rocks_tuning";

    /// Environment variable naming a JSON tuning file (native)
    #[allow(dead_code)]
    const ENV_VAR: &'static str = "VECTOR_ROCKS_TUNING";

    /// Load tuning from LocalStorage (WASM only)
    #[cfg(target_arch = "wasm32")]
    pub fn load() -> Self {
        let storage = web_sys::window()
            .and_then(|w| w.local_storage().ok())
            .flatten();

        if let Some(storage) = storage {
            if let Ok(Some(json)) = storage.get_item(Self::STORAGE_KEY) {
                match Self::from_json(&json) {
                    Ok(tuning) => {
                        log::info!("Loaded tuning from LocalStorage");
                        return tuning;
                    }
                    Err(e) => log::warn!("Ignoring stored tuning: {}", e),
                }
            }
        }

        log::info!("Using default tuning");
        Self::default()
    }

    /// Save tuning to LocalStorage (WASM only)
    #[cfg(target_arch = "wasm32")]
    pub fn save(&self) {
        let storage = web_sys::window()
            .and_then(|w| w.local_storage().ok())
            .flatten();

        if let Some(storage) = storage {
            match self.to_json() {
                Ok(json) => {
                    let _ = storage.set_item(Self::STORAGE_KEY, &json);
                    log::info!("Tuning saved");
                }
                Err(e) => log::warn!("Cannot serialize tuning: {}", e),
            }
        }
    }

    /// Load tuning from the file named by `VECTOR_ROCKS_TUNING`, if set
    #[cfg(not(target_arch = "wasm32"))]
    pub fn load() -> Self {
        let Ok(path) = std::env::var(Self::ENV_VAR) else {
            return Self::default();
        };

        match std::fs::read_to_string(&path) {
            Ok(json) => match Self::from_json(&json) {
                Ok(tuning) => {
                    log::info!("Loaded tuning from {}", path);
                    tuning
                }
                Err(e) => {
                    log::warn!("Ignoring tuning file {}: {}", path, e);
                    Self::default()
                }
            },
            Err(e) => {
                log::warn!("Cannot read tuning file {}: {}", path, e);
                Self::default()
            }
        }
    }

    #[cfg(not(target_arch = "wasm32"))]
    pub fn save(&self) {
        // No-op for native
    }
}
