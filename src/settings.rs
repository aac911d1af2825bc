//! Arena settings
//!
//! Fixed for the lifetime of a world. Loaded once by the driver, optionally
//! from a JSON file.

use std::path::Path;

use glam::Vec2;
use rand::SeedableRng;
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use crate::consts::{ARENA_HEIGHT, ARENA_WIDTH};

/// Seed used when none is configured
pub const DEFAULT_SEED: u64 = 0x00F0_F1E5;

/// Arena configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Arena width in world units
    pub arena_width: f32,
    /// Arena height in world units
    pub arena_height: f32,
    /// Seed for the spawn RNG
    pub seed: u64,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            arena_width: ARENA_WIDTH,
            arena_height: ARENA_HEIGHT,
            seed: DEFAULT_SEED,
        }
    }
}

impl Settings {
    /// Settings for a custom arena size, default seed
    pub fn with_arena(arena_width: f32, arena_height: f32) -> Self {
        Self {
            arena_width,
            arena_height,
            ..Self::default()
        }
    }

    /// Arena center, the frog's anchor and the flies' target
    pub fn center(&self) -> Vec2 {
        Vec2::new(self.arena_width / 2.0, self.arena_height / 2.0)
    }

    /// Distance from center at which flies spawn (just off screen)
    pub fn spawn_radius(&self) -> f32 {
        self.arena_width / 2.0 + crate::consts::SPAWN_MARGIN
    }

    /// Spawn RNG seeded from these settings
    pub fn rng(&self) -> Pcg32 {
        Pcg32::seed_from_u64(self.seed)
    }

    /// Parse settings from JSON; missing fields take their defaults
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Serialize settings to pretty JSON
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    /// Load settings from a JSON file, falling back to defaults
    pub fn load(path: &Path) -> Self {
        let json = match std::fs::read_to_string(path) {
            Ok(json) => json,
            Err(err) => {
                log::info!("No settings at {} ({}), using defaults", path.display(), err);
                return Self::default();
            }
        };

        match Self::from_json(&json) {
            Ok(settings) => {
                log::info!("Loaded settings from {}", path.display());
                settings
            }
            Err(err) => {
                log::warn!("Malformed settings in {}: {}, using defaults", path.display(), err);
                Self::default()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::Rng;

    #[test]
    fn test_default_center() {
        let settings = Settings::default();
        assert_eq!(settings.center(), Vec2::new(80.0, 60.0));
        assert_eq!(settings.spawn_radius(), 144.0);
    }

    #[test]
    fn test_partial_json_uses_defaults() {
        let settings = Settings::from_json(r#"{ "seed": 42 }"#).unwrap();
        assert_eq!(settings.seed, 42);
        assert_eq!(settings.arena_width, ARENA_WIDTH);
        assert_eq!(settings.arena_height, ARENA_HEIGHT);
    }

    #[test]
    fn test_malformed_json_is_error() {
        assert!(Settings::from_json("{ arena_width: ").is_err());
    }

    #[test]
    fn test_json_round_trip() {
        let settings = Settings {
            arena_width: 320.0,
            arena_height: 240.0,
            seed: 7,
        };
        let json = settings.to_json().unwrap();
        assert_eq!(Settings::from_json(&json).unwrap(), settings);
    }

    #[test]
    fn test_load_missing_file_falls_back() {
        let settings = Settings::load(Path::new("/nonexistent/pond-frog/settings.json"));
        assert_eq!(settings, Settings::default());
    }

    #[test]
    fn test_rng_is_seeded() {
        let settings = Settings::default();
        let a: u32 = settings.rng().random();
        let b: u32 = settings.rng().random();
        assert_eq!(a, b);
    }
}
