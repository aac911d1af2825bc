//! Pond Frog - simulation core for a frog-catches-flies arena game
//!
//! Core modules:
//! - `sim`: Deterministic per-frame simulation (frog, flies, catch effects)
//! - `settings`: Arena configuration loaded from JSON
//!
//! Rendering, audio playback and input capture live outside this crate. The
//! simulation exposes snapshots and emits events for them to consume.

pub mod settings;
pub mod sim;

pub use settings::Settings;

use glam::Vec2;

/// Game configuration constants
pub mod consts {
    /// Reference arena dimensions
    pub const ARENA_WIDTH: f32 = 160.0;
    pub const ARENA_HEIGHT: f32 = 120.0;

    /// Frog defaults
    pub const STARTING_HEALTH: u8 = 3;
    /// Tongue extension per frame while attacking
    pub const TONGUE_EXTEND_SPEED: f32 = 5.0;
    /// Tongue retraction per frame while retreating
    pub const TONGUE_RETRACT_SPEED: f32 = 10.0;

    /// Fly spawning
    pub const SPAWN_INTERVAL_FRAMES: u64 = 60;
    /// Flies spawn this far beyond half the arena width
    pub const SPAWN_MARGIN: f32 = 64.0;
    /// Fly seeded at session start (top-left corner)
    pub const SEED_FLY_POSITION: (f32, f32) = (10.0, 10.0);

    /// Fly movement (units per frame toward center)
    pub const FLY_SPEED: f32 = 0.2;
    /// Lifetime frames per sway step (integer division)
    pub const FLY_SWAY_PERIOD: u32 = 10;
    pub const FLY_SWAY_AMPLITUDE: f32 = 0.5;

    /// Sprite animation
    pub const ANIMATION_INTERVAL_FRAMES: u64 = 3;
    pub const FLY_ANIMATION_LENGTH: u32 = 6;
    pub const CATCH_EFFECT_ANIMATION_LENGTH: u32 = 4;

    /// A fly this close to center has been swallowed (Hit) or got through (Attacking)
    pub const CAPTURE_RADIUS: f32 = 5.0;
    /// A fly this close to the tongue tip is struck
    pub const STRIKE_RADIUS: f32 = 8.0;
}

/// Convert polar (angle, magnitude) to a cartesian offset
#[inline]
pub fn polar(angle: f32, magnitude: f32) -> Vec2 {
    Vec2::new(angle.cos() * magnitude, angle.sin() * magnitude)
}

/// Euclidean distance between two points
#[inline]
pub fn distance(a: Vec2, b: Vec2) -> f32 {
    a.distance(b)
}

/// Angle of the vector from `origin` to `target`, in (-π, π]
///
/// Coincident points have no direction; they resolve to 0 instead of
/// whatever sign of zero atan2 would pick.
#[inline]
pub fn angle_to(target: Vec2, origin: Vec2) -> f32 {
    let delta = target - origin;
    if delta == Vec2::ZERO {
        return 0.0;
    }
    delta.y.atan2(delta.x)
}
