//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - One step per frame, no wall-clock time
//! - Injected RNG only
//! - No rendering, audio or platform dependencies

pub mod autopilot;
pub mod clock;
pub mod collision;
pub mod events;
pub mod snapshot;
pub mod state;
pub mod tick;

pub use autopilot::autopilot;
pub use clock::SimClock;
pub use collision::{reached_center, tongue_strikes};
pub use events::GameEvent;
pub use snapshot::{EffectView, FlyView, FrogView, Snapshot};
pub use state::{CatchEffect, Fly, FlyState, Frog, FrogState, World};
pub use tick::{TickInput, tick};
