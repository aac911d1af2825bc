//! Frame clock
//!
//! Everything periodic in the simulation (spawning, sprite animation) is a
//! pure predicate over this counter.

use serde::{Deserialize, Serialize};

use crate::consts::{ANIMATION_INTERVAL_FRAMES, SPAWN_INTERVAL_FRAMES};

/// Monotonic frame counter, advanced once per step
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SimClock {
    frame: u64,
}

impl SimClock {
    pub fn new() -> Self {
        Self::default()
    }

    /// Clock positioned at an arbitrary frame (replays, tests)
    pub fn at(frame: u64) -> Self {
        Self { frame }
    }

    #[inline]
    pub fn frame(&self) -> u64 {
        self.frame
    }

    /// Move to the next frame and return it
    pub fn advance(&mut self) -> u64 {
        self.frame += 1;
        self.frame
    }

    pub fn reset(&mut self) {
        self.frame = 0;
    }

    /// True on every `interval`-th frame (including frame 0)
    #[inline]
    pub fn every(&self, interval: u64) -> bool {
        self.frame.is_multiple_of(interval)
    }

    /// A new fly is due this frame
    #[inline]
    pub fn spawn_due(&self) -> bool {
        self.every(SPAWN_INTERVAL_FRAMES)
    }

    /// Sprite animations advance this frame
    #[inline]
    pub fn animation_due(&self) -> bool {
        self.every(ANIMATION_INTERVAL_FRAMES)
    }
}
