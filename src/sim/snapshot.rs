//! Read-only views of the world for renderers and the HUD

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::state::{FlyState, FrogState, World};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FrogView {
    pub angle: f32,
    pub open: bool,
    pub tongue_length: f32,
    pub health: u8,
    pub state: FrogState,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FlyView {
    pub id: u32,
    pub position: Vec2,
    /// Sprite sheet frame
    pub frame: u32,
    pub state: FlyState,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EffectView {
    pub position: Vec2,
    pub frame: u32,
}

/// Everything needed to draw one frame
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Snapshot {
    pub frame: u64,
    pub score: u32,
    pub best_score: u32,
    pub frog: FrogView,
    pub flies: Vec<FlyView>,
    pub effects: Vec<EffectView>,
}

impl World {
    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            frame: self.clock.frame(),
            score: self.score,
            best_score: self.best_score,
            frog: FrogView {
                angle: self.frog.angle,
                open: self.frog.open,
                tongue_length: self.frog.tongue_length,
                health: self.frog.health,
                state: self.frog.state,
            },
            flies: self
                .flies
                .iter()
                .map(|fly| FlyView {
                    id: fly.id,
                    position: fly.position,
                    frame: fly.current_frame,
                    state: fly.state,
                })
                .collect(),
            effects: self
                .catch_effects
                .iter()
                .map(|effect| EffectView {
                    position: effect.position,
                    frame: effect.current_frame,
                })
                .collect(),
        }
    }
}
