//! Events emitted by a simulation step
//!
//! The audio and HUD collaborators react to these; the core never plays a
//! sound itself.

use serde::{Deserialize, Serialize};

/// Something that happened during a step, in emission order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum GameEvent {
    /// The tongue struck a fly
    Catch,
    /// A fly reached the frog and cost one health
    Miss,
}
