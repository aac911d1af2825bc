//! Contact tests between flies, the tongue and the arena center
//!
//! Two separate radii: the capture radius around the center (a fly got
//! through, or a caught fly was swallowed) and the larger strike radius
//! around the tongue tip.

use glam::Vec2;

use crate::consts::{CAPTURE_RADIUS, STRIKE_RADIUS};
use crate::distance;

/// Whether a fly at `position` has reached the arena center
#[inline]
pub fn reached_center(position: Vec2, center: Vec2) -> bool {
    distance(center, position) < CAPTURE_RADIUS
}

/// Whether the tongue tip is close enough to strike a fly at `position`
#[inline]
pub fn tongue_strikes(position: Vec2, tongue_tip: Vec2) -> bool {
    distance(position, tongue_tip) < STRIKE_RADIUS
}
