//! Demo/attract mode player
//!
//! Produces the same input a person would: a pointer position and the
//! occasional click. It never touches world state directly.

use super::state::{FlyState, FrogState, World};
use super::tick::TickInput;
use crate::consts::{FLY_SPEED, TONGUE_EXTEND_SPEED};
use crate::{angle_to, distance, polar};

/// Flies closer than this to the frog are worth striking at
pub const AUTOPILOT_REACH: f32 = 48.0;

/// Aim at the most dangerous fly and strike once it is in reach
pub fn autopilot(world: &World) -> TickInput {
    let center = world.center;

    // Closest attacking fly to the frog
    let target = world
        .flies
        .iter()
        .filter(|fly| fly.state == FlyState::Attacking)
        .min_by(|a, b| {
            distance(a.position, center)
                .partial_cmp(&distance(b.position, center))
                .unwrap_or(std::cmp::Ordering::Equal)
        });

    let Some(fly) = target else {
        return TickInput {
            pointer: center,
            action_just_pressed: false,
        };
    };

    // Lead the target by how far it flies while the tongue extends
    let reach = distance(fly.position, center);
    let travel_frames = reach / TONGUE_EXTEND_SPEED;
    let pointer = fly.position + polar(angle_to(center, fly.position), FLY_SPEED * travel_frames);

    TickInput {
        pointer,
        action_just_pressed: world.frog.state == FrogState::Idle && reach <= AUTOPILOT_REACH,
    }
}
