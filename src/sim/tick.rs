//! Per-frame simulation step
//!
//! Order within a step is fixed: clock, spawn, catch effects, flies, frog,
//! then the health check. Fly collisions can force the frog's tongue back,
//! so flies must run before the frog on the same frame.

use glam::Vec2;
use rand::Rng;

use super::collision::{reached_center, tongue_strikes};
use super::events::GameEvent;
use super::state::{CatchEffect, FlyState, FrogState, World};

/// Input for a single step, already normalized by the driver
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct TickInput {
    /// Pointer position in arena coordinates
    pub pointer: Vec2,
    /// Primary action went down this frame (edge, not level)
    pub action_just_pressed: bool,
}

/// Advance the world by one frame
pub fn tick<R: Rng + ?Sized>(world: &mut World, input: &TickInput, rng: &mut R) -> Vec<GameEvent> {
    let mut events = Vec::new();

    let frame = world.clock.advance();
    log::trace!("Frame {}: {} flies, {} effects", frame, world.flies.len(), world.catch_effects.len());

    if world.clock.spawn_due() {
        world.spawn_fly_at_random(rng);
    }

    update_catch_effects(world);
    update_flies(world, &mut events);

    world.frog.update(input, world.center);

    if world.is_session_over() {
        world.reset();
    }

    events
}

fn update_catch_effects(world: &mut World) {
    if !world.clock.animation_due() {
        return;
    }

    let mut finished = Vec::new();
    for (index, effect) in world.catch_effects.iter_mut().enumerate() {
        if !effect.advance() {
            finished.push(index);
        }
    }

    // Highest index first so swap_remove never moves a marked entry
    for index in finished.into_iter().rev() {
        world.catch_effects.swap_remove(index);
    }
}

fn update_flies(world: &mut World, events: &mut Vec<GameEvent>) {
    let center = world.center;
    let animate = world.clock.animation_due();
    let mut removed = Vec::new();

    for (index, fly) in world.flies.iter_mut().enumerate() {
        match fly.state {
            FlyState::Hit => {
                // Reeled in on the tongue
                fly.position = world.frog.tongue_tip(center);
                if reached_center(fly.position, center) {
                    log::debug!("Fly {} swallowed", fly.id);
                    removed.push(index);
                    continue;
                }
            }
            FlyState::Attacking => {
                if reached_center(fly.position, center) {
                    world.frog.lose_health();
                    log::debug!("Fly {} got through, health {}", fly.id, world.frog.health);
                    events.push(GameEvent::Miss);
                    removed.push(index);
                    continue;
                }

                if world.frog.state == FrogState::Attacking
                    && tongue_strikes(fly.position, world.frog.tongue_tip(center))
                {
                    fly.state = FlyState::Hit;
                    world.frog.recoil();
                    world.catch_effects.push(CatchEffect::new(fly.position));
                    world.score += 1;
                    log::debug!("Fly {} caught, score {}", fly.id, world.score);
                    events.push(GameEvent::Catch);
                    continue;
                }

                fly.move_toward(center);
                if animate {
                    fly.advance_frame();
                }
            }
            FlyState::Searching => {}
        }

        fly.lifetime += 1;
    }

    for index in removed.into_iter().rev() {
        world.flies.swap_remove(index);
    }
}
