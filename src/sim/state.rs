//! World state and entity models
//!
//! Everything a step reads or writes lives here. The world is plain data:
//! cloning it forks a replay.

use std::f32::consts::FRAC_PI_2;

use glam::Vec2;
use rand::Rng;
use serde::{Deserialize, Serialize};

use super::clock::SimClock;
use super::events::GameEvent;
use super::tick::{TickInput, tick};
use crate::consts::*;
use crate::settings::Settings;
use crate::{angle_to, distance, polar};

/// Frog tongue state
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum FrogState {
    /// Tongue retracted, tracking the pointer
    #[default]
    Idle,
    /// Tongue extending toward the committed target length
    Attacking,
    /// Tongue snapping back
    Retreating,
}

/// The player's frog, anchored at the arena center
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Frog {
    /// Sprite rotation (radians). The sprite faces "up", so this is the aim
    /// direction minus a quarter turn.
    pub angle: f32,
    pub tongue_length: f32,
    /// Length committed when the strike started
    pub tongue_target_length: f32,
    pub state: FrogState,
    /// Mouth open (striking)
    pub open: bool,
    pub health: u8,
}

impl Default for Frog {
    fn default() -> Self {
        Self {
            angle: 0.0,
            tongue_length: 0.0,
            tongue_target_length: 0.0,
            state: FrogState::Idle,
            open: false,
            health: STARTING_HEALTH,
        }
    }
}

impl Frog {
    /// Where the tongue currently ends
    pub fn tongue_tip(&self, center: Vec2) -> Vec2 {
        center + polar(self.angle + FRAC_PI_2, self.tongue_length)
    }

    /// Turn toward the pointer
    pub fn aim(&mut self, pointer: Vec2, center: Vec2) {
        self.angle = angle_to(pointer, center) - FRAC_PI_2;
    }

    /// Start a strike. The reach is fixed now and ignores later pointer moves.
    pub fn strike(&mut self, pointer: Vec2, center: Vec2) {
        self.state = FrogState::Attacking;
        self.tongue_target_length = distance(center, pointer);
    }

    /// Snap the tongue back after it connected with a fly
    pub fn recoil(&mut self) {
        self.state = FrogState::Retreating;
    }

    pub fn lose_health(&mut self) {
        self.health = self.health.saturating_sub(1);
    }

    pub fn is_defeated(&self) -> bool {
        self.health < 1
    }

    /// Advance the tongue state machine by one frame
    pub fn update(&mut self, input: &TickInput, center: Vec2) {
        match self.state {
            FrogState::Idle => {
                self.open = false;
                self.tongue_length = 0.0;
                self.aim(input.pointer, center);
                if input.action_just_pressed {
                    self.strike(input.pointer, center);
                }
            }
            FrogState::Attacking => {
                self.open = true;
                if self.tongue_length < self.tongue_target_length {
                    self.tongue_length = (self.tongue_length + TONGUE_EXTEND_SPEED)
                        .min(self.tongue_target_length);
                } else {
                    self.state = FrogState::Retreating;
                }
            }
            FrogState::Retreating => {
                self.tongue_length -= TONGUE_RETRACT_SPEED;
                if self.tongue_length <= 0.0 {
                    self.tongue_length = 0.0;
                    self.state = FrogState::Idle;
                }
            }
        }
    }
}

/// Fly behavior state
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FlyState {
    /// Spawned but not yet homing in
    Searching,
    /// Homing in on the frog
    Attacking,
    /// Stuck to the tongue, being reeled in
    Hit,
}

/// A fly entity
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Fly {
    pub id: u32,
    pub position: Vec2,
    pub state: FlyState,
    pub current_frame: u32,
    pub animation_length: u32,
    /// Frames since spawn
    pub lifetime: u32,
}

impl Fly {
    /// A fly already homing in on the frog
    pub fn new(id: u32, position: Vec2) -> Self {
        Self {
            id,
            position,
            state: FlyState::Attacking,
            current_frame: 0,
            animation_length: FLY_ANIMATION_LENGTH,
            lifetime: 0,
        }
    }

    /// Vertical wobble for this frame. The phase steps once every
    /// `FLY_SWAY_PERIOD` frames of lifetime.
    pub fn sway(&self) -> f32 {
        ((self.lifetime / FLY_SWAY_PERIOD) as f32).sin() * FLY_SWAY_AMPLITUDE
    }

    /// Wobble, then take one constant-speed step toward `target`
    pub fn move_toward(&mut self, target: Vec2) {
        self.position.y += self.sway();
        let heading = angle_to(target, self.position);
        self.position += polar(heading, 1.0) * FLY_SPEED;
    }

    /// Next sprite frame, looping
    pub fn advance_frame(&mut self) {
        self.current_frame += 1;
        if self.current_frame >= self.animation_length {
            self.current_frame = 0;
        }
    }
}

/// One-shot sprite played where a fly was caught
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CatchEffect {
    pub position: Vec2,
    pub current_frame: u32,
    pub animation_length: u32,
}

impl CatchEffect {
    pub fn new(position: Vec2) -> Self {
        Self {
            position,
            current_frame: 0,
            animation_length: CATCH_EFFECT_ANIMATION_LENGTH,
        }
    }

    /// Advance one frame. Returns false once the animation has played out;
    /// the frame is left on the last image.
    pub fn advance(&mut self) -> bool {
        if self.current_frame + 1 < self.animation_length {
            self.current_frame += 1;
            true
        } else {
            false
        }
    }
}

/// Complete simulation state for one arena
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct World {
    pub settings: Settings,
    /// Arena center, derived from settings
    pub center: Vec2,
    pub frog: Frog,
    /// Unordered; removal does not preserve order
    pub flies: Vec<Fly>,
    pub catch_effects: Vec<CatchEffect>,
    pub clock: SimClock,
    /// Flies caught this session
    pub score: u32,
    /// Best score of any finished session
    pub best_score: u32,
    /// Sessions ended by running out of health
    pub sessions: u32,
    next_id: u32,
}

impl World {
    /// Create a world in its session-start state
    pub fn new(settings: Settings) -> Self {
        let center = settings.center();
        let mut world = Self {
            settings,
            center,
            frog: Frog::default(),
            flies: Vec::new(),
            catch_effects: Vec::new(),
            clock: SimClock::new(),
            score: 0,
            best_score: 0,
            sessions: 0,
            next_id: 1,
        };
        world.start_session();
        world
    }

    /// Allocate a new entity ID
    pub fn next_entity_id(&mut self) -> u32 {
        let id = self.next_id;
        self.next_id += 1;
        id
    }

    /// Add an attacking fly at `position`, returning its id
    pub fn spawn_fly(&mut self, position: Vec2) -> u32 {
        let id = self.next_entity_id();
        self.flies.push(Fly::new(id, position));
        log::debug!("Fly {} spawned at ({:.1}, {:.1})", id, position.x, position.y);
        id
    }

    /// Add a fly just outside the arena at a random bearing
    pub fn spawn_fly_at_random<R: Rng + ?Sized>(&mut self, rng: &mut R) -> u32 {
        let angle = rng.random_range(0.0..std::f32::consts::TAU);
        let position = self.center + polar(angle, self.settings.spawn_radius());
        self.spawn_fly(position)
    }

    /// Health ran out; the session must restart
    pub fn is_session_over(&self) -> bool {
        self.frog.is_defeated()
    }

    /// End the current session and start a fresh one
    pub fn reset(&mut self) {
        log::info!(
            "Session {} over at frame {} with score {}, restarting",
            self.sessions + 1,
            self.clock.frame(),
            self.score
        );
        self.best_score = self.best_score.max(self.score);
        self.sessions += 1;
        self.start_session();
    }

    fn start_session(&mut self) {
        self.frog = Frog::default();
        self.flies.clear();
        self.catch_effects.clear();
        self.clock.reset();
        self.score = 0;

        let (x, y) = SEED_FLY_POSITION;
        self.spawn_fly(Vec2::new(x, y));
    }

    /// Advance the world by one frame, returning what happened
    pub fn step<R: Rng + ?Sized>(&mut self, input: &TickInput, rng: &mut R) -> Vec<GameEvent> {
        tick(self, input, rng)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn center() -> Vec2 {
        Settings::default().center()
    }

    fn idle_input(pointer: Vec2) -> TickInput {
        TickInput {
            pointer,
            action_just_pressed: false,
        }
    }

    #[test]
    fn test_new_world() {
        let world = World::new(Settings::default());
        assert_eq!(world.frog, Frog::default());
        assert_eq!(world.frog.health, 3);
        assert_eq!(world.flies.len(), 1);
        assert_eq!(world.flies[0].position, Vec2::new(10.0, 10.0));
        assert_eq!(world.flies[0].state, FlyState::Attacking);
        assert_eq!(world.flies[0].animation_length, 6);
        assert!(world.catch_effects.is_empty());
        assert_eq!(world.clock.frame(), 0);
    }

    #[test]
    fn test_idle_frog_aims_at_pointer() {
        let mut frog = Frog::default();
        // Pointer straight below center: aim angle is +π/2, sprite angle 0
        frog.update(&idle_input(center() + Vec2::new(0.0, 30.0)), center());
        assert!(frog.angle.abs() < 1e-6);
        assert_eq!(frog.state, FrogState::Idle);
        assert!(!frog.open);

        // The tongue tip follows the aim direction
        frog.tongue_length = 30.0;
        let tip = frog.tongue_tip(center());
        assert!((tip - (center() + Vec2::new(0.0, 30.0))).length() < 1e-4);
    }

    #[test]
    fn test_pointer_at_center_is_finite() {
        let mut frog = Frog::default();
        frog.update(&idle_input(center()), center());
        assert_eq!(frog.angle, -FRAC_PI_2);
    }

    #[test]
    fn test_strike_commits_target() {
        let mut frog = Frog::default();
        let press = TickInput {
            pointer: center() + Vec2::new(10.0, 0.0),
            action_just_pressed: true,
        };
        frog.update(&press, center());
        assert_eq!(frog.state, FrogState::Attacking);
        assert_eq!(frog.tongue_target_length, 10.0);

        // Moving the pointer mid-strike changes nothing
        let angle = frog.angle;
        frog.update(&idle_input(center() + Vec2::new(0.0, 50.0)), center());
        assert_eq!(frog.tongue_target_length, 10.0);
        assert_eq!(frog.angle, angle);
        assert!(frog.open);
    }

    #[test]
    fn test_strike_cycle() {
        let mut frog = Frog::default();
        let press = TickInput {
            pointer: center() + Vec2::new(12.0, 0.0),
            action_just_pressed: true,
        };
        frog.update(&press, center());

        let input = TickInput::default();
        let mut lengths = Vec::new();
        while frog.state == FrogState::Attacking {
            frog.update(&input, center());
            assert!(frog.tongue_length <= frog.tongue_target_length);
            lengths.push(frog.tongue_length);
        }
        // 5, 10, clamped 12, then the frame that flips to Retreating
        assert_eq!(lengths, vec![5.0, 10.0, 12.0, 12.0]);
        assert_eq!(frog.state, FrogState::Retreating);

        frog.update(&input, center());
        assert_eq!(frog.tongue_length, 2.0);
        frog.update(&input, center());
        assert_eq!(frog.tongue_length, 0.0);
        assert_eq!(frog.state, FrogState::Idle);
    }

    #[test]
    fn test_health_saturates() {
        let mut frog = Frog::default();
        for _ in 0..5 {
            frog.lose_health();
        }
        assert_eq!(frog.health, 0);
        assert!(frog.is_defeated());
    }

    #[test]
    fn test_fly_sway_is_stepped() {
        let mut fly = Fly::new(1, Vec2::ZERO);
        let first = fly.sway();
        fly.lifetime = 9;
        assert_eq!(fly.sway(), first);
        fly.lifetime = 10;
        assert!((fly.sway() - 1.0_f32.sin() / 2.0).abs() < 1e-6);
    }

    #[test]
    fn test_fly_moves_toward_target() {
        let target = center();
        let mut fly = Fly::new(1, target + Vec2::new(-40.0, 0.0));
        // lifetime 0: sway is sin(0) = 0
        fly.move_toward(target);
        assert!((fly.position - (target + Vec2::new(-39.8, 0.0))).length() < 1e-4);
    }

    #[test]
    fn test_fly_animation_loops() {
        let mut fly = Fly::new(1, Vec2::ZERO);
        let frames: Vec<u32> = (0..7)
            .map(|_| {
                fly.advance_frame();
                fly.current_frame
            })
            .collect();
        assert_eq!(frames, vec![1, 2, 3, 4, 5, 0, 1]);
    }

    #[test]
    fn test_catch_effect_plays_once() {
        let mut effect = CatchEffect::new(Vec2::new(3.0, 4.0));
        assert!(effect.advance());
        assert!(effect.advance());
        assert!(effect.advance());
        assert_eq!(effect.current_frame, 3);
        assert!(!effect.advance());
        assert_eq!(effect.current_frame, 3);
    }

    #[test]
    fn test_reset_tracks_best_score() {
        let mut world = World::new(Settings::default());
        world.score = 7;
        world.flies.clear();
        world.frog.health = 0;
        world.clock = SimClock::at(500);

        world.reset();
        assert_eq!(world.best_score, 7);
        assert_eq!(world.score, 0);
        assert_eq!(world.sessions, 1);
        assert_eq!(world.frog.health, 3);
        assert_eq!(world.flies.len(), 1);
        assert_eq!(world.clock.frame(), 0);

        world.score = 2;
        world.reset();
        assert_eq!(world.best_score, 7);
    }

    #[test]
    fn test_entity_ids_are_unique() {
        let mut world = World::new(Settings::default());
        let mut rng = world.settings.rng();
        let a = world.spawn_fly_at_random(&mut rng);
        let b = world.spawn_fly_at_random(&mut rng);
        assert_ne!(a, b);
        assert_ne!(world.flies[0].id, a);

        // Spawned at the spawn radius
        for fly in &world.flies[1..] {
            assert!((distance(fly.position, world.center) - 144.0).abs() < 1e-3);
        }
    }
}
