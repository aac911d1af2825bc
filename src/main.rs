//! Pond Frog headless driver
//!
//! Runs the simulation in attract mode for a fixed number of frames and logs
//! what happened. Usage: `pond-frog [settings.json]`

#[cfg(not(target_arch = "wasm32"))]
use pond_frog::{
    Settings,
    sim::{GameEvent, World, autopilot},
};

/// One minute at 60 frames per second
#[cfg(not(target_arch = "wasm32"))]
const DEMO_FRAMES: u32 = 60 * 60;

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    env_logger::init();
    log::info!("Pond Frog (headless) starting...");

    let settings = match std::env::args().nth(1) {
        Some(path) => Settings::load(std::path::Path::new(&path)),
        None => Settings::default(),
    };
    log::info!(
        "Arena {}x{}, seed {}",
        settings.arena_width,
        settings.arena_height,
        settings.seed
    );

    let mut rng = settings.rng();
    let mut world = World::new(settings);

    let (mut catches, mut misses) = (0u32, 0u32);
    for _ in 0..DEMO_FRAMES {
        let input = autopilot(&world);
        for event in world.step(&input, &mut rng) {
            match event {
                GameEvent::Catch => catches += 1,
                GameEvent::Miss => misses += 1,
            }
        }
    }

    log::info!(
        "Ran {} frames: {} catches, {} misses, {} sessions ended, best score {}",
        DEMO_FRAMES,
        catches,
        misses,
        world.sessions,
        world.best_score.max(world.score)
    );

    match serde_json::to_string_pretty(&world.snapshot()) {
        Ok(json) => println!("{}", json),
        Err(e) => log::error!("Failed to serialize snapshot: {}", e),
    }
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // The core is driven by the host page on the web; nothing to run here
}
