//! Lane Dash demo binary
//!
//! Headless frame pump around the simulation core: builds a run from a seed
//! and optional JSON config, plays it on autopilot, and reports the outcome.
//! Exit/restart policy lives here, not in the sim.
//!
//! Usage: `lane-dash [SEED] [TICKS] [CONFIG.json]`

use std::env;
use std::path::Path;
use std::time::{SystemTime, UNIX_EPOCH};

use lane_dash::sim::Outcome;
use lane_dash::{Config, GameState, TickInput, tick};

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args: Vec<String> = env::args().collect();
    let seed: u64 = args
        .get(1)
        .and_then(|s| s.parse().ok())
        .unwrap_or_else(|| {
            SystemTime::now()
                .duration_since(UNIX_EPOCH)
                .map(|d| d.as_millis() as u64)
                .unwrap_or(0)
        });
    let max_ticks: u64 = args.get(2).and_then(|s| s.parse().ok()).unwrap_or(60_000);
    let config = match args.get(3) {
        Some(path) => Config::load_from(Path::new(path)).unwrap_or_else(|e| {
            log::warn!("could not load config {path}: {e}; using defaults");
            Config::default()
        }),
        None => Config::default(),
    };

    log::info!("starting run: seed {seed}, up to {max_ticks} ticks");
    let mut state = GameState::new(config, seed);
    let input = TickInput {
        autopilot: true,
        ..Default::default()
    };

    let mut end = None;
    for _ in 0..max_ticks {
        if let Some(e) = tick(&mut state, &input) {
            end = Some(e);
            break;
        }
        if state.frame_count.is_multiple_of(3_600) {
            log::info!(
                "tick {}: score {}, {} obstacles live",
                state.frame_count,
                state.score,
                state.pool.active_count()
            );
        }
    }

    match end {
        Some(end) => match end.outcome {
            Outcome::Collision => {
                println!("Game over! You hit an obstacle. Score: {}", end.final_score)
            }
            Outcome::TimeUp => println!("Game over! Time up. Final score: {}", end.final_score),
            Outcome::Quit => println!("Run quit. Score: {}", end.final_score),
        },
        None => println!(
            "Tick budget spent after {} ticks. Score: {}",
            state.frame_count, state.score
        ),
    }
}
