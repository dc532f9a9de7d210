//! Runtime game tuning
//!
//! Every gameplay constant lives here so a run can be tuned without a
//! recompile. Defaults match the classic arcade values; the demo binary can
//! load overrides from a JSON file.

use std::fs;
use std::io;
use std::path::Path;

use serde::{Deserialize, Serialize};

/// Tunable simulation constants. One instance is embedded in each
/// [`crate::sim::GameState`] at creation and stays fixed for the run.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Obstacle pool capacity (spawns no-op silently when full)
    pub pool_capacity: usize,
    /// Run length limit in ticks; exceeding it ends the run with TimeUp
    pub run_limit_ticks: u64,
    /// Spawner fires every this many ticks
    pub spawn_interval: u64,
    /// Forward scroll per tick
    pub scroll_rate: f32,
    /// Fixed lane x-positions obstacles spawn on (also the player clamp range)
    pub lanes: Vec<f32>,
    /// Minimum forward offset of a fresh obstacle ahead of the scroll position
    pub spawn_distance: f32,
    /// Random extra forward offset, in whole units: 0..spawn_jitter
    pub spawn_jitter: u32,
    /// Resting player height, also obstacle spawn height
    pub ground_y: f32,
    /// Vertical speed while ascending/descending a jump, per tick
    pub jump_rise_rate: f32,
    /// Jump apex height
    pub jump_target_y: f32,
    /// Ticks spent hovering at the apex
    pub hover_ticks: u32,
    /// Player's fixed forward offset ahead of the scroll position
    pub player_z_offset: f32,
    /// Half-width of the z band where collision/scoring is evaluated
    pub band_half_width: f32,
    /// Max |obstacle.x - player.x| that still counts as the same lane
    pub lane_tolerance: f32,
    /// Player height above which a same-lane obstacle is cleared
    pub clear_height: f32,
    /// Obstacles further than this behind the scroll position are recycled
    pub despawn_margin: f32,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            pool_capacity: 64,
            run_limit_ticks: 216_000, // one hour at 60 ticks/sec
            spawn_interval: 90,
            scroll_rate: 0.03,
            lanes: vec![-2.0, -1.0, 0.0, 1.0, 2.0],
            spawn_distance: 20.0,
            spawn_jitter: 10,
            ground_y: 1.0,
            jump_rise_rate: 0.05,
            jump_target_y: 2.5,
            hover_ticks: 90,
            player_z_offset: 2.0,
            band_half_width: 0.5,
            lane_tolerance: 0.6,
            clear_height: 1.2,
            despawn_margin: 2.0,
        }
    }
}

impl Config {
    /// Load config from a JSON file
    pub fn load_from(path: &Path) -> io::Result<Self> {
        let text = fs::read_to_string(path)?;
        let config: Config = serde_json::from_str(&text)
            .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?;
        log::info!("Loaded config from {}", path.display());
        Ok(config)
    }

    /// Leftmost and rightmost lane positions; the player x is clamped to this
    /// range. Falls back to (0, 0) for an empty lane set.
    pub fn lane_bounds(&self) -> (f32, f32) {
        if self.lanes.is_empty() {
            return (0.0, 0.0);
        }
        let mut lo = f32::INFINITY;
        let mut hi = f32::NEG_INFINITY;
        for &x in &self.lanes {
            lo = lo.min(x);
            hi = hi.max(x);
        }
        (lo, hi)
    }
}
