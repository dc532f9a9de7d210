//! Periodic obstacle spawning
//!
//! Fires every `spawn_interval` ticks: one obstacle on a random lane, a
//! random forward offset ahead of the scroll position. Lane and offset come
//! from the run's seeded RNG, so spawn patterns replay exactly for a seed.
//! A full pool skips the spawn silently; capacity is sized to exceed demand.

use rand::Rng;

use super::state::GameState;

pub(crate) fn run_spawner(state: &mut GameState) {
    if state.config.spawn_interval == 0
        || !state.frame_count.is_multiple_of(state.config.spawn_interval)
    {
        return;
    }
    let lane_count = state.config.lanes.len();
    if lane_count == 0 {
        return;
    }

    let lane_x = state.config.lanes[state.rng.random_range(0..lane_count)];
    let jitter = if state.config.spawn_jitter > 0 {
        state.rng.random_range(0..state.config.spawn_jitter) as f32
    } else {
        0.0
    };
    let z = state.camera_z + state.config.spawn_distance + jitter;

    if !state.pool.spawn_at(lane_x, state.config.ground_y, z) {
        log::debug!("obstacle pool full at tick {}, spawn skipped", state.frame_count);
    }
}
