//! Collision and scoring sweep
//!
//! Once per tick, after recycling and spawning, every active obstacle is
//! tested against the narrow z band at the player's fixed forward offset.
//! An obstacle inside the band either passes (wrong lane, or player high
//! enough above it) and scores, or ends the run. Scoring deactivates the
//! obstacle on its first in-band evaluation and a hit ends the run outright,
//! so no obstacle is ever counted twice.

use super::state::{GamePhase, GameState, Outcome, RunEnd};

/// Is the obstacle inside the collision band at the player's forward offset?
#[inline]
pub(crate) fn in_band(obstacle_z: f32, band_center: f32, half_width: f32) -> bool {
    (obstacle_z - band_center).abs() < half_width
}

/// Does the player clear an in-band obstacle? True when on a different lane
/// or airborne above the obstacle height.
#[inline]
pub(crate) fn clears(
    obstacle_x: f32,
    player_x: f32,
    player_y: f32,
    lane_tolerance: f32,
    clear_height: f32,
) -> bool {
    (obstacle_x - player_x).abs() > lane_tolerance || player_y > clear_height
}

/// Sweep all active obstacles, in pool index order. Passed obstacles score
/// and are recycled; the first hit ends the run with the score so far
/// (passes earlier in the same sweep still count).
pub(crate) fn check_collisions(state: &mut GameState) -> Option<RunEnd> {
    let band_center = state.camera_z + state.config.player_z_offset;
    let half_width = state.config.band_half_width;
    let lane_tolerance = state.config.lane_tolerance;
    let clear_height = state.config.clear_height;
    let player_x = state.player.x;
    let player_y = state.player.y;

    let mut hit = false;
    let mut passed: Vec<usize> = Vec::new();
    for (idx, obstacle) in state.pool.iter_active() {
        if !in_band(obstacle.pos.z, band_center, half_width) {
            continue;
        }
        if clears(obstacle.pos.x, player_x, player_y, lane_tolerance, clear_height) {
            passed.push(idx);
        } else {
            hit = true;
            break;
        }
    }

    for idx in passed {
        state.pool.recycle(idx);
        state.score += 1;
        log::debug!("obstacle passed, score {}", state.score);
    }

    if hit {
        state.phase = GamePhase::Over;
        return Some(RunEnd {
            outcome: Outcome::Collision,
            final_score: state.score,
        });
    }
    None
}
