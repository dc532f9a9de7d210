//! Fixed order frame driver
//!
//! One call to [`tick`] is one simulation step: apply input, advance the
//! scroll, advance the jump arc, recycle obstacles behind the player, spawn,
//! sweep for collisions, enforce the run length limit. The frame pump that
//! calls this (redraw/idle callback, test loop) is external; the sim never
//! owns a loop and never touches the process.

use super::collision::check_collisions;
use super::spawn::run_spawner;
use super::state::{GamePhase, GameState, JumpPhase, Outcome, RunEnd};

/// Input events for a single tick. One-shot flags; the frame pump clears
/// them after each tick.
#[derive(Debug, Clone, Default)]
pub struct TickInput {
    /// Shift one lane left (player x - 1, clamped to the lane extent)
    pub lane_left: bool,
    /// Shift one lane right (player x + 1, clamped to the lane extent)
    pub lane_right: bool,
    /// Start a jump (accepted only while grounded)
    pub jump: bool,
    /// End the run
    pub quit: bool,
    /// Demo mode: the sim synthesizes its own lane/jump inputs
    pub autopilot: bool,
}

/// Advance the game by one tick. Returns the terminal report when this tick
/// ended the run; afterwards the state is `Over` and further ticks no-op.
pub fn tick(state: &mut GameState, input: &TickInput) -> Option<RunEnd> {
    if state.phase == GamePhase::Over {
        return None;
    }

    let mut input = input.clone();
    if input.autopilot {
        autopilot(state, &mut input);
    }

    if input.quit {
        state.phase = GamePhase::Over;
        return Some(RunEnd {
            outcome: Outcome::Quit,
            final_score: state.score,
        });
    }

    // Lane shifts never leave the spawn lane extent
    let (lane_min, lane_max) = state.config.lane_bounds();
    if input.lane_left {
        state.player.x = (state.player.x - 1.0).max(lane_min);
    }
    if input.lane_right {
        state.player.x = (state.player.x + 1.0).min(lane_max);
    }
    if input.jump {
        state.player.trigger_jump();
    }

    state.frame_count += 1;
    state.camera_z += state.config.scroll_rate;
    state.player.advance_jump(&state.config);
    state
        .pool
        .recycle_behind(state.camera_z - state.config.despawn_margin);
    run_spawner(state);

    if let Some(end) = check_collisions(state) {
        return Some(end);
    }

    if state.frame_count > state.config.run_limit_ticks {
        state.phase = GamePhase::Over;
        return Some(RunEnd {
            outcome: Outcome::TimeUp,
            final_score: state.score,
        });
    }

    None
}

/// Demo AI: dodge into a clear neighboring lane ahead of a same-lane
/// obstacle, or jump when boxed in. Reads only sim state, so autopilot runs
/// replay deterministically for a seed.
fn autopilot(state: &GameState, input: &mut TickInput) {
    // Look a little past the collision band; one lane step or a jump started
    // here clears the band comfortably at the default scroll rate
    let window = state.config.player_z_offset + state.config.band_half_width + 1.5;
    let threat_ahead = |lane_x: f32| {
        state.pool.iter_active().any(|(_, o)| {
            let rel = o.pos.z - state.camera_z;
            rel > 0.0 && rel < window && (o.pos.x - lane_x).abs() <= state.config.lane_tolerance
        })
    };

    if !threat_ahead(state.player.x) {
        return;
    }
    let (lane_min, lane_max) = state.config.lane_bounds();
    if state.player.x - 1.0 >= lane_min && !threat_ahead(state.player.x - 1.0) {
        input.lane_left = true;
    } else if state.player.x + 1.0 <= lane_max && !threat_ahead(state.player.x + 1.0) {
        input.lane_right = true;
    } else if state.player.jump == JumpPhase::Grounded {
        input.jump = true;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use proptest::prelude::*;

    /// Config with the periodic spawner disabled, for scenario tests that
    /// place obstacles by hand
    fn quiet_config() -> Config {
        Config {
            spawn_interval: u64::MAX,
            ..Config::default()
        }
    }

    #[test]
    fn test_camera_advances_by_exactly_scroll_rate() {
        let mut state = GameState::new(quiet_config(), 1);
        let input = TickInput::default();
        for _ in 0..200 {
            let prev = state.camera_z;
            assert!(tick(&mut state, &input).is_none());
            assert_eq!(state.camera_z, prev + state.config.scroll_rate);
            assert!(state.camera_z > prev);
        }
        assert_eq!(state.frame_count, 200);
    }

    #[test]
    fn test_forced_spawn_reaches_band_and_collides() {
        // Obstacle forced to lane x=0, z=20; player stays at x=0, grounded.
        // Band entry at z_rel = 20 - 2.5, i.e. tick 584 at 0.03/tick.
        let mut state = GameState::new(quiet_config(), 1);
        state.pool.spawn_at(0.0, 1.0, 20.0);

        let input = TickInput::default();
        let end = loop {
            if let Some(end) = tick(&mut state, &input) {
                break end;
            }
            assert!(state.frame_count < 1_000, "never reached the band");
        };

        assert_eq!(end.outcome, Outcome::Collision);
        assert_eq!(end.final_score, 0);
        assert_eq!(state.frame_count, 584);
        assert_eq!(state.phase, GamePhase::Over);
    }

    #[test]
    fn test_different_lane_scores_and_run_continues() {
        let mut state = GameState::new(quiet_config(), 1);
        state.pool.spawn_at(0.0, 1.0, 20.0);

        // Step one lane over, then coast through the band
        let mut input = TickInput {
            lane_right: true,
            ..Default::default()
        };
        assert!(tick(&mut state, &input).is_none());
        assert_eq!(state.player.x, 1.0);
        input.lane_right = false;

        for _ in 0..700 {
            assert!(tick(&mut state, &input).is_none());
        }
        assert_eq!(state.score, 1);
        assert_eq!(state.pool.active_count(), 0);
        assert_eq!(state.phase, GamePhase::Running);
    }

    #[test]
    fn test_airborne_player_passes_matching_lane() {
        let mut state = GameState::new(quiet_config(), 1);
        state.pool.spawn_at(0.0, 1.0, 20.0);

        let input = TickInput::default();
        for _ in 0..583 {
            assert!(tick(&mut state, &input).is_none());
        }
        // Hold the player above the obstacle for the band-entry tick
        state.player.y = 1.5;
        assert!(tick(&mut state, &input).is_none());
        assert_eq!(state.score, 1);
        assert_eq!(state.pool.active_count(), 0);
    }

    #[test]
    fn test_lane_shifts_clamp_to_lane_extent() {
        let mut state = GameState::new(quiet_config(), 1);
        let left = TickInput {
            lane_left: true,
            ..Default::default()
        };
        for _ in 0..10 {
            tick(&mut state, &left);
        }
        assert_eq!(state.player.x, -2.0);
    }

    #[test]
    fn test_time_up_regardless_of_obstacles() {
        let config = Config {
            run_limit_ticks: 5,
            spawn_interval: u64::MAX,
            ..Config::default()
        };
        let mut state = GameState::new(config, 1);
        state.pool.spawn_at(0.0, 1.0, 20.0);
        state.score = 3;

        let input = TickInput::default();
        for _ in 0..5 {
            assert!(tick(&mut state, &input).is_none());
        }
        let end = tick(&mut state, &input).expect("time up expected");
        assert_eq!(end.outcome, Outcome::TimeUp);
        assert_eq!(end.final_score, 3);
    }

    #[test]
    fn test_quit_ends_run_with_score() {
        let mut state = GameState::new(quiet_config(), 1);
        state.score = 2;
        let input = TickInput {
            quit: true,
            ..Default::default()
        };
        let end = tick(&mut state, &input).expect("quit expected");
        assert_eq!(end.outcome, Outcome::Quit);
        assert_eq!(end.final_score, 2);
    }

    #[test]
    fn test_ticks_after_run_end_are_noops() {
        let mut state = GameState::new(quiet_config(), 1);
        let quit = TickInput {
            quit: true,
            ..Default::default()
        };
        tick(&mut state, &quit).unwrap();
        let frames = state.frame_count;

        assert!(tick(&mut state, &TickInput::default()).is_none());
        assert_eq!(state.frame_count, frames);
    }

    #[test]
    fn test_obstacles_behind_player_are_recycled() {
        let mut state = GameState::new(quiet_config(), 1);
        state.camera_z = 10.0;
        state.pool.spawn_at(0.0, 1.0, 7.9); // just behind camera_z - 2.0
        state.pool.spawn_at(1.0, 1.0, 30.0);

        tick(&mut state, &TickInput::default());
        assert_eq!(state.pool.active_count(), 1);
    }

    #[test]
    fn test_determinism_same_seed_same_run() {
        let mut a = GameState::new(Config::default(), 4242);
        let mut b = GameState::new(Config::default(), 4242);
        let input = TickInput {
            autopilot: true,
            ..Default::default()
        };

        let mut end_a = None;
        let mut end_b = None;
        for _ in 0..2_000 {
            end_a = end_a.or(tick(&mut a, &input));
            end_b = end_b.or(tick(&mut b, &input));
        }

        assert_eq!(end_a, end_b);
        assert_eq!(a.frame_count, b.frame_count);
        assert_eq!(a.score, b.score);
        assert_eq!(a.camera_z.to_bits(), b.camera_z.to_bits());
        assert_eq!(a.snapshot().obstacles, b.snapshot().obstacles);
    }

    #[test]
    fn test_autopilot_reacts_to_threat() {
        let mut state = GameState::new(quiet_config(), 1);
        // Obstacle dead ahead, just outside the band
        state.pool.spawn_at(0.0, 1.0, 3.5);
        let input = TickInput {
            autopilot: true,
            ..Default::default()
        };
        tick(&mut state, &input);
        assert!(
            state.player.x != 0.0 || state.player.jump != JumpPhase::Grounded,
            "autopilot neither dodged nor jumped"
        );
    }

    proptest! {
        #[test]
        fn prop_scroll_accumulates_to_rate_times_ticks(ticks in 1u64..1500) {
            let mut state = GameState::new(quiet_config(), 7);
            let input = TickInput::default();
            for _ in 0..ticks {
                tick(&mut state, &input);
            }
            let ideal = ticks as f32 * state.config.scroll_rate;
            prop_assert!((state.camera_z - ideal).abs() < 0.01);
        }
    }
}
