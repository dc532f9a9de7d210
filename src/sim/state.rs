//! Game state and core simulation types
//!
//! A run is a single [`GameState`] value; the frame driver mutates it in
//! place, one tick per call. No globals, no hidden state.

use glam::Vec3;
use rand::SeedableRng;
use rand_pcg::Pcg32;

use super::pool::ObstaclePool;
use crate::config::Config;

/// Current phase of gameplay
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GamePhase {
    /// Run in progress
    Running,
    /// Run ended (collision, time up, or quit); further ticks are no-ops
    Over,
}

/// Phase of the player's jump arc. Transitions are monotonic within one jump:
/// Grounded -> Ascending -> Hovering -> Descending -> Grounded.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum JumpPhase {
    #[default]
    Grounded,
    Ascending,
    Hovering,
    Descending,
}

/// The player avatar. `x` is the lane position, `y` the height; the forward
/// position is implied by the scroll (`camera_z + player_z_offset`).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Player {
    pub x: f32,
    pub y: f32,
    pub jump: JumpPhase,
    /// Ticks spent hovering at the apex so far
    pub hover_counter: u32,
}

impl Player {
    pub fn new(ground_y: f32) -> Self {
        Self {
            x: 0.0,
            y: ground_y,
            jump: JumpPhase::Grounded,
            hover_counter: 0,
        }
    }
}

/// How a run ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// Player hit an obstacle
    Collision,
    /// Run length limit reached
    TimeUp,
    /// Quit requested by input
    Quit,
}

/// Terminal report surfaced to the caller when a run ends
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RunEnd {
    pub outcome: Outcome,
    pub final_score: u32,
}

/// Read-only view of the world for a renderer
#[derive(Debug, Clone)]
pub struct RenderSnapshot {
    /// Player world position (lane, height, camera_z + forward offset)
    pub player_pos: Vec3,
    pub camera_z: f32,
    pub score: u32,
    /// World positions of all active obstacles, in pool index order
    pub obstacles: Vec<Vec3>,
}

/// Complete game state for one run (deterministic given seed + input script)
#[derive(Debug, Clone)]
pub struct GameState {
    /// Run seed for reproducibility
    pub seed: u64,
    pub config: Config,
    pub phase: GamePhase,
    pub player: Player,
    pub pool: ObstaclePool,
    /// Scroll position; strictly increasing by `scroll_rate` each tick
    pub camera_z: f32,
    /// Simulation tick counter
    pub frame_count: u64,
    pub score: u32,
    pub(crate) rng: Pcg32,
}

impl GameState {
    /// Create a fresh run with the given tuning and seed
    pub fn new(config: Config, seed: u64) -> Self {
        let player = Player::new(config.ground_y);
        let pool = ObstaclePool::with_capacity(config.pool_capacity);
        Self {
            seed,
            phase: GamePhase::Running,
            player,
            pool,
            camera_z: 0.0,
            frame_count: 0,
            score: 0,
            rng: Pcg32::seed_from_u64(seed),
            config,
        }
    }

    /// Player world position (the forward offset is fixed relative to scroll)
    pub fn player_pos(&self) -> Vec3 {
        Vec3::new(
            self.player.x,
            self.player.y,
            self.camera_z + self.config.player_z_offset,
        )
    }

    /// Snapshot the state a renderer needs for one frame
    pub fn snapshot(&self) -> RenderSnapshot {
        RenderSnapshot {
            player_pos: self.player_pos(),
            camera_z: self.camera_z,
            score: self.score,
            obstacles: self.pool.iter_active().map(|(_, o)| o.pos).collect(),
        }
    }
}
