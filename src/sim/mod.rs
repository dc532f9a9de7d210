//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - One tick per call, fixed order, no suspension points
//! - Seeded RNG only
//! - Stable iteration order (pool index order)
//! - No rendering or platform dependencies

pub mod collision;
pub mod jump;
pub mod pool;
pub mod spawn;
pub mod state;
pub mod tick;

pub use pool::{Obstacle, ObstaclePool};
pub use state::{GamePhase, GameState, JumpPhase, Outcome, Player, RenderSnapshot, RunEnd};
pub use tick::{TickInput, tick};
