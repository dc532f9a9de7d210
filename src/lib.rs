//! Lane Dash - a 3D endless runner core
//!
//! Core modules:
//! - `sim`: Deterministic simulation (scroll, spawning, jump kinematics,
//!   collision/scoring, frame driver)
//! - `config`: Runtime-tunable game constants
//!
//! Rendering and windowing are external collaborators: the simulation exposes
//! a [`sim::RenderSnapshot`] for them to read and consumes [`sim::TickInput`]
//! events they forward. The crate performs no process-level side effects; a
//! run ends by returning a [`sim::RunEnd`] to the caller, which owns exit
//! and restart policy.

pub mod config;
pub mod sim;

pub use config::Config;
pub use sim::{GameState, Outcome, RenderSnapshot, RunEnd, TickInput, tick};
