//! Jump state machine
//!
//! Three-phase kinematic controller for the player's height: rise at a fixed
//! rate to the apex, hover there for a fixed tick count, fall back to the
//! ground. Quantized kinematics keep jump arcs deterministic and testable
//! without a physics integrator.

use super::state::{JumpPhase, Player};
use crate::config::Config;

impl Player {
    /// Start a jump. Only accepted while grounded; triggers while airborne
    /// are no-ops (no double-jump, no interruption).
    pub fn trigger_jump(&mut self) {
        if self.jump == JumpPhase::Grounded {
            self.jump = JumpPhase::Ascending;
        }
    }

    /// Advance the jump arc by one tick
    pub fn advance_jump(&mut self, config: &Config) {
        match self.jump {
            JumpPhase::Grounded => {}
            JumpPhase::Ascending => {
                self.y += config.jump_rise_rate;
                // Within half a step of the apex counts as arrived, so float
                // drift cannot add a stray tick to the arc
                if self.y >= config.jump_target_y - config.jump_rise_rate * 0.5 {
                    self.y = config.jump_target_y;
                    self.jump = JumpPhase::Hovering;
                    self.hover_counter = 0;
                }
            }
            JumpPhase::Hovering => {
                self.hover_counter += 1;
                if self.hover_counter >= config.hover_ticks {
                    self.jump = JumpPhase::Descending;
                }
            }
            JumpPhase::Descending => {
                self.y -= config.jump_rise_rate;
                if self.y <= config.ground_y + config.jump_rise_rate * 0.5 {
                    self.y = config.ground_y;
                    self.jump = JumpPhase::Grounded;
                }
            }
        }
    }
}

/// Total airborne ticks of an uninterrupted jump under the given tuning
#[cfg(test)]
pub(crate) fn jump_duration_ticks(config: &Config) -> u64 {
    let climb = ((config.jump_target_y - config.ground_y) / config.jump_rise_rate).ceil() as u64;
    climb * 2 + config.hover_ticks as u64
}
