//! Simulation configuration and validation.
//!
//! Every run is parameterized by a [`SimConfig`] threaded explicitly into the
//! round, trial, and aggregation layers. Nothing reads ambient state: two
//! configs with the same fields describe the same simulation.

use thiserror::Error;

/// Game rules and simulation sizing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SimConfig {
    /// Number of participants taking turns. Must not exceed `container_size`.
    pub participants: usize,
    /// Rounds played per trial.
    pub rounds: usize,
    /// Number of slots in the hazard container.
    pub container_size: usize,
    /// Keep the turn cursor across rounds instead of resetting it to
    /// participant 0 at every round start.
    pub continuous_turns: bool,
    /// Re-randomize the container position after every empty test.
    pub respin_every_test: bool,
    /// Independent parallel trials to aggregate.
    pub trials: usize,
}

/// Rejection reasons for a malformed configuration.
///
/// All checks run before any simulation work starts; a rejected config never
/// produces a partial result.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    /// More participants than slots leaves the game undefined: a round only
    /// guarantees a winner if every participant can be reached within one
    /// cycle of the container.
    #[error("{participants} participants exceed the {container_size}-slot container")]
    TooManyParticipants {
        participants: usize,
        container_size: usize,
    },

    /// A count parameter was zero.
    #[error("{field} must be at least 1")]
    ZeroCount { field: &'static str },
}

impl SimConfig {
    /// Check the configuration invariants.
    pub fn validate(&self) -> Result<(), ConfigError> {
        for (field, value) in [
            ("participants", self.participants),
            ("rounds", self.rounds),
            ("container_size", self.container_size),
            ("trials", self.trials),
        ] {
            if value == 0 {
                return Err(ConfigError::ZeroCount { field });
            }
        }
        if self.participants > self.container_size {
            return Err(ConfigError::TooManyParticipants {
                participants: self.participants,
                container_size: self.container_size,
            });
        }
        Ok(())
    }
}
