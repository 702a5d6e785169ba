//! # Hazard-Sim: turn-order fairness simulator for hazard-container games
//!
//! Estimates, by Monte Carlo simulation, how likely each participant in a
//! sequential game of chance is to be the one who triggers a single randomly
//! placed hazard, under configurable turn-order rules. The point is to check
//! intuitions about the fairness of such games: some rule combinations are
//! provably uniform, others favor whoever tests first.
//!
//! ## Model
//!
//! A round arms one hazard in a fixed ring of slots, randomizes the ring's
//! position, then tests slot after slot; every test moves the ring forward by
//! one slot, and the turn passes to the next participant after every empty
//! test. The participant holding the turn when the hazard triggers "wins" the
//! round. A trial plays many rounds with one private random stream, and the
//! aggregation layer fans many independent trials out across the rayon pool
//! and sums their counts.
//!
//! | Layer | Module | Role |
//! |-------|--------|------|
//! | 1 | [`container`] | slot ring with coupled test-and-advance |
//! | 2 | [`round`] | one round: arm, randomize, test until triggered |
//! | 3 | [`trial`] | R rounds, one RNG, per-participant hit counts |
//! | 4 | [`aggregate`] | M parallel trials, element-wise reduction |
//! | - | [`config`] | explicit parameters plus validation |
//! | - | [`statistics`] | share/delta report and JSON export |
//!
//! ## Rule flags
//!
//! - `continuous_turns`: keep the turn cursor across rounds instead of
//!   resetting it to participant 0 each round.
//! - `respin_every_test`: re-randomize the ring position after every empty
//!   test, making each test an independent 1-in-C draw.

pub mod aggregate;
pub mod config;
pub mod container;
pub mod env_config;
pub mod round;
pub mod statistics;
pub mod trial;

pub use aggregate::{run_aggregated_simulation, AggregateOutcome};
pub use config::{ConfigError, SimConfig};
