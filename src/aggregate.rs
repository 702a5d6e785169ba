//! Parallel trial fan-out and element-wise reduction.
//!
//! The trials run data-parallel on the rayon pool. Each runner owns its
//! roster and its RNG exclusively; the RNG is seeded from the root seed plus
//! the runner index so no two runners ever share random state. Nothing is
//! shared while the trials run. The rosters are reduced once, after the join
//! barrier, on the calling thread.

use std::time::{Duration, Instant};

use rand::rngs::SmallRng;
use rand::SeedableRng;
use rayon::prelude::*;

use crate::config::{ConfigError, SimConfig};
use crate::trial::run_trial;

/// Result of an aggregated simulation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AggregateOutcome {
    /// Per-participant hit totals across all trials. Length equals the
    /// participant count; entries sum to rounds x trials.
    pub hits: Vec<u64>,
    /// Total rounds played across all trials.
    pub total_rounds: u64,
    /// Wall-clock time of the parallel section.
    pub elapsed: Duration,
}

/// Validate `cfg`, then run `cfg.trials` independent trials in parallel and
/// sum their rosters element-wise.
///
/// Fails only on a malformed configuration, before any simulation work. A
/// valid run always produces a complete result vector: there are no partial
/// results, and completion order of the runners cannot affect the sums.
pub fn run_aggregated_simulation(
    cfg: &SimConfig,
    seed: u64,
) -> Result<AggregateOutcome, ConfigError> {
    cfg.validate()?;

    let start = Instant::now();
    let rosters: Vec<Vec<u64>> = (0..cfg.trials)
        .into_par_iter()
        .map(|i| {
            let mut rng = SmallRng::seed_from_u64(seed.wrapping_add(i as u64));
            run_trial(cfg, &mut rng)
        })
        .collect();
    let elapsed = start.elapsed();

    let mut hits = vec![0u64; cfg.participants];
    for roster in &rosters {
        for (total, &count) in hits.iter_mut().zip(roster) {
            *total += count;
        }
    }

    Ok(AggregateOutcome {
        hits,
        total_rounds: (cfg.rounds * cfg.trials) as u64,
        elapsed,
    })
}
