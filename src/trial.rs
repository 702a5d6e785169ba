//! One simulation trial: a fixed number of rounds with cumulative scoring.

use rand::rngs::SmallRng;

use crate::config::SimConfig;
use crate::round::play_round;

/// Run `cfg.rounds` sequential rounds with one private RNG, returning a hit
/// count per participant.
///
/// Each round has exactly one winner, so the returned counts always sum to
/// `cfg.rounds`. The roster and the RNG are owned exclusively by this trial;
/// parallel trials never share either.
pub fn run_trial(cfg: &SimConfig, rng: &mut SmallRng) -> Vec<u64> {
    let mut roster = vec![0u64; cfg.participants];
    let mut turn_cursor = 0;
    for _ in 0..cfg.rounds {
        let winner = play_round(cfg, &mut turn_cursor, rng);
        roster[winner] += 1;
    }
    roster
}
