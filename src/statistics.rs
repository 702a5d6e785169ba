//! Share statistics from an aggregated run.
//!
//! Converts raw hit totals into per-participant shares of all rounds played,
//! with the signed delta from the uniform expectation 100/P, and exports the
//! result as JSON.

use serde::Serialize;

use crate::config::SimConfig;

/// Aggregated shares for one simulation run.
#[derive(Serialize)]
pub struct ShareReport {
    pub num_trials: usize,
    pub rounds_per_trial: usize,
    pub container_size: usize,
    pub seed: u64,
    pub total_rounds: u64,
    /// Uniform expectation per participant, in percent.
    pub uniform_pct: f64,
    pub participants: Vec<ParticipantShare>,
}

/// One participant's line in the report. `participant` is 1-based, matching
/// the console output.
#[derive(Serialize)]
pub struct ParticipantShare {
    pub participant: usize,
    pub hits: u64,
    /// Share of all rounds, in percent.
    pub share_pct: f64,
    /// Signed deviation from the uniform expectation, in percent points.
    pub delta_pct: f64,
}

/// Build a [`ShareReport`] from the aggregated hit vector.
pub fn build_report(cfg: &SimConfig, seed: u64, hits: &[u64]) -> ShareReport {
    let total_rounds: u64 = hits.iter().sum();
    let uniform_pct = 100.0 / cfg.participants as f64;

    let participants = hits
        .iter()
        .enumerate()
        .map(|(i, &count)| {
            let share_pct = count as f64 / total_rounds as f64 * 100.0;
            ParticipantShare {
                participant: i + 1,
                hits: count,
                share_pct,
                delta_pct: share_pct - uniform_pct,
            }
        })
        .collect();

    ShareReport {
        num_trials: cfg.trials,
        rounds_per_trial: cfg.rounds,
        container_size: cfg.container_size,
        seed,
        total_rounds,
        uniform_pct,
        participants,
    }
}

/// Save a report as pretty-printed JSON, creating parent directories.
pub fn save_report(report: &ShareReport, path: &str) {
    if let Some(parent) = std::path::Path::new(path).parent() {
        let _ = std::fs::create_dir_all(parent);
    }
    let json = serde_json::to_string_pretty(report).expect("Failed to serialize report");
    std::fs::write(path, json).expect("Failed to write report file");
}
