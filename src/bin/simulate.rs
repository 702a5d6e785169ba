use std::time::Instant;

use hazard_sim::statistics::{build_report, save_report};
use hazard_sim::{run_aggregated_simulation, SimConfig};

struct Args {
    participants: usize,
    rounds: usize,
    slots: usize,
    trials: usize,
    seed: u64,
    continuous: bool,
    respin: bool,
    output: Option<String>,
}

fn parse_args() -> Args {
    let args: Vec<String> = std::env::args().collect();
    let mut participants = 3usize;
    let mut rounds = 100_000usize;
    let mut slots = 6usize;
    let mut trials = 20usize;
    let mut seed = 42u64;
    let mut continuous = false;
    let mut respin = true;
    let mut output: Option<String> = None;

    fn parse_value<T: std::str::FromStr>(args: &[String], i: usize, flag: &str) -> T {
        if i >= args.len() {
            eprintln!("Missing value for {}", flag);
            std::process::exit(1);
        }
        args[i].parse().unwrap_or_else(|_| {
            eprintln!("Invalid {} value: {}", flag, args[i]);
            std::process::exit(1);
        })
    }

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--participants" => {
                i += 1;
                participants = parse_value(&args, i, "--participants");
            }
            "--rounds" => {
                i += 1;
                rounds = parse_value(&args, i, "--rounds");
            }
            "--slots" => {
                i += 1;
                slots = parse_value(&args, i, "--slots");
            }
            "--trials" => {
                i += 1;
                trials = parse_value(&args, i, "--trials");
            }
            "--seed" => {
                i += 1;
                seed = parse_value(&args, i, "--seed");
            }
            "--continuous" => {
                continuous = true;
            }
            "--no-respin" => {
                respin = false;
            }
            "--output" => {
                i += 1;
                if i < args.len() {
                    output = Some(args[i].clone());
                }
            }
            "--help" | "-h" => {
                println!(
                    "Usage: hazard-simulate [--participants N] [--rounds N] [--slots N] [--trials N] [--seed S] [--continuous] [--no-respin] [--output DIR]"
                );
                println!();
                println!("Options:");
                println!("  --participants N   Participants taking turns (default: 3)");
                println!("  --rounds N         Rounds per trial (default: 100000)");
                println!("  --slots N          Slots in the hazard container (default: 6)");
                println!("  --trials N         Independent parallel trials (default: 20)");
                println!("  --seed S           Root RNG seed (default: 42)");
                println!("  --continuous       Carry the turn cursor across rounds");
                println!("  --no-respin        Do not re-randomize after every empty test");
                println!("  --output DIR       Write share_report.json to DIR");
                std::process::exit(0);
            }
            other => {
                eprintln!("Unknown argument: {}", other);
                eprintln!(
                    "Usage: hazard-simulate [--participants N] [--rounds N] [--slots N] [--trials N] [--seed S] [--continuous] [--no-respin] [--output DIR]"
                );
                std::process::exit(1);
            }
        }
        i += 1;
    }

    Args {
        participants,
        rounds,
        slots,
        trials,
        seed,
        continuous,
        respin,
        output,
    }
}

fn main() {
    let args = parse_args();
    let num_threads = hazard_sim::env_config::init_rayon_threads();

    let cfg = SimConfig {
        participants: args.participants,
        rounds: args.rounds,
        container_size: args.slots,
        continuous_turns: args.continuous,
        respin_every_test: args.respin,
        trials: args.trials,
    };

    println!("Hazard Simulation");
    println!("  Participants:  {}", cfg.participants);
    println!("  Slots:         {}", cfg.container_size);
    println!(
        "  Rounds:        {} x {} trials = {} total",
        cfg.rounds,
        cfg.trials,
        cfg.rounds * cfg.trials
    );
    println!(
        "  Rules:         turn order {}, {}",
        if cfg.continuous_turns {
            "continuous"
        } else {
            "reset per round"
        },
        if cfg.respin_every_test {
            "respin after every test"
        } else {
            "single spin per round"
        }
    );
    println!();

    println!("Simulating {} trials ({} threads)...", cfg.trials, num_threads);
    let start = Instant::now();
    let outcome = match run_aggregated_simulation(&cfg, args.seed) {
        Ok(outcome) => outcome,
        Err(err) => {
            eprintln!("Configuration error: {}", err);
            std::process::exit(1);
        }
    };
    let total_elapsed = start.elapsed();

    let sim_ns = outcome.elapsed.as_nanos() as f64;
    let per_round_ns = sim_ns / outcome.total_rounds as f64;
    let throughput = outcome.total_rounds as f64 / outcome.elapsed.as_secs_f64();

    println!("  Elapsed:     {:.1} ms ({:.2} s total)",
        outcome.elapsed.as_secs_f64() * 1000.0,
        total_elapsed.as_secs_f64()
    );
    println!("  Per round:   {:.0} ns", per_round_ns);
    println!("  Throughput:  {:.0} rounds/sec", throughput);
    println!();

    let report = build_report(&cfg, args.seed, &outcome.hits);

    println!("Results:");
    for share in &report.participants {
        println!(
            "  Participant {}: {:>12.8} %  (delta {:+.5} %)",
            share.participant, share.share_pct, share.delta_pct
        );
    }
    println!("  Uniform expectation: {:.8} %", report.uniform_pct);

    if let Some(ref output_dir) = args.output {
        let path = format!("{}/share_report.json", output_dir);
        save_report(&report, &path);
        println!();
        println!("  Report:      {}", path);
    }
}
