//! airport: passengers flow through check-in, security and the gate.
//!
//! Asks for the number of workers at each stage, runs 3600 simulated minutes
//! with one passenger arriving per minute, and reports the mean time a
//! passenger spends between arrival and boarding.
//!
//! Set `RUST_LOG=debug` to see every grant and release.

use std::io::{self, BufRead, Write};
use std::path::Path;
use std::time::Instant;

use anyhow::Result;
use tracing_subscriber::EnvFilter;

use qn_core::{Capacities, SimConfig};
use qn_output::{CsvWriter, SimOutputObserver};
use qn_sim::{SimBuilder, SimError};
use qn_stats::StatsError;

const OUTPUT_DIR: &str = "output/airport";

fn prompt(lines: &mut impl BufRead, question: &str) -> Result<String> {
    print!("{question}");
    io::stdout().flush()?;
    let mut answer = String::new();
    lines.read_line(&mut answer)?;
    Ok(answer)
}

fn read_capacities() -> Result<Capacities> {
    let stdin = io::stdin();
    let mut lines = stdin.lock();
    let gate = prompt(&mut lines, "How many workers at the gate? : ")?;
    let security = prompt(&mut lines, "How many workers at security? : ")?;
    let checkin = prompt(&mut lines, "How many workers at check-in? : ")?;

    let (caps, fallback) = Capacities::parse_or_default(&gate, &security, &checkin);
    if fallback.is_some() {
        let d = Capacities::default();
        println!("Could not parse input. Simulation will use default values:");
        println!(
            "{} at gate, {} at security, {} at check-in.",
            d.gate, d.security, d.checkin
        );
    }
    Ok(caps)
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    let caps = read_capacities()?;
    let config = SimConfig::default();

    let mut sim = SimBuilder::new(config).capacities(caps).build()?;

    std::fs::create_dir_all(OUTPUT_DIR)?;
    let writer = CsvWriter::new(Path::new(OUTPUT_DIR))?;
    let mut obs = SimOutputObserver::new(writer, &sim.pipeline);

    println!("Running simulation...");
    let t0 = Instant::now();
    sim.run(&mut obs)?;
    let elapsed = t0.elapsed();

    if let Some(e) = obs.take_error() {
        eprintln!("output error: {e}");
    }

    match sim.mean_wait() {
        Ok(mean) => println!("The average wait time is {mean}."),
        Err(SimError::Stats(StatsError::EmptyDataset)) => {
            println!("No passengers completed before the horizon; no average to report.");
        }
        Err(e) => return Err(e.into()),
    }

    println!();
    println!("Completed passengers : {}", sim.stats.len());
    println!("Still in the system  : {}", sim.processes.len());
    println!("Events dispatched    : {}", sim.dispatched());
    println!("Wall time            : {:.3} s", elapsed.as_secs_f64());
    println!("CSV output           : {OUTPUT_DIR}/");

    Ok(())
}
