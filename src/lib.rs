// src/lib.rs

pub mod cli;
pub mod errors;
pub mod logging;
pub mod schedule;
pub mod tasks;
pub mod writer;

use tracing::{debug, info};

use crate::cli::CliArgs;
use crate::errors::Result;
use crate::schedule::wave::Schedule;
use crate::schedule::{assign_waves, rebalance};
use crate::tasks::loader::load_and_link;
use crate::tasks::model::TaskGraph;

/// High-level entry point used by `main.rs`.
///
/// This wires together:
/// - record loading and graph construction
/// - wave assignment
/// - worker rebalancing
/// - schedule output (or `--dry-run` printing)
///
/// Returns the number of waves in the schedule.
pub fn run(args: &CliArgs) -> Result<usize> {
    let graph = load_and_link(&args.input)?;
    info!(tasks = graph.len(), "task graph loaded");

    let schedule = plan(&graph, args.max_workers.get());

    if args.dry_run {
        print_dry_run(&graph, &schedule);
        return Ok(schedule.len());
    }

    let waves = writer::write_schedule(&args.output, &graph, &schedule)?;
    info!(waves, output = ?args.output, "schedule written");
    Ok(waves)
}

/// Assign waves and rebalance them against the worker budget.
pub fn plan(graph: &TaskGraph, max_workers: usize) -> Schedule {
    let mut schedule = assign_waves(graph);
    debug!(waves = schedule.len(), "waves before rebalancing");
    rebalance(&mut schedule, graph, max_workers);
    schedule
}

/// Simple dry-run output: print each wave with its tasks.
fn print_dry_run(graph: &TaskGraph, schedule: &Schedule) {
    println!("waveplan dry-run");
    println!("waves ({}):", schedule.len());
    for (index, wave) in schedule.waves().iter().enumerate() {
        println!("  wave {index} ({} tasks):", wave.len());
        for id in wave.iter() {
            match graph.get(id).and_then(|task| task.attributes.get("process")) {
                Some(process) => println!("    - {id} ({process})"),
                None => println!("    - {id}"),
            }
        }
    }

    debug!("dry-run complete (nothing written)");
}
