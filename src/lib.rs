// src/lib.rs

pub mod cli;
pub mod config;
pub mod errors;
pub mod graph;
pub mod input;
pub mod logging;
pub mod schedule;

use anyhow::Result;
use tracing::{debug, info};

use crate::cli::{CliArgs, Mode};
use crate::config::loader::load_and_validate;
use crate::graph::{CostPolicy, TaskGraph, graph_from_constraints};
use crate::schedule::{SimulationOptions, completion_time, execution_order};

/// High-level entry point used by `main.rs`.
///
/// This wires together:
/// - config loading (file values, overridden by CLI flags)
/// - constraint parsing
/// - graph building
/// - the requested scheduler(s)
pub fn run(args: CliArgs) -> Result<()> {
    let cfg = load_and_validate(&args.config)?;

    let workers = args.workers.unwrap_or(cfg.schedule.workers);
    let cost_base = args.cost_base.unwrap_or(cfg.schedule.cost_base);
    debug!(workers, cost_base, input = %args.input, "effective options");

    let constraints = input::read_constraints(&args.input)?;
    let graph = graph_from_constraints(&constraints, CostPolicy::new(cost_base));
    info!(
        tasks = graph.task_count(),
        constraints = constraints.len(),
        "dependency graph built"
    );

    if args.dry_run {
        print_dry_run(&graph, workers);
        return Ok(());
    }

    if matches!(args.mode, Mode::Order | Mode::Both) {
        let order = execution_order(&graph)?;
        println!("{}", order.concat());
    }

    if matches!(args.mode, Mode::Time | Mode::Both) {
        let options = SimulationOptions::new(workers)?;
        let elapsed = completion_time(&graph, &options)?;
        println!("{elapsed}");
    }

    Ok(())
}

/// Simple dry-run output: print tasks, costs, dependencies and dependents.
fn print_dry_run(graph: &TaskGraph, workers: usize) {
    println!("stepdag dry-run");
    println!("  workers = {workers}");
    println!();

    println!("tasks ({}):", graph.task_count());
    for id in graph.nodes_by_name() {
        let task = graph.task(id);
        println!("  - {} (cost {})", task.name, task.cost);

        let mut after: Vec<&str> = graph.predecessors(id).map(|p| graph.name(p)).collect();
        after.sort_unstable();
        if !after.is_empty() {
            println!("      after: {after:?}");
        }

        let mut enables: Vec<&str> = graph.successors(id).map(|s| graph.name(s)).collect();
        enables.sort_unstable();
        if !enables.is_empty() {
            println!("      enables: {enables:?}");
        }
    }

    debug!("dry-run complete (no scheduling)");
}
