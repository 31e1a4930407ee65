// src/cli.rs

//! CLI argument parsing using `clap`.

use clap::{Parser, ValueEnum};

/// Command-line arguments for `stepdag`.
#[derive(Debug, Clone, Parser)]
#[command(
    name = "stepdag",
    version,
    about = "Order a DAG of named tasks and simulate a worker pool over it.",
    long_about = None
)]
pub struct CliArgs {
    /// Path to the constraint file, one
    /// `Step <X> must be finished before step <Y> can begin.` line per
    /// constraint.
    #[arg(value_name = "INPUT")]
    pub input: String,

    /// Path to the config file (TOML).
    ///
    /// Default: `Stepdag.toml` in the current working directory. A missing
    /// file is fine; built-in defaults apply.
    #[arg(long, value_name = "PATH", default_value = "Stepdag.toml")]
    pub config: String,

    /// Number of simulated workers (overrides the config file).
    #[arg(long, value_name = "N")]
    pub workers: Option<usize>,

    /// Base cost added to every task's per-name cost (overrides the config
    /// file).
    #[arg(long, value_name = "N")]
    pub cost_base: Option<u64>,

    /// Which result(s) to compute and print.
    #[arg(long, value_enum, value_name = "MODE", default_value = "both")]
    pub mode: Mode,

    /// Logging level (error, warn, info, debug, trace).
    ///
    /// If omitted, `STEPDAG_LOG` or a default level will be used.
    #[arg(long, value_enum, value_name = "LEVEL")]
    pub log_level: Option<LogLevel>,

    /// Parse + validate, print the graph, but don't schedule anything.
    #[arg(long)]
    pub dry_run: bool,
}

/// Which scheduler output(s) to print.
#[derive(Debug, Copy, Clone, PartialEq, Eq, ValueEnum)]
pub enum Mode {
    /// Deterministic topological order only.
    Order,
    /// Worker-pool completion time only.
    Time,
    /// Both, order first.
    Both,
}

/// Log level as exposed on the CLI.
#[derive(Debug, Copy, Clone, ValueEnum)]
pub enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

/// Convenience wrapper around `CliArgs::parse()`.
pub fn parse() -> CliArgs {
    CliArgs::parse()
}
