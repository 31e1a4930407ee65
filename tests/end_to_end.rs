use std::io::Write;

use stepdag::cli::{CliArgs, Mode};
use stepdag::graph::{CostPolicy, graph_from_constraints};
use stepdag::input::read_constraints;
use stepdag::schedule::{SimulationOptions, completion_time, execution_order};
use stepdag_test_utils::builders::sample_constraints;
use tempfile::NamedTempFile;

fn write_sample_input() -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    write!(file, "{}", sample_constraints().to_input()).unwrap();
    file
}

#[test]
fn test_file_to_results_with_compact_costs() {
    stepdag_test_utils::init_tracing();

    let file = write_sample_input();
    let constraints = read_constraints(file.path()).unwrap();
    let graph = graph_from_constraints(&constraints, CostPolicy::new(0));

    let order = execution_order(&graph).unwrap();
    assert_eq!(order.concat(), "CABDFE");

    let options = SimulationOptions::new(2).unwrap();
    assert_eq!(completion_time(&graph, &options).unwrap(), 16);
}

#[test]
fn test_file_to_results_with_reference_costs() {
    // Base 60 (A=61 ... F=66), five workers. The pool is wide enough that
    // nothing ever queues, so the answer equals the most expensive chain:
    // C(63) -> A(61) -> D(64) -> E(65) = 253.
    let file = write_sample_input();
    let constraints = read_constraints(file.path()).unwrap();
    let graph = graph_from_constraints(&constraints, CostPolicy::default());

    let order = execution_order(&graph).unwrap();
    assert_eq!(order.concat(), "CABDFE");

    let options = SimulationOptions::new(5).unwrap();
    assert_eq!(completion_time(&graph, &options).unwrap(), 253);
}

#[test]
fn test_run_with_explicit_overrides() {
    // Exercise the whole binary entry point; outputs go to stdout, so we
    // only check that the pipeline succeeds end to end.
    let file = write_sample_input();
    let args = CliArgs {
        input: file.path().display().to_string(),
        config: "/definitely/not/here/Stepdag.toml".to_string(),
        workers: Some(2),
        cost_base: Some(0),
        mode: Mode::Both,
        log_level: None,
        dry_run: false,
    };

    stepdag::run(args).unwrap();
}

#[test]
fn test_run_dry_run() {
    let file = write_sample_input();
    let args = CliArgs {
        input: file.path().display().to_string(),
        config: "/definitely/not/here/Stepdag.toml".to_string(),
        workers: None,
        cost_base: None,
        mode: Mode::Both,
        log_level: None,
        dry_run: true,
    };

    stepdag::run(args).unwrap();
}

#[test]
fn test_run_reports_missing_input() {
    let args = CliArgs {
        input: "/definitely/not/here/steps.txt".to_string(),
        config: "/definitely/not/here/Stepdag.toml".to_string(),
        workers: None,
        cost_base: None,
        mode: Mode::Order,
        log_level: None,
        dry_run: false,
    };

    assert!(stepdag::run(args).is_err());
}

#[test]
fn test_run_rejects_zero_worker_override() {
    let file = write_sample_input();
    let args = CliArgs {
        input: file.path().display().to_string(),
        config: "/definitely/not/here/Stepdag.toml".to_string(),
        workers: Some(0),
        cost_base: Some(0),
        mode: Mode::Time,
        log_level: None,
        dry_run: false,
    };

    assert!(stepdag::run(args).is_err());
}
