use stepdag::errors::StepdagError;
use stepdag::schedule::{SimulationOptions, completion_time, execution_order};
use stepdag_test_utils::builders::{ConstraintsBuilder, sample_constraints};

#[test]
fn test_zero_workers_rejected() {
    let err = SimulationOptions::new(0).unwrap_err();
    assert!(matches!(err, StepdagError::ConfigError(_)), "got {err:?}");
}

#[test]
fn test_single_worker_time_is_sum_of_costs() {
    // One worker serializes everything: 1+2+3+4+5+6.
    let graph = sample_constraints().graph(0);
    let options = SimulationOptions::new(1).unwrap();

    assert_eq!(completion_time(&graph, &options).unwrap(), 21);
}

#[test]
fn test_sample_with_two_workers() {
    // Costs A=1 B=2 C=3 D=4 E=5 F=6. Rounds of the simulation:
    //   [C3]          delta 3  -> t=3,  frontier [A1 F6]
    //   [A1 F6]       delta 1  -> t=4,  F carries 5, frontier [B2 D4 F5]
    //   [B2 D4]       delta 2  -> t=6,  D carries 2, frontier [D2 F5]
    //   [D2 F5]       delta 2  -> t=8,  F carries 3, frontier [F3]
    //   [F3]          delta 3  -> t=11, frontier [E5]
    //   [E5]          delta 5  -> t=16
    // Note the third round: F (remaining 5) is displaced by the newly
    // ready B and D because the active set is re-drawn from the sorted
    // frontier; its progress carries over.
    let graph = sample_constraints().graph(0);
    let options = SimulationOptions::new(2).unwrap();

    assert_eq!(completion_time(&graph, &options).unwrap(), 16);
}

#[test]
fn test_ample_workers_time_is_critical_path() {
    // With enough workers nothing ever queues, so the answer is the most
    // expensive dependency chain: C(3) -> F(6) -> E(5) = 14.
    let graph = sample_constraints().graph(0);
    let options = SimulationOptions::new(6).unwrap();

    assert_eq!(completion_time(&graph, &options).unwrap(), 14);
}

#[test]
fn test_chain_time_is_independent_of_workers() {
    // A -> B is a pure chain; extra workers have nothing to do.
    // Base 60: A costs 61, B costs 62.
    let build = || ConstraintsBuilder::new().then("A", "B").graph(60);

    let one = SimulationOptions::new(1).unwrap();
    let five = SimulationOptions::new(5).unwrap();
    assert_eq!(completion_time(&build(), &one).unwrap(), 123);
    assert_eq!(completion_time(&build(), &five).unwrap(), 123);
}

#[test]
fn test_zero_cost_task() {
    // "1" does not start with a letter, so with base 0 its cost is 0; the
    // clock only advances for A.
    let graph = ConstraintsBuilder::new().then("1", "A").graph(0);
    let options = SimulationOptions::new(2).unwrap();

    assert_eq!(completion_time(&graph, &options).unwrap(), 1);
}

#[test]
fn test_cycle_is_detected() {
    let graph = ConstraintsBuilder::new()
        .then("A", "B")
        .then("B", "A")
        .graph(0);
    let options = SimulationOptions::new(2).unwrap();

    let err = completion_time(&graph, &options).unwrap_err();
    assert!(matches!(err, StepdagError::CycleDetected(_)), "got {err:?}");
}

#[test]
fn test_empty_graph_takes_no_time() {
    let graph = ConstraintsBuilder::new().graph(0);
    let options = SimulationOptions::new(3).unwrap();

    assert_eq!(completion_time(&graph, &options).unwrap(), 0);
}

#[test]
fn test_both_schedulers_share_one_graph() {
    // The graph is an immutable snapshot: running the sequential order
    // first must not disturb the simulation, and vice versa.
    let graph = sample_constraints().graph(0);
    let options = SimulationOptions::new(2).unwrap();

    let order_before = execution_order(&graph).unwrap();
    let time = completion_time(&graph, &options).unwrap();
    let order_after = execution_order(&graph).unwrap();

    assert_eq!(order_before, order_after);
    assert_eq!(time, completion_time(&graph, &options).unwrap());
    assert_eq!(time, 16);
}
