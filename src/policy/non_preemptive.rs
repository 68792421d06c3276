//! Run-to-completion policies: FCFS, SJF and Priority (non-preemptive).
//!
//! # Algorithm
//!
//! 1. Collect the ready set at the current clock.
//! 2. If it is empty, jump to the next arrival.
//! 3. Otherwise pick one process with the policy's rule chain and run its
//!    whole burst as a single slice.
//!
//! # Complexity
//! O(n²) for n processes (one ready-set scan per dispatch).

use log::trace;

use super::next_arrival;
use crate::dispatching::RuleEngine;
use crate::error::Result;
use crate::models::{Policy, Process, ProcessSpec, RunResult, Slice, Timeline};

/// First-Come-First-Served.
///
/// Sorts once with `engine` (arrival, then pid) and runs each process to
/// completion, idling until the next arrival when the CPU would otherwise
/// be free.
pub(super) fn fcfs(specs: &[ProcessSpec], engine: &RuleEngine) -> Result<RunResult> {
    let mut order = arrival_order(specs, engine);
    let mut timeline = Timeline::new();
    let mut time = 0;

    for p in &mut order {
        time = time.max(p.arrival_time());
        let burst = p.remaining_time;
        trace!("FCFS: t={time} dispatch P{} for {burst}", p.pid());
        timeline.push(Slice::new(p.pid(), time, burst));
        time += burst;
        p.complete(time);
    }

    Ok(RunResult::new(Policy::Fcfs, order, timeline))
}

/// Fresh execution state for `specs`, sorted once by `engine`.
pub(super) fn arrival_order(specs: &[ProcessSpec], engine: &RuleEngine) -> Vec<Process> {
    let procs: Vec<Process> = specs.iter().map(Process::from_spec).collect();
    engine
        .sort_indices(&procs)
        .into_iter()
        .map(|i| procs[i].clone())
        .collect()
}

/// Generic run-to-completion loop driven by `engine`.
pub(super) fn run(
    policy: Policy,
    specs: &[ProcessSpec],
    engine: &RuleEngine,
) -> Result<RunResult> {
    let mut pending: Vec<Process> = specs.iter().map(Process::from_spec).collect();
    let mut completed = Vec::with_capacity(pending.len());
    let mut timeline = Timeline::new();
    let mut time = 0;

    while !pending.is_empty() {
        let ready: Vec<usize> = (0..pending.len())
            .filter(|&i| pending[i].has_arrived(time))
            .collect();

        let Some(idx) = engine.select_among(&pending, &ready) else {
            time = next_arrival(&pending, time)?;
            continue;
        };

        let mut p = pending.remove(idx);
        let burst = p.remaining_time;
        trace!(
            "{policy}: t={time} dispatch P{} for {burst} ({} ready)",
            p.pid(),
            ready.len()
        );
        timeline.push(Slice::new(p.pid(), time, burst));
        time += burst;
        p.complete(time);
        completed.push(p);
    }

    Ok(RunResult::new(policy, completed, timeline))
}
