//! Tick-driven preemptive policies: SRTF and Priority (preemptive).
//!
//! The rule chain is re-evaluated every time unit, so a newly arrived
//! process with a better score takes the CPU at the next tick. One slice
//! of duration 1 is emitted per tick; use `Timeline::merged` for display.
//!
//! # Complexity
//! O(B · n) where B = total burst time and n = process count.

use log::trace;

use super::next_arrival;
use crate::dispatching::RuleEngine;
use crate::error::Result;
use crate::models::{Policy, Process, ProcessSpec, RunResult, Slice, Timeline};

pub(super) fn run(
    policy: Policy,
    specs: &[ProcessSpec],
    engine: &RuleEngine,
) -> Result<RunResult> {
    let mut procs: Vec<Process> = specs.iter().map(Process::from_spec).collect();
    let mut completed = Vec::with_capacity(procs.len());
    let mut timeline = Timeline::new();
    let mut time = 0;
    let mut running = None;

    while completed.len() < procs.len() {
        let ready: Vec<usize> = (0..procs.len())
            .filter(|&i| !procs[i].is_finished() && procs[i].has_arrived(time))
            .collect();

        let Some(idx) = engine.select_among(&procs, &ready) else {
            time = next_arrival(&procs, time)?;
            running = None;
            continue;
        };

        if running != Some(idx) {
            trace!("{policy}: t={time} switch to P{}", procs[idx].pid());
            running = Some(idx);
        }

        let p = &mut procs[idx];
        timeline.push(Slice::new(p.pid(), time, 1));
        p.remaining_time -= 1;
        time += 1;

        if p.is_finished() {
            p.complete(time);
            completed.push(p.clone());
        }
    }

    Ok(RunResult::new(policy, completed, timeline))
}
