//! Round Robin.
//!
//! # Algorithm
//!
//! 1. Processes are admitted to a FIFO ready queue in (arrival, pid) order
//!    once `arrival_time <= time`.
//! 2. The queue head runs for `min(quantum, remaining)`.
//! 3. Arrivals up to the new clock value are admitted **before** the
//!    just-run process is re-enqueued at the tail.
//! 4. An empty queue makes the clock jump to the next arrival.
//!
//! With `quantum >= max(burst)` every process finishes in its first slice
//! and the schedule degenerates to FCFS.

use std::collections::VecDeque;

use log::trace;

use super::non_preemptive::arrival_order;
use crate::dispatching::RuleEngine;
use crate::error::{Result, SchedError};
use crate::models::{Policy, Process, ProcessSpec, RunResult, Slice, Timeline};

/// `engine` fixes the admission order of simultaneous arrivals.
pub(super) fn run(
    specs: &[ProcessSpec],
    quantum: i64,
    engine: &RuleEngine,
) -> Result<RunResult> {
    let mut procs = arrival_order(specs, engine);

    let mut completed = Vec::with_capacity(procs.len());
    let mut timeline = Timeline::new();
    let mut queue: VecDeque<usize> = VecDeque::new();
    let mut next = 0;
    let mut time = 0;

    while completed.len() < procs.len() {
        admit(&procs, &mut next, time, &mut queue);

        let Some(idx) = queue.pop_front() else {
            let arrival = procs
                .get(next)
                .map(Process::arrival_time)
                .filter(|&at| at > time)
                .ok_or_else(|| {
                    SchedError::Internal(format!(
                        "ready queue empty at t={time} with nothing pending"
                    ))
                })?;
            time = arrival;
            continue;
        };

        let p = &mut procs[idx];
        let slice_len = quantum.min(p.remaining_time);
        trace!(
            "{}: t={time} dispatch P{} for {slice_len} ({} queued)",
            Policy::RoundRobin,
            p.pid(),
            queue.len()
        );
        timeline.push(Slice::new(p.pid(), time, slice_len));
        p.remaining_time -= slice_len;
        time += slice_len;

        if p.is_finished() {
            p.complete(time);
            completed.push(p.clone());
            admit(&procs, &mut next, time, &mut queue);
        } else {
            admit(&procs, &mut next, time, &mut queue);
            queue.push_back(idx);
        }
    }

    Ok(RunResult::new(Policy::RoundRobin, completed, timeline))
}

/// Appends every not-yet-admitted process with `arrival_time <= time`.
/// `procs` must be sorted by arrival.
fn admit(procs: &[Process], next: &mut usize, time: i64, queue: &mut VecDeque<usize>) {
    while *next < procs.len() && procs[*next].has_arrived(time) {
        queue.push_back(*next);
        *next += 1;
    }
}
