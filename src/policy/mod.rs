//! Scheduling policy engine.
//!
//! Each policy is a pure transformation from a process set (plus a quantum
//! for Round Robin) to a [`RunResult`]. Runs never touch the caller's
//! input: fresh [`Process`] state is built from each `ProcessSpec` every time, so
//! repeated runs over the same workload are independent and deterministic.
//!
//! # Simulation Model
//!
//! 1. The clock starts at 0.
//! 2. At each decision point the ready set is every unfinished process
//!    with `arrival_time <= time`.
//! 3. An empty ready set makes the clock jump to the next arrival; idle
//!    spans appear only as gaps in the timeline.
//! 4. A process is completed the instant its remaining burst reaches 0.
//!
//! | Policy | Selection | Granularity | Tie-break |
//! |--------|-----------|-------------|-----------|
//! | FCFS | arrival order | full burst | arrival, pid |
//! | SJF (Non-Preemptive) | smallest burst | full burst | burst, arrival, pid |
//! | SJF (Preemptive) | smallest remaining | 1 tick | remaining, pid |
//! | Priority (Non-Preemptive) | smallest priority | full burst | priority, arrival, pid |
//! | Priority (Preemptive) | smallest priority | 1 tick | priority, pid |
//! | Round Robin | FIFO queue head | min(quantum, remaining) | queue order |
//!
//! # Reference
//! Silberschatz, Galvin & Gagne (2018), "Operating System Concepts", Ch. 5

mod non_preemptive;
mod preemptive;
mod round_robin;

use log::{debug, warn};
use serde::{Deserialize, Serialize};

use crate::dispatching::{rules, RuleEngine};
use crate::error::{Result, SchedError};
use crate::models::{Policy, Process, ProcessSpec, RunResult};
use crate::validation::{validate_processes, validate_quantum};

/// A single simulation request.
///
/// # Example
///
/// ```
/// use u_cpusched::models::{Policy, ProcessSpec};
/// use u_cpusched::policy::SimulationConfig;
///
/// let processes = ProcessSpec::from_tuples(&[(0, 5, 0), (1, 3, 0)]);
/// let result = SimulationConfig::new(Policy::RoundRobin, processes)
///     .with_quantum(2)
///     .run()
///     .unwrap();
/// assert_eq!(result.timeline.busy_time(), 8);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimulationConfig {
    /// Policy to run.
    pub policy: Policy,
    /// Workload.
    pub processes: Vec<ProcessSpec>,
    /// Round Robin time quantum. Ignored by other policies.
    pub quantum: Option<i64>,
}

impl SimulationConfig {
    /// Creates a request without a quantum.
    pub fn new(policy: Policy, processes: Vec<ProcessSpec>) -> Self {
        Self {
            policy,
            processes,
            quantum: None,
        }
    }

    /// Sets the quantum.
    pub fn with_quantum(mut self, quantum: i64) -> Self {
        self.quantum = Some(quantum);
        self
    }

    /// Replaces the policy.
    pub fn with_policy(mut self, policy: Policy) -> Self {
        self.policy = policy;
        self
    }

    /// Runs the configured policy.
    pub fn run(&self) -> Result<RunResult> {
        run_policy(self.policy, &self.processes, self.quantum)
    }
}

/// Runs one policy over a workload.
///
/// # Errors
/// - [`SchedError::InvalidInput`] for an empty set, a non-positive burst,
///   a negative arrival or priority, bad pids, a workload whose clock or
///   time totals would overflow `i64`, or a missing/non-positive quantum
///   when `policy` is Round Robin. No simulation runs in that case.
/// - [`SchedError::Internal`] if the simulation breaks its own invariants.
pub fn run_policy(
    policy: Policy,
    processes: &[ProcessSpec],
    quantum: Option<i64>,
) -> Result<RunResult> {
    let mut errors = Vec::new();
    if let Err(e) = validate_processes(processes) {
        errors.extend(e);
    }
    if let Err(e) = validate_quantum(quantum, policy) {
        errors.extend(e);
    }
    if !errors.is_empty() {
        warn!("{policy}: rejected workload with {} error(s)", errors.len());
        return Err(SchedError::InvalidInput(errors));
    }

    debug!(
        "{policy}: scheduling {} process(es), quantum={:?}",
        processes.len(),
        quantum
    );

    let engine = selection_engine(policy);
    let result = match policy {
        Policy::Fcfs => non_preemptive::fcfs(processes, &engine)?,
        Policy::SjfNonPreemptive | Policy::PriorityNonPreemptive => {
            non_preemptive::run(policy, processes, &engine)?
        }
        Policy::SjfPreemptive | Policy::PriorityPreemptive => {
            preemptive::run(policy, processes, &engine)?
        }
        Policy::RoundRobin => {
            let quantum = quantum.ok_or_else(|| {
                SchedError::Internal("quantum vanished after validation".into())
            })?;
            round_robin::run(processes, quantum, &engine)?
        }
    };

    check_conservation(processes, &result)?;
    debug!(
        "{policy}: finished at t={} with {} slice(s)",
        result.timeline.end_time(),
        result.timeline.len()
    );
    Ok(result)
}

/// Rule chain used by a policy to pick from its ready set.
///
/// FCFS and Round Robin use their chain once, to fix the arrival order.
/// Every chain ends with the pid rule, so selection never depends on
/// input order.
pub fn selection_engine(policy: Policy) -> RuleEngine {
    let engine = match policy {
        Policy::Fcfs | Policy::RoundRobin => RuleEngine::new().with_rule(rules::ArrivalTime),
        Policy::SjfNonPreemptive => RuleEngine::new()
            .with_rule(rules::ShortestBurst)
            .with_tie_breaker(rules::ArrivalTime),
        Policy::SjfPreemptive => RuleEngine::new().with_rule(rules::ShortestRemaining),
        Policy::PriorityNonPreemptive => RuleEngine::new()
            .with_rule(rules::PriorityValue)
            .with_tie_breaker(rules::ArrivalTime),
        Policy::PriorityPreemptive => RuleEngine::new().with_rule(rules::PriorityValue),
    };
    engine.with_tie_breaker(rules::ProcessId)
}

/// Next arrival strictly after `time` among unfinished processes.
///
/// Called only when the ready set is empty; `None` there means the loop
/// could not advance, which is an invariant violation.
fn next_arrival(processes: &[Process], time: i64) -> Result<i64> {
    processes
        .iter()
        .filter(|p| !p.is_finished() && p.arrival_time() > time)
        .map(Process::arrival_time)
        .min()
        .ok_or_else(|| {
            SchedError::Internal(format!(
                "ready set empty at t={time} with no future arrival"
            ))
        })
}

/// Every unit of requested work appears exactly once in the timeline,
/// every process completed, the timeline ends at the last completion, and
/// a non-preemptive policy ran each process in one slice.
fn check_conservation(processes: &[ProcessSpec], result: &RunResult) -> Result<()> {
    let policy = result.policy;
    let requested = processes
        .iter()
        .try_fold(0i64, |acc, p| acc.checked_add(p.burst_time))
        .ok_or_else(|| SchedError::Internal(format!("{policy}: total burst overflows")))?;
    let scheduled = result.timeline.busy_time();
    if requested != scheduled {
        return Err(SchedError::Internal(format!(
            "{policy}: scheduled {scheduled} tick(s) for {requested} tick(s) of work"
        )));
    }
    if result.completed.len() != processes.len() {
        return Err(SchedError::Internal(format!(
            "{policy}: completed {} of {} process(es)",
            result.completed.len(),
            processes.len()
        )));
    }
    if result.makespan() != result.timeline.end_time() {
        return Err(SchedError::Internal(format!(
            "{policy}: last completion at t={} but timeline ends at t={}",
            result.makespan(),
            result.timeline.end_time()
        )));
    }
    if !policy.is_preemptive() && result.timeline.len() != processes.len() {
        return Err(SchedError::Internal(format!(
            "{policy}: {} slice(s) for {} non-preemptible process(es)",
            result.timeline.len(),
            processes.len()
        )));
    }
    Ok(())
}
