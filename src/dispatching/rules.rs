//! Built-in dispatching rules.
//!
//! | Rule | Score | Used by |
//! |------|-------|---------|
//! | `ArrivalTime` | arrival time | FCFS order, tie-breaks |
//! | `ShortestBurst` | original burst | SJF (non-preemptive) |
//! | `ShortestRemaining` | remaining burst | SJF (preemptive) |
//! | `PriorityValue` | priority | Priority policies |
//! | `ProcessId` | pid | final tie-break, every policy |
//!
//! All rules return lower scores for processes that should run first.

use super::{DispatchingRule, RuleScore};
use crate::models::Process;

/// First In First Out: earliest arrival first.
#[derive(Debug, Clone, Copy)]
pub struct ArrivalTime;

impl DispatchingRule for ArrivalTime {
    fn name(&self) -> &'static str {
        "FIFO"
    }

    fn evaluate(&self, process: &Process) -> RuleScore {
        process.arrival_time()
    }
}

/// Shortest Processing Time, on the original burst.
///
/// Minimizes average waiting time among non-preemptive orderings.
#[derive(Debug, Clone, Copy)]
pub struct ShortestBurst;

impl DispatchingRule for ShortestBurst {
    fn name(&self) -> &'static str {
        "SPT"
    }

    fn evaluate(&self, process: &Process) -> RuleScore {
        process.burst_time()
    }
}

/// Shortest Remaining Processing Time.
#[derive(Debug, Clone, Copy)]
pub struct ShortestRemaining;

impl DispatchingRule for ShortestRemaining {
    fn name(&self) -> &'static str {
        "SRPT"
    }

    fn evaluate(&self, process: &Process) -> RuleScore {
        process.remaining_time
    }
}

/// Lowest priority value first (lower = more urgent).
#[derive(Debug, Clone, Copy)]
pub struct PriorityValue;

impl DispatchingRule for PriorityValue {
    fn name(&self) -> &'static str {
        "PRIORITY"
    }

    fn evaluate(&self, process: &Process) -> RuleScore {
        RuleScore::from(process.priority())
    }
}

/// Lowest pid first. Pids are unique, so this rule makes any chain total.
#[derive(Debug, Clone, Copy)]
pub struct ProcessId;

impl DispatchingRule for ProcessId {
    fn name(&self) -> &'static str {
        "PID"
    }

    fn evaluate(&self, process: &Process) -> RuleScore {
        RuleScore::from(process.pid())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::ProcessSpec;

    fn make_process(pid: u32, at: i64, bt: i64, pr: i32) -> Process {
        Process::from_spec(&ProcessSpec::new(pid, at, bt).with_priority(pr))
    }

    #[test]
    fn test_scores() {
        let mut p = make_process(7, 3, 10, 2);
        p.remaining_time = 4;

        assert_eq!(ArrivalTime.evaluate(&p), 3);
        assert_eq!(ShortestBurst.evaluate(&p), 10);
        assert_eq!(ShortestRemaining.evaluate(&p), 4);
        assert_eq!(PriorityValue.evaluate(&p), 2);
        assert_eq!(ProcessId.evaluate(&p), 7);
    }

    #[test]
    fn test_names() {
        assert_eq!(ShortestBurst.name(), "SPT");
        assert_eq!(ShortestRemaining.name(), "SRPT");
        assert_eq!(ProcessId.name(), "PID");
    }
}
