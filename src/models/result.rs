//! Run result (solution) model.
//!
//! One [`RunResult`] is produced per policy invocation. Collaborators
//! (tables, charts, exporters) read it; nothing in the crate mutates it
//! after the run returns.

use serde::{Deserialize, Serialize};

use super::{Pid, Policy, Process, Timeline};

/// Completed processes and execution timeline of one policy run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RunResult {
    /// Policy that produced this result.
    pub policy: Policy,
    /// Processes in completion order.
    pub completed: Vec<Process>,
    /// Execution slices in start-time order.
    pub timeline: Timeline,
}

impl RunResult {
    /// Creates a result.
    pub fn new(policy: Policy, completed: Vec<Process>, timeline: Timeline) -> Self {
        Self {
            policy,
            completed,
            timeline,
        }
    }

    /// Pids in the order they completed.
    pub fn completion_order(&self) -> Vec<Pid> {
        self.completed.iter().map(Process::pid).collect()
    }

    /// Copy of the completed processes sorted by pid, for display.
    pub fn sorted_by_pid(&self) -> Vec<Process> {
        let mut sorted = self.completed.clone();
        sorted.sort_by_key(Process::pid);
        sorted
    }

    /// Looks up a completed process.
    pub fn process(&self, pid: Pid) -> Option<&Process> {
        self.completed.iter().find(|p| p.pid() == pid)
    }

    /// Sum of waiting times.
    pub fn total_waiting_time(&self) -> i64 {
        self.completed.iter().map(|p| p.waiting_time).sum()
    }

    /// Sum of turnaround times.
    pub fn total_turnaround_time(&self) -> i64 {
        self.completed.iter().map(|p| p.turnaround_time).sum()
    }

    /// Latest completion time, or 0 when nothing completed.
    pub fn makespan(&self) -> i64 {
        self.completed
            .iter()
            .map(|p| p.completion_time)
            .max()
            .unwrap_or(0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{ProcessSpec, Slice};

    fn sample_result() -> RunResult {
        let mut p2 = Process::from_spec(&ProcessSpec::new(2, 0, 2));
        p2.complete(2);
        let mut p1 = Process::from_spec(&ProcessSpec::new(1, 0, 3));
        p1.complete(5);

        let mut timeline = Timeline::new();
        timeline.push(Slice::new(2, 0, 2));
        timeline.push(Slice::new(1, 2, 3));

        RunResult::new(Policy::SjfNonPreemptive, vec![p2, p1], timeline)
    }

    #[test]
    fn test_completion_order_vs_pid_order() {
        let r = sample_result();
        assert_eq!(r.completion_order(), vec![2, 1]);
        let sorted: Vec<Pid> = r.sorted_by_pid().iter().map(Process::pid).collect();
        assert_eq!(sorted, vec![1, 2]);
        // Sorting for display leaves the result untouched.
        assert_eq!(r.completion_order(), vec![2, 1]);
    }

    #[test]
    fn test_totals() {
        let r = sample_result();
        assert_eq!(r.total_waiting_time(), 2);
        assert_eq!(r.total_turnaround_time(), 7);
        assert_eq!(r.makespan(), 5);
        assert_eq!(r.process(1).unwrap().completion_time, 5);
        assert!(r.process(3).is_none());
    }
}
