//! Process model.
//!
//! A process is split into two parts:
//! - [`ProcessSpec`]: the immutable input record (pid, arrival, burst, priority).
//! - [`Process`]: per-run execution state built fresh from a spec for every
//!   policy invocation (remaining burst and completion metrics).
//!
//! # Time Representation
//! All times are integer clock ticks in arbitrary units, starting at t=0.

use serde::{Deserialize, Serialize};

/// Process identifier (1-based, assigned by input order).
pub type Pid = u32;

/// Immutable description of a unit of work.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ProcessSpec {
    /// Unique process identifier.
    pub pid: Pid,
    /// Time at which the process becomes eligible to run.
    pub arrival_time: i64,
    /// Total CPU time required.
    pub burst_time: i64,
    /// Scheduling priority (lower value = higher priority).
    pub priority: i32,
}

impl ProcessSpec {
    /// Creates a spec with priority 0.
    pub fn new(pid: Pid, arrival_time: i64, burst_time: i64) -> Self {
        Self {
            pid,
            arrival_time,
            burst_time,
            priority: 0,
        }
    }

    /// Sets the priority.
    pub fn with_priority(mut self, priority: i32) -> Self {
        self.priority = priority;
        self
    }

    /// Builds specs from `(arrival, burst, priority)` tuples, assigning
    /// pids 1, 2, 3, ... in input order.
    pub fn from_tuples(tuples: &[(i64, i64, i32)]) -> Vec<Self> {
        tuples
            .iter()
            .zip(1..)
            .map(|(&(at, bt, pr), pid)| Self::new(pid, at, bt).with_priority(pr))
            .collect()
    }
}

/// Execution state of a process within a single policy run.
///
/// `completion_time`, `turnaround_time` and `waiting_time` stay 0 until
/// [`Process::complete`] is called.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Process {
    /// The input record this state was built from.
    pub spec: ProcessSpec,
    /// CPU time still owed to this process.
    pub remaining_time: i64,
    /// Time at which the last unit of work finished.
    pub completion_time: i64,
    /// `completion_time - arrival_time`.
    pub turnaround_time: i64,
    /// `turnaround_time - burst_time`.
    pub waiting_time: i64,
}

impl Process {
    /// Creates fresh execution state for a spec.
    pub fn from_spec(spec: &ProcessSpec) -> Self {
        Self {
            spec: *spec,
            remaining_time: spec.burst_time,
            completion_time: 0,
            turnaround_time: 0,
            waiting_time: 0,
        }
    }

    #[inline]
    pub fn pid(&self) -> Pid {
        self.spec.pid
    }

    #[inline]
    pub fn arrival_time(&self) -> i64 {
        self.spec.arrival_time
    }

    #[inline]
    pub fn burst_time(&self) -> i64 {
        self.spec.burst_time
    }

    #[inline]
    pub fn priority(&self) -> i32 {
        self.spec.priority
    }

    /// Whether the process has arrived by `time` (inclusive).
    #[inline]
    pub fn has_arrived(&self, time: i64) -> bool {
        self.spec.arrival_time <= time
    }

    /// Whether no work remains.
    #[inline]
    pub fn is_finished(&self) -> bool {
        self.remaining_time == 0
    }

    /// Records completion at `time` and derives turnaround and waiting
    /// time from the original burst.
    pub fn complete(&mut self, time: i64) {
        self.remaining_time = 0;
        self.completion_time = time;
        self.turnaround_time = time - self.spec.arrival_time;
        self.waiting_time = self.turnaround_time - self.spec.burst_time;
    }
}
