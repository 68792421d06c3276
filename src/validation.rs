//! Input validation for scheduling workloads.
//!
//! Checks a workload before any policy runs. Detects:
//! - Empty process sets
//! - Non-positive burst times
//! - Negative arrival times and priorities
//! - Zero or duplicate pids
//! - Workloads whose clock or time totals would overflow `i64`
//! - Missing or non-positive Round Robin quanta
//! - Non-numeric fields coming from upstream text input
//!
//! All problems are collected, not just the first one.

use std::collections::HashSet;

use crate::models::{Pid, Policy, ProcessSpec};

/// Validation result.
pub type ValidationResult = Result<(), Vec<ValidationError>>;

/// A validation error.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct ValidationError {
    /// Error category.
    pub kind: ValidationErrorKind,
    /// Human-readable description.
    pub message: String,
}

/// Categories of validation errors.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub enum ValidationErrorKind {
    /// No processes were supplied.
    EmptyWorkload,
    /// Burst time is zero or negative.
    NonPositiveBurst,
    /// Arrival time is negative.
    NegativeArrival,
    /// Priority is negative.
    NegativePriority,
    /// Pid is zero.
    InvalidPid,
    /// Two processes share a pid.
    DuplicatePid,
    /// The schedule horizon, or a per-run total over it, exceeds `i64`.
    TimeOverflow,
    /// Round Robin quantum is missing or non-positive.
    InvalidQuantum,
    /// A text field could not be parsed as an integer.
    NotNumeric,
}

impl ValidationError {
    pub fn new(kind: ValidationErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

/// Validates a process set.
///
/// Checks:
/// 1. At least one process
/// 2. Every pid is non-zero and unique
/// 3. Every burst time is > 0
/// 4. Every arrival time and priority is >= 0
/// 5. `n × (latest arrival + total burst)` fits in `i64`, which bounds the
///    clock of every policy and every per-run sum of turnaround or
///    waiting time
///
/// # Returns
/// `Ok(())` if all checks pass, `Err(errors)` with all detected issues.
pub fn validate_processes(processes: &[ProcessSpec]) -> ValidationResult {
    let mut errors = Vec::new();

    if processes.is_empty() {
        errors.push(ValidationError::new(
            ValidationErrorKind::EmptyWorkload,
            "Process set is empty",
        ));
    }

    let mut pids: HashSet<Pid> = HashSet::new();
    for p in processes {
        if p.pid == 0 {
            errors.push(ValidationError::new(
                ValidationErrorKind::InvalidPid,
                "Pid 0 is not allowed (pids are 1-based)",
            ));
        } else if !pids.insert(p.pid) {
            errors.push(ValidationError::new(
                ValidationErrorKind::DuplicatePid,
                format!("Duplicate pid: P{}", p.pid),
            ));
        }

        if p.burst_time <= 0 {
            errors.push(ValidationError::new(
                ValidationErrorKind::NonPositiveBurst,
                format!("P{} has non-positive burst time {}", p.pid, p.burst_time),
            ));
        }

        if p.arrival_time < 0 {
            errors.push(ValidationError::new(
                ValidationErrorKind::NegativeArrival,
                format!("P{} has negative arrival time {}", p.pid, p.arrival_time),
            ));
        }

        if p.priority < 0 {
            errors.push(ValidationError::new(
                ValidationErrorKind::NegativePriority,
                format!("P{} has negative priority {}", p.pid, p.priority),
            ));
        }
    }

    if errors.is_empty() && bounded_horizon(processes).is_none() {
        errors.push(ValidationError::new(
            ValidationErrorKind::TimeOverflow,
            "Arrival and burst times are too large: the schedule would overflow the clock",
        ));
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

/// `n × (latest arrival + total burst)`, or `None` on overflow.
fn bounded_horizon(processes: &[ProcessSpec]) -> Option<i64> {
    let latest_arrival = processes.iter().map(|p| p.arrival_time).max()?;
    let total_burst = processes
        .iter()
        .try_fold(0i64, |acc, p| acc.checked_add(p.burst_time))?;
    let count = i64::try_from(processes.len()).ok()?;
    latest_arrival.checked_add(total_burst)?.checked_mul(count)
}

/// Validates the quantum for a policy.
///
/// Round Robin requires `Some(q)` with `q > 0`. Other policies ignore the
/// quantum entirely.
pub fn validate_quantum(quantum: Option<i64>, policy: Policy) -> ValidationResult {
    if !policy.requires_quantum() {
        return Ok(());
    }
    match quantum {
        Some(q) if q > 0 => Ok(()),
        Some(q) => Err(vec![ValidationError::new(
            ValidationErrorKind::InvalidQuantum,
            format!("Quantum must be positive, got {q}"),
        )]),
        None => Err(vec![ValidationError::new(
            ValidationErrorKind::InvalidQuantum,
            format!("{policy} requires a quantum"),
        )]),
    }
}

/// Parses one row of upstream text input into a spec.
///
/// Fields are trimmed before parsing. Range checks are left to
/// [`validate_processes`].
pub fn parse_process_fields(
    pid: Pid,
    arrival: &str,
    burst: &str,
    priority: &str,
) -> Result<ProcessSpec, Vec<ValidationError>> {
    let mut errors = Vec::new();

    let mut field = |name: &str, raw: &str| -> i64 {
        match raw.trim().parse::<i64>() {
            Ok(v) => v,
            Err(_) => {
                errors.push(ValidationError::new(
                    ValidationErrorKind::NotNumeric,
                    format!("P{pid}: {name} '{raw}' is not an integer"),
                ));
                0
            }
        }
    };

    let at = field("arrival time", arrival);
    let bt = field("burst time", burst);
    let pr = field("priority", priority);

    let pr = match i32::try_from(pr) {
        Ok(v) => v,
        Err(_) => {
            errors.push(ValidationError::new(
                ValidationErrorKind::NotNumeric,
                format!("P{pid}: priority '{priority}' is out of range"),
            ));
            0
        }
    };

    if errors.is_empty() {
        Ok(ProcessSpec::new(pid, at, bt).with_priority(pr))
    } else {
        Err(errors)
    }
}
