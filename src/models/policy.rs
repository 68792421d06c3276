//! Scheduling policy identifiers.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::SchedError;

/// The closed set of supported scheduling policies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Policy {
    /// First-Come-First-Served.
    Fcfs,
    /// Shortest-Job-First, run to completion.
    SjfNonPreemptive,
    /// Shortest-Remaining-Time-First, re-evaluated every tick.
    SjfPreemptive,
    /// Lowest priority value first, run to completion.
    PriorityNonPreemptive,
    /// Lowest priority value first, re-evaluated every tick.
    PriorityPreemptive,
    /// FIFO ready queue with a fixed time quantum.
    RoundRobin,
}

impl Policy {
    /// All policies in comparison order.
    pub const ALL: [Policy; 6] = [
        Policy::Fcfs,
        Policy::SjfNonPreemptive,
        Policy::SjfPreemptive,
        Policy::PriorityNonPreemptive,
        Policy::PriorityPreemptive,
        Policy::RoundRobin,
    ];

    /// Display name.
    pub fn name(&self) -> &'static str {
        match self {
            Policy::Fcfs => "FCFS",
            Policy::SjfNonPreemptive => "SJF (Non-Preemptive)",
            Policy::SjfPreemptive => "SJF (Preemptive)",
            Policy::PriorityNonPreemptive => "Priority (Non-Preemptive)",
            Policy::PriorityPreemptive => "Priority (Preemptive)",
            Policy::RoundRobin => "Round Robin",
        }
    }

    /// Whether a running process can lose the CPU before finishing.
    pub fn is_preemptive(&self) -> bool {
        matches!(
            self,
            Policy::SjfPreemptive | Policy::PriorityPreemptive | Policy::RoundRobin
        )
    }

    /// Whether the policy needs a time quantum.
    pub fn requires_quantum(&self) -> bool {
        matches!(self, Policy::RoundRobin)
    }
}

impl fmt::Display for Policy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Policy {
    type Err = SchedError;

    /// Parses a display name or a short alias, case-insensitively.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key = s.trim().to_ascii_lowercase();
        let policy = match key.as_str() {
            "fcfs" | "fifo" => Policy::Fcfs,
            "sjf (non-preemptive)" | "sjf" | "sjf-np" => Policy::SjfNonPreemptive,
            "sjf (preemptive)" | "srtf" | "sjf-p" => Policy::SjfPreemptive,
            "priority (non-preemptive)" | "priority" | "priority-np" => {
                Policy::PriorityNonPreemptive
            }
            "priority (preemptive)" | "priority-preemptive" | "priority-p" => {
                Policy::PriorityPreemptive
            }
            "round robin" | "round-robin" | "rr" => Policy::RoundRobin,
            _ => return Err(SchedError::UnknownPolicy(s.to_string())),
        };
        Ok(policy)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_display_names() {
        for policy in Policy::ALL {
            assert_eq!(policy.name().parse::<Policy>().unwrap(), policy);
        }
    }

    #[test]
    fn test_parse_aliases() {
        assert_eq!("rr".parse::<Policy>().unwrap(), Policy::RoundRobin);
        assert_eq!(" SRTF ".parse::<Policy>().unwrap(), Policy::SjfPreemptive);
        assert_eq!(
            "Priority-Preemptive".parse::<Policy>().unwrap(),
            Policy::PriorityPreemptive
        );
    }

    #[test]
    fn test_unknown_policy_rejected() {
        let err = "lottery".parse::<Policy>().unwrap_err();
        assert_eq!(err, SchedError::UnknownPolicy("lottery".into()));
    }

    #[test]
    fn test_flags() {
        assert!(!Policy::Fcfs.is_preemptive());
        assert!(Policy::SjfPreemptive.is_preemptive());
        assert!(Policy::RoundRobin.requires_quantum());
        assert!(!Policy::PriorityPreemptive.requires_quantum());
        assert_eq!(Policy::RoundRobin.to_string(), "Round Robin");
    }
}
