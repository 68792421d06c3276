//! Cross-policy comparison.
//!
//! Runs every applicable policy against the same workload and ranks them.
//! Each run builds its own execution state from the immutable specs, so
//! no policy can observe another's side effects. Rows are assembled only
//! after every run has succeeded.

use log::debug;
use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::models::{Policy, ProcessSpec};
use crate::policy::run_policy;

/// Metric used to order comparison rows.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum RankMetric {
    /// Average waiting time (default).
    #[default]
    WaitingTime,
    /// Average turnaround time.
    TurnaroundTime,
}

/// One policy's aggregate results.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ComparisonRow {
    /// Policy this row describes.
    pub policy: Policy,
    /// Mean waiting time.
    pub avg_waiting_time: f64,
    /// Mean turnaround time.
    pub avg_turnaround_time: f64,
    /// Sum of waiting times, the exact basis for picking the best row.
    pub total_waiting_time: i64,
    /// Whether this row has the minimum average waiting time.
    pub is_best: bool,
}

/// Rows for every compared policy, in [`Policy::ALL`] order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Comparison {
    /// One row per policy.
    pub rows: Vec<ComparisonRow>,
}

impl Comparison {
    /// Rows flagged best (at least one for a non-empty comparison).
    pub fn best(&self) -> Vec<&ComparisonRow> {
        self.rows.iter().filter(|r| r.is_best).collect()
    }

    /// Rows sorted ascending by `metric`. Ties keep policy order.
    pub fn ranked(&self, metric: RankMetric) -> Vec<&ComparisonRow> {
        let mut rows: Vec<&ComparisonRow> = self.rows.iter().collect();
        rows.sort_by(|a, b| {
            let (x, y) = match metric {
                RankMetric::WaitingTime => (a.avg_waiting_time, b.avg_waiting_time),
                RankMetric::TurnaroundTime => (a.avg_turnaround_time, b.avg_turnaround_time),
            };
            x.total_cmp(&y)
        });
        rows
    }

    /// Row for a policy, if it was compared.
    pub fn row(&self, policy: Policy) -> Option<&ComparisonRow> {
        self.rows.iter().find(|r| r.policy == policy)
    }
}

/// Compares all policies on one workload.
///
/// Round Robin is included only when `quantum` is given, yielding six rows
/// instead of five.
///
/// # Errors
/// The first error from any policy run, typically
/// [`SchedError::InvalidInput`](crate::error::SchedError::InvalidInput).
///
/// # Example
///
/// ```
/// use u_cpusched::compare::compare_all;
/// use u_cpusched::models::ProcessSpec;
///
/// let processes = ProcessSpec::from_tuples(&[(0, 5, 0), (1, 3, 0), (2, 8, 0), (3, 6, 0)]);
/// let cmp = compare_all(&processes, Some(2)).unwrap();
/// assert_eq!(cmp.rows.len(), 6);
/// assert!(!cmp.best().is_empty());
/// ```
pub fn compare_all(processes: &[ProcessSpec], quantum: Option<i64>) -> Result<Comparison> {
    let policies: Vec<Policy> = Policy::ALL
        .into_iter()
        .filter(|p| !p.requires_quantum() || quantum.is_some())
        .collect();

    let mut rows = Vec::with_capacity(policies.len());
    for policy in policies {
        let result = run_policy(policy, processes, quantum)?;
        let n = result.completed.len() as f64;
        rows.push(ComparisonRow {
            policy,
            avg_waiting_time: result.total_waiting_time() as f64 / n,
            avg_turnaround_time: result.total_turnaround_time() as f64 / n,
            total_waiting_time: result.total_waiting_time(),
            is_best: false,
        });
    }

    // Same n for every row, so comparing integer totals is exact.
    if let Some(min_wait) = rows.iter().map(|r| r.total_waiting_time).min() {
        for row in &mut rows {
            row.is_best = row.total_waiting_time == min_wait;
        }
    }

    debug!(
        "compared {} policies; best: {:?}",
        rows.len(),
        rows.iter()
            .filter(|r| r.is_best)
            .map(|r| r.policy.name())
            .collect::<Vec<_>>()
    );
    Ok(Comparison { rows })
}
