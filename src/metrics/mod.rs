//! Run performance metrics.
//!
//! Computes standard CPU scheduling performance indicators from a
//! completed [`RunResult`].
//!
//! # Metrics
//!
//! | Metric | Definition |
//! |--------|-----------|
//! | Avg Waiting Time | mean(turnaround - burst) |
//! | Avg Turnaround Time | mean(completion - arrival) |
//! | CPU Utilization | busy time / elapsed time × 100 |
//! | Throughput | completed processes / elapsed time |
//!
//! Elapsed time runs from t=0 to the end of the last slice, so leading
//! and interior idle gaps lower utilization.
//!
//! # Reference
//! Silberschatz, Galvin & Gagne (2018), "Operating System Concepts", Ch. 5.2: Scheduling Criteria

use serde::{Deserialize, Serialize};

use crate::error::{Result, SchedError};
use crate::models::RunResult;

/// Aggregate performance of one policy run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Metrics {
    /// Mean waiting time.
    pub average_waiting_time: f64,
    /// Mean turnaround time.
    pub average_turnaround_time: f64,
    /// Busy share of elapsed time, in percent (0.0..=100.0).
    pub cpu_utilization: f64,
    /// Processes completed per time unit.
    pub throughput: f64,
    /// Sum of slice durations.
    pub busy_time: i64,
    /// End of the last slice.
    pub elapsed_time: i64,
    /// Number of completed processes.
    pub process_count: usize,
}

impl Metrics {
    /// Computes metrics for a run.
    ///
    /// # Errors
    /// [`SchedError::DegenerateMetrics`] when nothing completed or the
    /// elapsed time is zero.
    pub fn calculate(result: &RunResult) -> Result<Self> {
        let process_count = result.completed.len();
        if process_count == 0 {
            return Err(SchedError::DegenerateMetrics(format!(
                "{}: no completed processes",
                result.policy
            )));
        }

        let busy_time = result.timeline.busy_time();
        let elapsed_time = result.timeline.end_time();
        if elapsed_time <= 0 {
            return Err(SchedError::DegenerateMetrics(format!(
                "{}: zero elapsed time",
                result.policy
            )));
        }

        let n = process_count as f64;
        Ok(Self {
            average_waiting_time: result.total_waiting_time() as f64 / n,
            average_turnaround_time: result.total_turnaround_time() as f64 / n,
            cpu_utilization: busy_time as f64 / elapsed_time as f64 * 100.0,
            throughput: n / elapsed_time as f64,
            busy_time,
            elapsed_time,
            process_count,
        })
    }

    /// Idle time within the elapsed span.
    pub fn idle_time(&self) -> i64 {
        self.elapsed_time - self.busy_time
    }

    /// Whether the run meets the given quality thresholds.
    pub fn meets_thresholds(&self, max_avg_waiting_time: f64, min_utilization: f64) -> bool {
        self.average_waiting_time <= max_avg_waiting_time && self.cpu_utilization >= min_utilization
    }
}

/// Computes metrics for a run. See [`Metrics::calculate`].
pub fn compute_metrics(result: &RunResult) -> Result<Metrics> {
    Metrics::calculate(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Policy, Process, ProcessSpec, Slice, Timeline};

    fn completed(pid: u32, at: i64, bt: i64, ct: i64) -> Process {
        let mut p = Process::from_spec(&ProcessSpec::new(pid, at, bt));
        p.complete(ct);
        p
    }

    #[test]
    fn test_metrics_basic() {
        // FCFS on [(0,5), (1,3), (2,8), (3,6)]
        let mut timeline = Timeline::new();
        timeline.push(Slice::new(1, 0, 5));
        timeline.push(Slice::new(2, 5, 3));
        timeline.push(Slice::new(3, 8, 8));
        timeline.push(Slice::new(4, 16, 6));
        let result = RunResult::new(
            Policy::Fcfs,
            vec![
                completed(1, 0, 5, 5),
                completed(2, 1, 3, 8),
                completed(3, 2, 8, 16),
                completed(4, 3, 6, 22),
            ],
            timeline,
        );

        let m = compute_metrics(&result).unwrap();
        assert!((m.average_waiting_time - 5.75).abs() < 1e-10); // (0+4+6+13)/4
        assert!((m.average_turnaround_time - 11.25).abs() < 1e-10); // (5+7+14+19)/4
        assert!((m.cpu_utilization - 100.0).abs() < 1e-10);
        assert!((m.throughput - 4.0 / 22.0).abs() < 1e-10);
        assert_eq!(m.idle_time(), 0);
    }

    #[test]
    fn test_utilization_counts_idle_gaps() {
        let mut timeline = Timeline::new();
        timeline.push(Slice::new(1, 2, 2));
        timeline.push(Slice::new(2, 6, 2));
        let result = RunResult::new(
            Policy::Fcfs,
            vec![completed(1, 2, 2, 4), completed(2, 6, 2, 8)],
            timeline,
        );

        let m = Metrics::calculate(&result).unwrap();
        assert_eq!(m.busy_time, 4);
        assert_eq!(m.elapsed_time, 8);
        assert_eq!(m.idle_time(), 4);
        assert!((m.cpu_utilization - 50.0).abs() < 1e-10);
        assert!((m.throughput - 0.25).abs() < 1e-10);
    }

    #[test]
    fn test_empty_result_is_degenerate() {
        let result = RunResult::new(Policy::Fcfs, Vec::new(), Timeline::new());
        assert!(matches!(
            compute_metrics(&result),
            Err(SchedError::DegenerateMetrics(_))
        ));
    }

    #[test]
    fn test_zero_elapsed_is_degenerate() {
        let result = RunResult::new(Policy::Fcfs, vec![completed(1, 0, 1, 1)], Timeline::new());
        let err = compute_metrics(&result).unwrap_err();
        assert!(err.to_string().contains("zero elapsed time"));
    }

    #[test]
    fn test_meets_thresholds() {
        let mut timeline = Timeline::new();
        timeline.push(Slice::new(1, 1, 3));
        let result = RunResult::new(Policy::Fcfs, vec![completed(1, 0, 3, 4)], timeline);

        let m = compute_metrics(&result).unwrap();
        assert!((m.average_waiting_time - 1.0).abs() < 1e-10);
        assert!(m.meets_thresholds(1.0, 75.0));
        assert!(!m.meets_thresholds(0.5, 0.0));
        assert!(!m.meets_thresholds(1.0, 80.0)); // Utilization is 75%
    }
}
