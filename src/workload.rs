//! Synthetic workload generation.
//!
//! Produces random but always-valid process sets for benchmarking policies
//! against each other. Pass a seeded RNG for reproducible workloads.

use rand::Rng;

use crate::models::{Pid, ProcessSpec};

/// Random workload generator.
///
/// # Example
///
/// ```
/// use rand::SeedableRng;
/// use rand::rngs::SmallRng;
/// use u_cpusched::workload::WorkloadGenerator;
///
/// let mut rng = SmallRng::seed_from_u64(7);
/// let procs = WorkloadGenerator::new(5).with_burst_range(1, 4).generate(&mut rng);
/// assert_eq!(procs.len(), 5);
/// assert!(procs.iter().all(|p| (1..=4).contains(&p.burst_time)));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WorkloadGenerator {
    /// Number of processes.
    pub count: usize,
    /// Latest possible arrival time (arrivals drawn from `0..=max_arrival`).
    pub max_arrival: i64,
    /// Inclusive burst time range (minimum clamped to 1).
    pub burst_range: (i64, i64),
    /// Inclusive priority range (minimum clamped to 0).
    pub priority_range: (i32, i32),
}

impl WorkloadGenerator {
    /// Creates a generator for `count` processes with arrivals in `0..=10`,
    /// bursts in `1..=10` and priorities in `0..=5`.
    pub fn new(count: usize) -> Self {
        Self {
            count,
            max_arrival: 10,
            burst_range: (1, 10),
            priority_range: (0, 5),
        }
    }

    /// Sets the latest arrival time.
    pub fn with_max_arrival(mut self, max_arrival: i64) -> Self {
        self.max_arrival = max_arrival;
        self
    }

    /// Sets the burst time range.
    pub fn with_burst_range(mut self, min: i64, max: i64) -> Self {
        self.burst_range = (min, max);
        self
    }

    /// Sets the priority range.
    pub fn with_priority_range(mut self, min: i32, max: i32) -> Self {
        self.priority_range = (min, max);
        self
    }

    /// Generates a workload. Pids are 1-based in generation order.
    pub fn generate<R: Rng>(&self, rng: &mut R) -> Vec<ProcessSpec> {
        let max_arrival = self.max_arrival.max(0);
        let (burst_lo, burst_hi) = ordered(self.burst_range.0.max(1), self.burst_range.1.max(1));
        let (prio_lo, prio_hi) = ordered(self.priority_range.0.max(0), self.priority_range.1.max(0));

        (1..=self.count as Pid)
            .map(|pid| {
                ProcessSpec::new(
                    pid,
                    rng.random_range(0..=max_arrival),
                    rng.random_range(burst_lo..=burst_hi),
                )
                .with_priority(rng.random_range(prio_lo..=prio_hi))
            })
            .collect()
    }
}

fn ordered<T: PartialOrd>(a: T, b: T) -> (T, T) {
    if a <= b {
        (a, b)
    } else {
        (b, a)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::compare::compare_all;
    use crate::models::Policy;
    use crate::policy::run_policy;
    use crate::validation::validate_processes;
    use rand::rngs::SmallRng;
    use rand::SeedableRng;

    #[test]
    fn test_generated_workload_is_valid() {
        let mut rng = SmallRng::seed_from_u64(42);
        for _ in 0..20 {
            let procs = WorkloadGenerator::new(8).generate(&mut rng);
            assert!(validate_processes(&procs).is_ok());
            assert!(procs.iter().all(|p| p.arrival_time <= 10));
        }
    }

    #[test]
    fn test_ranges_are_sanitized() {
        let mut rng = SmallRng::seed_from_u64(1);
        let procs = WorkloadGenerator::new(30)
            .with_max_arrival(-5)
            .with_burst_range(3, -2)
            .with_priority_range(-4, -1)
            .generate(&mut rng);
        assert!(validate_processes(&procs).is_ok());
        assert!(procs.iter().all(|p| p.arrival_time == 0));
        assert!(procs.iter().all(|p| (1..=3).contains(&p.burst_time)));
        assert!(procs.iter().all(|p| p.priority == 0));
    }

    #[test]
    fn test_same_seed_same_workload() {
        let generator = WorkloadGenerator::new(6).with_max_arrival(20);
        let a = generator.generate(&mut SmallRng::seed_from_u64(9));
        let b = generator.generate(&mut SmallRng::seed_from_u64(9));
        assert_eq!(a, b);
    }

    #[test]
    fn test_random_workloads_conserve_work() {
        let mut rng = SmallRng::seed_from_u64(2024);
        for _ in 0..50 {
            let procs = WorkloadGenerator::new(6)
                .with_max_arrival(15)
                .generate(&mut rng);
            let total: i64 = procs.iter().map(|p| p.burst_time).sum();
            for policy in Policy::ALL {
                let r = run_policy(policy, &procs, Some(3)).unwrap();
                assert_eq!(r.timeline.busy_time(), total);
                for p in &r.completed {
                    assert_eq!(
                        p.waiting_time,
                        p.completion_time - p.arrival_time() - p.burst_time()
                    );
                }
            }
        }
    }

    #[test]
    fn test_random_workloads_rr_with_large_quantum_is_fcfs() {
        let mut rng = SmallRng::seed_from_u64(77);
        for _ in 0..50 {
            let procs = WorkloadGenerator::new(7).generate(&mut rng);
            let max_burst = procs.iter().map(|p| p.burst_time).max().unwrap();
            let fcfs = run_policy(Policy::Fcfs, &procs, None).unwrap();
            let rr = run_policy(Policy::RoundRobin, &procs, Some(max_burst)).unwrap();
            assert_eq!(rr.completion_order(), fcfs.completion_order());
            assert_eq!(rr.completed, fcfs.completed);
        }
    }

    #[test]
    fn test_random_workloads_sjf_variants_agree_at_time_zero() {
        let mut rng = SmallRng::seed_from_u64(5);
        for _ in 0..50 {
            let procs = WorkloadGenerator::new(6)
                .with_max_arrival(0)
                .generate(&mut rng);
            let np = run_policy(Policy::SjfNonPreemptive, &procs, None).unwrap();
            let p = run_policy(Policy::SjfPreemptive, &procs, None).unwrap();
            assert_eq!(np.completion_order(), p.completion_order());
            assert_eq!(np.sorted_by_pid(), p.sorted_by_pid());
        }
    }

    #[test]
    fn test_random_comparisons_have_a_best_row() {
        let mut rng = SmallRng::seed_from_u64(11);
        for _ in 0..20 {
            let procs = WorkloadGenerator::new(5).generate(&mut rng);
            let cmp = compare_all(&procs, Some(2)).unwrap();
            assert_eq!(cmp.rows.len(), 6);
            assert!(!cmp.best().is_empty());
        }
    }
}
