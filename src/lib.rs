//! CPU process scheduling simulator.
//!
//! Given processes with arrival time, burst time and priority, computes the
//! exact execution timeline and performance metrics under the classical
//! uniprocessor policies, and ranks the policies against each other.
//!
//! # Modules
//!
//! - **`models`**: Domain types — `ProcessSpec`, `Process`, `Slice`,
//!   `Timeline`, `RunResult`, `Policy`
//! - **`dispatching`**: Ready-set selection rules and the `RuleEngine`
//! - **`policy`**: FCFS, SJF/SRTF, Priority (both modes), Round Robin
//! - **`metrics`**: Waiting/turnaround averages, CPU utilization, throughput
//! - **`compare`**: Runs every policy on one workload and flags the best
//! - **`validation`**: Input integrity checks
//! - **`workload`**: Seedable random workload generation
//!
//! # Example
//!
//! ```
//! use u_cpusched::metrics::compute_metrics;
//! use u_cpusched::models::{Policy, ProcessSpec};
//! use u_cpusched::policy::run_policy;
//!
//! let processes = ProcessSpec::from_tuples(&[(0, 5, 0), (1, 3, 0), (2, 8, 0), (3, 6, 0)]);
//! let result = run_policy(Policy::Fcfs, &processes, None).unwrap();
//! assert_eq!(result.completion_order(), vec![1, 2, 3, 4]);
//!
//! let metrics = compute_metrics(&result).unwrap();
//! assert!((metrics.average_waiting_time - 5.75).abs() < 1e-10);
//! ```
//!
//! # Scope
//!
//! Single CPU, no I/O bursts, no context-switch cost, integer clock, and a
//! fixed workload known in advance. Rendering and export are left to the
//! embedding application, which only reads the results.
//!
//! # References
//!
//! - Silberschatz, Galvin & Gagne (2018), "Operating System Concepts", Ch. 5
//! - Tanenbaum & Bos (2014), "Modern Operating Systems", Ch. 2.4

pub mod compare;
pub mod dispatching;
pub mod error;
pub mod metrics;
pub mod models;
pub mod policy;
pub mod validation;
pub mod workload;

pub use compare::{compare_all, Comparison, ComparisonRow, RankMetric};
pub use error::{Result, SchedError};
pub use metrics::{compute_metrics, Metrics};
pub use models::{Policy, Process, ProcessSpec, RunResult, Slice, Timeline};
pub use policy::{run_policy, SimulationConfig};
