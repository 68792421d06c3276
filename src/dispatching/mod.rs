//! Ready-set selection rules.
//!
//! Every policy that picks from a ready set (SJF, SRTF, Priority) does so
//! through a [`RuleEngine`]: a primary rule followed by tie-breakers,
//! compared lexicographically.
//!
//! # Usage
//!
//! ```
//! use u_cpusched::dispatching::{rules, RuleEngine};
//! use u_cpusched::models::{Process, ProcessSpec};
//!
//! let engine = RuleEngine::new()
//!     .with_rule(rules::ShortestBurst)
//!     .with_tie_breaker(rules::ArrivalTime)
//!     .with_tie_breaker(rules::ProcessId);
//!
//! let procs = vec![
//!     Process::from_spec(&ProcessSpec::new(1, 0, 7)),
//!     Process::from_spec(&ProcessSpec::new(2, 1, 3)),
//! ];
//! assert_eq!(engine.select_among(&procs, &[0, 1]), Some(1));
//! ```

mod engine;
pub mod rules;

pub use engine::RuleEngine;

use crate::models::Process;
use std::fmt::Debug;

/// Score returned by a dispatching rule.
///
/// Lower scores = higher priority (dispatched first). Scores are integers
/// so that ties are exact.
pub type RuleScore = i64;

/// A rule that ranks ready processes.
///
/// # Score Convention
/// **Lower score = dispatched first.**
pub trait DispatchingRule: Send + Sync + Debug {
    /// Rule name (e.g., "SPT", "SRPT").
    fn name(&self) -> &'static str;

    /// Scores a ready process in its current state.
    fn evaluate(&self, process: &Process) -> RuleScore;
}
