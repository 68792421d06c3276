//! CPU scheduling domain models.
//!
//! Provides the input records, per-run execution state, and run outputs
//! shared by every policy.
//!
//! # Ownership
//!
//! | Type | Lifetime | Mutated by |
//! |------|----------|------------|
//! | `ProcessSpec` | Whole workload | Nobody |
//! | `Process` | One policy run | That run only |
//! | `Timeline` | One policy run | That run only |
//! | `RunResult` | After the run | Nobody |

mod policy;
mod process;
mod result;
mod timeline;

pub use policy::Policy;
pub use process::{Pid, Process, ProcessSpec};
pub use result::RunResult;
pub use timeline::{Slice, Timeline};
