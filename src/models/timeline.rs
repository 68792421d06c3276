//! Execution timeline (Gantt) model.
//!
//! A timeline is the ordered list of CPU slices produced by a policy run.
//! Idle time is never recorded explicitly: it is the gap between one
//! slice's end and the next slice's start.
//!
//! Preemptive policies emit unit slices. [`Timeline::merged`] joins
//! back-to-back slices of the same process for display, while the raw
//! slices stay available for utilization accounting.

use serde::{Deserialize, Serialize};

use super::Pid;

/// A span during which one process holds the CPU.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Slice {
    /// Running process.
    pub pid: Pid,
    /// First tick of the slice.
    pub start_time: i64,
    /// Number of ticks (> 0).
    pub duration: i64,
}

impl Slice {
    /// Creates a slice.
    pub fn new(pid: Pid, start_time: i64, duration: i64) -> Self {
        Self {
            pid,
            start_time,
            duration,
        }
    }

    /// Exclusive end time.
    #[inline]
    pub fn end_time(&self) -> i64 {
        self.start_time + self.duration
    }
}

/// Ordered execution slices of a run.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Timeline {
    /// Slices in start-time order.
    pub slices: Vec<Slice>,
}

impl Timeline {
    /// Creates an empty timeline.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a slice.
    pub fn push(&mut self, slice: Slice) {
        self.slices.push(slice);
    }

    /// Number of raw slices.
    pub fn len(&self) -> usize {
        self.slices.len()
    }

    /// Whether no slice was recorded.
    pub fn is_empty(&self) -> bool {
        self.slices.is_empty()
    }

    /// Total busy time: sum of all slice durations.
    pub fn busy_time(&self) -> i64 {
        self.slices.iter().map(|s| s.duration).sum()
    }

    /// End of the last slice, or 0 for an empty timeline.
    pub fn end_time(&self) -> i64 {
        self.slices.last().map(Slice::end_time).unwrap_or(0)
    }

    /// Slices belonging to one process.
    pub fn slices_for(&self, pid: Pid) -> Vec<&Slice> {
        self.slices.iter().filter(|s| s.pid == pid).collect()
    }

    /// Display view: adjacent slices of the same process with no gap
    /// between them are joined into one.
    pub fn merged(&self) -> Timeline {
        let mut merged: Vec<Slice> = Vec::with_capacity(self.slices.len());
        for slice in &self.slices {
            match merged.last_mut() {
                Some(last) if last.pid == slice.pid && last.end_time() == slice.start_time => {
                    last.duration += slice.duration;
                }
                _ => merged.push(*slice),
            }
        }
        Timeline { slices: merged }
    }

    /// Idle spans as `(start, duration)`, including a leading gap before
    /// the first slice.
    pub fn idle_gaps(&self) -> Vec<(i64, i64)> {
        let mut gaps = Vec::new();
        let mut cursor = 0;
        for slice in &self.slices {
            if slice.start_time > cursor {
                gaps.push((cursor, slice.start_time - cursor));
            }
            cursor = cursor.max(slice.end_time());
        }
        gaps
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_timeline() -> Timeline {
        let mut t = Timeline::new();
        t.push(Slice::new(1, 2, 1));
        t.push(Slice::new(1, 3, 1));
        t.push(Slice::new(2, 4, 3));
        t.push(Slice::new(2, 9, 2));
        t
    }

    #[test]
    fn test_busy_and_end_time() {
        let t = sample_timeline();
        assert_eq!(t.busy_time(), 7);
        assert_eq!(t.end_time(), 11);
        assert_eq!(t.len(), 4);
    }

    #[test]
    fn test_merged_joins_only_contiguous() {
        let merged = sample_timeline().merged();
        assert_eq!(
            merged.slices,
            vec![Slice::new(1, 2, 2), Slice::new(2, 4, 3), Slice::new(2, 9, 2)]
        );
        // Merging never changes busy time.
        assert_eq!(merged.busy_time(), 7);
    }

    #[test]
    fn test_idle_gaps() {
        let t = sample_timeline();
        assert_eq!(t.idle_gaps(), vec![(0, 2), (7, 2)]);
    }

    #[test]
    fn test_slices_for() {
        let t = sample_timeline();
        assert_eq!(t.slices_for(2).len(), 2);
        assert!(t.slices_for(9).is_empty());
    }

    #[test]
    fn test_empty_timeline() {
        let t = Timeline::new();
        assert!(t.is_empty());
        assert_eq!(t.busy_time(), 0);
        assert_eq!(t.end_time(), 0);
        assert!(t.idle_gaps().is_empty());
        assert!(t.merged().is_empty());
    }
}
