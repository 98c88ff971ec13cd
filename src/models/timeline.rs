//! Timeline model.
//!
//! Strategies emit [`ExecutionSlice`]s, the atomic units of CPU occupancy.
//! The compactor turns them into [`GanttSegment`]s, the maximal intervals
//! drawn on a Gantt chart.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::ProcessId;

/// Label used for idle intervals.
pub const IDLE_LABEL: &str = "IDLE";

/// Who occupies the CPU during an interval.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "String", try_from = "String")]
pub enum Owner {
    /// A process is executing.
    Process(ProcessId),
    /// No process is ready.
    Idle,
}

impl Owner {
    /// Whether this is the idle marker.
    #[inline]
    pub fn is_idle(self) -> bool {
        matches!(self, Owner::Idle)
    }

    /// The owning process, if any.
    #[inline]
    pub fn process(self) -> Option<ProcessId> {
        match self {
            Owner::Process(id) => Some(id),
            Owner::Idle => None,
        }
    }
}

impl From<ProcessId> for Owner {
    fn from(id: ProcessId) -> Self {
        Owner::Process(id)
    }
}

impl fmt::Display for Owner {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Owner::Process(id) => fmt::Display::fmt(id, f),
            Owner::Idle => f.write_str(IDLE_LABEL),
        }
    }
}

impl From<Owner> for String {
    fn from(owner: Owner) -> Self {
        owner.to_string()
    }
}

impl TryFrom<String> for Owner {
    type Error = String;

    fn try_from(label: String) -> Result<Self, Self::Error> {
        if label == IDLE_LABEL {
            Ok(Owner::Idle)
        } else {
            ProcessId::try_from(label).map(Owner::Process)
        }
    }
}

/// One atomic unit of CPU occupancy over `[start, stop)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExecutionSlice {
    /// Process or idle marker.
    pub owner: Owner,
    /// Start time (inclusive).
    pub start: i64,
    /// Stop time (exclusive).
    pub stop: i64,
}

impl ExecutionSlice {
    /// Creates a slice. Callers guarantee `stop > start`.
    pub fn new(owner: impl Into<Owner>, start: i64, stop: i64) -> Self {
        debug_assert!(stop > start, "empty slice [{start}, {stop})");
        Self {
            owner: owner.into(),
            start,
            stop,
        }
    }

    /// An idle slice.
    pub fn idle(start: i64, stop: i64) -> Self {
        Self::new(Owner::Idle, start, stop)
    }

    /// Length of the slice.
    #[inline]
    pub fn duration(&self) -> i64 {
        self.stop - self.start
    }
}

/// Maximal Gantt chart interval; adjacent segments never share an owner.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GanttSegment {
    /// Process or idle marker.
    pub owner: Owner,
    /// Start time (inclusive).
    pub start: i64,
    /// Stop time (exclusive).
    pub stop: i64,
}

impl GanttSegment {
    /// Length of the segment.
    #[inline]
    pub fn duration(&self) -> i64 {
        self.stop - self.start
    }
}

impl From<ExecutionSlice> for GanttSegment {
    fn from(slice: ExecutionSlice) -> Self {
        Self {
            owner: slice.owner,
            start: slice.start,
            stop: slice.stop,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_owner_display() {
        let p2 = Owner::from(ProcessId::from_index(1));
        assert_eq!(p2.to_string(), "P2");
        assert_eq!(Owner::Idle.to_string(), "IDLE");
        assert!(Owner::Idle.is_idle());
        assert_eq!(p2.process(), Some(ProcessId::from_index(1)));
        assert_eq!(Owner::Idle.process(), None);
    }

    #[test]
    fn test_owner_parse() {
        assert_eq!(Owner::try_from("IDLE".to_string()), Ok(Owner::Idle));
        assert_eq!(
            Owner::try_from("P1".to_string()),
            Ok(Owner::Process(ProcessId::from_index(0)))
        );
        assert!(Owner::try_from("idle".to_string()).is_err());
    }

    #[test]
    fn test_slice_duration() {
        let s = ExecutionSlice::new(ProcessId::from_index(0), 2, 7);
        assert_eq!(s.duration(), 5);
        assert_eq!(GanttSegment::from(s).duration(), 5);
        assert!(ExecutionSlice::idle(0, 1).owner.is_idle());
    }
}
