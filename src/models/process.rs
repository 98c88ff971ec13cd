//! Process (job) model.
//!
//! A process is a single CPU-bound job known before the simulation starts.
//! Its identity is its position in the caller's input, which also serves as
//! the final tie-breaker in every scheduling discipline.
//!
//! # Reference
//! Silberschatz et al. (2018), "Operating System Concepts", Ch. 5

use serde::{Deserialize, Serialize};
use std::fmt;

/// Identity of a process: its 0-based position in the input sequence.
///
/// Displayed and serialized as the 1-based label used in results tables
/// (`P1`, `P2`, …). Ordering follows input order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(into = "String", try_from = "String")]
pub struct ProcessId(usize);

impl ProcessId {
    /// Creates an id from a 0-based input index.
    #[inline]
    pub fn from_index(index: usize) -> Self {
        Self(index)
    }

    /// 0-based input index.
    #[inline]
    pub fn index(self) -> usize {
        self.0
    }

    /// Label as shown to users (`P{index + 1}`).
    pub fn label(self) -> String {
        self.to_string()
    }
}

impl fmt::Display for ProcessId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "P{}", self.0 + 1)
    }
}

impl From<ProcessId> for String {
    fn from(id: ProcessId) -> Self {
        id.to_string()
    }
}

impl TryFrom<String> for ProcessId {
    type Error = String;

    fn try_from(label: String) -> Result<Self, Self::Error> {
        label
            .strip_prefix('P')
            .and_then(|n| n.parse::<usize>().ok())
            .filter(|&n| n >= 1)
            .map(|n| Self(n - 1))
            .ok_or_else(|| format!("invalid process label '{label}'"))
    }
}

/// A process to be scheduled.
///
/// `remaining` is the only field mutated during a simulation; strategies
/// decrement it as they emit execution slices.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Process {
    /// Stable identity (input position).
    pub id: ProcessId,
    /// Instant at which the process becomes eligible to run.
    pub arrival: i64,
    /// Total CPU time required.
    pub burst: i64,
    /// Scheduling priority (lower = more important).
    pub priority: i32,
    /// CPU time still owed. Starts at `burst`, reaches 0 on completion.
    pub remaining: i64,
}

impl Process {
    /// Creates a process with default priority 0.
    pub fn new(id: ProcessId, arrival: i64, burst: i64) -> Self {
        Self {
            id,
            arrival,
            burst,
            priority: 0,
            remaining: burst,
        }
    }

    /// Sets the priority.
    pub fn with_priority(mut self, priority: i32) -> Self {
        self.priority = priority;
        self
    }

    /// Whether the process has arrived at time `t`.
    #[inline]
    pub fn has_arrived(&self, t: i64) -> bool {
        t >= self.arrival
    }

    /// Whether all of the burst has been executed.
    #[inline]
    pub fn is_complete(&self) -> bool {
        self.remaining == 0
    }

    /// Whether the process is arrived and still owes CPU time at `t`.
    #[inline]
    pub fn is_ready(&self, t: i64) -> bool {
        self.has_arrived(t) && !self.is_complete()
    }

    /// Consumes up to `amount` units of remaining work.
    ///
    /// Returns the amount actually executed; `remaining` never goes negative.
    pub fn execute(&mut self, amount: i64) -> i64 {
        let ran = amount.clamp(0, self.remaining);
        self.remaining -= ran;
        ran
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_process_id_label() {
        assert_eq!(ProcessId::from_index(0).label(), "P1");
        assert_eq!(ProcessId::from_index(9).to_string(), "P10");
        assert_eq!(ProcessId::from_index(4).index(), 4);
    }

    #[test]
    fn test_process_id_parse() {
        assert_eq!(
            ProcessId::try_from("P3".to_string()),
            Ok(ProcessId::from_index(2))
        );
        assert!(ProcessId::try_from("P0".to_string()).is_err());
        assert!(ProcessId::try_from("X1".to_string()).is_err());
        assert!(ProcessId::try_from("P".to_string()).is_err());
    }

    #[test]
    fn test_process_ordering_follows_input() {
        assert!(ProcessId::from_index(0) < ProcessId::from_index(1));
    }

    #[test]
    fn test_process_builder() {
        let p = Process::new(ProcessId::from_index(0), 3, 5).with_priority(2);
        assert_eq!(p.arrival, 3);
        assert_eq!(p.burst, 5);
        assert_eq!(p.remaining, 5);
        assert_eq!(p.priority, 2);
        assert!(!p.has_arrived(2));
        assert!(p.has_arrived(3));
    }

    #[test]
    fn test_process_execute_clamps() {
        let mut p = Process::new(ProcessId::from_index(0), 0, 3);
        assert_eq!(p.execute(2), 2);
        assert_eq!(p.remaining, 1);
        assert_eq!(p.execute(5), 1);
        assert_eq!(p.remaining, 0);
        assert!(p.is_complete());
        assert!(!p.is_ready(10));
        assert_eq!(p.execute(1), 0);
    }
}
