//! Built-in selection rules.
//!
//! # Categories
//!
//! - **Queue**: FCFS (arrival order)
//! - **Time-based**: SJF (shortest remaining burst)
//! - **Priority**: PRIORITY (lowest priority number)
//!
//! # Score Convention
//! Every rule ranks by a primary key where lower wins, then by arrival
//! time, then by input order.
//!
//! # References
//! - Silberschatz et al. (2018), "Operating System Concepts", Ch. 5.3
//! - Haupt (1989), "A Survey of Priority Rule-Based Scheduling"

use std::cmp::Ordering;

use crate::models::{Process, ProcessId};

/// Ordering used when the CPU is handed to one of several ready processes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectionRule {
    /// Earliest arrival first.
    FirstCome,
    /// Smallest remaining burst first.
    ShortestJob,
    /// Lowest priority number first.
    Priority,
}

impl SelectionRule {
    /// Rule name (e.g., "SJF").
    pub fn name(self) -> &'static str {
        match self {
            SelectionRule::FirstCome => "FCFS",
            SelectionRule::ShortestJob => "SJF",
            SelectionRule::Priority => "PRIORITY",
        }
    }

    /// Primary ranking key. Lower = selected first.
    pub fn primary_key(self, process: &Process) -> i64 {
        match self {
            SelectionRule::FirstCome => process.arrival,
            SelectionRule::ShortestJob => process.remaining,
            SelectionRule::Priority => i64::from(process.priority),
        }
    }

    /// Compares two processes: primary key, then arrival, then id.
    pub fn compare(self, a: &Process, b: &Process) -> Ordering {
        self.primary_key(a)
            .cmp(&self.primary_key(b))
            .then_with(|| a.arrival.cmp(&b.arrival))
            .then_with(|| a.id.cmp(&b.id))
    }

    /// Best process that is ready (arrived and incomplete) at `now`.
    pub fn select(self, processes: &[Process], now: i64) -> Option<ProcessId> {
        processes
            .iter()
            .filter(|p| p.is_ready(now))
            .min_by(|a, b| self.compare(a, b))
            .map(|p| p.id)
    }
}
