//! Simulation output model.
//!
//! A [`SimulationResult`] bundles the compacted Gantt timeline with one
//! [`ProcessResult`] row per process. Rows are ordered by process id so a
//! results table renders identically regardless of execution order.
//!
//! # Metrics
//!
//! | Field | Definition |
//! |-------|-----------|
//! | `ft`  | Completion time (stop of the final slice) |
//! | `tat` | Turnaround time, `ft - at` |
//! | `wat` | Waiting time, `tat - bt` |

use serde::{Deserialize, Serialize};

use super::{Algorithm, GanttSegment, ProcessId};

/// Per-process metrics row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProcessResult {
    /// Process label (`P1`, `P2`, …).
    pub job: String,
    /// Arrival time.
    pub at: i64,
    /// Burst time.
    pub bt: i64,
    /// Finish (completion) time.
    pub ft: i64,
    /// Turnaround time.
    pub tat: i64,
    /// Waiting time.
    pub wat: i64,
}

impl ProcessResult {
    /// Builds a row from arrival, burst and completion time.
    pub fn new(id: ProcessId, at: i64, bt: i64, ft: i64) -> Self {
        let tat = ft - at;
        Self {
            job: id.label(),
            at,
            bt,
            ft,
            tat,
            wat: tat - bt,
        }
    }

    /// Process id parsed back from the label.
    pub fn id(&self) -> Option<ProcessId> {
        ProcessId::try_from(self.job.clone()).ok()
    }
}

/// Combined output of one simulation run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimulationResult {
    /// Discipline that produced this result.
    pub algorithm: Algorithm,
    /// Compacted timeline covering `[0, makespan)`.
    pub segments: Vec<GanttSegment>,
    /// Metrics rows in process id order.
    pub processes: Vec<ProcessResult>,
    /// Mean turnaround time. `None` when there are no processes.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub average_turnaround: Option<f64>,
    /// Mean waiting time. `None` when there are no processes.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub average_waiting: Option<f64>,
}

impl SimulationResult {
    /// Assembles a result and computes the averages over `processes`.
    pub fn new(algorithm: Algorithm, segments: Vec<GanttSegment>, processes: Vec<ProcessResult>) -> Self {
        let average_turnaround = mean(processes.iter().map(|p| p.tat));
        let average_waiting = mean(processes.iter().map(|p| p.wat));
        Self {
            algorithm,
            segments,
            processes,
            average_turnaround,
            average_waiting,
        }
    }

    /// An empty result (no processes, no timeline).
    pub fn empty(algorithm: Algorithm) -> Self {
        Self {
            algorithm,
            segments: Vec::new(),
            processes: Vec::new(),
            average_turnaround: None,
            average_waiting: None,
        }
    }

    /// Whether there are no processes.
    pub fn is_empty(&self) -> bool {
        self.processes.is_empty()
    }

    /// Latest completion time; 0 when empty.
    pub fn makespan(&self) -> i64 {
        self.processes.iter().map(|p| p.ft).max().unwrap_or(0)
    }

    /// Total length of idle segments.
    pub fn idle_time(&self) -> i64 {
        self.segments
            .iter()
            .filter(|s| s.owner.is_idle())
            .map(GanttSegment::duration)
            .sum()
    }

    /// Fraction of the timeline the CPU was busy; 0.0 when empty.
    pub fn cpu_utilization(&self) -> f64 {
        let makespan = self.makespan();
        if makespan <= 0 {
            return 0.0;
        }
        (makespan - self.idle_time()) as f64 / makespan as f64
    }

    /// Metrics row for a process.
    pub fn result_for(&self, id: ProcessId) -> Option<&ProcessResult> {
        self.processes.get(id.index())
    }

    /// Completion times in process id order.
    pub fn completion_times(&self) -> Vec<i64> {
        self.processes.iter().map(|p| p.ft).collect()
    }

    /// Waiting times in process id order.
    pub fn waiting_times(&self) -> Vec<i64> {
        self.processes.iter().map(|p| p.wat).collect()
    }
}

/// Mean in `f64`; the sum is never taken in `i64`.
fn mean(values: impl ExactSizeIterator<Item = i64>) -> Option<f64> {
    let count = values.len();
    if count == 0 {
        return None;
    }
    let total: f64 = values.map(|v| v as f64).sum();
    Some(total / count as f64)
}

/// Formats an average with one decimal place, or `-` when undefined.
pub fn format_average(value: Option<f64>) -> String {
    match value {
        Some(v) => format!("{v:.1}"),
        None => "-".to_string(),
    }
}
