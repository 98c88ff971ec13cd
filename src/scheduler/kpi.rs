//! Simulation metrics (KPIs).
//!
//! Computes per-process rows from a compacted timeline and its input
//! processes, and aggregate scheduling indicators from the finished
//! [`SimulationResult`].
//!
//! # Metrics
//!
//! | Metric | Definition |
//! |--------|-----------|
//! | Completion (ft) | Stop of the process's last segment |
//! | Turnaround (tat) | ft - arrival |
//! | Waiting (wat) | tat - burst |
//! | Makespan | Latest completion time |
//! | CPU Utilization | Busy time / makespan |
//! | Throughput | Processes completed per time unit |
//!
//! # Reference
//! Silberschatz et al. (2018), "Operating System Concepts", Ch. 5.2:
//! Scheduling Criteria

use crate::models::{GanttSegment, ProcessResult, SimulationResult};
use crate::registry::ProcessRegistry;

/// Builds one metrics row per process, in process id order.
///
/// A process's completion time is the stop of its last segment.
/// Processes that never appear in the timeline get no row.
pub fn process_results(registry: &ProcessRegistry, segments: &[GanttSegment]) -> Vec<ProcessResult> {
    let mut completion: Vec<Option<i64>> = vec![None; registry.len()];

    for segment in segments {
        if let Some(id) = segment.owner.process() {
            if let Some(ft) = completion.get_mut(id.index()) {
                *ft = Some(ft.map_or(segment.stop, |t| t.max(segment.stop)));
            }
        }
    }

    registry
        .iter()
        .filter_map(|p| {
            completion[p.id.index()].map(|ft| ProcessResult::new(p.id, p.arrival, p.burst, ft))
        })
        .collect()
}

/// Aggregate performance indicators of one simulation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SimulationKpi {
    /// Latest completion time.
    pub makespan: i64,
    /// Total idle time inside `[0, makespan)`.
    pub idle_time: i64,
    /// Fraction of `[0, makespan)` the CPU was busy (0.0..1.0).
    pub cpu_utilization: f64,
    /// Completed processes per time unit.
    pub throughput: f64,
}

impl SimulationKpi {
    /// Derives the indicators from a finished result.
    pub fn calculate(result: &SimulationResult) -> Self {
        let makespan = result.makespan();
        let throughput = if makespan > 0 {
            result.processes.len() as f64 / makespan as f64
        } else {
            0.0
        };

        Self {
            makespan,
            idle_time: result.idle_time(),
            cpu_utilization: result.cpu_utilization(),
            throughput,
        }
    }
}
