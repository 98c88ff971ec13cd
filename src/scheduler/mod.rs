//! Simulation pipeline: strategy dispatch, compaction and KPIs.
//!
//! [`simulate`] is the single entry point callers need: it validates the
//! request, runs the selected strategy, compacts the trace into Gantt
//! segments, and computes per-process metrics.
//!
//! # KPI
//!
//! `process_results` computes completion, turnaround and waiting time per
//! process. `SimulationKpi` derives makespan, idle time, CPU utilization
//! and throughput from the finished result.
//!
//! # References
//!
//! - Silberschatz et al. (2018), "Operating System Concepts", Ch. 5
//! - Baker & Trietsch (2019), "Principles of Sequencing and Scheduling"

mod compact;
mod kpi;
mod simulate;

pub use compact::compact;
pub use kpi::{process_results, SimulationKpi};
pub use simulate::{simulate, simulate_traced, SimulationTrace};
