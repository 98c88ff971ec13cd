//! Deterministic CPU scheduling simulator.
//!
//! Given process arrival times, burst times and algorithm parameters,
//! computes the exact execution timeline and per-process metrics for the
//! classical single-CPU disciplines.
//!
//! # Modules
//!
//! - **`models`**: Domain types: `Process`, `ExecutionSlice`,
//!   `GanttSegment`, `ProcessResult`, `SimulationResult`, `Algorithm`
//! - **`registry`**: Normalizes raw input arrays into process records
//! - **`validation`**: Input integrity checks (lengths, bursts, parameters)
//! - **`dispatching`**: Selection rules for the non-preemptive disciplines
//! - **`algorithms`**: One strategy per discipline (FCFS, SJF, RR, NPP, PP)
//! - **`scheduler`**: Compaction, KPIs and the `simulate` entry point
//!
//! # Example
//!
//! ```
//! use cpu_schedule::models::Algorithm;
//! use cpu_schedule::simulate;
//!
//! let result = simulate(Algorithm::Pp, &[0, 1], &[5, 2], None, Some(&[2, 1])).unwrap();
//! assert_eq!(result.completion_times(), vec![7, 3]);
//! ```
//!
//! # References
//!
//! - Silberschatz et al. (2018), "Operating System Concepts", Ch. 5
//! - Tanenbaum & Bos (2014), "Modern Operating Systems", Ch. 2.4

pub mod algorithms;
pub mod dispatching;
pub mod error;
pub mod models;
pub mod registry;
pub mod request;
pub mod scheduler;
pub mod validation;

pub use error::SimulationError;
pub use registry::ProcessRegistry;
pub use request::SimulationRequest;
pub use scheduler::{simulate, simulate_traced, SimulationTrace};
