//! Scheduling domain models.
//!
//! Provides the core data types for representing a CPU scheduling
//! simulation: its input processes, the execution timeline the strategies
//! produce, and the per-process metrics derived from it.
//!
//! # Domain Mappings
//!
//! | cpu-schedule | Textbook term | Results table |
//! |--------------|---------------|---------------|
//! | Process | Job | Process ID row |
//! | ExecutionSlice | Dispatch | (not shown) |
//! | GanttSegment | Gantt bar | Timeline cell |
//! | ProcessResult | Job statistics | Table row |

mod algorithm;
mod process;
mod result;
mod timeline;

pub use algorithm::{Algorithm, UnknownAlgorithm};
pub use process::{Process, ProcessId};
pub use result::{format_average, ProcessResult, SimulationResult};
pub use timeline::{ExecutionSlice, GanttSegment, Owner, IDLE_LABEL};
