//! Scheduling strategies, one per discipline.
//!
//! Every strategy consumes a [`ProcessRegistry`], decrements `remaining`
//! as it executes, and returns the raw execution trace: contiguous
//! [`ExecutionSlice`]s from time 0 to the last completion, with idle slices
//! covering every interval where no process is ready.
//!
//! | Discipline | Preemptive | Selection |
//! |------------|-----------|-----------|
//! | FCFS | no | arrival, id |
//! | SJF | no | burst, arrival, id |
//! | RR | yes (quantum) | FIFO queue |
//! | NPP | no | priority, arrival, id |
//! | PP | yes (arrival) | priority, arrival, id |
//!
//! # References
//!
//! - Silberschatz et al. (2018), "Operating System Concepts", Ch. 5
//! - Tanenbaum & Bos (2014), "Modern Operating Systems", Ch. 2.4

mod fcfs;
mod non_preemptive;
mod priority;
mod round_robin;
mod trace;

pub use fcfs::first_come_first_served;
pub use non_preemptive::{run_to_completion, shortest_job_first};
pub use priority::{non_preemptive_priority, preemptive_priority};
pub use round_robin::round_robin;

use tracing::debug;

use crate::error::SimulationError;
use crate::models::{Algorithm, ExecutionSlice};
use crate::registry::ProcessRegistry;

/// Runs the strategy for `algorithm` and returns its raw trace.
///
/// # Errors
/// [`SimulationError::Configuration`] when RR is given no positive quantum.
pub fn execute(
    algorithm: Algorithm,
    registry: &mut ProcessRegistry,
    quantum: Option<i64>,
) -> Result<Vec<ExecutionSlice>, SimulationError> {
    debug!(
        %algorithm,
        discipline = algorithm.description(),
        processes = registry.len(),
        "running strategy"
    );

    let slices = match algorithm {
        Algorithm::Fcfs => first_come_first_served(registry),
        Algorithm::Sjf => shortest_job_first(registry),
        Algorithm::Rr => match quantum {
            Some(q) if q > 0 => round_robin(registry, q),
            _ => {
                return Err(SimulationError::configuration(
                    "RR requires a positive time quantum",
                ))
            }
        },
        Algorithm::Npp => non_preemptive_priority(registry),
        Algorithm::Pp => preemptive_priority(registry),
    };

    debug!(%algorithm, slices = slices.len(), "strategy finished");
    Ok(slices)
}
