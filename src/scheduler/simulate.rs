//! Simulation facade.
//!
//! # Pipeline
//!
//! 1. Validate algorithm parameters (quantum, priorities).
//! 2. Build the process registry (validates lengths, bursts, arrivals).
//! 3. Run the selected strategy to get the raw trace.
//! 4. Compact the trace into Gantt segments.
//! 5. Compute per-process metrics and averages.
//!
//! Nothing runs until every check has passed, so an error never comes
//! with a partial result.

use tracing::{debug, instrument};

use super::compact::compact;
use super::kpi::{process_results, SimulationKpi};
use crate::algorithms;
use crate::error::SimulationError;
use crate::models::{Algorithm, ExecutionSlice, SimulationResult};
use crate::registry::ProcessRegistry;
use crate::validation::validate_configuration;

/// A simulation result together with the raw trace it was compacted from.
#[derive(Debug, Clone, PartialEq)]
pub struct SimulationTrace {
    /// Compacted timeline and metrics.
    pub result: SimulationResult,
    /// Raw slices as emitted by the strategy.
    pub slices: Vec<ExecutionSlice>,
    /// Aggregate indicators derived from `result`.
    pub kpi: SimulationKpi,
}

/// Simulates `algorithm` over the given processes.
///
/// `quantum` is only read for RR. `priorities` is only read for NPP and
/// PP; absent or empty means all zero.
///
/// # Errors
/// - [`SimulationError::Configuration`]: RR without a positive quantum, or
///   NPP/PP with a priority list of the wrong length.
/// - [`SimulationError::InvalidInput`]: mismatched lengths, non-positive
///   bursts, negative arrivals.
///
/// # Example
///
/// ```
/// use cpu_schedule::models::Algorithm;
/// use cpu_schedule::scheduler::simulate;
///
/// let result = simulate(Algorithm::Fcfs, &[0, 1, 2], &[5, 3, 1], None, None).unwrap();
/// assert_eq!(result.completion_times(), vec![5, 8, 9]);
/// assert_eq!(result.waiting_times(), vec![0, 4, 6]);
/// ```
pub fn simulate(
    algorithm: Algorithm,
    arrivals: &[i64],
    bursts: &[i64],
    quantum: Option<i64>,
    priorities: Option<&[i32]>,
) -> Result<SimulationResult, SimulationError> {
    simulate_traced(algorithm, arrivals, bursts, quantum, priorities).map(|t| t.result)
}

/// Like [`simulate`], but also returns the raw trace and KPIs.
#[instrument(level = "debug", skip(arrivals, bursts, priorities), fields(processes = arrivals.len()))]
pub fn simulate_traced(
    algorithm: Algorithm,
    arrivals: &[i64],
    bursts: &[i64],
    quantum: Option<i64>,
    priorities: Option<&[i32]>,
) -> Result<SimulationTrace, SimulationError> {
    let quantum = validate_configuration(algorithm, quantum, priorities, arrivals.len())?;
    let priorities = if algorithm.uses_priorities() { priorities } else { None };

    let mut registry = ProcessRegistry::new(arrivals, bursts, priorities)?;
    if registry.is_empty() {
        debug!("no processes; returning empty result");
        let result = SimulationResult::empty(algorithm);
        return Ok(SimulationTrace {
            kpi: SimulationKpi::calculate(&result),
            result,
            slices: Vec::new(),
        });
    }

    let slices = algorithms::execute(algorithm, &mut registry, quantum)?;
    let segments = compact(&slices);
    let processes = process_results(&registry, &segments);
    let result = SimulationResult::new(algorithm, segments, processes);
    let kpi = SimulationKpi::calculate(&result);

    debug!(
        segments = result.segments.len(),
        makespan = kpi.makespan,
        avg_tat = result.average_turnaround,
        avg_wat = result.average_waiting,
        "simulation complete"
    );

    Ok(SimulationTrace { result, slices, kpi })
}
