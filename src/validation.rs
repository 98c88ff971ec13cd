//! Input validation for simulation requests.
//!
//! Checks structural integrity of the raw process arrays before any
//! strategy runs. Detects:
//! - Sequences of different lengths
//! - Non-positive burst times
//! - Negative arrival times
//! - Workloads whose last possible completion exceeds `i64::MAX`
//!
//! Algorithm parameters (quantum, priorities) are checked separately by
//! [`validate_configuration`] since their requirements depend on the
//! selected discipline.

use thiserror::Error;

use crate::error::SimulationError;
use crate::models::{Algorithm, ProcessId};

/// Validation result.
pub type ValidationResult = Result<(), Vec<ValidationError>>;

/// A validation error.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("{message}")]
pub struct ValidationError {
    /// Error category.
    pub kind: ValidationErrorKind,
    /// Human-readable description.
    pub message: String,
}

/// Categories of validation errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationErrorKind {
    /// Parallel input sequences have different lengths.
    LengthMismatch,
    /// A burst time is zero or negative.
    NonPositiveBurst,
    /// An arrival time is negative.
    NegativeArrival,
    /// Latest arrival plus total burst does not fit in `i64`.
    TimeOverflow,
}

impl ValidationError {
    fn new(kind: ValidationErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

/// Validates the raw process arrays.
///
/// Checks:
/// 1. `bursts` has the same length as `arrivals`
/// 2. `priorities`, when given and non-empty, has the same length
/// 3. Every burst is positive
/// 4. Every arrival is non-negative
/// 5. `max(arrival) + sum(burst)` fits in `i64`, which bounds every
///    clock value and sum a simulation computes
///
/// Per-process checks only run over the common prefix when lengths differ.
///
/// # Returns
/// `Ok(())` if all checks pass, `Err(errors)` with all detected issues.
pub fn validate_input(arrivals: &[i64], bursts: &[i64], priorities: Option<&[i32]>) -> ValidationResult {
    let mut errors = Vec::new();

    if arrivals.len() != bursts.len() {
        errors.push(ValidationError::new(
            ValidationErrorKind::LengthMismatch,
            format!(
                "Number of arrival times ({}) and burst times ({}) do not match",
                arrivals.len(),
                bursts.len()
            ),
        ));
    }

    if let Some(priorities) = priorities.filter(|p| !p.is_empty()) {
        if priorities.len() != arrivals.len() {
            errors.push(ValidationError::new(
                ValidationErrorKind::LengthMismatch,
                format!(
                    "Number of priorities ({}) and arrival times ({}) do not match",
                    priorities.len(),
                    arrivals.len()
                ),
            ));
        }
    }

    for (index, (&arrival, &burst)) in arrivals.iter().zip(bursts).enumerate() {
        let id = ProcessId::from_index(index);
        if burst <= 0 {
            errors.push(ValidationError::new(
                ValidationErrorKind::NonPositiveBurst,
                format!("Process {id} has non-positive burst time {burst}"),
            ));
        }
        if arrival < 0 {
            errors.push(ValidationError::new(
                ValidationErrorKind::NegativeArrival,
                format!("Process {id} has negative arrival time {arrival}"),
            ));
        }
    }

    let latest_arrival = arrivals.iter().copied().max().unwrap_or(0).max(0);
    let horizon = bursts
        .iter()
        .filter(|&&burst| burst > 0)
        .try_fold(latest_arrival, |acc, &burst| acc.checked_add(burst));
    if horizon.is_none() {
        errors.push(ValidationError::new(
            ValidationErrorKind::TimeOverflow,
            format!("Latest arrival {latest_arrival} plus total burst time overflows the time range"),
        ));
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

/// Validates algorithm parameters for `process_count` processes.
///
/// - RR requires a positive quantum; other disciplines ignore it.
/// - NPP/PP accept absent or empty priorities (all zero), otherwise the
///   list must have one entry per process.
///
/// Returns the quantum to use (`None` for non-RR disciplines).
pub fn validate_configuration(
    algorithm: Algorithm,
    quantum: Option<i64>,
    priorities: Option<&[i32]>,
    process_count: usize,
) -> Result<Option<i64>, SimulationError> {
    let quantum = if algorithm.requires_quantum() {
        match quantum {
            Some(q) if q > 0 => Some(q),
            Some(q) => {
                return Err(SimulationError::configuration(format!(
                    "{algorithm} requires a positive time quantum, got {q}"
                )))
            }
            None => {
                return Err(SimulationError::configuration(format!(
                    "{algorithm} requires a time quantum"
                )))
            }
        }
    } else {
        None
    };

    if algorithm.uses_priorities() {
        if let Some(priorities) = priorities.filter(|p| !p.is_empty()) {
            if priorities.len() != process_count {
                return Err(SimulationError::configuration(format!(
                    "{algorithm} needs one priority per process: got {} for {process_count} processes",
                    priorities.len()
                )));
            }
        }
    }

    Ok(quantum)
}
