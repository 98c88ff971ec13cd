//! Owned simulation requests.
//!
//! [`SimulationRequest`] is the serde-deserializable form of a
//! [`simulate`] call, built either with the builder methods, from a JSON
//! document, or from the whitespace-separated text fields of an input form.

use serde::{Deserialize, Serialize};

use crate::error::SimulationError;
use crate::models::{Algorithm, SimulationResult};
use crate::scheduler::{simulate, simulate_traced, SimulationTrace};

/// Input container for one simulation.
///
/// # Example
///
/// ```
/// use cpu_schedule::models::Algorithm;
/// use cpu_schedule::SimulationRequest;
///
/// let request = SimulationRequest::new(Algorithm::Rr, vec![0, 1, 2], vec![4, 3, 3])
///     .with_quantum(2);
/// let result = request.run().unwrap();
/// assert_eq!(result.completion_times(), vec![8, 9, 10]);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SimulationRequest {
    /// Scheduling discipline.
    pub algorithm: Algorithm,
    /// Arrival time per process, in input order.
    pub arrivals: Vec<i64>,
    /// Burst time per process, in input order.
    pub bursts: Vec<i64>,
    /// Time quantum (RR only).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub quantum: Option<i64>,
    /// Priority per process (NPP/PP only). Empty = all zero.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub priorities: Vec<i32>,
}

impl SimulationRequest {
    /// Creates a request without quantum or priorities.
    pub fn new(algorithm: Algorithm, arrivals: Vec<i64>, bursts: Vec<i64>) -> Self {
        Self {
            algorithm,
            arrivals,
            bursts,
            quantum: None,
            priorities: Vec::new(),
        }
    }

    /// Sets the time quantum.
    pub fn with_quantum(mut self, quantum: i64) -> Self {
        self.quantum = Some(quantum);
        self
    }

    /// Sets process priorities.
    pub fn with_priorities(mut self, priorities: Vec<i32>) -> Self {
        self.priorities = priorities;
        self
    }

    /// Builds a request from whitespace-separated text fields.
    ///
    /// `quantum` is parsed only for RR, `priorities` only for NPP and PP;
    /// a blank field leaves the parameter unset.
    ///
    /// # Errors
    /// [`SimulationError::UnknownAlgorithm`] or
    /// [`SimulationError::InvalidNumber`] for the first token that does not
    /// parse.
    pub fn from_fields(
        algorithm: &str,
        arrivals: &str,
        bursts: &str,
        quantum: &str,
        priorities: &str,
    ) -> Result<Self, SimulationError> {
        let algorithm: Algorithm = algorithm.parse()?;
        let mut request = Self::new(
            algorithm,
            parse_list("arrivals", arrivals)?,
            parse_list("bursts", bursts)?,
        );

        if algorithm.requires_quantum() {
            if let Some(token) = quantum.split_whitespace().next() {
                request.quantum = Some(parse_token("quantum", token)?);
            }
        }
        if algorithm.uses_priorities() {
            request.priorities = parse_list("priorities", priorities)?;
        }

        Ok(request)
    }

    fn priorities(&self) -> Option<&[i32]> {
        Some(self.priorities.as_slice()).filter(|p| !p.is_empty())
    }

    /// Runs the simulation.
    pub fn run(&self) -> Result<SimulationResult, SimulationError> {
        simulate(
            self.algorithm,
            &self.arrivals,
            &self.bursts,
            self.quantum,
            self.priorities(),
        )
    }

    /// Runs the simulation and keeps the raw trace.
    pub fn run_traced(&self) -> Result<SimulationTrace, SimulationError> {
        simulate_traced(
            self.algorithm,
            &self.arrivals,
            &self.bursts,
            self.quantum,
            self.priorities(),
        )
    }
}

fn parse_list<T: std::str::FromStr>(field: &'static str, text: &str) -> Result<Vec<T>, SimulationError> {
    text.split_whitespace()
        .map(|token| parse_token(field, token))
        .collect()
}

fn parse_token<T: std::str::FromStr>(field: &'static str, token: &str) -> Result<T, SimulationError> {
    token.parse().map_err(|_| SimulationError::InvalidNumber {
        field,
        token: token.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_builder() {
        let req = SimulationRequest::new(Algorithm::Pp, vec![0, 1], vec![5, 2])
            .with_priorities(vec![2, 1])
            .with_quantum(3);
        assert_eq!(req.quantum, Some(3));
        assert_eq!(req.priorities, vec![2, 1]);
        assert_eq!(req.run().unwrap().completion_times(), vec![7, 3]);
    }

    #[test]
    fn test_from_fields() {
        let req = SimulationRequest::from_fields("rr", " 0 1 2 ", "4\t3 3", "2", "9 9 9").unwrap();
        assert_eq!(req.algorithm, Algorithm::Rr);
        assert_eq!(req.arrivals, vec![0, 1, 2]);
        assert_eq!(req.bursts, vec![4, 3, 3]);
        assert_eq!(req.quantum, Some(2));
        assert!(req.priorities.is_empty());
    }

    #[test]
    fn test_from_fields_blank_priorities() {
        let req = SimulationRequest::from_fields("NPP", "0 0", "3 1", "", "   ").unwrap();
        assert!(req.priorities.is_empty());
        assert_eq!(req.quantum, None);
        let r = req.run().unwrap();
        // All priorities zero: ties break by arrival, then id.
        assert_eq!(r.completion_times(), vec![3, 4]);
    }

    #[test]
    fn test_from_fields_invalid_number() {
        let err = SimulationRequest::from_fields("FCFS", "0 x", "1 2", "", "").unwrap_err();
        assert_eq!(
            err,
            SimulationError::InvalidNumber {
                field: "arrivals",
                token: "x".into()
            }
        );

        let err = SimulationRequest::from_fields("RR", "0", "1", "two", "").unwrap_err();
        assert!(matches!(err, SimulationError::InvalidNumber { field: "quantum", .. }));
    }

    #[test]
    fn test_from_fields_unknown_algorithm() {
        let err = SimulationRequest::from_fields("MLFQ", "0", "1", "", "").unwrap_err();
        assert!(matches!(err, SimulationError::UnknownAlgorithm(_)));
    }

    #[test]
    fn test_rr_blank_quantum_fails_on_run() {
        let req = SimulationRequest::from_fields("RR", "0 1", "2 2", "", "").unwrap();
        assert!(req.run().unwrap_err().is_configuration());
    }

    #[test]
    fn test_run_traced_keeps_slices() {
        let req = SimulationRequest::new(Algorithm::Rr, vec![0], vec![3]).with_quantum(1);
        let t = req.run_traced().unwrap();
        assert_eq!(t.slices.len(), 3);
        assert_eq!(t.result.segments.len(), 1);
    }
}
