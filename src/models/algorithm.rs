//! Scheduling discipline identifiers.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// The closed set of supported scheduling disciplines.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Algorithm {
    /// First-Come-First-Served.
    Fcfs,
    /// Shortest-Job-First, non-preemptive.
    Sjf,
    /// Round-Robin with a fixed time quantum.
    Rr,
    /// Priority, non-preemptive.
    Npp,
    /// Priority, preemptive.
    Pp,
}

impl Algorithm {
    /// Every discipline, in display order.
    pub const ALL: [Algorithm; 5] = [
        Algorithm::Fcfs,
        Algorithm::Sjf,
        Algorithm::Rr,
        Algorithm::Npp,
        Algorithm::Pp,
    ];

    /// Short identifier (e.g., "FCFS").
    pub fn name(self) -> &'static str {
        match self {
            Algorithm::Fcfs => "FCFS",
            Algorithm::Sjf => "SJF",
            Algorithm::Rr => "RR",
            Algorithm::Npp => "NPP",
            Algorithm::Pp => "PP",
        }
    }

    /// Human-readable name.
    pub fn description(self) -> &'static str {
        match self {
            Algorithm::Fcfs => "First Come First Serve",
            Algorithm::Sjf => "Shortest Job First",
            Algorithm::Rr => "Round Robin",
            Algorithm::Npp => "Non-Preemptive Priority",
            Algorithm::Pp => "Preemptive Priority",
        }
    }

    /// Whether a time quantum is required.
    #[inline]
    pub fn requires_quantum(self) -> bool {
        matches!(self, Algorithm::Rr)
    }

    /// Whether process priorities affect the outcome.
    #[inline]
    pub fn uses_priorities(self) -> bool {
        matches!(self, Algorithm::Npp | Algorithm::Pp)
    }

    /// Whether a running process can be interrupted before completion.
    #[inline]
    pub fn is_preemptive(self) -> bool {
        matches!(self, Algorithm::Rr | Algorithm::Pp)
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Error returned when parsing an unknown algorithm identifier.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown scheduling algorithm '{0}' (expected one of FCFS, SJF, RR, NPP, PP)")]
pub struct UnknownAlgorithm(pub String);

impl FromStr for Algorithm {
    type Err = UnknownAlgorithm;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        Algorithm::ALL
            .into_iter()
            .find(|a| a.name().eq_ignore_ascii_case(trimmed))
            .ok_or_else(|| UnknownAlgorithm(trimmed.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_case_insensitive() {
        assert_eq!("fcfs".parse::<Algorithm>(), Ok(Algorithm::Fcfs));
        assert_eq!(" RR ".parse::<Algorithm>(), Ok(Algorithm::Rr));
        assert_eq!("Pp".parse::<Algorithm>(), Ok(Algorithm::Pp));
    }

    #[test]
    fn test_parse_unknown() {
        let err = "srtf".parse::<Algorithm>().unwrap_err();
        assert_eq!(err, UnknownAlgorithm("srtf".into()));
        assert!(err.to_string().contains("srtf"));
    }

    #[test]
    fn test_display_round_trips_parse() {
        for a in Algorithm::ALL {
            assert_eq!(a.to_string().parse::<Algorithm>(), Ok(a));
        }
    }

    #[test]
    fn test_parameter_requirements() {
        assert!(Algorithm::Rr.requires_quantum());
        assert!(!Algorithm::Sjf.requires_quantum());
        assert!(Algorithm::Npp.uses_priorities());
        assert!(Algorithm::Pp.uses_priorities());
        assert!(!Algorithm::Fcfs.uses_priorities());
        assert!(Algorithm::Pp.is_preemptive());
        assert!(!Algorithm::Npp.is_preemptive());
    }
}
