//! Error types for simulation requests.
//!
//! Every failure is detected before a strategy runs, so an error never
//! comes with a partial result. Empty input is not an error.

use thiserror::Error;

use crate::models::UnknownAlgorithm;
use crate::validation::{ValidationError, ValidationErrorKind};

/// Why a simulation request was rejected.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum SimulationError {
    /// Process data failed integrity checks (lengths, bursts, arrivals).
    #[error("invalid input: {}", join_messages(.0))]
    InvalidInput(Vec<ValidationError>),

    /// Algorithm parameters are missing or unusable.
    #[error("configuration error: {0}")]
    Configuration(String),

    /// A text field contained a token that is not an integer.
    #[error("invalid number '{token}' in {field}")]
    InvalidNumber {
        /// Field name (e.g., "arrivals").
        field: &'static str,
        /// Offending token.
        token: String,
    },

    /// Algorithm identifier not recognized.
    #[error(transparent)]
    UnknownAlgorithm(#[from] UnknownAlgorithm),
}

impl SimulationError {
    /// Create a configuration error
    #[inline]
    pub fn configuration(msg: impl Into<String>) -> Self {
        Self::Configuration(msg.into())
    }

    /// Validation errors carried by an `InvalidInput` error.
    pub fn validation_errors(&self) -> &[ValidationError] {
        match self {
            Self::InvalidInput(errors) => errors,
            _ => &[],
        }
    }

    /// Whether this error carries a validation error of the given kind.
    pub fn has_kind(&self, kind: ValidationErrorKind) -> bool {
        self.validation_errors().iter().any(|e| e.kind == kind)
    }

    /// Whether this is a configuration error.
    pub fn is_configuration(&self) -> bool {
        matches!(self, Self::Configuration(_))
    }
}

impl From<Vec<ValidationError>> for SimulationError {
    fn from(errors: Vec<ValidationError>) -> Self {
        Self::InvalidInput(errors)
    }
}

fn join_messages(errors: &[ValidationError]) -> String {
    errors
        .iter()
        .map(|e| e.message.as_str())
        .collect::<Vec<_>>()
        .join("; ")
}
