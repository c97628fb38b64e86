//! Strongly-typed value objects used by domain entities.
//!
//! These wrappers enforce basic invariants (known field names, probabilities
//! inside the unit interval) so that once a value reaches the domain layer it
//! can be treated as trusted.
use std::fmt::{Display, Formatter};

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors produced when attempting to construct a constrained value object.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum TypeConstraintError {
    /// Provided name does not belong to the field registry.
    #[error("unknown field: {0}")]
    UnknownField(String),
    /// Provided probability is not a finite number between 0 and 1.
    #[error("probability out of range: {0}")]
    ProbabilityOutOfRange(String),
}

/// Probability reported by the prediction service, always within `[0, 1]`.
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd, Serialize, Deserialize)]
#[serde(try_from = "f64", into = "f64")]
pub struct Probability(f64);

impl Probability {
    /// Creates a probability ensuring it is finite and inside the unit interval.
    pub fn new(value: f64) -> Result<Self, TypeConstraintError> {
        if value.is_finite() && (0.0..=1.0).contains(&value) {
            Ok(Self(value))
        } else {
            Err(TypeConstraintError::ProbabilityOutOfRange(value.to_string()))
        }
    }

    /// Returns the raw `f64` backing this probability.
    pub const fn get(self) -> f64 {
        self.0
    }

    /// Formats the probability as a percentage with two decimal places.
    pub fn as_percent(self) -> String {
        format!("{:.2}%", self.0 * 100.0)
    }
}

impl Display for Probability {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl TryFrom<f64> for Probability {
    type Error = TypeConstraintError;

    fn try_from(value: f64) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Probability> for f64 {
    fn from(value: Probability) -> Self {
        value.0
    }
}
