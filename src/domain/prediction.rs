//! Result returned by the prediction service.

use std::fmt::{Display, Formatter};

use serde::{Deserialize, Serialize};

use crate::domain::types::Probability;

/// Categorical label, reported either as text (`"yes"`) or as a number.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum PredictionLabel {
    Text(String),
    Number(serde_json::Number),
}

impl Display for PredictionLabel {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            PredictionLabel::Text(text) => f.write_str(text),
            PredictionLabel::Number(number) => write!(f, "{number}"),
        }
    }
}

/// Label and probability for one submitted record.
///
/// Only ever built by deserializing a service response.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Prediction {
    pub prediction: PredictionLabel,
    pub probability: Probability,
}

impl Prediction {
    /// Probability as displayed to the user, e.g. `87.34%`.
    pub fn probability_percent(&self) -> String {
        self.probability.as_percent()
    }
}
