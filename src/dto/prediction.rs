//! DTOs shaped for the prediction form template.

use serde::Serialize;

use crate::domain::field::{FIELDS, FieldDescriptor};
use crate::domain::prediction::Prediction;
use crate::domain::session::FormSession;

/// Fields rendered side by side in one row of the form.
pub const FIELDS_PER_ROW: usize = 2;

/// One form control with its current value.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct FieldView {
    #[serde(flatten)]
    pub field: &'static FieldDescriptor,
    pub value: String,
}

/// Result panel contents.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct PredictionView {
    pub label: String,
    pub probability: String,
}

impl From<&Prediction> for PredictionView {
    fn from(prediction: &Prediction) -> Self {
        Self {
            label: prediction.prediction.to_string(),
            probability: prediction.probability_percent(),
        }
    }
}

/// Data required to render the prediction form page.
#[derive(Debug, Clone, Serialize)]
pub struct FormPageData {
    pub rows: Vec<Vec<FieldView>>,
    pub result: Option<PredictionView>,
    pub awaiting: bool,
}

impl From<&FormSession> for FormPageData {
    fn from(session: &FormSession) -> Self {
        let record = session.record();
        let fields: Vec<FieldView> = FIELDS
            .iter()
            .map(|field| FieldView {
                field,
                value: record.get(field.name).to_string(),
            })
            .collect();
        let rows = fields
            .chunks(FIELDS_PER_ROW)
            .map(<[FieldView]>::to_vec)
            .collect();

        Self {
            rows,
            result: session.result().map(PredictionView::from),
            awaiting: session.is_awaiting(),
        }
    }
}
