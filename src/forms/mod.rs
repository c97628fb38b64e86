//! Form definitions backing the prediction routes.

use thiserror::Error;

use crate::domain::field::FieldName;

pub mod prediction;

#[derive(Debug, Error, PartialEq, Eq)]
/// Errors that can occur when processing form data.
pub enum FormError {
    #[error("invalid value {value:?} for {field}")]
    InvalidChoice { field: FieldName, value: String },
}
