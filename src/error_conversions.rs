//! Error conversion glue between the form, repository, client and service
//! layers.
//!
//! Lower layers stay unaware of [`ServiceError`]; the conversions live here so
//! services can propagate any of them with `?`.

use crate::forms::FormError;
use crate::repository::errors::RepositoryError;
use crate::services::ServiceError;
use crate::services::client::PredictError;

impl From<FormError> for ServiceError {
    fn from(val: FormError) -> Self {
        ServiceError::Form(val)
    }
}

impl From<RepositoryError> for ServiceError {
    fn from(val: RepositoryError) -> Self {
        ServiceError::Repository(val)
    }
}

impl From<PredictError> for ServiceError {
    fn from(val: PredictError) -> Self {
        ServiceError::Prediction(val)
    }
}
