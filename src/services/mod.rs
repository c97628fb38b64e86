//! Services coordinating the prediction workflow between routes, storage and
//! the prediction service.

use thiserror::Error;

use crate::forms::FormError;
use crate::repository::errors::RepositoryError;
use crate::services::client::PredictError;

pub mod client;
pub mod prediction;

#[derive(Debug, Error)]
pub enum ServiceError {
    #[error("form error: {0}")]
    Form(FormError),

    #[error("repository error: {0}")]
    Repository(RepositoryError),

    #[error("prediction error: {0}")]
    Prediction(PredictError),
}

pub type ServiceResult<T> = Result<T, ServiceError>;
