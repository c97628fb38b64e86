//! HTTP client for the external prediction service.

use std::time::Duration;

use reqwest::StatusCode;
use thiserror::Error;

use crate::domain::prediction::Prediction;
use crate::domain::record::Record;

#[derive(Debug, Error)]
pub enum PredictError {
    #[error("transport error: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("service responded with {status}: {body}")]
    Status { status: StatusCode, body: String },

    #[error("unexpected response body: {0}")]
    Decode(#[from] serde_json::Error),
}

/// Performs the prediction exchange for one record.
#[allow(async_fn_in_trait)]
pub trait PredictionClient {
    async fn predict(&self, record: &Record) -> Result<Prediction, PredictError>;
}

/// Sends records as JSON to a fixed `/predict` endpoint.
///
/// One request per call; nothing is retried.
#[derive(Clone, Debug)]
pub struct HttpPredictionClient {
    http: reqwest::Client,
    endpoint: String,
}

impl HttpPredictionClient {
    /// Builds a client for `endpoint`, with an optional overall request timeout.
    pub fn new(
        endpoint: impl Into<String>,
        timeout: Option<Duration>,
    ) -> Result<Self, PredictError> {
        let mut builder = reqwest::Client::builder();
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }
        Ok(Self {
            http: builder.build()?,
            endpoint: endpoint.into(),
        })
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

impl PredictionClient for HttpPredictionClient {
    async fn predict(&self, record: &Record) -> Result<Prediction, PredictError> {
        let response = self.http.post(&self.endpoint).json(record).send().await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(PredictError::Status { status, body });
        }

        let body = response.bytes().await?;
        Ok(serde_json::from_slice(&body)?)
    }
}
