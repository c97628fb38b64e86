//! Configuration model loaded from external sources.

use std::time::Duration;

use serde::Deserialize;
use validator::Validate;

fn default_max_sessions() -> usize {
    10_000
}

#[derive(Clone, Debug, Deserialize, Validate)]
/// Basic configuration shared across handlers.
pub struct ServerConfig {
    pub address: String,
    pub port: u16,
    pub templates_dir: String,
    /// Signing key for session and flash cookies.
    #[validate(length(min = 64))]
    pub secret: String,
    /// Absolute URL of the prediction service `/predict` endpoint.
    #[validate(url)]
    pub predict_url: String,
    /// Overall timeout for one prediction request. No timeout when unset.
    pub predict_timeout_secs: Option<u64>,
    /// Upper bound on form sessions held in memory.
    #[serde(default = "default_max_sessions")]
    #[validate(range(min = 1))]
    pub max_sessions: usize,
    #[serde(default)]
    pub cookie_secure: bool,
}

impl ServerConfig {
    pub fn predict_timeout(&self) -> Option<Duration> {
        self.predict_timeout_secs.map(Duration::from_secs)
    }
}
