//! Pure REST client for the review authenticity detector service.
//!
//! A minimal client with no domain logic. The detector exposes a single
//! endpoint, `POST {base}/predict`, which takes a review comment and returns
//! four independent probabilities in [0, 1]:
//!
//! ```json
//! { "comment": "..." }
//! ```
//!
//! ```json
//! { "bot_prob": 0.1, "spam_prob": 0.0, "inept_prob": 0.2, "llm_prob": 0.9 }
//! ```
//!
//! Each call is a single synchronous request with a bounded timeout and no
//! automatic retry: an unscored review must fail its ingestion, not be
//! rescored out of band.
//!
//! # Example
//!
//! ```rust,ignore
//! use detector_client::DetectorClient;
//!
//! let client = DetectorClient::from_env()?;
//! let prediction = client.predict("Great coffee, rude staff.").await?;
//! println!("bot probability: {}", prediction.bot_prob);
//! ```

pub mod error;

pub use error::{DetectorError, Result};

use reqwest::Client;
use serde::{Deserialize, Serialize};
use std::time::Duration;
use tracing::{debug, warn};

/// Default detector endpoint when `DETECTOR_URL` is not set.
pub const DEFAULT_BASE_URL: &str = "http://localhost:8000";

/// Default per-request timeout in seconds.
pub const DEFAULT_TIMEOUT_SECS: u64 = 10;

/// One detector verdict for a single review comment.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Prediction {
    pub bot_prob: f64,
    pub spam_prob: f64,
    pub inept_prob: f64,
    pub llm_prob: f64,
}

#[derive(Serialize)]
struct PredictRequest<'a> {
    comment: &'a str,
}

/// Pure detector API client.
#[derive(Clone)]
pub struct DetectorClient {
    http_client: Client,
    base_url: String,
}

impl DetectorClient {
    /// Create a new client with the default request timeout.
    pub fn new(base_url: impl Into<String>) -> Result<Self> {
        Self::with_timeout(base_url, Duration::from_secs(DEFAULT_TIMEOUT_SECS))
    }

    /// Create a new client with an explicit request timeout.
    pub fn with_timeout(base_url: impl Into<String>, timeout: Duration) -> Result<Self> {
        let http_client = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| DetectorError::Config(format!("failed to build HTTP client: {}", e)))?;

        Ok(Self {
            http_client,
            base_url: base_url.into(),
        })
    }

    /// Create from environment: `DETECTOR_URL` and `DETECTOR_TIMEOUT_SECS`,
    /// both optional.
    pub fn from_env() -> Result<Self> {
        let base_url =
            std::env::var("DETECTOR_URL").unwrap_or_else(|_| DEFAULT_BASE_URL.to_string());
        let timeout_secs = match std::env::var("DETECTOR_TIMEOUT_SECS") {
            Ok(raw) => raw.parse::<u64>().map_err(|_| {
                DetectorError::Config("DETECTOR_TIMEOUT_SECS must be a number".into())
            })?,
            Err(_) => DEFAULT_TIMEOUT_SECS,
        };
        Self::with_timeout(base_url, Duration::from_secs(timeout_secs))
    }

    /// Set a custom base URL (for staging environments, proxies, etc.).
    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    /// Get the base URL.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Score one review comment.
    ///
    /// Returns the detector's four probabilities as-is; range validation is
    /// the caller's concern.
    pub async fn predict(&self, comment: &str) -> Result<Prediction> {
        let start = std::time::Instant::now();

        let response = self
            .http_client
            .post(format!("{}/predict", self.base_url))
            .json(&PredictRequest { comment })
            .send()
            .await
            .map_err(|e| {
                warn!(error = %e, "Detector request failed");
                DetectorError::Network(e.to_string())
            })?;

        let status = response.status();
        if !status.is_success() {
            let error_text = response.text().await.unwrap_or_default();
            warn!(status = %status, error = %error_text, "Detector API error");
            return Err(DetectorError::Api(format!(
                "Detector API error: {}",
                error_text
            )));
        }

        let prediction: Prediction = response
            .json()
            .await
            .map_err(|e| DetectorError::Parse(e.to_string()))?;

        debug!(
            duration_ms = start.elapsed().as_millis(),
            "Detector prediction"
        );

        Ok(prediction)
    }
}
