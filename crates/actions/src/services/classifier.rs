//! Intent classifier service client.
//!
//! Wraps `POST {base}/predict`: text in, `(intent, confidence)` out. The
//! model behind the endpoint is out of scope here.

use serde::{Deserialize, Serialize};
use tracing::instrument;

use super::{REQUEST_TIMEOUT, ServiceError};

/// A predicted intent label with the model's confidence.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct IntentPrediction {
    /// Intent label (e.g. "check_order_status").
    pub intent: String,
    /// Model confidence in `[0, 1]`.
    pub confidence: f64,
}

#[derive(Debug, Serialize)]
struct PredictRequest<'a> {
    text: &'a str,
}

/// Client for the intent classification service.
#[derive(Debug, Clone)]
pub struct ClassifierClient {
    client: reqwest::Client,
    base_url: String,
}

impl ClassifierClient {
    /// Create a client for the service at `base_url` (no trailing slash).
    ///
    /// # Errors
    ///
    /// Returns [`ServiceError::Http`] if the HTTP client fails to build.
    pub fn new(base_url: &str) -> Result<Self, ServiceError> {
        let client = reqwest::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()?;
        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    /// Classify a piece of user text.
    ///
    /// # Errors
    ///
    /// Returns [`ServiceError`] on transport failure or a non-success
    /// response. Never retried.
    #[instrument(skip(self, text), fields(text_len = text.len()))]
    pub async fn predict(&self, text: &str) -> Result<IntentPrediction, ServiceError> {
        let response = self
            .client
            .post(format!("{}/predict", self.base_url))
            .json(&PredictRequest { text })
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let message = response.text().await.unwrap_or_default();
            return Err(ServiceError::Api {
                status: status.as_u16(),
                message,
            });
        }

        Ok(response.json().await?)
    }
}
