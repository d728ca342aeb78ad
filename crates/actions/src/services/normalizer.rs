//! Text normalizer service client.
//!
//! Wraps `POST {base}/normalize`: a deterministic rewrite (lowercasing,
//! whitespace collapse, date reformatting to ISO). Used by the reschedule
//! handler to clean up the date slot before persisting it.

use serde::{Deserialize, Serialize};
use tracing::instrument;

use super::{REQUEST_TIMEOUT, ServiceError};

#[derive(Debug, Serialize)]
struct NormalizeRequest<'a> {
    text: &'a str,
}

#[derive(Debug, Deserialize)]
struct NormalizeResponse {
    normalized: String,
}

/// Client for the text normalization service.
#[derive(Debug, Clone)]
pub struct NormalizerClient {
    client: reqwest::Client,
    base_url: String,
}

impl NormalizerClient {
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

    /// Normalize a piece of text.
    ///
    /// # Errors
    ///
    /// Returns [`ServiceError`] on transport failure or a non-success
    /// response. Never retried; callers fall back to the raw text.
    #[instrument(skip(self, text), fields(text_len = text.len()))]
    pub async fn normalize(&self, text: &str) -> Result<String, ServiceError> {
        let response = self
            .client
            .post(format!("{}/normalize", self.base_url))
            .json(&NormalizeRequest { text })
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

        let body: NormalizeResponse = response.json().await?;
        Ok(body.normalized)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn response_deserializes() {
        let json = r#"{"normalized":"2026-09-01"}"#;
        let body: NormalizeResponse = serde_json::from_str(json).unwrap();
        assert_eq!(body.normalized, "2026-09-01");
    }
}
