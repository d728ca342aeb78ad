//! Smoke-test the intent classifier service.

use thiserror::Error;
use tracing::info;

use parcelbot_actions::services::{ClassifierClient, ServiceError};

/// Errors that can occur while querying the classifier.
#[derive(Debug, Error)]
pub enum IntentError {
    /// No classifier URL given and `CLASSIFIER_URL` is unset.
    #[error("no classifier URL: pass --url or set CLASSIFIER_URL")]
    MissingUrl,

    /// The service call failed.
    #[error(transparent)]
    Service(#[from] ServiceError),
}

/// Classify `text` against the service at `url` (or `CLASSIFIER_URL`).
///
/// # Errors
///
/// Returns [`IntentError`] if no URL is available or the call fails.
pub async fn predict(text: &str, url: Option<&str>) -> Result<(), IntentError> {
    dotenvy::dotenv().ok();

    let base_url = match url {
        Some(u) => u.to_string(),
        None => std::env::var("CLASSIFIER_URL").map_err(|_| IntentError::MissingUrl)?,
    };

    let client = ClassifierClient::new(&base_url)?;
    let prediction = client.predict(text).await?;

    info!(
        intent = %prediction.intent,
        confidence = prediction.confidence,
        "classifier prediction"
    );
    Ok(())
}
