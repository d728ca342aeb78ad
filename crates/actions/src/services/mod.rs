//! Thin typed clients for the auxiliary microservices.
//!
//! Both services are black boxes to this crate: the classifier is a
//! trained statistical model behind `POST /predict`, the normalizer a
//! deterministic string rewriter behind `POST /normalize`. Neither call
//! is retried; a failure is reported to the caller, which decides whether
//! to degrade or fall back.

mod classifier;
mod normalizer;

use thiserror::Error;

pub use classifier::{ClassifierClient, IntentPrediction};
pub use normalizer::NormalizerClient;

/// Default request timeout for service calls.
pub(crate) const REQUEST_TIMEOUT: std::time::Duration = std::time::Duration::from_secs(5);

/// Errors that can occur when calling an auxiliary service.
#[derive(Debug, Error)]
pub enum ServiceError {
    /// HTTP transport failure (connection refused, timeout, bad body).
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Service answered with a non-success status.
    #[error("service error: {status} - {message}")]
    Api { status: u16, message: String },
}
