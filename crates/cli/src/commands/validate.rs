//! Validate a resolver vocabulary file before deploying it.

use thiserror::Error;
use tracing::{error, info};

use parcelbot_actions::resolver::{CatalogTerms, TermsError};

/// Errors that can occur during validation.
#[derive(Debug, Error)]
pub enum ValidateError {
    /// The file could not be loaded at all.
    #[error(transparent)]
    Terms(#[from] TermsError),

    /// The vocabulary loaded but has problems.
    #[error("vocabulary has {0} problem(s)")]
    Invalid(usize),
}

/// Load and validate a vocabulary file (or the built-in default).
///
/// # Errors
///
/// Returns [`ValidateError`] if the file cannot be loaded or the
/// vocabulary reports problems; each problem is logged individually.
pub fn terms_file(path: Option<&str>) -> Result<(), ValidateError> {
    let terms = match path {
        Some(p) => CatalogTerms::from_file(p)?,
        None => CatalogTerms::default(),
    };

    let problems = terms.problems();
    if problems.is_empty() {
        info!(
            aliases = terms.item_aliases.len(),
            codes = terms.item_codes.len(),
            phrases = terms.general_phrases.len(),
            "vocabulary is valid"
        );
        return Ok(());
    }

    for problem in &problems {
        error!("{problem}");
    }
    Err(ValidateError::Invalid(problems.len()))
}
