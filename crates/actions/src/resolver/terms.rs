//! Externally editable vocabulary for the item resolver.
//!
//! The source assistant hardcoded its synonym and phrase lists; here they
//! live in a YAML file so catalog growth does not require code changes.
//!
//! ## YAML Format
//!
//! ```yaml
//! item_aliases:
//!   - mobile
//!   - laptop
//!   - phone
//! item_codes:
//!   - item1
//!   - item2
//! general_phrases:
//!   - "check stock"
//!   - "inventory"
//! alias_targets:
//!   phone: mobile
//! ```

use std::collections::HashMap;
use std::path::Path;

use serde::Deserialize;
use thiserror::Error;

/// Errors that can occur while loading a terms file.
#[derive(Debug, Error)]
pub enum TermsError {
    /// File could not be read.
    #[error("failed to read {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// YAML did not parse into the expected shape.
    #[error("failed to parse {path}: {source}")]
    Parse {
        path: String,
        #[source]
        source: serde_yaml::Error,
    },
}

/// Vocabulary driving intent disambiguation and fuzzy item matching.
///
/// All tokens are matched lowercased; entries here should already be
/// lowercase. List order matters: free-text scanning takes the first
/// alias or code found, in the order listed.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CatalogTerms {
    /// Item display-name tokens and their known variants (typos included).
    pub item_aliases: Vec<String>,
    /// Catalog code tokens (e.g. "item1".."item5").
    pub item_codes: Vec<String>,
    /// Closed list of phrases that mean "list the whole inventory".
    /// Matched by substring containment, not edit distance, so unlisted
    /// typos fall through to specific resolution.
    pub general_phrases: Vec<String>,
    /// Canonical redirects: a search term on the left resolves to the
    /// entry whose display name exactly equals the value on the right.
    #[serde(default)]
    pub alias_targets: HashMap<String, String>,
}

impl Default for CatalogTerms {
    /// The built-in vocabulary, matching the seeded catalog. Used when no
    /// terms file is configured.
    fn default() -> Self {
        Self {
            item_aliases: [
                "mobile", "laptop", "watch", "charger", "ear-phone", "earphone", "phone",
            ]
            .map(String::from)
            .to_vec(),
            item_codes: ["item1", "item2", "item3", "item4", "item5"]
                .map(String::from)
                .to_vec(),
            general_phrases: [
                "check stock",
                "stock",
                "inventory",
                "check inventory",
                "show me the inventory",
                "what items are available",
                "is there any stock left",
                // Known typo seen in real traffic.
                "cheeck stock",
            ]
            .map(String::from)
            .to_vec(),
            alias_targets: HashMap::from([("phone".to_string(), "mobile".to_string())]),
        }
    }
}

impl CatalogTerms {
    /// Load terms from a YAML file.
    ///
    /// # Errors
    ///
    /// Returns [`TermsError`] if the file cannot be read or parsed.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, TermsError> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path).map_err(|source| TermsError::Io {
            path: path.display().to_string(),
            source,
        })?;
        serde_yaml::from_str(&contents).map_err(|source| TermsError::Parse {
            path: path.display().to_string(),
            source,
        })
    }

    /// Validation problems in this vocabulary, empty when it is sound.
    ///
    /// Reported problems: empty token lists, tokens that are not
    /// lowercase/trimmed, duplicates across the alias and code lists, and
    /// alias redirects whose source token is not in the alias list.
    #[must_use]
    pub fn problems(&self) -> Vec<String> {
        let mut problems = Vec::new();

        if self.item_aliases.is_empty() {
            problems.push("item_aliases is empty".to_string());
        }
        if self.general_phrases.is_empty() {
            problems.push("general_phrases is empty".to_string());
        }

        let mut seen = std::collections::HashSet::new();
        for token in self.item_aliases.iter().chain(&self.item_codes) {
            if token.trim().is_empty() {
                problems.push("blank token in item_aliases/item_codes".to_string());
                continue;
            }
            if *token != token.trim().to_lowercase() {
                problems.push(format!("token '{token}' is not lowercase/trimmed"));
            }
            if !seen.insert(token.as_str()) {
                problems.push(format!("duplicate token '{token}'"));
            }
        }

        for (source, target) in &self.alias_targets {
            if !self.item_aliases.iter().any(|a| a == source) {
                problems.push(format!(
                    "alias_targets source '{source}' is not listed in item_aliases"
                ));
            }
            if target.trim().is_empty() {
                problems.push(format!("alias_targets entry '{source}' has a blank target"));
            }
        }

        problems
    }
}
