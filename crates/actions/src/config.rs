//! Action server configuration loaded from environment variables.
//!
//! # Environment Variables
//!
//! All variables are optional; the server runs out of the box against a
//! local `data/` directory.
//!
//! - `ACTIONS_HOST` - Bind address (default: 127.0.0.1)
//! - `ACTIONS_PORT` - Listen port (default: 5055, the conventional
//!   action-server port)
//! - `DATA_DIR` - Directory holding `orders.csv` and `inventory.csv`
//!   (default: `data`)
//! - `CATALOG_TERMS_FILE` - YAML vocabulary for the item resolver; the
//!   built-in vocabulary is used when unset
//! - `NORMALIZER_URL` - Base URL of the text normalizer service; date
//!   normalization on reschedule is skipped when unset
//! - `CLASSIFIER_URL` - Base URL of the intent classifier service (used
//!   by the CLI diagnostic command)

use std::net::{IpAddr, SocketAddr};
use std::path::PathBuf;

use thiserror::Error;

const DEFAULT_DATA_DIR: &str = "data";

/// Configuration errors that can occur during loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid environment variable {0}: {1}")]
    InvalidEnvVar(String, String),
}

/// Action server configuration.
#[derive(Debug, Clone)]
pub struct ActionsConfig {
    /// IP address to bind the server to.
    pub host: IpAddr,
    /// Port to listen on.
    pub port: u16,
    /// Path of the orders CSV file.
    pub orders_path: PathBuf,
    /// Path of the inventory CSV file.
    pub inventory_path: PathBuf,
    /// Optional path of the resolver vocabulary YAML.
    pub terms_path: Option<PathBuf>,
    /// Optional base URL of the normalizer service.
    pub normalizer_url: Option<String>,
    /// Optional base URL of the classifier service.
    pub classifier_url: Option<String>,
}

impl ActionsConfig {
    /// Load configuration from environment variables.
    ///
    /// Calls `dotenvy::dotenv()` to load from `.env` file if present.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if a variable is present but unparseable.
    pub fn from_env() -> Result<Self, ConfigError> {
        // Load .env file if present (ignore errors if not found)
        let _ = dotenvy::dotenv();

        let host = get_env_or_default("ACTIONS_HOST", "127.0.0.1")
            .parse::<IpAddr>()
            .map_err(|e| ConfigError::InvalidEnvVar("ACTIONS_HOST".to_string(), e.to_string()))?;
        let port = get_env_or_default("ACTIONS_PORT", "5055")
            .parse::<u16>()
            .map_err(|e| ConfigError::InvalidEnvVar("ACTIONS_PORT".to_string(), e.to_string()))?;

        let data_dir = PathBuf::from(get_env_or_default("DATA_DIR", DEFAULT_DATA_DIR));

        Ok(Self {
            host,
            port,
            orders_path: data_dir.join("orders.csv"),
            inventory_path: data_dir.join("inventory.csv"),
            terms_path: get_optional_env("CATALOG_TERMS_FILE").map(PathBuf::from),
            normalizer_url: get_optional_env("NORMALIZER_URL"),
            classifier_url: get_optional_env("CLASSIFIER_URL"),
        })
    }

    /// Returns the socket address for binding the server.
    #[must_use]
    pub const fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }
}

/// Get an optional environment variable.
fn get_optional_env(key: &str) -> Option<String> {
    std::env::var(key).ok()
}

/// Get an environment variable with a default value.
fn get_env_or_default(key: &str, default: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| default.to_string())
}
