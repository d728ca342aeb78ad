//! Parcelbot CLI - data seeding and diagnostics.
//!
//! # Usage
//!
//! ```bash
//! # Write the sample orders/inventory datasets into ./data
//! parcelbot-cli seed
//!
//! # Check a resolver vocabulary file before deploying it
//! parcelbot-cli validate -t config/catalog_terms.yaml
//!
//! # Smoke-test the intent classifier service
//! parcelbot-cli intent "where is my order"
//! ```
//!
//! # Commands
//!
//! - `seed` - Write sample CSV datasets
//! - `validate` - Validate a resolver vocabulary YAML file
//! - `intent` - Query the classifier service and print the prediction

#![cfg_attr(not(test), forbid(unsafe_code))]

use clap::{Parser, Subcommand};

mod commands;

#[derive(Parser)]
#[command(name = "parcelbot-cli")]
#[command(author, version, about = "Parcelbot CLI tools")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Write sample orders/inventory CSV datasets
    Seed {
        /// Directory to write the datasets into
        #[arg(short, long, default_value = "data")]
        data_dir: String,

        /// Overwrite existing files
        #[arg(long)]
        force: bool,
    },
    /// Validate a resolver vocabulary YAML file
    Validate {
        /// Path to the vocabulary file (built-in vocabulary when omitted)
        #[arg(short, long)]
        terms: Option<String>,
    },
    /// Query the intent classifier service
    Intent {
        /// Text to classify
        text: String,

        /// Classifier base URL (falls back to CLASSIFIER_URL)
        #[arg(short, long)]
        url: Option<String>,
    },
}

#[tokio::main]
async fn main() {
    // Initialize tracing
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();

    let result: Result<(), Box<dyn std::error::Error>> = run(cli).await;

    if let Err(e) = result {
        tracing::error!("Command failed: {e}");
        std::process::exit(1);
    }
}

async fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    match cli.command {
        Commands::Seed { data_dir, force } => commands::seed::datasets(&data_dir, force)?,
        Commands::Validate { terms } => commands::validate::terms_file(terms.as_deref())?,
        Commands::Intent { text, url } => commands::intent::predict(&text, url.as_deref()).await?,
    }
    Ok(())
}
