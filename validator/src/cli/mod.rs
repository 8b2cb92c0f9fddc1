//! CLI module for bank-validator
//!
//! Provides command-line interface for running and checking the validator.

pub mod check_config;
pub mod serve;

use clap::{Parser, Subcommand};

/// Bank account validator - fans a validation request out to data providers
#[derive(Parser, Debug)]
#[command(name = "bank-validator")]
#[command(version, about, long_about = None)]
#[command(after_help = r#"ENVIRONMENT VARIABLES:
    BANK_VALIDATOR_PROVIDERS            Provider list as YAML (deprecated: PROVIDERS)
    BANK_VALIDATOR_PROVIDERS_FILE       Path to a provider list YAML file
    BANK_VALIDATOR_HOST                 Bind address (default: 0.0.0.0)
    BANK_VALIDATOR_PORT                 Listen port (default: 8080)
    BANK_VALIDATOR_PROVIDER_TIMEOUT_MS  Per-provider timeout (default: 1000)
    BANK_VALIDATOR_REQUEST_TIMEOUT_MS   Whole-request budget (default: 2000)
    BANK_VALIDATOR_LOG_LEVEL            Log level (default: info)
    BANK_VALIDATOR_LOG_FORMAT           Log format: text or json (default: text)
"#)]
pub struct Cli {
    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Start the validator server
    Serve(serve::ServeArgs),
    /// Load and validate the configuration, then print the provider list
    CheckConfig(check_config::CheckConfigArgs),
}
