//! Ghwelcome CLI entrypoint.

use std::io::{self, Write};
use std::process::ExitCode;

use ghwelcome::{OperationMode, ProfileError, WelcomeConfig};
use ortho_config::OrthoConfig;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

mod cli;

/// Environment variable holding the `tracing` filter directives.
const LOG_ENV: &str = "GHWELCOME_LOG";

#[tokio::main]
async fn main() -> ExitCode {
    init_tracing();

    match run().await {
        Ok(()) => ExitCode::SUCCESS,
        Err(error) => {
            if writeln!(io::stderr().lock(), "{error}").is_err() {
                return ExitCode::FAILURE;
            }
            ExitCode::FAILURE
        }
    }
}

/// Routes logs to stderr so stdout carries only the report.
fn init_tracing() {
    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(io::stderr))
        .with(EnvFilter::from_env(LOG_ENV))
        .init();
}

async fn run() -> Result<(), ProfileError> {
    let config = load_config()?;

    match config.operation_mode() {
        OperationMode::SingleUser => cli::single_user::run(&config).await,
        OperationMode::Interactive => cli::interactive::run(&config).await,
    }
}

/// Loads configuration from CLI, environment, and files.
///
/// # Errors
///
/// Returns [`ProfileError::Configuration`] when ortho-config fails to parse
/// arguments or load configuration files.
fn load_config() -> Result<WelcomeConfig, ProfileError> {
    WelcomeConfig::load().map_err(|error| ProfileError::Configuration {
        message: error.to_string(),
    })
}
