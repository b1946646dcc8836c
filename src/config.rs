//! Application configuration loaded from CLI, environment, and files.
//!
//! This module provides a unified configuration struct that merges values
//! from command-line arguments, environment variables, and configuration
//! files using ortho-config's layered approach.
//!
//! # Precedence
//!
//! Configuration values are loaded with the following precedence (lowest to
//! highest):
//!
//! 1. **Defaults** – Built-in application defaults
//! 2. **Configuration file** – `.ghwelcome.toml` in current directory, home
//!    directory, or XDG config directory
//! 3. **Environment variables** – `GHWELCOME_USERNAME`, `GHWELCOME_API_BASE`
//! 4. **Command-line arguments** – `--username`/`-u` and `--api-base`
//!
//! # Configuration File
//!
//! ```toml
//! username = "octocat"
//! api_base = "https://api.github.com"
//! ```

use ortho_config::OrthoConfig;
use serde::{Deserialize, Serialize};

use crate::github::error::ProfileError;
use crate::github::username::{ApiBase, DEFAULT_API_BASE, Username};

/// Operation mode determined by configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OperationMode {
    /// Look up the configured username once and exit.
    SingleUser,
    /// Prompt for usernames until the user quits.
    Interactive,
}

/// Application configuration supporting CLI, environment, and file sources.
///
/// # Example
///
/// ```no_run
/// use ghwelcome::WelcomeConfig;
/// use ortho_config::OrthoConfig;
///
/// let config = WelcomeConfig::load().expect("failed to load configuration");
/// let api_base = config.api_base().expect("API base should parse");
/// ```
#[derive(Debug, Clone, Default, Deserialize, Serialize, OrthoConfig)]
#[serde(default)]
#[ortho_config(
    prefix = "GHWELCOME",
    discovery(
        dotfile_name = ".ghwelcome.toml",
        config_file_name = "ghwelcome.toml",
        app_name = "ghwelcome"
    )
)]
pub struct WelcomeConfig {
    /// GitHub login to look up.
    ///
    /// Can be provided via:
    /// - CLI: `--username <LOGIN>` or `-u <LOGIN>`
    /// - Environment: `GHWELCOME_USERNAME`
    /// - Config file: `username = "..."`
    ///
    /// When absent the program prompts interactively.
    #[ortho_config(cli_short = 'u')]
    pub username: Option<String>,

    /// Root URL of the GitHub REST API.
    ///
    /// Can be provided via:
    /// - CLI: `--api-base <URL>`
    /// - Environment: `GHWELCOME_API_BASE`
    /// - Config file: `api_base = "..."`
    pub api_base: Option<String>,
}

impl WelcomeConfig {
    /// Determines the operation mode based on provided configuration.
    #[must_use]
    pub const fn operation_mode(&self) -> OperationMode {
        if self.username.is_some() {
            OperationMode::SingleUser
        } else {
            OperationMode::Interactive
        }
    }

    /// Returns the validated username.
    ///
    /// # Errors
    ///
    /// Returns [`ProfileError::Configuration`] when no username is configured
    /// and [`ProfileError::InvalidUsername`] when it is not a valid login.
    pub fn require_username(&self) -> Result<Username, ProfileError> {
        let raw = self
            .username
            .as_deref()
            .ok_or_else(|| ProfileError::Configuration {
                message: "username is required (use --username or -u)".to_owned(),
            })?;
        Username::parse(raw)
    }

    /// Returns the configured API base, defaulting to the public GitHub API.
    ///
    /// # Errors
    ///
    /// Returns [`ProfileError::InvalidUrl`] when the configured value does
    /// not parse.
    pub fn api_base(&self) -> Result<ApiBase, ProfileError> {
        ApiBase::parse(self.api_base.as_deref().unwrap_or(DEFAULT_API_BASE))
    }
}
