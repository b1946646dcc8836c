//! Error types exposed by the GitHub profile lookup layer.

use thiserror::Error;

/// Errors surfaced while validating input or communicating with GitHub.
///
/// A missing profile is not an error: the lookup reports it as the
/// not-found branch of [`crate::ProfileQueryResult`].
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ProfileError {
    /// The username does not look like a GitHub login.
    #[error("invalid GitHub username: {username:?}")]
    InvalidUsername {
        /// The rejected input, after trimming.
        username: String,
    },

    /// The configured API base URL could not be parsed.
    #[error("API base URL is invalid: {0}")]
    InvalidUrl(String),

    /// GitHub answered with a status other than success or profile 404.
    #[error("GitHub API error: {message}")]
    Api {
        /// Response detail from GitHub describing the failure.
        message: String,
    },

    /// Networking failed while calling GitHub.
    #[error("network error talking to GitHub: {message}")]
    Network {
        /// Transport-level error detail.
        message: String,
    },

    /// Writing output or reading the prompt failed.
    #[error("I/O error: {message}")]
    Io {
        /// Error detail from the underlying I/O operation.
        message: String,
    },

    /// Configuration could not be loaded.
    #[error("configuration error: {message}")]
    Configuration {
        /// Details about the configuration failure.
        message: String,
    },
}
