//! Octocrab client construction helpers for gateway implementations.

use http::Uri;
use http::header::ACCEPT;
use octocrab::Octocrab;
use octocrab::service::middleware::retry::RetryConfig;

use crate::github::error::ProfileError;
use crate::github::username::ApiBase;

use super::error_mapping::map_octocrab_error;

/// Media type GitHub documents for the v3 REST API.
const GITHUB_V3_JSON: &str = "application/vnd.github.v3+json";

/// Builds an anonymous Octocrab client rooted at the given API base.
///
/// Octocrab's retry middleware is switched off so each lookup is exactly one
/// request.
///
/// # Errors
///
/// Returns `ProfileError::InvalidUrl` when the base URI cannot be parsed or
/// `ProfileError::Api` when Octocrab fails to construct a client.
pub(super) fn build_octocrab_client(api_base: &ApiBase) -> Result<Octocrab, ProfileError> {
    let base_uri: Uri = api_base
        .as_str()
        .parse::<Uri>()
        .map_err(|error| ProfileError::InvalidUrl(error.to_string()))?;

    Octocrab::builder()
        .base_uri(base_uri)
        .map_err(|error| ProfileError::Api {
            message: format!("build client failed: {error}"),
        })?
        .add_header(ACCEPT, GITHUB_V3_JSON.to_owned())
        .add_retry_config(RetryConfig::None)
        .build()
        .map_err(|error| map_octocrab_error("build client", &error))
}
