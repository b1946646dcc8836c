//! Octocrab-backed profile gateway.

use async_trait::async_trait;
use http::{StatusCode, Uri};
use octocrab::Octocrab;

use crate::github::error::ProfileError;
use crate::github::models::{ApiRepository, ApiUser, RepositorySummary, UserProfile};
use crate::github::username::{ApiBase, Username};

use super::ProfileGateway;
use super::client::build_octocrab_client;
use super::error_mapping::{map_http_error, map_octocrab_error};
use super::http_utils::extract_github_message;

/// Octocrab-backed gateway issuing anonymous requests.
pub struct OctocrabProfileGateway {
    client: Octocrab,
}

impl OctocrabProfileGateway {
    /// Creates a new gateway from an Octocrab client.
    #[must_use]
    pub const fn new(client: Octocrab) -> Self {
        Self { client }
    }

    /// Builds an Octocrab client rooted at `api_base`.
    ///
    /// # Errors
    ///
    /// Returns `ProfileError::InvalidUrl` when the base URI cannot be parsed or
    /// `ProfileError::Api` when Octocrab fails to construct a client.
    pub fn for_api_base(api_base: &ApiBase) -> Result<Self, ProfileError> {
        let octocrab = build_octocrab_client(api_base)?;
        Ok(Self::new(octocrab))
    }
}

#[async_trait]
impl ProfileGateway for OctocrabProfileGateway {
    async fn user_profile(
        &self,
        username: &Username,
    ) -> Result<Option<UserProfile>, ProfileError> {
        let uri: Uri = username
            .user_path()
            .parse::<Uri>()
            .map_err(|error| ProfileError::InvalidUrl(error.to_string()))?;

        tracing::debug!(%username, "requesting user profile");
        let response = self
            .client
            ._get(uri)
            .await
            .map_err(|error| map_octocrab_error("user profile", &error))?;

        let status = response.status();
        tracing::debug!(%username, %status, "user profile response received");

        let body = self
            .client
            .body_to_string(response)
            .await
            .map_err(|error| map_octocrab_error("user profile body", &error));

        match status {
            StatusCode::NOT_FOUND => Ok(None),
            _ if status.is_success() => {
                let api: ApiUser =
                    serde_json::from_str(&body?).map_err(|error| ProfileError::Api {
                        message: format!("user profile deserialisation failed: {error}"),
                    })?;
                Ok(Some(api.into_profile(username.clone())))
            }
            _ => Err(map_http_error(
                "user profile",
                status,
                body.ok().as_deref().and_then(extract_github_message),
            )),
        }
    }

    async fn user_repositories(
        &self,
        username: &Username,
    ) -> Result<Vec<RepositorySummary>, ProfileError> {
        tracing::debug!(%username, "requesting repository list");
        self.client
            .get::<Vec<ApiRepository>, _, _>(username.repositories_path(), None::<&()>)
            .await
            .map(|repositories| {
                repositories
                    .into_iter()
                    .map(ApiRepository::into)
                    .collect()
            })
            .map_err(|error| map_octocrab_error("repository list", &error))
    }
}

#[cfg(test)]
mod tests;
