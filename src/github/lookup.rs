//! High-level profile lookup facade used by the CLI.

use super::error::ProfileError;
use super::gateway::ProfileGateway;
use super::username::Username;
use crate::report::ProfileQueryResult;

/// Runs the profile lookup state machine against a gateway.
///
/// The repository list is only requested once the profile is known to exist.
pub struct ProfileLookup<'client, Gateway>
where
    Gateway: ProfileGateway,
{
    client: &'client Gateway,
}

impl<'client, Gateway> ProfileLookup<'client, Gateway>
where
    Gateway: ProfileGateway,
{
    /// Create a new lookup facade using the provided gateway.
    #[must_use]
    pub const fn new(client: &'client Gateway) -> Self {
        Self { client }
    }

    /// Query the profile and, when it exists, its repositories.
    ///
    /// # Errors
    ///
    /// Propagates any gateway failure other than the profile 404, including
    /// network problems and unexpected HTTP statuses.
    pub async fn query(&self, username: &Username) -> Result<ProfileQueryResult, ProfileError> {
        let Some(profile) = self.client.user_profile(username).await? else {
            tracing::debug!(%username, "profile not found");
            return Ok(ProfileQueryResult::NotFound {
                username: username.clone(),
            });
        };

        let repositories = self.client.user_repositories(username).await?;
        tracing::debug!(
            %username,
            repositories = repositories.len(),
            "profile found"
        );
        Ok(ProfileQueryResult::found(profile, repositories))
    }
}
