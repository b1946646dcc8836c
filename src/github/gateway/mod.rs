//! Gateways for loading GitHub profiles through Octocrab.
//!
//! The trait keeps the lookup state machine independent of HTTP so it can be
//! exercised with mocks, while the Octocrab implementation performs the real
//! requests.

mod client;
mod error_mapping;
mod http_utils;
mod profile;

pub use profile::OctocrabProfileGateway;

use async_trait::async_trait;

use crate::github::error::ProfileError;
use crate::github::models::{RepositorySummary, UserProfile};
use crate::github::username::Username;

/// Gateway that can load a user profile and its repositories.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ProfileGateway: Send + Sync {
    /// Fetch the profile, returning `None` when GitHub reports 404.
    async fn user_profile(&self, username: &Username)
    -> Result<Option<UserProfile>, ProfileError>;

    /// Fetch the first page of the user's public repositories in API order.
    async fn user_repositories(
        &self,
        username: &Username,
    ) -> Result<Vec<RepositorySummary>, ProfileError>;
}
