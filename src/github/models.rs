//! Data models for GitHub user profiles and repositories.

use serde::Deserialize;

use super::username::Username;

/// Profile fields the report prints.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserProfile {
    /// Login the lookup was made for, as supplied by the caller.
    pub username: Username,
    /// Free-form biography, absent when unset or blank.
    pub bio: Option<String>,
    /// Self-reported location, absent when unset or blank.
    pub location: Option<String>,
}

impl UserProfile {
    /// Profile link derived from the login.
    #[must_use]
    pub fn profile_url(&self) -> String {
        self.username.profile_url()
    }
}

/// Repository entry from the user's repository list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RepositorySummary {
    /// Repository name without the owner prefix.
    pub name: String,
}

#[derive(Debug, Clone, Deserialize)]
pub(crate) struct ApiUser {
    #[serde(default)]
    pub(crate) bio: Option<String>,
    #[serde(default)]
    pub(crate) location: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub(crate) struct ApiRepository {
    pub(crate) name: String,
}

impl ApiUser {
    pub(crate) fn into_profile(self, username: Username) -> UserProfile {
        UserProfile {
            username,
            bio: non_blank(self.bio),
            location: non_blank(self.location),
        }
    }
}

impl From<ApiRepository> for RepositorySummary {
    fn from(value: ApiRepository) -> Self {
        Self { name: value.name }
    }
}

fn non_blank(value: Option<String>) -> Option<String> {
    value.filter(|text| !text.trim().is_empty())
}
