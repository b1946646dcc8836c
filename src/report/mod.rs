//! Profile query outcomes and the text templates printed for them.
//!
//! Formatting works on a pre-built [`ProfileQueryResult`], so every output
//! branch can be checked without performing HTTP requests.

use std::io::{self, Write};

use crate::github::models::{RepositorySummary, UserProfile};
use crate::github::username::Username;

/// Printed when the profile lookup reports 404.
pub const UNKNOWN_USER_GREETING: &str = "👋 Здравствуйте, неизвестный пользователь!";

/// Printed in place of repository lines when the list is empty.
pub const NO_REPOSITORIES_MESSAGE: &str = "📂 У пользователя нет репозиториев";

/// Literal rendered for a missing bio or location.
pub const MISSING_FIELD: &str = "None";

/// Outcome of a single profile query.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProfileQueryResult {
    /// GitHub has no account with this login.
    NotFound {
        /// The login that was searched for.
        username: Username,
    },
    /// The account exists and owns no public repositories.
    FoundNoRepos {
        /// Profile fields for the account.
        profile: UserProfile,
    },
    /// The account exists and owns at least one public repository.
    FoundWithRepos {
        /// Profile fields for the account.
        profile: UserProfile,
        /// Repositories in the order GitHub returned them.
        repositories: Vec<RepositorySummary>,
    },
}

impl ProfileQueryResult {
    /// Classifies a found profile by whether its repository list is empty.
    #[must_use]
    pub fn found(profile: UserProfile, repositories: Vec<RepositorySummary>) -> Self {
        if repositories.is_empty() {
            Self::FoundNoRepos { profile }
        } else {
            Self::FoundWithRepos {
                profile,
                repositories,
            }
        }
    }

    /// The login the query was made for.
    #[must_use]
    pub const fn username(&self) -> &Username {
        match self {
            Self::NotFound { username } => username,
            Self::FoundNoRepos { profile } | Self::FoundWithRepos { profile, .. } => {
                &profile.username
            }
        }
    }

    /// Whether the account exists.
    #[must_use]
    pub const fn is_found(&self) -> bool {
        !matches!(self, Self::NotFound { .. })
    }

    /// Profile fields, absent for [`Self::NotFound`].
    #[must_use]
    pub const fn profile(&self) -> Option<&UserProfile> {
        match self {
            Self::NotFound { .. } => None,
            Self::FoundNoRepos { profile } | Self::FoundWithRepos { profile, .. } => Some(profile),
        }
    }

    /// Biography, absent when not found or unset.
    #[must_use]
    pub fn bio(&self) -> Option<&str> {
        self.profile().and_then(|profile| profile.bio.as_deref())
    }

    /// Location, absent when not found or unset.
    #[must_use]
    pub fn location(&self) -> Option<&str> {
        self.profile()
            .and_then(|profile| profile.location.as_deref())
    }

    /// Profile link built from the login.
    #[must_use]
    pub fn profile_url(&self) -> String {
        self.username().profile_url()
    }

    /// Repository list, empty unless [`Self::FoundWithRepos`].
    #[must_use]
    pub fn repositories(&self) -> &[RepositorySummary] {
        match self {
            Self::FoundWithRepos { repositories, .. } => repositories,
            Self::NotFound { .. } | Self::FoundNoRepos { .. } => &[],
        }
    }
}

/// Status line printed before the profile lookup starts.
#[must_use]
pub fn search_line(login: &str) -> String {
    format!("🔍 Ищем пользователя {login} на GitHub...")
}

/// Writes the status line announcing the search.
///
/// # Errors
///
/// Propagates any error from the writer.
pub fn write_search_line<W: Write>(writer: &mut W, login: &str) -> io::Result<()> {
    writeln!(writer, "{}", search_line(login))
}

/// Renders the branch-specific lines for a query result.
#[must_use]
pub fn report_lines(result: &ProfileQueryResult) -> Vec<String> {
    let (profile, repositories) = match result {
        ProfileQueryResult::NotFound { .. } => return vec![UNKNOWN_USER_GREETING.to_owned()],
        ProfileQueryResult::FoundNoRepos { profile } => (profile, [].as_slice()),
        ProfileQueryResult::FoundWithRepos {
            profile,
            repositories,
        } => (profile, repositories.as_slice()),
    };

    let mut lines = vec![
        format!("🎉 Приветствуем, {}!", profile.username),
        format!(
            "📝 Биография: {}",
            profile.bio.as_deref().unwrap_or(MISSING_FIELD)
        ),
        format!(
            "📍 Местоположение: {}",
            profile.location.as_deref().unwrap_or(MISSING_FIELD)
        ),
        format!("🔗 Профиль: {}", profile.profile_url()),
    ];

    if repositories.is_empty() {
        lines.push(NO_REPOSITORIES_MESSAGE.to_owned());
    } else {
        lines.extend(
            repositories
                .iter()
                .map(|repository| format!("📂 Репозиторий: {}", repository.name)),
        );
    }

    lines
}

/// Writes the branch-specific lines for a query result.
///
/// # Errors
///
/// Propagates any error from the writer.
pub fn write_report<W: Write>(writer: &mut W, result: &ProfileQueryResult) -> io::Result<()> {
    for line in report_lines(result) {
        writeln!(writer, "{line}")?;
    }
    Ok(())
}
