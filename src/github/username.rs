//! Identity wrappers for profile lookups.

use std::fmt;

use url::Url;

use super::error::ProfileError;

/// Longest login GitHub accepts.
const MAX_USERNAME_LEN: usize = 39;

/// Public web host used to build profile links.
const PROFILE_HOST: &str = "https://github.com";

/// Default REST API root.
pub const DEFAULT_API_BASE: &str = "https://api.github.com";

/// GitHub login validated against the rules GitHub applies at sign-up.
///
/// A login is 1 to 39 ASCII alphanumerics, optionally joined by single
/// hyphens. It may not start or end with a hyphen.
///
/// # Example
///
/// ```
/// use ghwelcome::Username;
///
/// let username = Username::parse("  Grozard ").expect("valid login");
/// assert_eq!(username.as_str(), "Grozard");
/// assert_eq!(username.profile_url(), "https://github.com/Grozard");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Username(String);

impl Username {
    /// Trims and validates a login.
    ///
    /// # Errors
    ///
    /// Returns [`ProfileError::InvalidUsername`] when the trimmed input is
    /// empty, too long, or contains characters GitHub does not allow.
    pub fn parse(input: &str) -> Result<Self, ProfileError> {
        let trimmed = input.trim();
        if is_valid_login(trimmed) {
            Ok(Self(trimmed.to_owned()))
        } else {
            Err(ProfileError::InvalidUsername {
                username: trimmed.to_owned(),
            })
        }
    }

    /// Borrow the login.
    #[must_use]
    pub const fn as_str(&self) -> &str {
        self.0.as_str()
    }

    /// Public profile link, built from the login rather than API fields.
    #[must_use]
    pub fn profile_url(&self) -> String {
        format!("{PROFILE_HOST}/{}", self.0)
    }

    pub(crate) fn user_path(&self) -> String {
        format!("/users/{}", self.0)
    }

    pub(crate) fn repositories_path(&self) -> String {
        format!("/users/{}/repos", self.0)
    }
}

impl fmt::Display for Username {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for Username {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

fn is_valid_login(candidate: &str) -> bool {
    if candidate.is_empty() || candidate.len() > MAX_USERNAME_LEN {
        return false;
    }
    if candidate.starts_with('-') || candidate.ends_with('-') || candidate.contains("--") {
        return false;
    }
    candidate
        .chars()
        .all(|ch| ch.is_ascii_alphanumeric() || ch == '-')
}

/// Root URL of the GitHub REST API.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiBase(Url);

impl ApiBase {
    /// Parses an API root such as `https://api.github.com`.
    ///
    /// # Errors
    ///
    /// Returns [`ProfileError::InvalidUrl`] when the value is not an absolute
    /// HTTP(S) URL.
    pub fn parse(input: &str) -> Result<Self, ProfileError> {
        let parsed =
            Url::parse(input.trim()).map_err(|error| ProfileError::InvalidUrl(error.to_string()))?;

        if !matches!(parsed.scheme(), "http" | "https") {
            return Err(ProfileError::InvalidUrl(format!(
                "unsupported scheme '{}'",
                parsed.scheme()
            )));
        }

        Ok(Self(parsed))
    }

    /// URL as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }
}
