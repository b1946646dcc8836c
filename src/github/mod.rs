//! GitHub profile lookup.
//!
//! This module wraps Octocrab to fetch a user's public profile and repository
//! list. A 404 on the profile is reported as a lookup outcome; every other
//! failure is mapped into [`ProfileError`] so callers never see Octocrab
//! internals.

pub mod error;
pub mod gateway;
pub mod lookup;
pub mod models;
pub mod username;

pub use error::ProfileError;
pub use gateway::{OctocrabProfileGateway, ProfileGateway};
pub use lookup::ProfileLookup;
pub use models::{RepositorySummary, UserProfile};
pub use username::{ApiBase, DEFAULT_API_BASE, Username};

#[cfg(test)]
pub use gateway::MockProfileGateway;
