//! Ghwelcome library crate greeting GitHub users by their public profile.
//!
//! The library wraps Octocrab to look up a login, decides which of the three
//! report branches applies (unknown user, user without repositories, user
//! with repositories), and renders the fixed text templates the CLI prints.

pub mod config;
pub mod github;
pub mod report;
pub mod welcome;

pub use config::{OperationMode, WelcomeConfig};
pub use github::{
    ApiBase, OctocrabProfileGateway, ProfileError, ProfileGateway, ProfileLookup,
    RepositorySummary, UserProfile, Username,
};
pub use report::{ProfileQueryResult, write_report, write_search_line};
pub use welcome::{greet, greet_unknown_login};
