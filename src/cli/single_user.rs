//! One-shot lookup for a username supplied through configuration.

use std::io::{self, Write};

use ghwelcome::{
    ApiBase, OctocrabProfileGateway, ProfileError, ProfileGateway, WelcomeConfig, greet,
    greet_unknown_login,
};

/// Looks up the configured username and prints the report to stdout.
///
/// # Errors
///
/// Returns [`ProfileError::Configuration`] when the username is missing and
/// propagates lookup failures. A malformed login is reported as an unknown
/// user.
pub async fn run(config: &WelcomeConfig) -> Result<(), ProfileError> {
    let mut stdout = io::stdout().lock();
    run_with_gateway_builder(config, OctocrabProfileGateway::for_api_base, &mut stdout).await
}

/// Runs the one-shot lookup using a custom gateway builder.
///
/// This function is exposed for testing with mock gateways.
///
/// # Errors
///
/// Returns an error when the username is missing, the gateway cannot be
/// built, or the lookup fails.
pub async fn run_with_gateway_builder<G, F, W>(
    config: &WelcomeConfig,
    build_gateway: F,
    writer: &mut W,
) -> Result<(), ProfileError>
where
    G: ProfileGateway,
    F: FnOnce(&ApiBase) -> Result<G, ProfileError>,
    W: Write,
{
    let username = match config.require_username() {
        Ok(username) => username,
        Err(ProfileError::InvalidUsername { username }) => {
            tracing::debug!(%username, "login cannot belong to an account, skipping lookup");
            return greet_unknown_login(&username, writer);
        }
        Err(error) => return Err(error),
    };
    let api_base = config.api_base()?;

    let gateway = build_gateway(&api_base)?;
    greet(&gateway, &username, writer).await?;
    Ok(())
}
