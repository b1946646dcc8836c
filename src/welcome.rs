//! End-to-end greeting for a single username.

use std::io::{self, Write};

use crate::github::error::ProfileError;
use crate::github::gateway::ProfileGateway;
use crate::github::lookup::ProfileLookup;
use crate::github::username::Username;
use crate::report::{ProfileQueryResult, UNKNOWN_USER_GREETING, write_report, write_search_line};

/// Prints the search line, runs the lookup, and prints the matching report.
///
/// The search line is written before any request is made, so it appears even
/// when the lookup later fails.
///
/// # Errors
///
/// Returns [`ProfileError::Io`] when writing fails and propagates lookup
/// failures from the gateway.
pub async fn greet<G, W>(
    gateway: &G,
    username: &Username,
    writer: &mut W,
) -> Result<ProfileQueryResult, ProfileError>
where
    G: ProfileGateway,
    W: Write,
{
    write_search_line(writer, username.as_str()).map_err(|error| io_error(&error))?;
    writer.flush().map_err(|error| io_error(&error))?;

    let result = ProfileLookup::new(gateway).query(username).await?;

    write_report(writer, &result).map_err(|error| io_error(&error))?;
    Ok(result)
}

/// Prints the search line and the unknown-user greeting for a login that no
/// account can have, without contacting the API.
///
/// # Errors
///
/// Returns [`ProfileError::Io`] when writing fails.
pub fn greet_unknown_login<W: Write>(login: &str, writer: &mut W) -> Result<(), ProfileError> {
    write_search_line(writer, login).map_err(|error| io_error(&error))?;
    writeln!(writer, "{UNKNOWN_USER_GREETING}").map_err(|error| io_error(&error))?;
    writer.flush().map_err(|error| io_error(&error))
}

/// Converts an I/O error to a [`ProfileError::Io`].
#[must_use]
pub fn io_error(error: &io::Error) -> ProfileError {
    ProfileError::Io {
        message: error.to_string(),
    }
}
