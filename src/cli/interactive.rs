//! Interactive mode prompting for usernames until the user quits.

use std::collections::HashSet;
use std::io::{self, BufRead, Write};

use ghwelcome::welcome::io_error;
use ghwelcome::{
    ApiBase, OctocrabProfileGateway, ProfileError, ProfileGateway, Username, WelcomeConfig, greet,
};

use super::output::{
    DUPLICATE_NOTICE, EMPTY_INPUT_NOTICE, FAREWELL, INVALID_FORMAT_NOTICE, PROMPT, write_banner,
};

/// Inputs that end the session, compared case-insensitively.
const EXIT_COMMANDS: [&str; 3] = ["exit", "quit", "выход"];

/// Runs the prompt loop against stdin and stdout.
///
/// # Errors
///
/// Returns [`ProfileError::Io`] when the terminal cannot be read or written
/// and propagates lookup failures.
pub async fn run(config: &WelcomeConfig) -> Result<(), ProfileError> {
    let stdin = io::stdin();
    let mut input = stdin.lock();
    let mut stdout = io::stdout().lock();
    run_with_io(
        config,
        OctocrabProfileGateway::for_api_base,
        &mut input,
        &mut stdout,
    )
    .await
}

/// What the loop should do with one line of input.
#[derive(Debug, PartialEq, Eq)]
enum PromptAction {
    Exit,
    Empty,
    Invalid,
    Lookup(Username),
}

fn classify(line: &str) -> PromptAction {
    let trimmed = line.trim();
    let lowered = trimmed.to_lowercase();

    if EXIT_COMMANDS.contains(&lowered.as_str()) {
        PromptAction::Exit
    } else if trimmed.is_empty() {
        PromptAction::Empty
    } else {
        Username::parse(trimmed).map_or(PromptAction::Invalid, PromptAction::Lookup)
    }
}

/// Runs the prompt loop using custom I/O and a custom gateway builder.
///
/// The gateway is built once and reused for every lookup in the session.
///
/// # Errors
///
/// Returns an error when the gateway cannot be built, when reading or writing
/// fails, or when a lookup fails.
pub async fn run_with_io<G, F, R, W>(
    config: &WelcomeConfig,
    build_gateway: F,
    input: &mut R,
    writer: &mut W,
) -> Result<(), ProfileError>
where
    G: ProfileGateway,
    F: FnOnce(&ApiBase) -> Result<G, ProfileError>,
    R: BufRead,
    W: Write,
{
    let api_base = config.api_base()?;
    let gateway = build_gateway(&api_base)?;
    let mut greeted: HashSet<String> = HashSet::new();

    write_banner(writer).map_err(|error| io_error(&error))?;

    loop {
        write!(writer, "\n{PROMPT}").map_err(|error| io_error(&error))?;
        writer.flush().map_err(|error| io_error(&error))?;

        let mut line = String::new();
        let read = input.read_line(&mut line).map_err(|error| io_error(&error))?;
        if read == 0 {
            tracing::debug!("input closed, leaving interactive mode");
            writeln!(writer).map_err(|error| io_error(&error))?;
            return Ok(());
        }

        let username = match classify(&line) {
            PromptAction::Exit => {
                writeln!(writer, "{FAREWELL}").map_err(|error| io_error(&error))?;
                return Ok(());
            }
            PromptAction::Empty => {
                writeln!(writer, "{EMPTY_INPUT_NOTICE}").map_err(|error| io_error(&error))?;
                continue;
            }
            PromptAction::Invalid => {
                writeln!(writer, "{INVALID_FORMAT_NOTICE}").map_err(|error| io_error(&error))?;
                continue;
            }
            PromptAction::Lookup(username) => username,
        };

        let key = username.as_str().to_lowercase();
        if greeted.contains(&key) {
            writeln!(writer, "{DUPLICATE_NOTICE}").map_err(|error| io_error(&error))?;
            continue;
        }

        if greet(&gateway, &username, writer).await?.is_found() {
            greeted.insert(key);
        }
    }
}
