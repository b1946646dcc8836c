//! CLI operation mode handlers.
//!
//! - [`single_user`]: Look up the username given on the command line
//! - [`interactive`]: Prompt for usernames until the user quits
//!
//! Fixed session texts are in [`output`].

pub mod interactive;
pub mod output;
pub mod single_user;
