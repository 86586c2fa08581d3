use clap::{Parser, Subcommand};

use crate::config::SessionConfig;

const VERSION: &str = concat!(
    env!("CARGO_PKG_VERSION"),
    " (",
    env!("GIT_SHA"),
    ", ",
    env!("BUILD_DATE"),
    ")"
);

#[derive(Parser, Debug)]
#[command(name = "staged-player", version = VERSION)]
pub struct Args {
    #[command(subcommand)]
    pub cmd: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Set up the mock player for a source and play it
    Play {
        /// Source identifier, e.g. a file name
        source: String,

        /// Decoder argument string (may start with '-')
        #[arg(long = "args", default_value = "", allow_hyphen_values = true)]
        arguments: String,

        /// Flag set; values <= 0 are ignored. Omit to skip the flags step entirely
        #[arg(long, allow_negative_numbers = true)]
        flags: Option<i32>,
    },

    /// Print the setup state machine and exit
    States,
}

impl Command {
    /// Session settings for `play`; `None` for other commands.
    pub fn session_config(&self) -> Option<SessionConfig> {
        match self {
            Command::Play {
                source,
                arguments,
                flags,
            } => Some(SessionConfig {
                source: source.clone(),
                arguments: arguments.clone(),
                flags: *flags,
            }),
            Command::States => None,
        }
    }
}
