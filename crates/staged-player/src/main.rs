//! Staged Player — a mock media player that can only be played once it has been
//! set up in the right order.
//!
//! ## Setup
//! 1. **Open**: record the source identifier.
//! 2. **Arguments**: record the decoder argument string.
//! 3. **Flags** (optional): record a positive flag set; `--flags` omitted skips the step.
//! 4. **Decode**: finish setup and hand back a playable player.
//!
//! Each step is its own type (see `builder`), so the order is checked at compile time.
//! The decode and play steps only print what they would do.
//!
//! ## Modes
//! - `play`: run one setup sequence and play the source.
//! - `states`: print the setup state machine.

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use staged_player::backend::ConsoleBackend;
use staged_player::cli;
use staged_player::runtime;

fn main() -> Result<()> {
    let args = cli::Args::parse();
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("info,staged_player=info")),
        )
        .with_writer(std::io::stderr)
        .init();

    match args.cmd.session_config() {
        Some(config) => {
            runtime::run_play(config, ConsoleBackend::stdout())?;
        }
        None => runtime::list_states()?,
    }

    Ok(())
}
