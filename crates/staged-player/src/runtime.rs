//! Session runtime helpers.
//!
//! Drives the builder from a [`SessionConfig`] and prints the setup state machine.

use std::io::{self, Write};

use anyhow::{Context, Result, anyhow};

use crate::backend::DecoderBackend;
use crate::builder::{Builder, SetupState};
use crate::config::SessionConfig;
use crate::player::MediaPlayer;

/// Print the setup state machine to stdout.
pub fn list_states() -> Result<()> {
    let stdout = io::stdout();
    write_states(&mut stdout.lock()).context("write state machine")
}

/// Set up a player for `config`, play it once and return it.
///
/// `flags: None` takes the shortcut past the flags step.
pub fn run_play<B: DecoderBackend>(config: SessionConfig, backend: B) -> Result<MediaPlayer<B>> {
    let source =
        normalize_source(&config.source).ok_or_else(|| anyhow!("source must not be empty"))?;
    tracing::info!(
        source = %source,
        arguments = %config.arguments,
        flags = ?config.flags,
        "starting session"
    );

    let stage = Builder::with_backend(backend)
        .step1(source)
        .step2(config.arguments);
    let mut player = match config.flags {
        Some(flags) => stage.optional_step3(flags).step4(),
        None => stage.skip_optional(),
    };
    player.play();
    Ok(player)
}

fn write_states(out: &mut impl Write) -> io::Result<()> {
    writeln!(out, "initial: {}", SetupState::Created)?;
    for (from, call, to) in SetupState::TRANSITIONS {
        writeln!(out, "{from} --{call}--> {to}")?;
    }
    writeln!(out, "terminal: {}", SetupState::Ready)
}

fn normalize_source(source: &str) -> Option<String> {
    let trimmed = source.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}
