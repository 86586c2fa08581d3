//! The configured media player.
//!
//! A [`MediaPlayer`] only reaches callers through the stage chain in
//! [`crate::builder`], so every public method may assume setup has finished.

use crate::backend::DecoderBackend;

/// Mock media player produced by [`crate::builder::Builder`].
#[derive(Debug)]
pub struct MediaPlayer<B: DecoderBackend> {
    source: String,
    arguments: String,
    flags: Option<u32>,
    ready: bool,
    backend: B,
}

impl<B: DecoderBackend> MediaPlayer<B> {
    /// Empty player; only the builder creates one.
    pub(crate) fn new(backend: B) -> Self {
        Self {
            source: String::new(),
            arguments: String::new(),
            flags: None,
            ready: false,
            backend,
        }
    }

    pub(crate) fn set_source(&mut self, source: String) {
        tracing::debug!(source = %source, "opening source");
        self.backend.open(&source);
        self.source = source;
    }

    pub(crate) fn set_arguments(&mut self, arguments: String) {
        tracing::debug!(arguments = %arguments, "setting arguments");
        self.backend.configure(&arguments);
        self.arguments = arguments;
    }

    /// Record `flags` when positive. Anything else leaves the flag set untouched.
    pub(crate) fn set_flags(&mut self, flags: i32) {
        let Ok(flags) = u32::try_from(flags) else {
            return;
        };
        if flags == 0 {
            return;
        }
        tracing::debug!(flags, "setting flags");
        self.backend.apply_flags(flags);
        self.flags = Some(flags);
    }

    pub(crate) fn finalize(&mut self) {
        tracing::debug!(source = %self.source, "decoding");
        self.backend.decode();
        self.ready = true;
    }

    /// Play the configured source.
    pub fn play(&mut self) {
        tracing::info!(source = %self.source, flags = ?self.flags, "play");
        self.backend.play(&self.source);
    }

    pub fn source(&self) -> &str {
        &self.source
    }

    pub fn arguments(&self) -> &str {
        &self.arguments
    }

    /// Flag set recorded by the optional step, if a positive value was given.
    pub fn flags(&self) -> Option<u32> {
        self.flags
    }

    pub fn is_ready(&self) -> bool {
        self.ready
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }

    /// Consume the player and hand back its backend.
    pub fn into_backend(self) -> B {
        self.backend
    }
}
