//! Decoder backends the player calls through.
//!
//! The player never touches files or devices itself. Every side effect of a
//! setup step goes through a [`DecoderBackend`]:
//! - [`ConsoleBackend`] prints one line per call (the default)
//! - [`RecordingBackend`] captures calls in order

use std::io::{self, Write};

/// Side effects performed on behalf of a [`crate::player::MediaPlayer`].
///
/// Calls arrive in setup order: `open`, `configure`, optionally `apply_flags`,
/// `decode`, then any number of `play` calls.
pub trait DecoderBackend {
    /// Open the named source.
    fn open(&mut self, source: &str);
    /// Apply the argument string.
    fn configure(&mut self, arguments: &str);
    /// Apply a positive flag set.
    fn apply_flags(&mut self, flags: u32);
    /// Run the decode step that makes the source playable.
    fn decode(&mut self);
    /// Play the decoded source.
    fn play(&mut self, source: &str);
}

impl<B: DecoderBackend + ?Sized> DecoderBackend for &mut B {
    fn open(&mut self, source: &str) {
        (**self).open(source);
    }

    fn configure(&mut self, arguments: &str) {
        (**self).configure(arguments);
    }

    fn apply_flags(&mut self, flags: u32) {
        (**self).apply_flags(flags);
    }

    fn decode(&mut self) {
        (**self).decode();
    }

    fn play(&mut self, source: &str) {
        (**self).play(source);
    }
}

/// Backend that writes a line per call to `W` (stdout by default).
#[derive(Debug)]
pub struct ConsoleBackend<W: Write = io::Stdout> {
    out: W,
}

impl ConsoleBackend<io::Stdout> {
    /// Console backend writing to the process stdout.
    pub fn stdout() -> Self {
        Self::new(io::stdout())
    }
}

impl Default for ConsoleBackend<io::Stdout> {
    fn default() -> Self {
        Self::stdout()
    }
}

impl<W: Write> ConsoleBackend<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    /// Return the underlying writer.
    pub fn into_inner(self) -> W {
        self.out
    }

    fn emit(&mut self, line: std::fmt::Arguments<'_>) {
        if let Err(e) = writeln!(self.out, "{line}") {
            tracing::warn!("console backend write error: {e}");
        }
    }
}

impl<W: Write> DecoderBackend for ConsoleBackend<W> {
    fn open(&mut self, source: &str) {
        self.emit(format_args!("Opening file: {source}"));
    }

    fn configure(&mut self, arguments: &str) {
        self.emit(format_args!("Setting arguments: {arguments}"));
    }

    fn apply_flags(&mut self, flags: u32) {
        self.emit(format_args!("Setting flags: {flags}"));
    }

    fn decode(&mut self) {
        self.emit(format_args!("Running decoding algorithm"));
    }

    fn play(&mut self, source: &str) {
        self.emit(format_args!("Playing {source}"));
    }
}

/// One call observed by [`RecordingBackend`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum BackendCall {
    Open(String),
    Configure(String),
    ApplyFlags(u32),
    Decode,
    Play(String),
}

/// Backend that records every call instead of producing output.
#[derive(Clone, Debug, Default)]
pub struct RecordingBackend {
    calls: Vec<BackendCall>,
}

impl RecordingBackend {
    pub fn new() -> Self {
        Self::default()
    }

    /// Calls observed so far, oldest first.
    pub fn calls(&self) -> &[BackendCall] {
        &self.calls
    }
}

impl DecoderBackend for RecordingBackend {
    fn open(&mut self, source: &str) {
        self.calls.push(BackendCall::Open(source.to_string()));
    }

    fn configure(&mut self, arguments: &str) {
        self.calls.push(BackendCall::Configure(arguments.to_string()));
    }

    fn apply_flags(&mut self, flags: u32) {
        self.calls.push(BackendCall::ApplyFlags(flags));
    }

    fn decode(&mut self) {
        self.calls.push(BackendCall::Decode);
    }

    fn play(&mut self, source: &str) {
        self.calls.push(BackendCall::Play(source.to_string()));
    }
}
