//! Staged builder for [`MediaPlayer`].
//!
//! Setup must happen in a fixed order:
//! 1. `step1`: open the source
//! 2. `step2`: set arguments
//! 3. `optional_step3`: set flags (or `skip_optional` to go straight to a ready player)
//! 4. `step4`: decode and hand back the ready player
//!
//! Each step consumes the current stage and returns the next one, so only the
//! next valid call is ever in scope. Out-of-order calls do not compile:
//!
//! ```compile_fail
//! use staged_player::builder::Builder;
//! // arguments before a source
//! let _ = Builder::new().step2("-f");
//! ```
//!
//! ```compile_fail
//! use staged_player::builder::Builder;
//! // flags without arguments
//! let _ = Builder::new().step1("myfile").optional_step3(1);
//! ```
//!
//! ```compile_fail
//! use staged_player::builder::Builder;
//! // a mandatory step twice
//! let _ = Builder::new().step1("myfile").step2("-f").step2("-v");
//! ```
//!
//! ```compile_fail
//! use staged_player::builder::Builder;
//! // decode before arguments
//! let _ = Builder::new().step1("myfile").step4();
//! ```
//!
//! ```compile_fail
//! use staged_player::builder::Builder;
//! // stages are single use
//! let stage = Builder::new().step1("myfile");
//! let _ = stage.step2("-f");
//! let _ = stage.step2("-v");
//! ```
//!
//! ```compile_fail
//! use staged_player::builder::Builder;
//! // nothing to play before setup finishes
//! Builder::new().step1("myfile").step2("-f").play();
//! ```
//!
//! The only way to a playable instance is the full chain:
//!
//! ```
//! use staged_player::backend::RecordingBackend;
//! use staged_player::builder::Builder;
//!
//! let mut player = Builder::with_backend(RecordingBackend::new())
//!     .step1("myfile")
//!     .step2("-f")
//!     .optional_step3(1)
//!     .step4();
//! assert!(player.is_ready());
//! player.play();
//! ```

use std::fmt;

use crate::backend::{ConsoleBackend, DecoderBackend};
use crate::player::MediaPlayer;

/// Setup progress of a player, as reported by each stage type.
///
/// Purely descriptive: ordering is enforced by the stage types, not by
/// checking this value.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum SetupState {
    Created,
    SourceSet,
    ArgumentsSet,
    FlagsSet,
    FlagsSkipped,
    Ready,
}

impl SetupState {
    /// Every `(from, call, to)` edge the stage chain allows.
    pub const TRANSITIONS: &'static [(SetupState, &'static str, SetupState)] = &[
        (SetupState::Created, "step1", SetupState::SourceSet),
        (SetupState::SourceSet, "step2", SetupState::ArgumentsSet),
        (SetupState::ArgumentsSet, "optional_step3", SetupState::FlagsSet),
        (SetupState::ArgumentsSet, "optional_step3", SetupState::FlagsSkipped),
        (SetupState::ArgumentsSet, "skip_optional", SetupState::Ready),
        (SetupState::FlagsSet, "step4", SetupState::Ready),
        (SetupState::FlagsSkipped, "step4", SetupState::Ready),
    ];

    pub fn is_terminal(self) -> bool {
        self == SetupState::Ready
    }
}

impl fmt::Display for SetupState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            SetupState::Created => "Created",
            SetupState::SourceSet => "SourceSet",
            SetupState::ArgumentsSet => "ArgumentsSet",
            SetupState::FlagsSet => "FlagsSet",
            SetupState::FlagsSkipped => "FlagsSkipped",
            SetupState::Ready => "Ready",
        };
        f.write_str(name)
    }
}

mod sealed {
    pub trait Sealed {}
}

/// Implemented by the builder and every intermediate stage.
pub trait Stage: sealed::Sealed {
    fn state(&self) -> SetupState;
}

/// Entry point of the chain. Owns the empty player until `step1`.
#[derive(Debug)]
pub struct Builder<B: DecoderBackend = ConsoleBackend> {
    player: MediaPlayer<B>,
}

impl Builder<ConsoleBackend> {
    /// Builder whose player prints to stdout.
    pub fn new() -> Self {
        Self::with_backend(ConsoleBackend::stdout())
    }
}

impl Default for Builder<ConsoleBackend> {
    fn default() -> Self {
        Self::new()
    }
}

impl<B: DecoderBackend> Builder<B> {
    pub fn with_backend(backend: B) -> Self {
        Self {
            player: MediaPlayer::new(backend),
        }
    }

    /// Open `source`.
    pub fn step1(self, source: impl Into<String>) -> BuilderStep2<B> {
        let mut player = self.player;
        player.set_source(source.into());
        tracing::debug!(state = %SetupState::SourceSet, "setup transition");
        BuilderStep2 { player }
    }
}

/// Source is set; arguments come next.
#[derive(Debug)]
pub struct BuilderStep2<B: DecoderBackend> {
    player: MediaPlayer<B>,
}

impl<B: DecoderBackend> BuilderStep2<B> {
    pub fn step2(self, arguments: impl Into<String>) -> BuilderStep3<B> {
        let mut player = self.player;
        player.set_arguments(arguments.into());
        tracing::debug!(state = %SetupState::ArgumentsSet, "setup transition");
        BuilderStep3 { player }
    }
}

/// Arguments are set. Flags are optional from here.
#[derive(Debug)]
pub struct BuilderStep3<B: DecoderBackend> {
    player: MediaPlayer<B>,
}

impl<B: DecoderBackend> BuilderStep3<B> {
    /// Apply `flags` if positive. Zero or negative values are ignored.
    pub fn optional_step3(self, flags: i32) -> BuilderStep4<B> {
        let mut player = self.player;
        player.set_flags(flags);
        let next = BuilderStep4 { player };
        tracing::debug!(state = %next.state(), "setup transition");
        next
    }

    /// Skip the flags step and finish setup.
    pub fn skip_optional(self) -> MediaPlayer<B> {
        tracing::debug!("flags step skipped");
        BuilderStep4 {
            player: self.player,
        }
        .step4()
    }
}

/// Optional step handled; only the final step remains.
#[derive(Debug)]
pub struct BuilderStep4<B: DecoderBackend> {
    player: MediaPlayer<B>,
}

impl<B: DecoderBackend> BuilderStep4<B> {
    /// Decode and return the ready player.
    pub fn step4(self) -> MediaPlayer<B> {
        let mut player = self.player;
        player.finalize();
        tracing::debug!(state = %SetupState::Ready, "setup transition");
        player
    }
}

impl<B: DecoderBackend> sealed::Sealed for Builder<B> {}
impl<B: DecoderBackend> sealed::Sealed for BuilderStep2<B> {}
impl<B: DecoderBackend> sealed::Sealed for BuilderStep3<B> {}
impl<B: DecoderBackend> sealed::Sealed for BuilderStep4<B> {}

impl<B: DecoderBackend> Stage for Builder<B> {
    fn state(&self) -> SetupState {
        SetupState::Created
    }
}

impl<B: DecoderBackend> Stage for BuilderStep2<B> {
    fn state(&self) -> SetupState {
        SetupState::SourceSet
    }
}

impl<B: DecoderBackend> Stage for BuilderStep3<B> {
    fn state(&self) -> SetupState {
        SetupState::ArgumentsSet
    }
}

impl<B: DecoderBackend> Stage for BuilderStep4<B> {
    fn state(&self) -> SetupState {
        if self.player.flags().is_some() {
            SetupState::FlagsSet
        } else {
            SetupState::FlagsSkipped
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::backend::{BackendCall, RecordingBackend};

    fn open(s: &str) -> BackendCall {
        BackendCall::Open(s.to_string())
    }

    fn configure(s: &str) -> BackendCall {
        BackendCall::Configure(s.to_string())
    }

    fn play(s: &str) -> BackendCall {
        BackendCall::Play(s.to_string())
    }

    #[test]
    fn full_chain_records_steps_in_order() {
        let mut player = Builder::with_backend(RecordingBackend::new())
            .step1("myfile")
            .step2("-f")
            .optional_step3(1)
            .step4();
        player.play();

        assert!(player.is_ready());
        assert_eq!(player.source(), "myfile");
        assert_eq!(player.arguments(), "-f");
        assert_eq!(player.flags(), Some(1));
        assert_eq!(
            player.backend().calls(),
            &[
                open("myfile"),
                configure("-f"),
                BackendCall::ApplyFlags(1),
                BackendCall::Decode,
                play("myfile"),
            ]
        );
    }

    #[test]
    fn skip_optional_never_sets_flags() {
        let mut player = Builder::with_backend(RecordingBackend::new())
            .step1("a")
            .step2("b")
            .skip_optional();
        player.play();

        assert!(player.is_ready());
        assert_eq!(player.flags(), None);
        assert_eq!(
            player.backend().calls(),
            &[open("a"), configure("b"), BackendCall::Decode, play("a")]
        );
    }

    #[test]
    fn zero_flags_is_a_no_op() {
        let stage = Builder::with_backend(RecordingBackend::new())
            .step1("a")
            .step2("b")
            .optional_step3(0);
        assert_eq!(stage.state(), SetupState::FlagsSkipped);

        let player = stage.step4();
        assert!(player.is_ready());
        assert_eq!(player.flags(), None);
        assert!(
            !player
                .backend()
                .calls()
                .iter()
                .any(|c| matches!(c, BackendCall::ApplyFlags(_)))
        );
    }

    #[test]
    fn skip_matches_non_positive_flags() {
        let skipped = Builder::with_backend(RecordingBackend::new())
            .step1("a")
            .step2("b")
            .skip_optional();
        let negative = Builder::with_backend(RecordingBackend::new())
            .step1("a")
            .step2("b")
            .optional_step3(-3)
            .step4();

        assert_eq!(skipped.is_ready(), negative.is_ready());
        assert_eq!(skipped.flags(), negative.flags());
        assert_eq!(skipped.source(), negative.source());
        assert_eq!(skipped.arguments(), negative.arguments());
        assert_eq!(skipped.backend().calls(), negative.backend().calls());
    }

    #[test]
    fn stages_report_their_state() {
        let builder = Builder::with_backend(RecordingBackend::new());
        assert_eq!(builder.state(), SetupState::Created);
        let step2 = builder.step1("a");
        assert_eq!(step2.state(), SetupState::SourceSet);
        let step3 = step2.step2("b");
        assert_eq!(step3.state(), SetupState::ArgumentsSet);
        let step4 = step3.optional_step3(5);
        assert_eq!(step4.state(), SetupState::FlagsSet);
    }

    #[test]
    fn borrowed_backend_stays_with_caller() {
        let mut backend = RecordingBackend::new();
        {
            let mut player = Builder::with_backend(&mut backend)
                .step1("song")
                .step2("")
                .skip_optional();
            player.play();
            player.play();
        }
        assert_eq!(backend.calls().len(), 5);
        assert_eq!(backend.calls()[4], play("song"));
    }

    #[test]
    fn transitions_end_in_ready() {
        let terminal: Vec<_> = SetupState::TRANSITIONS
            .iter()
            .filter(|(_, _, to)| to.is_terminal())
            .map(|(from, call, _)| (*from, *call))
            .collect();
        assert_eq!(
            terminal,
            vec![
                (SetupState::ArgumentsSet, "skip_optional"),
                (SetupState::FlagsSet, "step4"),
                (SetupState::FlagsSkipped, "step4"),
            ]
        );
        assert!(
            SetupState::TRANSITIONS
                .iter()
                .all(|(from, _, _)| !from.is_terminal())
        );
    }
}
