//! Shared error types for the services crate.

use thiserror::Error;

use drill_core::SoundCue;

/// Errors emitted by a `SoundPlayer`.
///
/// These never reach the learner: `FeedbackSounds` logs and drops them.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum AudioError {
    #[error("no sound registered for {}", .0.trigger())]
    MissingSound(SoundCue),
    #[error("sound playback is unavailable: {0}")]
    Unavailable(String),
    #[error("failed to play {}: {reason}", .cue.trigger())]
    Playback { cue: SoundCue, reason: String },
}
