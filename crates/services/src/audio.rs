use std::sync::Arc;

use drill_core::SoundCue;

use crate::error::AudioError;

/// Plays the short sound tied to a cue.
pub trait SoundPlayer: Send + Sync {
    /// # Errors
    ///
    /// Returns `AudioError` when the sound cannot be played.
    fn play(&self, cue: SoundCue) -> Result<(), AudioError>;
}

/// Player that never makes a sound.
#[derive(Debug, Clone, Copy, Default)]
pub struct MutedSoundPlayer;

impl SoundPlayer for MutedSoundPlayer {
    fn play(&self, _cue: SoundCue) -> Result<(), AudioError> {
        Ok(())
    }
}

/// Forwards cues to a `SoundPlayer` and absorbs its failures.
///
/// Playback problems are logged and never change drill state.
#[derive(Clone)]
pub struct FeedbackSounds {
    player: Arc<dyn SoundPlayer>,
    enabled: bool,
}

impl FeedbackSounds {
    #[must_use]
    pub fn new(player: Arc<dyn SoundPlayer>, enabled: bool) -> Self {
        Self { player, enabled }
    }

    pub fn trigger(&self, cue: SoundCue) {
        if !self.enabled {
            return;
        }
        if let Err(err) = self.player.play(cue) {
            report_playback_failure(cue, &err);
        }
    }
}

impl std::fmt::Debug for FeedbackSounds {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FeedbackSounds")
            .field("enabled", &self.enabled)
            .finish_non_exhaustive()
    }
}

/// Logs a playback failure. Players that only learn about failures after `play`
/// returns report them here so they land in the same place.
pub fn report_playback_failure(cue: SoundCue, err: &AudioError) {
    tracing::warn!(trigger = cue.trigger(), error = %err, "sound playback failed");
}
