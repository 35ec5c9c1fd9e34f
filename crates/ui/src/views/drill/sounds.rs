use dioxus::core::{Runtime, spawn_forever};
use dioxus::document::eval;
use drill_core::SoundCue;
use services::{AudioError, SoundPlayer, report_playback_failure};

use super::scripts::play_sound_script;

/// Directory the desktop webview serves the feedback sounds from.
pub const DEFAULT_SOUND_DIR: &str = "/audio";

/// Files expected in the sound directory. They do not ship with the app.
pub const SOUND_FILES: [&str; 3] = ["correct.mp3", "incorrect.mp3", "button.mp3"];

type FailureHook = fn(SoundCue, &AudioError);

/// Plays feedback sounds inside the webview with HTML audio elements.
///
/// The script resolves once playback starts or is rejected. Rejections arrive
/// after `play` has returned, so they go to the failure hook instead of the caller.
#[derive(Clone, Debug)]
pub struct WebviewSoundPlayer {
    sound_dir: String,
    on_failure: FailureHook,
}

impl WebviewSoundPlayer {
    #[must_use]
    pub fn new(sound_dir: impl Into<String>) -> Self {
        let sound_dir = sound_dir.into();
        let sound_dir = sound_dir.trim_end_matches('/').to_string();
        Self {
            sound_dir,
            on_failure: report_playback_failure,
        }
    }

    #[cfg(test)]
    fn with_failure_hook(mut self, on_failure: FailureHook) -> Self {
        self.on_failure = on_failure;
        self
    }

    #[must_use]
    pub fn sound_url(&self, cue: SoundCue) -> String {
        let file = match cue {
            SoundCue::Correct => SOUND_FILES[0],
            SoundCue::Incorrect => SOUND_FILES[1],
            SoundCue::DigitPress => SOUND_FILES[2],
        };
        format!("{}/{file}", self.sound_dir)
    }
}

impl Default for WebviewSoundPlayer {
    fn default() -> Self {
        Self::new(DEFAULT_SOUND_DIR)
    }
}

/// Maps the page's reply to a playback result. An empty reply means the sound started.
fn playback_outcome(cue: SoundCue, reply: Result<String, String>) -> Result<(), AudioError> {
    match reply {
        Ok(reason) if reason.is_empty() => Ok(()),
        Ok(reason) => Err(AudioError::Playback { cue, reason }),
        Err(reason) => Err(AudioError::Unavailable(reason)),
    }
}

impl SoundPlayer for WebviewSoundPlayer {
    fn play(&self, cue: SoundCue) -> Result<(), AudioError> {
        if self.sound_dir.is_empty() {
            return Err(AudioError::MissingSound(cue));
        }
        let in_scope = Runtime::try_current().is_some_and(|rt| rt.try_current_scope_id().is_some());
        if !in_scope {
            return Err(AudioError::Unavailable("no webview runtime".to_string()));
        }

        let playback = eval(&play_sound_script(&self.sound_url(cue)));
        let on_failure = self.on_failure;
        spawn_forever(async move {
            let reply = playback.join::<String>().await.map_err(|err| err.to_string());
            if let Err(err) = playback_outcome(cue, reply) {
                on_failure(cue, &err);
            }
        });
        Ok(())
    }
}
