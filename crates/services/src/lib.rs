#![forbid(unsafe_code)]

pub mod audio;
pub mod drills;
pub mod error;
pub mod settings;

pub use audio::{FeedbackSounds, MutedSoundPlayer, SoundPlayer, report_playback_failure};
pub use drills::{DrillLoopService, DrillProgress, DrillService, DrillStep};
pub use error::AudioError;
pub use settings::DrillSettings;
