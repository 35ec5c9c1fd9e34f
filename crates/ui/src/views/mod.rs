mod drill;

#[cfg(test)]
mod test_harness;
#[cfg(test)]
mod view_smoke;

pub use drill::{DEFAULT_SOUND_DIR, DrillView, SOUND_FILES, WebviewSoundPlayer};
