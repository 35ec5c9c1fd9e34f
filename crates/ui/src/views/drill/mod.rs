mod scripts;
mod sounds;
mod view;

pub use sounds::{DEFAULT_SOUND_DIR, SOUND_FILES, WebviewSoundPlayer};
pub use view::DrillView;

#[cfg(test)]
pub(crate) use view::DrillTestHandles;
