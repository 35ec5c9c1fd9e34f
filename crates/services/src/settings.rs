use drill_core::FeedbackTimings;

/// Knobs for a drill, resolved by the app from arguments and environment.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DrillSettings {
    seed: Option<u64>,
    sounds_enabled: bool,
    timings: FeedbackTimings,
}

impl DrillSettings {
    #[must_use]
    pub fn with_seed(mut self, seed: Option<u64>) -> Self {
        self.seed = seed;
        self
    }

    #[must_use]
    pub fn with_sounds_enabled(mut self, enabled: bool) -> Self {
        self.sounds_enabled = enabled;
        self
    }

    #[must_use]
    pub fn with_timings(mut self, timings: FeedbackTimings) -> Self {
        self.timings = timings;
        self
    }

    /// Seed for the problem generator; `None` draws from the OS.
    #[must_use]
    pub fn seed(&self) -> Option<u64> {
        self.seed
    }

    #[must_use]
    pub fn sounds_enabled(&self) -> bool {
        self.sounds_enabled
    }

    #[must_use]
    pub fn timings(&self) -> FeedbackTimings {
        self.timings
    }
}

impl Default for DrillSettings {
    fn default() -> Self {
        Self {
            seed: None,
            sounds_enabled: true,
            timings: FeedbackTimings::default(),
        }
    }
}
