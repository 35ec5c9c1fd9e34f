use std::time::Duration;

/// How long the success feedback stays up before the next problem appears.
pub const CELEBRATION_DELAY: Duration = Duration::from_millis(2000);

/// How long a wrong answer stays visible before the input is cleared.
pub const RETRY_DELAY: Duration = Duration::from_millis(1000);

/// Delays for the two deferred transitions of a drill.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FeedbackTimings {
    pub celebration: Duration,
    pub retry: Duration,
}

impl FeedbackTimings {
    /// Returns timings with the given delays.
    #[must_use]
    pub fn new(celebration: Duration, retry: Duration) -> Self {
        Self { celebration, retry }
    }

    /// Returns timings where both delays are `delay`.
    ///
    /// Handy for tests that should not wait seconds for a transition.
    #[must_use]
    pub fn uniform(delay: Duration) -> Self {
        Self::new(delay, delay)
    }
}

impl Default for FeedbackTimings {
    fn default() -> Self {
        Self::new(CELEBRATION_DELAY, RETRY_DELAY)
    }
}

/// Deterministic seed for tests and examples.
pub const FIXED_TEST_SEED: u64 = 1_700_000_000;
