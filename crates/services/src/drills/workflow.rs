use std::sync::Arc;

use drill_core::model::Digit;
use drill_core::{DrillEvent, Evaluation, ProblemGenerator, ProblemSource, Step, TimerTicket};

use super::service::DrillService;
use crate::audio::{FeedbackSounds, SoundPlayer};
use crate::settings::DrillSettings;

/// Result of feeding one event to a drill.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DrillStep {
    /// Verdict on the input, present only when a digit was accepted.
    pub evaluation: Option<Evaluation>,
    /// Deferred transitions the caller must fire after their delay.
    pub timers: Vec<TimerTicket>,
    pub score: u32,
}

/// Orchestrates drills: starts them and applies digits and timer firings,
/// playing the sound cues each transition asks for.
#[derive(Clone, Debug)]
pub struct DrillLoopService {
    settings: DrillSettings,
    sounds: FeedbackSounds,
}

impl DrillLoopService {
    #[must_use]
    pub fn new(settings: DrillSettings, player: Arc<dyn SoundPlayer>) -> Self {
        let sounds = FeedbackSounds::new(player, settings.sounds_enabled());
        Self { settings, sounds }
    }

    #[must_use]
    pub fn settings(&self) -> &DrillSettings {
        &self.settings
    }

    /// Start a new drill with a zero score.
    #[must_use]
    pub fn start_drill(&self) -> DrillService {
        let problems: Box<dyn ProblemSource> = match self.settings.seed() {
            Some(seed) => Box::new(ProblemGenerator::seeded(seed)),
            None => Box::new(ProblemGenerator::from_os_rng()),
        };
        self.start_drill_with(problems)
    }

    /// Start a drill drawing problems from the given source.
    #[must_use]
    pub fn start_drill_with(&self, problems: Box<dyn ProblemSource>) -> DrillService {
        let drill = DrillService::new(problems, self.settings.timings());
        tracing::info!(problem = %drill.problem(), "drill started");
        drill
    }

    /// Append a digit to the current answer and evaluate it.
    ///
    /// Digits arriving while the drill is celebrating or waiting to reset are dropped.
    pub fn press_digit(&self, drill: &mut DrillService, digit: Digit) -> DrillStep {
        let step = drill.apply(DrillEvent::Digit(digit));
        match step.evaluation {
            Some(evaluation) => tracing::debug!(
                %digit,
                input = drill.input().as_str(),
                expected = drill.problem().answer(),
                ?evaluation,
                "digit evaluated"
            ),
            None => tracing::debug!(%digit, phase = ?drill.phase(), "digit dropped"),
        }
        self.finish(drill, &step)
    }

    /// Fire a deferred transition. Stale tickets are no-ops.
    pub fn fire_timer(&self, drill: &mut DrillService, ticket: TimerTicket) -> DrillStep {
        let before = drill.state().generation();
        let step = drill.apply(DrillEvent::TimerFired(ticket));
        if drill.state().generation() != before {
            tracing::debug!(problem = %drill.problem(), "next problem");
        } else {
            tracing::debug!(kind = ?ticket.kind(), "timer fired");
        }
        self.finish(drill, &step)
    }

    fn finish(&self, drill: &DrillService, step: &Step) -> DrillStep {
        for cue in step.sounds() {
            self.sounds.trigger(cue);
        }
        DrillStep {
            evaluation: step.evaluation,
            timers: step.timers().collect(),
            score: drill.score(),
        }
    }
}
