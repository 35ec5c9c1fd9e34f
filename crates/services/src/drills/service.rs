use drill_core::model::{InputBuffer, Problem};
use drill_core::{DrillEvent, DrillState, Feedback, FeedbackTimings, Phase, ProblemSource, Step};

use super::progress::DrillProgress;

/// One running drill: the current state and the source of its next problems.
///
/// Created by `DrillLoopService::start_drill`; the loop service feeds it events.
pub struct DrillService {
    state: DrillState,
    problems: Box<dyn ProblemSource>,
}

impl DrillService {
    /// Starts a drill on the first problem drawn from `problems`.
    #[must_use]
    pub fn new(mut problems: Box<dyn ProblemSource>, timings: FeedbackTimings) -> Self {
        let first = problems.next_problem();
        Self {
            state: DrillState::start(first, timings),
            problems,
        }
    }

    #[must_use]
    pub fn state(&self) -> &DrillState {
        &self.state
    }

    #[must_use]
    pub fn problem(&self) -> &Problem {
        self.state.problem()
    }

    #[must_use]
    pub fn input(&self) -> &InputBuffer {
        self.state.input()
    }

    #[must_use]
    pub fn score(&self) -> u32 {
        self.state.score()
    }

    #[must_use]
    pub fn phase(&self) -> Phase {
        self.state.phase()
    }

    #[must_use]
    pub fn feedback(&self) -> Option<Feedback> {
        self.state.feedback()
    }

    #[must_use]
    pub fn progress(&self) -> DrillProgress {
        DrillProgress {
            score: self.state.score(),
            problems_seen: self.state.generation().saturating_add(1),
            celebrating: self.state.phase() == Phase::Celebrating,
        }
    }

    /// Runs the reducer and keeps the resulting state.
    pub(crate) fn apply(&mut self, event: DrillEvent) -> Step {
        let step = self.state.reduce(event, self.problems.as_mut());
        self.state = step.state.clone();
        step
    }
}

impl std::fmt::Debug for DrillService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DrillService")
            .field("state", &self.state)
            .finish_non_exhaustive()
    }
}
