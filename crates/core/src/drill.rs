//! The drill state machine.
//!
//! `DrillState` is an immutable value: every event goes through
//! [`DrillState::reduce`], which returns the next state plus the side effects
//! the caller has to carry out (sounds to play, timers to schedule). Deferred
//! transitions come back in as [`DrillEvent::TimerFired`] carrying the ticket
//! they were scheduled with; a ticket that no longer matches the pending timer
//! is ignored.

use std::time::Duration;

use crate::evaluation::{Evaluation, evaluate};
use crate::generator::ProblemSource;
use crate::model::{Digit, InputBuffer, Problem};
use crate::time::FeedbackTimings;

//
// ─── PHASE / FEEDBACK ─────────────────────────────────────────────────────────
//

/// Whether the drill is taking digits or showing success feedback.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    AwaitingInput,
    Celebrating,
}

/// Transient message shown next to the question.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Feedback {
    Correct,
    TryAgain,
}

//
// ─── SOUNDS / TIMERS / EFFECTS ────────────────────────────────────────────────
//

/// Named triggers for the audio collaborator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SoundCue {
    DigitPress,
    Correct,
    Incorrect,
}

impl SoundCue {
    /// Trigger name as exposed to the audio collaborator.
    #[must_use]
    pub fn trigger(self) -> &'static str {
        match self {
            SoundCue::DigitPress => "on_digit_press",
            SoundCue::Correct => "on_correct",
            SoundCue::Incorrect => "on_incorrect",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimerKind {
    /// Ends the celebration window and moves to the next problem.
    Celebration,
    /// Clears a wrong answer so the same problem can be retried.
    Retry,
}

/// A one-shot deferred transition, stamped with the problem generation it belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimerTicket {
    kind: TimerKind,
    generation: u64,
    delay: Duration,
}

impl TimerTicket {
    #[must_use]
    pub fn kind(&self) -> TimerKind {
        self.kind
    }

    #[must_use]
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// How long the caller should wait before firing the ticket.
    #[must_use]
    pub fn delay(&self) -> Duration {
        self.delay
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DrillEvent {
    Digit(Digit),
    TimerFired(TimerTicket),
}

/// Work the caller performs after a transition, in order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Effect {
    Sound(SoundCue),
    Schedule(TimerTicket),
}

/// Result of one reducer call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Step {
    pub state: DrillState,
    /// Verdict on the input, present only when a digit was accepted.
    pub evaluation: Option<Evaluation>,
    pub effects: Vec<Effect>,
}

impl Step {
    fn unchanged(state: &DrillState) -> Self {
        Self {
            state: state.clone(),
            evaluation: None,
            effects: Vec::new(),
        }
    }

    /// Timers the caller has to schedule.
    pub fn timers(&self) -> impl Iterator<Item = TimerTicket> + '_ {
        self.effects.iter().filter_map(|effect| match effect {
            Effect::Schedule(ticket) => Some(*ticket),
            Effect::Sound(_) => None,
        })
    }

    /// Sounds the caller has to play.
    pub fn sounds(&self) -> impl Iterator<Item = SoundCue> + '_ {
        self.effects.iter().filter_map(|effect| match effect {
            Effect::Sound(cue) => Some(*cue),
            Effect::Schedule(_) => None,
        })
    }
}

//
// ─── STATE ────────────────────────────────────────────────────────────────────
//

/// Snapshot of one drill: the question, what has been typed, and the score.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DrillState {
    problem: Problem,
    input: InputBuffer,
    score: u32,
    phase: Phase,
    feedback: Option<Feedback>,
    pending: Option<TimerTicket>,
    generation: u64,
    timings: FeedbackTimings,
}

impl DrillState {
    /// Fresh drill on `problem` with a zero score.
    #[must_use]
    pub fn start(problem: Problem, timings: FeedbackTimings) -> Self {
        Self {
            problem,
            input: InputBuffer::new(),
            score: 0,
            phase: Phase::AwaitingInput,
            feedback: None,
            pending: None,
            generation: 0,
            timings,
        }
    }

    #[must_use]
    pub fn problem(&self) -> &Problem {
        &self.problem
    }

    #[must_use]
    pub fn input(&self) -> &InputBuffer {
        &self.input
    }

    #[must_use]
    pub fn score(&self) -> u32 {
        self.score
    }

    #[must_use]
    pub fn phase(&self) -> Phase {
        self.phase
    }

    #[must_use]
    pub fn feedback(&self) -> Option<Feedback> {
        self.feedback
    }

    /// The deferred transition currently waiting to fire, if any.
    #[must_use]
    pub fn pending(&self) -> Option<TimerTicket> {
        self.pending
    }

    /// Counts problems shown so far, starting at 0 for the first one.
    #[must_use]
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Digits are taken only while awaiting input with no reset pending.
    #[must_use]
    pub fn accepts_input(&self) -> bool {
        self.phase == Phase::AwaitingInput && self.pending.is_none()
    }

    /// Applies one event and returns the next state with its effects.
    pub fn reduce(&self, event: DrillEvent, problems: &mut dyn ProblemSource) -> Step {
        match event {
            DrillEvent::Digit(digit) => self.append_digit(digit),
            DrillEvent::TimerFired(ticket) => self.fire(ticket, problems),
        }
    }

    fn append_digit(&self, digit: Digit) -> Step {
        if !self.accepts_input() {
            return Step::unchanged(self);
        }

        let mut next = self.clone();
        next.input.push(digit);
        let mut effects = vec![Effect::Sound(SoundCue::DigitPress)];

        let evaluation = evaluate(next.input.as_str(), &next.problem.answer_text());
        match evaluation {
            Evaluation::Pending => {}
            Evaluation::Correct => {
                next.score = next.score.saturating_add(1);
                next.phase = Phase::Celebrating;
                next.feedback = Some(Feedback::Correct);
                let ticket = next.ticket(TimerKind::Celebration);
                next.pending = Some(ticket);
                effects.push(Effect::Sound(SoundCue::Correct));
                effects.push(Effect::Schedule(ticket));
            }
            Evaluation::Incorrect => {
                next.feedback = Some(Feedback::TryAgain);
                let ticket = next.ticket(TimerKind::Retry);
                next.pending = Some(ticket);
                effects.push(Effect::Sound(SoundCue::Incorrect));
                effects.push(Effect::Schedule(ticket));
            }
        }

        Step {
            state: next,
            evaluation: Some(evaluation),
            effects,
        }
    }

    fn fire(&self, ticket: TimerTicket, problems: &mut dyn ProblemSource) -> Step {
        if self.pending != Some(ticket) {
            return Step::unchanged(self);
        }

        let mut next = self.clone();
        next.pending = None;
        next.feedback = None;
        next.input.clear();
        if ticket.kind == TimerKind::Celebration {
            next.problem = problems.next_problem();
            next.generation = next.generation.wrapping_add(1);
            next.phase = Phase::AwaitingInput;
        }

        Step {
            state: next,
            evaluation: None,
            effects: Vec::new(),
        }
    }

    fn ticket(&self, kind: TimerKind) -> TimerTicket {
        let delay = match kind {
            TimerKind::Celebration => self.timings.celebration,
            TimerKind::Retry => self.timings.retry,
        };
        TimerTicket {
            kind,
            generation: self.generation,
            delay,
        }
    }
}
