use drill_core::model::Digit;
use drill_core::{Feedback, Phase, TimerTicket};
use services::{DrillLoopService, DrillService};

/// Message shown after a correct answer.
pub const CORRECT_MESSAGE: &str = "太棒了！回答正确！";

/// Message shown after a wrong answer.
pub const TRY_AGAIN_MESSAGE: &str = "再试一次！";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DrillIntent {
    Digit(Digit),
}

pub struct DrillVm {
    drill: DrillService,
}

impl DrillVm {
    #[must_use]
    pub fn new(drill: DrillService) -> Self {
        Self { drill }
    }

    #[must_use]
    pub fn prompt_text(&self) -> String {
        self.drill.problem().prompt()
    }

    #[must_use]
    pub fn input_text(&self) -> &str {
        self.drill.input().as_str()
    }

    #[must_use]
    pub fn score(&self) -> u32 {
        self.drill.score()
    }

    #[must_use]
    pub fn feedback_message(&self) -> Option<&'static str> {
        self.drill.feedback().map(|feedback| match feedback {
            Feedback::Correct => CORRECT_MESSAGE,
            Feedback::TryAgain => TRY_AGAIN_MESSAGE,
        })
    }

    #[must_use]
    pub fn is_celebrating(&self) -> bool {
        self.drill.phase() == Phase::Celebrating
    }

    #[must_use]
    pub fn drill(&self) -> &DrillService {
        &self.drill
    }

    /// Applies an intent and returns the timers the view must schedule.
    pub fn dispatch(&mut self, drill_loop: &DrillLoopService, intent: DrillIntent) -> Vec<TimerTicket> {
        match intent {
            DrillIntent::Digit(digit) => drill_loop.press_digit(&mut self.drill, digit).timers,
        }
    }

    /// Hands a fired timer back to the drill.
    pub fn fire(&mut self, drill_loop: &DrillLoopService, ticket: TimerTicket) -> Vec<TimerTicket> {
        drill_loop.fire_timer(&mut self.drill, ticket).timers
    }
}
