#![forbid(unsafe_code)]

pub mod drill;
pub mod evaluation;
pub mod generator;
pub mod model;
pub mod time;

pub use drill::{
    DrillEvent, DrillState, Effect, Feedback, Phase, SoundCue, Step, TimerKind, TimerTicket,
};
pub use evaluation::{Evaluation, evaluate};
pub use generator::{ProblemGenerator, ProblemSource};
pub use time::FeedbackTimings;
