mod digit;
mod input;
mod problem;

pub use digit::{Digit, DigitError};
pub use input::InputBuffer;
pub use problem::{MAX_ADDEND, MAX_TOTAL, Operator, Problem, ProblemError};
