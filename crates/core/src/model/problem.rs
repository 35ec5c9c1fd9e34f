use std::fmt;

use thiserror::Error;

//
// ─── ERRORS ───────────────────────────────────────────────────────────────────
//

/// Errors raised when a problem would break the drill's number ranges.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ProblemError {
    #[error("operand {value} is outside {min}..={max}")]
    OperandOutOfRange { value: u8, min: u8, max: u8 },

    #[error("sum {sum} exceeds {max}")]
    SumTooLarge { sum: u8, max: u8 },

    #[error("{lhs} - {rhs} would be negative")]
    NegativeResult { lhs: u8, rhs: u8 },
}

//
// ─── OPERATOR ─────────────────────────────────────────────────────────────────
//

/// The two operations the drill asks about.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operator {
    Add,
    Subtract,
}

impl Operator {
    #[must_use]
    pub fn symbol(self) -> &'static str {
        match self {
            Operator::Add => "+",
            Operator::Subtract => "-",
        }
    }

    /// Applies the operator. Callers guarantee subtraction never underflows.
    #[must_use]
    pub fn apply(self, lhs: u8, rhs: u8) -> u8 {
        match self {
            Operator::Add => lhs.saturating_add(rhs),
            Operator::Subtract => lhs.saturating_sub(rhs),
        }
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

//
// ─── PROBLEM ──────────────────────────────────────────────────────────────────
//

/// Largest number any problem may produce or start from.
pub const MAX_TOTAL: u8 = 10;

/// Largest left operand of an addition problem.
pub const MAX_ADDEND: u8 = 5;

/// One arithmetic question together with its precomputed answer.
///
/// Immutable once built. Ranges:
/// - `+`: `lhs` in `1..=5`, `rhs` in `1..=10 - lhs`
/// - `-`: `lhs` in `1..=10`, `rhs` in `1..=lhs`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Problem {
    lhs: u8,
    operator: Operator,
    rhs: u8,
    answer: u8,
}

impl Problem {
    /// Builds a problem, checking the drill's number ranges.
    ///
    /// # Errors
    ///
    /// Returns `ProblemError::OperandOutOfRange` if an operand leaves its range.
    /// Returns `ProblemError::SumTooLarge` if an addition would exceed 10.
    /// Returns `ProblemError::NegativeResult` if a subtraction would go below zero.
    pub fn new(lhs: u8, operator: Operator, rhs: u8) -> Result<Self, ProblemError> {
        match operator {
            Operator::Add => {
                check_range(lhs, 1, MAX_ADDEND)?;
                let sum = lhs.saturating_add(rhs);
                if sum > MAX_TOTAL {
                    return Err(ProblemError::SumTooLarge {
                        sum,
                        max: MAX_TOTAL,
                    });
                }
                check_range(rhs, 1, MAX_TOTAL - lhs)?;
            }
            Operator::Subtract => {
                check_range(lhs, 1, MAX_TOTAL)?;
                if rhs > lhs {
                    return Err(ProblemError::NegativeResult { lhs, rhs });
                }
                check_range(rhs, 1, lhs)?;
            }
        }

        Ok(Self {
            lhs,
            operator,
            rhs,
            answer: operator.apply(lhs, rhs),
        })
    }

    /// Builds a problem from operands the generator drew inside the valid ranges.
    pub(crate) fn from_drawn(lhs: u8, operator: Operator, rhs: u8) -> Self {
        debug_assert!(Self::new(lhs, operator, rhs).is_ok(), "{lhs} {operator} {rhs}");
        Self {
            lhs,
            operator,
            rhs,
            answer: operator.apply(lhs, rhs),
        }
    }

    #[must_use]
    pub fn lhs(&self) -> u8 {
        self.lhs
    }

    #[must_use]
    pub fn operator(&self) -> Operator {
        self.operator
    }

    #[must_use]
    pub fn rhs(&self) -> u8 {
        self.rhs
    }

    #[must_use]
    pub fn answer(&self) -> u8 {
        self.answer
    }

    /// The answer as the learner has to type it.
    #[must_use]
    pub fn answer_text(&self) -> String {
        self.answer.to_string()
    }

    /// Question text shown to the learner, e.g. `3 + 4 = ?`.
    #[must_use]
    pub fn prompt(&self) -> String {
        format!("{} {} {} = ?", self.lhs, self.operator, self.rhs)
    }
}

impl fmt::Display for Problem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} {}", self.lhs, self.operator, self.rhs)
    }
}

fn check_range(value: u8, min: u8, max: u8) -> Result<(), ProblemError> {
    if (min..=max).contains(&value) {
        Ok(())
    } else {
        Err(ProblemError::OperandOutOfRange { value, min, max })
    }
}
