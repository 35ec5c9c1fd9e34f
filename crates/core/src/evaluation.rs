/// Verdict on the digits typed so far.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Evaluation {
    /// Shorter than the answer and not equal to it; the learner may still be typing.
    Pending,
    Correct,
    /// As long as (or longer than) the answer without matching it.
    Incorrect,
}

/// Compares typed text against the expected answer text.
///
/// Comparison is textual: both sides are trimmed and must match exactly, so
/// `"05"` never equals `"5"`. The length check uses the untrimmed input.
#[must_use]
pub fn evaluate(input: &str, expected: &str) -> Evaluation {
    if input.trim() == expected.trim() {
        Evaluation::Correct
    } else if input.len() >= expected.len() {
        Evaluation::Incorrect
    } else {
        Evaluation::Pending
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn single_digit_match_is_correct() {
        assert_eq!(evaluate("7", "7"), Evaluation::Correct);
    }

    #[test]
    fn single_digit_mismatch_is_incorrect() {
        assert_eq!(evaluate("9", "3"), Evaluation::Incorrect);
    }

    #[test]
    fn partial_two_digit_answer_is_pending() {
        assert_eq!(evaluate("1", "10"), Evaluation::Pending);
        assert_eq!(evaluate("10", "10"), Evaluation::Correct);
        assert_eq!(evaluate("2", "10"), Evaluation::Pending);
        assert_eq!(evaluate("12", "10"), Evaluation::Incorrect);
    }

    #[test]
    fn leading_zero_is_not_numeric_equality() {
        assert_eq!(evaluate("05", "5"), Evaluation::Incorrect);
        assert_eq!(evaluate("0", "5"), Evaluation::Incorrect);
    }

    #[test]
    fn incidental_whitespace_is_trimmed() {
        assert_eq!(evaluate(" 4 ", "4"), Evaluation::Correct);
        assert_eq!(evaluate("4", " 4"), Evaluation::Correct);
    }

    #[test]
    fn empty_input_is_pending() {
        assert_eq!(evaluate("", "3"), Evaluation::Pending);
    }
}
