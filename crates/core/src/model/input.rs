use crate::model::Digit;

/// Digits the learner has typed so far for the current problem.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InputBuffer {
    text: String,
}

impl InputBuffer {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, digit: Digit) {
        self.text.push(digit.as_char());
    }

    pub fn clear(&mut self) {
        self.text.clear();
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.text
    }

    /// Number of typed digits.
    #[must_use]
    pub fn len(&self) -> usize {
        self.text.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }
}

impl<const N: usize> From<[Digit; N]> for InputBuffer {
    fn from(digits: [Digit; N]) -> Self {
        let mut buffer = Self::new();
        for digit in digits {
            buffer.push(digit);
        }
        buffer
    }
}
