use std::fmt;

use thiserror::Error;

/// Errors that can occur when building a `Digit`.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DigitError {
    #[error("digit out of range: {0}")]
    OutOfRange(u8),
}

/// A single decimal digit, `0` through `9`.
///
/// This is the only kind of input the drill accepts, whether it comes from an
/// on-screen button or a physical key.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Digit(u8);

impl Digit {
    /// Every digit in ascending order, as laid out on the keypad.
    pub const ALL: [Digit; 10] = [
        Digit(0),
        Digit(1),
        Digit(2),
        Digit(3),
        Digit(4),
        Digit(5),
        Digit(6),
        Digit(7),
        Digit(8),
        Digit(9),
    ];

    /// Creates a new `Digit`.
    ///
    /// # Errors
    ///
    /// Returns `DigitError::OutOfRange` if the value is greater than 9.
    pub fn new(value: u8) -> Result<Self, DigitError> {
        if value > 9 {
            return Err(DigitError::OutOfRange(value));
        }
        Ok(Self(value))
    }

    /// Parses an ASCII digit character. Anything else yields `None`.
    #[must_use]
    pub fn from_char(ch: char) -> Option<Self> {
        ch.to_digit(10)
            .and_then(|value| u8::try_from(value).ok())
            .map(Self)
    }

    /// Returns the underlying value.
    #[must_use]
    pub fn value(self) -> u8 {
        self.0
    }

    #[must_use]
    pub fn as_char(self) -> char {
        char::from(b'0' + self.0)
    }
}

impl fmt::Debug for Digit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Digit({})", self.0)
    }
}

impl fmt::Display for Digit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl TryFrom<u8> for Digit {
    type Error = DigitError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}
