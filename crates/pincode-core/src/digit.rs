//! Keypad input types

use std::fmt;

use crate::error::{PadError, Result};

/// Keypad rows, top to bottom. Zero sits alone on the bottom row next to delete.
pub const KEYPAD_ROWS: [[u8; 3]; 3] = [[1, 2, 3], [4, 5, 6], [7, 8, 9]];

/// A single decimal digit (0-9)
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Digit(u8);

impl Digit {
    /// The digit zero
    pub const ZERO: Digit = Digit(0);

    /// Create a digit from its numeric value
    pub fn new(value: u8) -> Result<Self> {
        if value <= 9 {
            Ok(Self(value))
        } else {
            Err(PadError::DigitOutOfRange(value))
        }
    }

    /// Parse a digit from a character such as `'7'`
    pub fn from_char(c: char) -> Result<Self> {
        c.to_digit(10)
            .map(|d| Self(d as u8))
            .ok_or(PadError::InvalidDigit(c))
    }

    /// Numeric value
    pub fn value(self) -> u8 {
        self.0
    }

    /// Character form, as appended to the buffer
    pub fn as_char(self) -> char {
        char::from(b'0' + self.0)
    }
}

impl fmt::Display for Digit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl TryFrom<char> for Digit {
    type Error = PadError;

    fn try_from(c: char) -> Result<Self> {
        Self::from_char(c)
    }
}

/// A key on the pad
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Key {
    Digit(Digit),
    Delete,
}

impl From<Digit> for Key {
    fn from(digit: Digit) -> Self {
        Key::Digit(digit)
    }
}
