//! Error types for the PIN pad core

use thiserror::Error;

pub type Result<T> = std::result::Result<T, PadError>;

/// Errors raised while building a pad or interpreting key input.
///
/// Rejected PIN entries are not errors: a mismatch or a host-reported
/// failure is an ordinary pad state.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PadError {
    #[error("PIN length must be at least 1, got {0}")]
    InvalidLength(usize),

    #[error("Not a decimal digit: {0:?}")]
    InvalidDigit(char),

    #[error("Digit out of range: {0}")]
    DigitOutOfRange(u8),
}
