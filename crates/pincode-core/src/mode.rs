//! Pad mode and host-reported status

/// What a completed entry means to the host
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Mode {
    /// First entry of a new PIN
    Choose,
    /// Re-entry that must match the PIN chosen on the previous screen
    Confirm { previous_pin: String },
    /// Verification against a source of truth owned by the host
    Enter,
}

impl Mode {
    /// Confirm mode against a previously chosen PIN
    pub fn confirm(previous_pin: impl Into<String>) -> Self {
        Mode::Confirm {
            previous_pin: previous_pin.into(),
        }
    }

    /// Short name for logs
    pub fn name(&self) -> &'static str {
        match self {
            Mode::Choose => "choose",
            Mode::Confirm { .. } => "confirm",
            Mode::Enter => "enter",
        }
    }
}

/// Status the host reports for the last entry
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum Status {
    #[default]
    Initial,
    Success,
    Failure,
    Locked,
}

impl Status {
    /// Whether this status reports a failed entry
    pub fn is_failure(self) -> bool {
        self == Status::Failure
    }
}
