//! Host state

use pincode_core::PinPad;

/// Current screen/view
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Screen {
    /// Pick a new PIN
    #[default]
    Choose,

    /// Re-enter the PIN just chosen
    Confirm,

    /// Unlock with the stored PIN
    Enter,

    /// Shown after a successful unlock
    Unlocked,
}

impl Screen {
    /// Whether the pad is on screen
    pub fn shows_pad(self) -> bool {
        !matches!(self, Screen::Unlocked)
    }
}

/// Demo host state
pub struct HostState {
    /// Current screen
    pub screen: Screen,

    /// Pad for the current screen
    pub pad: PinPad,

    /// PIN from a matched confirmation, kept in memory only
    pub chosen_pin: Option<String>,

    /// Rejected unlock attempts
    pub failed_attempts: u32,

    /// A verification task is in flight
    pub verifying: bool,

    /// Status message to display
    pub status_message: Option<String>,
}

impl HostState {
    /// Create state for the first screen
    pub fn new(pad: PinPad) -> Self {
        Self {
            screen: Screen::default(),
            pad,
            chosen_pin: None,
            failed_attempts: 0,
            verifying: false,
            status_message: None,
        }
    }

    /// Set a status message
    pub fn set_status(&mut self, message: impl Into<String>) {
        self.status_message = Some(message.into());
    }

    /// Clear the status message
    pub fn clear_status(&mut self) {
        self.status_message = None;
    }
}

impl std::fmt::Debug for HostState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HostState")
            .field("screen", &self.screen)
            .field("chosen_pin", &self.chosen_pin.as_ref().map(|_| "<set>"))
            .field("failed_attempts", &self.failed_attempts)
            .field("verifying", &self.verifying)
            .field("status_message", &self.status_message)
            .finish_non_exhaustive()
    }
}
