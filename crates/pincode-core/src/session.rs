//! Per-instance session state and the patches that mutate it

use crate::digit::Key;

/// Tint of the delete button, swapped while it is held
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum DeleteTint {
    #[default]
    Hidden,
    Shown,
}

/// Mutable state owned by one pad instance
#[derive(Clone, Debug, Default, PartialEq)]
pub struct SessionState {
    /// Digits entered so far
    pub buffer: String,
    /// Error colours and error texts are shown
    pub error_visible: bool,
    /// A rejected attempt is on screen; the next digit starts a new attempt
    pub failed_attempt_visible: bool,
    /// Content is faded out between stages
    pub transitioning: bool,
    /// A confirm mismatch is playing out; input stays locked until it ends
    pub rejection_cycling: bool,
    /// Key currently highlighted under the pointer
    pub selected_key: Option<Key>,
    /// Delete button tint
    pub delete_tint: DeleteTint,
    /// Horizontal displacement as a signed fraction of the shake reference width
    pub shake_offset: f32,
}

impl SessionState {
    /// Number of digits entered
    pub fn len(&self) -> usize {
        self.buffer.len()
    }

    /// Whether no digit has been entered
    pub fn is_empty(&self) -> bool {
        self.buffer.is_empty()
    }

    /// Apply every field the patch sets
    pub fn apply(&mut self, patch: &StatePatch) {
        if let Some(transitioning) = patch.transitioning {
            self.transitioning = transitioning;
        }
        if let Some(error_visible) = patch.error_visible {
            self.error_visible = error_visible;
        }
        if let Some(failed) = patch.failed_attempt_visible {
            self.failed_attempt_visible = failed;
        }
        if let Some(cycling) = patch.rejection_cycling {
            self.rejection_cycling = cycling;
        }
        if let Some(offset) = patch.shake_offset {
            self.shake_offset = offset;
        }
        if patch.clear_buffer {
            self.buffer.clear();
        }
    }
}

/// A partial update of [`SessionState`]; unset fields are left alone
#[derive(Clone, Debug, Default, PartialEq)]
pub struct StatePatch {
    pub transitioning: Option<bool>,
    pub error_visible: Option<bool>,
    pub failed_attempt_visible: Option<bool>,
    pub rejection_cycling: Option<bool>,
    pub shake_offset: Option<f32>,
    pub clear_buffer: bool,
}

impl StatePatch {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn transitioning(mut self, value: bool) -> Self {
        self.transitioning = Some(value);
        self
    }

    pub fn error_visible(mut self, value: bool) -> Self {
        self.error_visible = Some(value);
        self
    }

    pub fn failed_attempt(mut self, value: bool) -> Self {
        self.failed_attempt_visible = Some(value);
        self
    }

    pub fn rejection_cycling(mut self, value: bool) -> Self {
        self.rejection_cycling = Some(value);
        self
    }

    pub fn shake(mut self, offset: f32) -> Self {
        self.shake_offset = Some(offset);
        self
    }

    pub fn clear_buffer(mut self) -> Self {
        self.clear_buffer = true;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_patch_leaves_unset_fields() {
        let mut state = SessionState {
            buffer: "12".to_string(),
            error_visible: true,
            ..SessionState::default()
        };

        state.apply(&StatePatch::new().transitioning(true));

        assert!(state.transitioning);
        assert!(state.error_visible);
        assert_eq!(state.buffer, "12");
    }

    #[test]
    fn test_patch_clears_buffer() {
        let mut state = SessionState {
            buffer: "1234".to_string(),
            ..SessionState::default()
        };

        state.apply(&StatePatch::new().error_visible(true).failed_attempt(true).clear_buffer());

        assert!(state.is_empty());
        assert!(state.error_visible);
        assert!(state.failed_attempt_visible);
    }
}
