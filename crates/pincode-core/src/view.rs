//! Renderer-agnostic view model
//!
//! Everything a renderer needs to draw one frame of the pad: resolved
//! texts, indicator states, input gating and the current values of every
//! fade. Renderers only map these values onto their own primitives.

use std::time::{Duration, Instant};

use crate::digit::Key;
use crate::session::{DeleteTint, SessionState};
use crate::tween::Tween;

/// Opacity of title and subtitle while an error is shown
pub const ERROR_TITLE_OPACITY: f32 = 0.75;
/// Opacity of dimmed keys and the idle delete button
pub const DIMMED_OPACITY: f32 = 0.5;

const FADE: Duration = Duration::from_millis(200);
const DELETE_FADE: Duration = Duration::from_millis(400);

/// Texts shown above the indicators
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PadTexts {
    pub sentence_title: String,
    pub subtitle: String,
    pub title_attempt_failed: String,
    pub title_confirm_failed: String,
    pub subtitle_error: String,
}

impl PadTexts {
    /// Title for the given flags: failed attempt, then confirm failure, then default
    pub fn title(&self, failed_attempt: bool, error: bool) -> &str {
        if failed_attempt && !self.title_attempt_failed.is_empty() {
            &self.title_attempt_failed
        } else if error && !self.title_confirm_failed.is_empty() {
            &self.title_confirm_failed
        } else {
            &self.sentence_title
        }
    }

    /// Subtitle for the given flags
    pub fn subtitle(&self, failed_attempt: bool, error: bool) -> &str {
        if failed_attempt || error {
            &self.subtitle_error
        } else {
            &self.subtitle
        }
    }
}

/// One circle in the indicator row
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Indicator {
    /// Drawn at full size
    pub filled: bool,
    /// Drawn in the error colour
    pub error: bool,
}

/// Snapshot of everything needed to draw the pad
#[derive(Clone, Debug, PartialEq)]
pub struct ViewModel {
    pub title: String,
    pub subtitle: String,
    /// Whole-content opacity, 0 while transitioning
    pub content_opacity: f32,
    /// Title and subtitle opacity
    pub title_opacity: f32,
    /// Blend from normal (0) to error (1) colours for title and subtitle
    pub error_mix: f32,
    pub indicators: Vec<Indicator>,
    /// Indicator row displacement, fraction of the shake reference width
    pub shake_offset: f32,
    pub keypad_enabled: bool,
    pub keypad_opacity: f32,
    pub delete_enabled: bool,
    pub delete_opacity: f32,
    pub delete_tint: DeleteTint,
    pub selected_key: Option<Key>,
    pub error_visible: bool,
    pub failed_attempt_visible: bool,
    pub entered: usize,
    pub password_length: usize,
}

impl ViewModel {
    /// Whether a key is highlighted
    pub fn is_selected(&self, key: Key) -> bool {
        self.selected_key == Some(key)
    }
}

/// Indicator states for the current session
pub fn indicators(state: &SessionState, password_length: usize) -> Vec<Indicator> {
    (0..password_length)
        .map(|i| Indicator {
            filled: state.error_visible || (i < state.len() && !state.transitioning),
            error: state.error_visible,
        })
        .collect()
}

/// Fades driven by session state
#[derive(Clone, Debug)]
pub(crate) struct Visuals {
    content: Tween,
    title_opacity: Tween,
    error_mix: Tween,
    keypad: Tween,
    delete: Tween,
}

impl Visuals {
    /// Content fades in on creation; everything else starts at rest
    pub(crate) fn new(state: &SessionState, password_length: usize, now: Instant) -> Self {
        let targets = Targets::of(state, password_length);
        Self {
            content: Tween::animate(0.0, targets.content, FADE, now),
            title_opacity: Tween::settled(targets.title_opacity, FADE, now),
            error_mix: Tween::settled(targets.error_mix, FADE, now),
            keypad: Tween::settled(targets.keypad, FADE, now),
            delete: Tween::settled(targets.delete, DELETE_FADE, now),
        }
    }

    /// Point every fade at the value the current state calls for
    pub(crate) fn sync(&mut self, state: &SessionState, password_length: usize, now: Instant) {
        let targets = Targets::of(state, password_length);
        self.content.retarget(targets.content, now);
        self.title_opacity.retarget(targets.title_opacity, now);
        self.error_mix.retarget(targets.error_mix, now);
        self.keypad.retarget(targets.keypad, now);
        self.delete.retarget(targets.delete, now);
    }

    pub(crate) fn is_settled(&self, now: Instant) -> bool {
        [
            &self.content,
            &self.title_opacity,
            &self.error_mix,
            &self.keypad,
            &self.delete,
        ]
        .iter()
        .all(|t| t.is_settled(now))
    }

    pub(crate) fn content(&self, now: Instant) -> f32 {
        self.content.value(now)
    }

    pub(crate) fn title_opacity(&self, now: Instant) -> f32 {
        self.title_opacity.value(now)
    }

    pub(crate) fn error_mix(&self, now: Instant) -> f32 {
        self.error_mix.value(now)
    }

    pub(crate) fn keypad(&self, now: Instant) -> f32 {
        self.keypad.value(now)
    }

    pub(crate) fn delete(&self, now: Instant) -> f32 {
        self.delete.value(now)
    }
}

struct Targets {
    content: f32,
    title_opacity: f32,
    error_mix: f32,
    keypad: f32,
    delete: f32,
}

impl Targets {
    fn of(state: &SessionState, password_length: usize) -> Self {
        let alerting = state.error_visible || state.failed_attempt_visible;
        let dim_keys = (state.error_visible && !state.failed_attempt_visible)
            || state.rejection_cycling;
        let dim_delete = state.is_empty() || state.len() == password_length;

        Self {
            content: if state.transitioning { 0.0 } else { 1.0 },
            title_opacity: if alerting { ERROR_TITLE_OPACITY } else { 1.0 },
            error_mix: if alerting { 1.0 } else { 0.0 },
            keypad: if dim_keys { DIMMED_OPACITY } else { 1.0 },
            delete: if dim_delete { DIMMED_OPACITY } else { 1.0 },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn texts() -> PadTexts {
        PadTexts {
            sentence_title: "Enter PIN".to_string(),
            subtitle: "to unlock".to_string(),
            title_attempt_failed: "Wrong PIN".to_string(),
            title_confirm_failed: "PINs differ".to_string(),
            subtitle_error: "try again".to_string(),
        }
    }

    #[test]
    fn test_title_fallback_chain() {
        let texts = texts();
        assert_eq!(texts.title(true, true), "Wrong PIN");
        assert_eq!(texts.title(false, true), "PINs differ");
        assert_eq!(texts.title(false, false), "Enter PIN");

        let blank = PadTexts {
            title_attempt_failed: String::new(),
            ..texts
        };
        assert_eq!(blank.title(true, true), "PINs differ");
        assert_eq!(blank.title(true, false), "Enter PIN");
    }

    #[test]
    fn test_subtitle_switches_on_error() {
        let texts = texts();
        assert_eq!(texts.subtitle(false, false), "to unlock");
        assert_eq!(texts.subtitle(true, false), "try again");
        assert_eq!(texts.subtitle(false, true), "try again");
    }

    #[test]
    fn test_indicators_follow_buffer() {
        let state = SessionState {
            buffer: "12".to_string(),
            ..SessionState::default()
        };
        let filled: Vec<bool> = indicators(&state, 4).iter().map(|i| i.filled).collect();
        assert_eq!(filled, vec![true, true, false, false]);
    }

    #[test]
    fn test_indicators_on_error() {
        let state = SessionState {
            error_visible: true,
            ..SessionState::default()
        };
        assert!(indicators(&state, 4).iter().all(|i| i.filled && i.error));
    }

    #[test]
    fn test_indicators_hidden_while_transitioning() {
        let state = SessionState {
            buffer: "1234".to_string(),
            transitioning: true,
            ..SessionState::default()
        };
        assert!(indicators(&state, 4).iter().all(|i| !i.filled));
    }
}
