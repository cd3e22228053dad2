//! The PIN pad controller
//!
//! [`PinPad`] accumulates digits, decides what a full buffer means for the
//! current [`Mode`], and plays the staged transitions from
//! [`crate::sequences`] through a [`Scheduler`]. It never reads the clock:
//! every operation takes `now`, and the host calls [`PinPad::tick`] from its
//! frame loop. Outbound effects are queued as [`PadEvent`]s.

use std::time::{Duration, Instant};

use crate::digit::{Digit, Key};
use crate::error::{PadError, Result};
use crate::mode::{Mode, Status};
use crate::sequences;
use crate::session::{DeleteTint, SessionState};
use crate::timeline::{Completion, Due, Effect, Scheduler, Sequence};
use crate::view::{self, PadTexts, ViewModel, Visuals};

/// Configuration a host supplies for one pad
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PadProps {
    pub mode: Mode,
    /// Digits required for a complete entry
    pub password_length: usize,
    /// Status the host reports for the last entry
    pub status: Status,
    pub texts: PadTexts,
}

/// Something the host has to act on
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum PadEvent {
    /// The entry is finished; an empty code reports a rejected confirmation
    Completed(String),
    /// Vibrate for the given duration
    Vibrate(Duration),
}

/// What a full buffer leads to
enum Outcome {
    Accept,
    Reject,
    Forward,
}

/// A numeric PIN pad instance
#[derive(Debug)]
pub struct PinPad {
    props: PadProps,
    state: SessionState,
    scheduler: Scheduler,
    visuals: Visuals,
    events: Vec<PadEvent>,
}

impl PinPad {
    /// Create a pad; content fades in from `now`
    pub fn new(props: PadProps, now: Instant) -> Result<Self> {
        if props.password_length == 0 {
            return Err(PadError::InvalidLength(props.password_length));
        }
        let state = SessionState::default();
        let visuals = Visuals::new(&state, props.password_length, now);
        tracing::debug!(
            mode = props.mode.name(),
            length = props.password_length,
            "pin pad created"
        );
        Ok(Self {
            props,
            state,
            scheduler: Scheduler::new(),
            visuals,
            events: Vec::new(),
        })
    }

    pub fn props(&self) -> &PadProps {
        &self.props
    }

    pub fn mode(&self) -> &Mode {
        &self.props.mode
    }

    pub fn state(&self) -> &SessionState {
        &self.state
    }

    /// Digits entered so far
    pub fn entered(&self) -> &str {
        &self.state.buffer
    }

    pub fn is_full(&self) -> bool {
        self.state.len() >= self.props.password_length
    }

    /// Whether digit keys accept input
    ///
    /// A failed attempt on screen keeps them enabled so the next digit can
    /// start a new attempt.
    pub fn digits_enabled(&self) -> bool {
        let blocked_by_error = self.state.error_visible && !self.state.failed_attempt_visible;
        !(self.is_full() || blocked_by_error || self.state.rejection_cycling)
    }

    /// Whether the delete key accepts input
    ///
    /// A full buffer still takes a delete, so a pad the host leaves on
    /// screen after a fill is never stuck.
    pub fn delete_enabled(&self) -> bool {
        !self.state.is_empty() && !self.state.rejection_cycling
    }

    /// Append a digit; returns whether it was accepted
    pub fn press_digit(&mut self, digit: Digit, now: Instant) -> bool {
        self.tick(now);
        if !self.digits_enabled() {
            tracing::trace!(digit = %digit, "digit ignored while input is disabled");
            return false;
        }

        if self.state.error_visible && self.state.failed_attempt_visible {
            self.run(sequences::new_attempt(), now);
        }

        self.state.buffer.push(digit.as_char());
        self.sync(now);

        if self.is_full() {
            self.on_full(now);
        }
        true
    }

    /// Remove the last digit; returns whether one was removed
    pub fn press_delete(&mut self, now: Instant) -> bool {
        self.tick(now);
        if !self.delete_enabled() {
            return false;
        }
        self.state.buffer.pop();
        self.sync(now);
        true
    }

    /// Highlight a key while it is held
    pub fn show_underlay(&mut self, key: Key) {
        self.state.selected_key = Some(key);
        if key == Key::Delete {
            self.state.delete_tint = DeleteTint::Shown;
        }
    }

    /// Drop the key highlight
    pub fn hide_underlay(&mut self) {
        self.state.selected_key = None;
        self.state.delete_tint = DeleteTint::Hidden;
    }

    /// Take a new status from the host
    ///
    /// A change into [`Status::Failure`] from any other status plays the
    /// failed-attempt sequence, whatever the mode and buffer.
    pub fn update_status(&mut self, next: Status, now: Instant) {
        self.tick(now);
        let previous = std::mem::replace(&mut self.props.status, next);
        if !previous.is_failure() && next.is_failure() {
            tracing::debug!(mode = self.props.mode.name(), "host reported a failed attempt");
            self.run(sequences::failed_attempt(), now);
        }
    }

    /// Apply every step due at or before `now`
    pub fn tick(&mut self, now: Instant) {
        while let Some(due) = self.scheduler.pop_due(now) {
            self.apply(due);
        }
    }

    /// Drain queued events
    pub fn take_events(&mut self) -> Vec<PadEvent> {
        std::mem::take(&mut self.events)
    }

    /// When the next scheduled step comes due
    pub fn next_deadline(&self) -> Option<Instant> {
        self.scheduler.next_due()
    }

    /// Whether a sequence or fade is still in flight
    pub fn is_animating(&self, now: Instant) -> bool {
        !self.scheduler.is_idle() || !self.visuals.is_settled(now)
    }

    /// Stop all pending transitions, as when the host unmounts the pad
    pub fn unmount(&mut self) {
        self.scheduler.clear();
        self.events.clear();
    }

    /// Snapshot for rendering at `now`
    pub fn view(&self, now: Instant) -> ViewModel {
        let state = &self.state;
        let texts = &self.props.texts;
        // A confirm mismatch raises both flags but reads as a confirmation failure
        let attempt_failed = state.failed_attempt_visible && !state.rejection_cycling;
        ViewModel {
            title: texts.title(attempt_failed, state.error_visible).to_string(),
            subtitle: texts
                .subtitle(state.failed_attempt_visible, state.error_visible)
                .to_string(),
            content_opacity: self.visuals.content(now),
            title_opacity: self.visuals.title_opacity(now),
            error_mix: self.visuals.error_mix(now),
            indicators: view::indicators(state, self.props.password_length),
            shake_offset: state.shake_offset,
            keypad_enabled: self.digits_enabled(),
            keypad_opacity: self.visuals.keypad(now),
            delete_enabled: self.delete_enabled(),
            delete_opacity: self.visuals.delete(now),
            delete_tint: state.delete_tint,
            selected_key: state.selected_key,
            error_visible: state.error_visible,
            failed_attempt_visible: state.failed_attempt_visible,
            entered: state.len(),
            password_length: self.props.password_length,
        }
    }

    fn on_full(&mut self, now: Instant) {
        let entered = self.state.buffer.clone();
        let outcome = match &self.props.mode {
            Mode::Choose => Outcome::Accept,
            Mode::Confirm { previous_pin } if *previous_pin == entered => Outcome::Accept,
            Mode::Confirm { .. } => Outcome::Reject,
            Mode::Enter => Outcome::Forward,
        };

        match outcome {
            Outcome::Accept => {
                tracing::debug!(mode = self.props.mode.name(), "entry accepted");
                self.run(sequences::accept(entered), now);
            }
            Outcome::Reject => {
                tracing::debug!("confirmation does not match");
                self.run(sequences::confirm_mismatch(), now);
            }
            Outcome::Forward => {
                self.complete(entered);
                self.run(sequences::enter_settle(), now);
            }
        }
    }

    fn run(&mut self, sequence: Sequence, now: Instant) {
        self.scheduler.start(sequence, now);
        self.tick(now);
    }

    fn apply(&mut self, due: Due) {
        tracing::trace!(sequence = due.sequence, "step due");
        match due.effect {
            Effect::Patch(patch) => self.state.apply(&patch),
            Effect::Shake => self.scheduler.start(sequences::shake(), due.at),
            Effect::Complete(Completion::Snapshot(code)) => self.complete(code),
            Effect::Complete(Completion::CurrentBuffer) => {
                let code = self.state.buffer.clone();
                self.complete(code);
            }
            Effect::Vibrate(duration) => self.events.push(PadEvent::Vibrate(duration)),
            Effect::Idle => {}
        }
        self.sync(due.at);
    }

    fn complete(&mut self, code: String) {
        tracing::info!(
            mode = self.props.mode.name(),
            digits = code.len(),
            "pin entry completed"
        );
        self.events.push(PadEvent::Completed(code));
    }

    fn sync(&mut self, now: Instant) {
        self.visuals
            .sync(&self.state, self.props.password_length, now);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn props(mode: Mode, length: usize) -> PadProps {
        PadProps {
            mode,
            password_length: length,
            status: Status::Initial,
            texts: PadTexts {
                sentence_title: "Choose a PIN".to_string(),
                subtitle: "four digits".to_string(),
                title_attempt_failed: "Incorrect PIN".to_string(),
                title_confirm_failed: "Your entries did not match".to_string(),
                subtitle_error: "Please try again".to_string(),
            },
        }
    }

    fn digit(c: char) -> Digit {
        Digit::from_char(c).unwrap()
    }

    #[test]
    fn test_zero_length_rejected() {
        let err = PinPad::new(props(Mode::Choose, 0), Instant::now()).unwrap_err();
        assert_eq!(err, PadError::InvalidLength(0));
    }

    #[test]
    fn test_delete_removes_last_digit() {
        let t0 = Instant::now();
        let mut pad = PinPad::new(props(Mode::Choose, 4), t0).unwrap();

        assert!(!pad.press_delete(t0));
        pad.press_digit(digit('1'), t0);
        pad.press_digit(digit('2'), t0);
        assert!(pad.press_delete(t0));
        assert_eq!(pad.entered(), "1");
    }

    #[test]
    fn test_underlay_tints_delete() {
        let mut pad = PinPad::new(props(Mode::Choose, 4), Instant::now()).unwrap();

        pad.show_underlay(Key::Delete);
        assert_eq!(pad.state().delete_tint, DeleteTint::Shown);
        assert_eq!(pad.state().selected_key, Some(Key::Delete));

        pad.hide_underlay();
        assert_eq!(pad.state().delete_tint, DeleteTint::Hidden);
        assert_eq!(pad.state().selected_key, None);
    }

    #[test]
    fn test_full_buffer_disables_digits_only() {
        let t0 = Instant::now();
        let mut pad = PinPad::new(props(Mode::Choose, 2), t0).unwrap();

        pad.press_digit(digit('1'), t0);
        pad.press_digit(digit('2'), t0);

        assert!(!pad.digits_enabled());
        assert!(!pad.press_digit(digit('3'), t0));
        assert_eq!(pad.entered(), "12");

        assert!(pad.delete_enabled());
        assert!(pad.press_delete(t0));
        assert_eq!(pad.entered(), "1");
        assert!(pad.digits_enabled());
    }

    #[test]
    fn test_content_fades_in() {
        let t0 = Instant::now();
        let pad = PinPad::new(props(Mode::Enter, 4), t0).unwrap();

        assert_eq!(pad.view(t0).content_opacity, 0.0);
        assert!(pad.is_animating(t0));
        assert_eq!(pad.view(t0 + Duration::from_millis(200)).content_opacity, 1.0);
        assert!(!pad.is_animating(t0 + Duration::from_millis(200)));
    }

    #[test]
    fn test_unmount_drops_pending_completion() {
        let t0 = Instant::now();
        let mut pad = PinPad::new(props(Mode::Choose, 1), t0).unwrap();

        pad.press_digit(digit('7'), t0);
        pad.unmount();
        pad.tick(t0 + Duration::from_secs(2));

        assert!(pad.take_events().is_empty());
    }
}
