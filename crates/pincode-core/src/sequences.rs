//! The pad's staged transitions and their timings

use std::time::Duration;

use crate::session::StatePatch;
use crate::timeline::{Completion, Effect, Sequence};

/// Wait before fading out an accepted entry
pub const ACCEPT_FADE_DELAY: Duration = Duration::from_millis(400);
/// Wait between the fade and handing the entry to the host
pub const ACCEPT_COMPLETE_DELAY: Duration = Duration::from_millis(500);
/// Fade before error state appears
pub const ERROR_FADE_IN: Duration = Duration::from_millis(300);
/// How long a confirm mismatch stays on screen
pub const ERROR_HOLD: Duration = Duration::from_millis(3000);
/// Each stage of the fade out after a confirm mismatch
pub const ERROR_FADE_OUT: Duration = Duration::from_millis(200);
/// Fade when a new attempt clears a failed one
pub const NEW_ATTEMPT_FADE: Duration = Duration::from_millis(200);
/// Time given to the host to react in enter mode
pub const ENTER_SETTLE: Duration = Duration::from_millis(300);
/// Cadence of the shake
pub const SHAKE_STEP: Duration = Duration::from_millis(70);
/// Vibration requested when the shake starts
pub const SHAKE_VIBRATION: Duration = Duration::from_millis(500);
/// Shake displacements as fractions of the reference width
pub const SHAKE_OFFSETS: [f32; 7] = [1.0, -1.0, 0.5, -0.5, 0.25, -0.25, 0.0];

pub const ACCEPT: &str = "accept";
pub const CONFIRM_MISMATCH: &str = "confirm-mismatch";
pub const FAILED_ATTEMPT: &str = "failed-attempt";
pub const NEW_ATTEMPT: &str = "new-attempt";
pub const ENTER_SETTLE_NAME: &str = "enter-settle";
pub const SHAKE: &str = "shake";

/// Fade the screen, then hand `entered` to the host
pub fn accept(entered: String) -> Sequence {
    Sequence::new(ACCEPT)
        .then(
            ACCEPT_FADE_DELAY,
            Effect::Patch(StatePatch::new().transitioning(true)),
        )
        .then(
            ACCEPT_COMPLETE_DELAY,
            Effect::Complete(Completion::Snapshot(entered)),
        )
}

/// Show the mismatch, shake, hold, fade out and report an empty entry
pub fn confirm_mismatch() -> Sequence {
    Sequence::new(CONFIRM_MISMATCH)
        .and(Effect::Patch(
            StatePatch::new().transitioning(true).rejection_cycling(true),
        ))
        .then(
            ERROR_FADE_IN,
            Effect::Patch(
                StatePatch::new()
                    .error_visible(true)
                    .failed_attempt(true)
                    .transitioning(false)
                    .clear_buffer(),
            ),
        )
        .and(Effect::Shake)
        .then(
            ERROR_HOLD,
            Effect::Patch(StatePatch::new().transitioning(true)),
        )
        .then(
            ERROR_FADE_OUT,
            Effect::Patch(StatePatch::new().error_visible(false).failed_attempt(false)),
        )
        .then(
            ERROR_FADE_OUT,
            Effect::Patch(StatePatch::new().transitioning(false).rejection_cycling(false)),
        )
        .and(Effect::Complete(Completion::CurrentBuffer))
}

/// Show a host-reported failure; it stays up until the next digit
pub fn failed_attempt() -> Sequence {
    Sequence::new(FAILED_ATTEMPT)
        .and(Effect::Patch(StatePatch::new().transitioning(true)))
        .then(
            ERROR_FADE_IN,
            Effect::Patch(
                StatePatch::new()
                    .error_visible(true)
                    .failed_attempt(true)
                    .transitioning(false)
                    .clear_buffer(),
            ),
        )
        .and(Effect::Shake)
}

/// Clear a failed attempt from the screen
pub fn new_attempt() -> Sequence {
    Sequence::new(NEW_ATTEMPT)
        .and(Effect::Patch(StatePatch::new().transitioning(true)))
        .then(
            NEW_ATTEMPT_FADE,
            Effect::Patch(
                StatePatch::new()
                    .transitioning(false)
                    .error_visible(false)
                    .failed_attempt(false),
            ),
        )
}

/// Hold after handing an entry to the host in enter mode
pub fn enter_settle() -> Sequence {
    Sequence::new(ENTER_SETTLE_NAME).then(ENTER_SETTLE, Effect::Idle)
}

/// Vibrate, swing left and right with decaying amplitude, end centred
pub fn shake() -> Sequence {
    SHAKE_OFFSETS.iter().fold(
        Sequence::new(SHAKE).and(Effect::Vibrate(SHAKE_VIBRATION)),
        |sequence, offset| sequence.then(SHAKE_STEP, Effect::Patch(StatePatch::new().shake(*offset))),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_shake_has_seven_moves() {
        let shake = shake();
        let moves: Vec<f32> = shake
            .steps()
            .filter_map(|s| match &s.effect {
                Effect::Patch(p) => p.shake_offset,
                _ => None,
            })
            .collect();
        assert_eq!(moves, SHAKE_OFFSETS.to_vec());
        assert_eq!(shake.total_duration(), SHAKE_STEP * 7);
    }

    #[test]
    fn test_mismatch_timing() {
        let total = confirm_mismatch().total_duration();
        assert_eq!(total, ERROR_FADE_IN + ERROR_HOLD + ERROR_FADE_OUT * 2);
    }

    #[test]
    fn test_accept_timing() {
        assert_eq!(
            accept("1234".to_string()).total_duration(),
            Duration::from_millis(900)
        );
    }
}
