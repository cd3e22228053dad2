//! Property-based tests for the PIN pad using proptest
//!
//! These tests verify invariants that should hold for any key sequence.

use std::time::{Duration, Instant};

use pincode_core::{Digit, Mode, PadEvent, PadProps, PadTexts, PinPad, Status};
use proptest::prelude::*;

// ============================================
// Strategies
// ============================================

#[derive(Clone, Debug)]
enum Press {
    Digit(u8),
    Delete,
    Fail,
}

fn arb_press() -> impl Strategy<Value = Press> {
    prop_oneof![
        8 => (0u8..=9).prop_map(Press::Digit),
        2 => Just(Press::Delete),
        1 => Just(Press::Fail),
    ]
}

fn arb_mode(length: usize) -> impl Strategy<Value = Mode> {
    prop_oneof![
        Just(Mode::Choose),
        Just(Mode::Enter),
        proptest::collection::vec(0u8..=9, length)
            .prop_map(|d| Mode::confirm(d.iter().map(|v| char::from(b'0' + v)).collect::<String>())),
    ]
}

fn arb_code(length: usize) -> impl Strategy<Value = String> {
    proptest::collection::vec(0u8..=9, length)
        .prop_map(|d| d.iter().map(|v| char::from(b'0' + v)).collect())
}

fn pad(mode: Mode, length: usize, now: Instant) -> PinPad {
    PinPad::new(
        PadProps {
            mode,
            password_length: length,
            status: Status::Initial,
            texts: PadTexts {
                sentence_title: "title".to_string(),
                subtitle: "subtitle".to_string(),
                title_attempt_failed: "failed".to_string(),
                title_confirm_failed: "mismatch".to_string(),
                subtitle_error: "error".to_string(),
            },
        },
        now,
    )
    .unwrap()
}

fn completions(events: Vec<PadEvent>) -> Vec<String> {
    events
        .into_iter()
        .filter_map(|e| match e {
            PadEvent::Completed(code) => Some(code),
            PadEvent::Vibrate(_) => None,
        })
        .collect()
}

// ============================================
// Properties
// ============================================

proptest! {
    #[test]
    fn prop_short_entries_never_complete(
        (length, mode, digits) in (2usize..=8).prop_flat_map(|length| {
            (Just(length), arb_mode(length), proptest::collection::vec(0u8..=9, 0..length))
        })
    ) {
        let t0 = Instant::now();
        let mut pad = pad(mode, length, t0);

        for d in digits {
            pad.press_digit(Digit::new(d).unwrap(), t0);
        }
        pad.tick(t0 + Duration::from_secs(30));

        prop_assert!(completions(pad.take_events()).is_empty());
    }

    #[test]
    fn prop_buffer_never_exceeds_length(
        length in 1usize..=8,
        mode_seed in 0u8..3,
        presses in proptest::collection::vec((arb_press(), 0u64..800), 0..60)
    ) {
        let mode = match mode_seed {
            0 => Mode::Choose,
            1 => Mode::Enter,
            _ => Mode::confirm("1".repeat(length)),
        };
        let t0 = Instant::now();
        let mut now = t0;
        let mut pad = pad(mode, length, t0);

        for (press, gap) in presses {
            now += Duration::from_millis(gap);
            match press {
                Press::Digit(d) => { pad.press_digit(Digit::new(d).unwrap(), now); }
                Press::Delete => { pad.press_delete(now); }
                Press::Fail => {
                    pad.update_status(Status::Failure, now);
                    pad.update_status(Status::Initial, now);
                }
            }
            prop_assert!(pad.entered().len() <= length);
            pad.tick(now + Duration::from_millis(35));
            prop_assert!(pad.entered().len() <= length);
        }
    }

    #[test]
    fn prop_delete_removes_one_trailing_digit(
        (length, code) in (1usize..=8).prop_flat_map(|length| {
            (Just(length), (0..=length).prop_flat_map(arb_code))
        }),
        mode_seed in 0u8..2
    ) {
        // Confirm mode is left out: a full mismatching buffer locks input
        let mode = if mode_seed == 0 { Mode::Choose } else { Mode::Enter };
        let t0 = Instant::now();
        let mut pad = pad(mode, length, t0);
        for c in code.chars() {
            pad.press_digit(Digit::from_char(c).unwrap(), t0);
        }

        let removed = pad.press_delete(t0);

        prop_assert_eq!(removed, !code.is_empty());
        let expected = if code.is_empty() { "" } else { &code[..code.len() - 1] };
        prop_assert_eq!(pad.entered(), expected);
    }

    #[test]
    fn prop_choose_reports_exact_entry_once(
        code in (1usize..=8).prop_flat_map(arb_code)
    ) {
        let t0 = Instant::now();
        let mut pad = pad(Mode::Choose, code.len(), t0);
        for c in code.chars() {
            pad.press_digit(Digit::from_char(c).unwrap(), t0);
        }
        // Keys pressed after the fill are ignored
        pad.press_digit(Digit::ZERO, t0);
        pad.tick(t0 + Duration::from_secs(5));

        prop_assert_eq!(completions(pad.take_events()), vec![code]);
    }

    #[test]
    fn prop_confirm_mismatch_reports_empty(
        (expected, entered) in (1usize..=8).prop_flat_map(|l| (arb_code(l), arb_code(l)))
    ) {
        prop_assume!(expected != entered);
        let t0 = Instant::now();
        let mut pad = pad(Mode::confirm(expected), entered.len(), t0);
        for c in entered.chars() {
            pad.press_digit(Digit::from_char(c).unwrap(), t0);
        }
        pad.tick(t0 + Duration::from_secs(5));

        prop_assert_eq!(completions(pad.take_events()), vec![String::new()]);
        prop_assert!(!pad.state().error_visible);
        prop_assert!(!pad.state().failed_attempt_visible);
    }
}
