//! Pincode Core - state machine and timed transitions for a numeric PIN pad
//!
//! This crate holds everything about the pad that does not depend on a
//! rendering surface: digit accumulation, the choose/confirm/enter
//! validation paths, the staged fades and shake, and a view model that a
//! renderer turns into pixels or terminal cells.
//!
//! The pad owns no PIN storage and performs no verification beyond the
//! plain comparison that confirm mode needs.

pub mod digit;
pub mod error;
pub mod mode;
pub mod pad;
pub mod sequences;
pub mod session;
pub mod timeline;
pub mod tween;
pub mod view;

pub use digit::{Digit, Key, KEYPAD_ROWS};
pub use error::{PadError, Result};
pub use mode::{Mode, Status};
pub use pad::{PadEvent, PadProps, PinPad};
pub use session::{DeleteTint, SessionState, StatePatch};
pub use timeline::{Completion, Effect, Scheduler, Sequence, Step};
pub use tween::Tween;
pub use view::{Indicator, PadTexts, ViewModel};
