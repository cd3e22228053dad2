//! Terminal PIN pad
//!
//! Renders a [`pincode_core::PinPad`] with ratatui: title, indicator row and
//! a 3×4 keypad, each part replaceable through [`ui::renderers::Renderers`].
//! The [`App`] is a small host that walks the pad through choosing,
//! confirming and entering a PIN.

pub mod app;
pub mod ui;

pub use app::App;
