//! Built-in pad renderers

pub mod delete_button;
pub mod indicators;
pub mod keypad;
pub mod title;
