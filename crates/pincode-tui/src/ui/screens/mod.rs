//! Screens drawn around the pad

pub mod unlocked;
