//! Custom renderer overrides
//!
//! A host can replace any part of the pad with its own drawing code. Each
//! renderer gets the cell it owns and the state needed to draw it the way
//! the built-in one would. Input still arrives through the pad itself, so
//! a replaced button only changes how the key looks.

use std::fmt;

use pincode_core::{DeleteTint, Digit, ViewModel};
use ratatui::prelude::*;

/// What a numeric button renderer needs
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct KeyCap {
    pub digit: Digit,
    /// Held under the pointer or just pressed
    pub selected: bool,
    /// Accepts input
    pub enabled: bool,
    pub opacity: f32,
}

/// What a delete button renderer needs
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DeleteCap {
    pub enabled: bool,
    pub opacity: f32,
    pub tint: DeleteTint,
}

pub type ViewRenderer = Box<dyn Fn(&mut Frame, Rect, &ViewModel)>;
pub type ButtonRenderer = Box<dyn Fn(&mut Frame, Rect, &KeyCap)>;
pub type DeleteRenderer = Box<dyn Fn(&mut Frame, Rect, &DeleteCap)>;

/// Optional replacements for the built-in renderers
#[derive(Default)]
pub struct Renderers {
    pub title: Option<ViewRenderer>,
    pub subtitle: Option<ViewRenderer>,
    pub indicators: Option<ViewRenderer>,
    pub button: Option<ButtonRenderer>,
    pub delete: Option<DeleteRenderer>,
}

impl Renderers {
    pub fn with_title(mut self, f: impl Fn(&mut Frame, Rect, &ViewModel) + 'static) -> Self {
        self.title = Some(Box::new(f));
        self
    }

    pub fn with_subtitle(mut self, f: impl Fn(&mut Frame, Rect, &ViewModel) + 'static) -> Self {
        self.subtitle = Some(Box::new(f));
        self
    }

    pub fn with_indicators(mut self, f: impl Fn(&mut Frame, Rect, &ViewModel) + 'static) -> Self {
        self.indicators = Some(Box::new(f));
        self
    }

    pub fn with_button(mut self, f: impl Fn(&mut Frame, Rect, &KeyCap) + 'static) -> Self {
        self.button = Some(Box::new(f));
        self
    }

    pub fn with_delete(mut self, f: impl Fn(&mut Frame, Rect, &DeleteCap) + 'static) -> Self {
        self.delete = Some(Box::new(f));
        self
    }
}

impl fmt::Debug for Renderers {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Renderers")
            .field("title", &self.title.is_some())
            .field("subtitle", &self.subtitle.is_some())
            .field("indicators", &self.indicators.is_some())
            .field("button", &self.button.is_some())
            .field("delete", &self.delete.is_some())
            .finish()
    }
}
