//! Visual theme and color palette

use ratatui::style::{Color, Modifier, Style};

/// Default pad palette
///
/// Every colour here is the fallback for an optional override in
/// [`crate::ui::style::PadStyle`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Theme {
    // Surface
    pub background: Color,
    pub button_background: Color,

    // Indicators
    pub password: Color,
    pub password_error: Color,

    // Texts
    pub title: Color,
    pub title_error: Color,
    pub subtitle: Color,
    pub subtitle_error: Color,

    // Keys
    pub button_title: Color,
    pub button_title_selected: Color,
    pub button_overlay: Color,

    // Delete button
    pub delete_hidden: Color,
    pub delete_shown: Color,

    // Chrome
    pub border: Color,
    pub text_muted: Color,
    pub success: Color,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            background: Color::Rgb(33, 33, 33),        // #212121
            button_background: Color::Rgb(55, 55, 55), // #373737

            password: Color::Rgb(137, 187, 207),       // #89BBCF - turquoise
            password_error: Color::Rgb(244, 67, 54),   // #F44336 - alert

            title: Color::Rgb(189, 189, 189),          // #BDBDBD
            title_error: Color::Rgb(244, 67, 54),
            subtitle: Color::Rgb(158, 158, 158),       // #9E9E9E
            subtitle_error: Color::Rgb(244, 67, 54),

            button_title: Color::Rgb(189, 189, 189),
            button_title_selected: Color::Rgb(250, 250, 250), // #FAFAFA
            button_overlay: Color::Rgb(137, 187, 207),

            delete_hidden: Color::Rgb(211, 213, 218),  // #D3D5DA
            delete_shown: Color::Rgb(137, 187, 207),

            border: Color::Rgb(66, 66, 66),            // #424242
            text_muted: Color::Rgb(117, 117, 117),     // #757575
            success: Color::Rgb(76, 175, 80),          // #4CAF50
        }
    }
}

impl Theme {
    /// Get base surface style
    pub fn surface(&self) -> Style {
        Style::default().bg(self.background)
    }

    /// Get border style
    pub fn border(&self) -> Style {
        Style::default().fg(self.border)
    }

    /// Get muted text style
    pub fn text_muted(&self) -> Style {
        Style::default().fg(self.text_muted)
    }

    /// Get success style
    pub fn success(&self) -> Style {
        Style::default()
            .fg(self.success)
            .add_modifier(Modifier::BOLD)
    }

    /// Create a high-contrast theme variant
    pub fn high_contrast() -> Self {
        Self {
            background: Color::Black,
            button_background: Color::Black,
            title: Color::White,
            subtitle: Color::White,
            button_title: Color::White,
            border: Color::White,
            text_muted: Color::Gray,
            ..Self::default()
        }
    }
}

/// Blend `from` towards `to`; `t` of 0 gives `from`, 1 gives `to`
///
/// Non-RGB colours cannot be blended and switch over at the midpoint.
pub fn mix(from: Color, to: Color, t: f32) -> Color {
    let t = t.clamp(0.0, 1.0);
    match (from, to) {
        (Color::Rgb(r1, g1, b1), Color::Rgb(r2, g2, b2)) => {
            let lerp = |a: u8, b: u8| (a as f32 + (b as f32 - a as f32) * t).round() as u8;
            Color::Rgb(lerp(r1, r2), lerp(g1, g2), lerp(b1, b2))
        }
        _ if t < 0.5 => from,
        _ => to,
    }
}

/// Fade a foreground colour into the background by `opacity`
pub fn fade(color: Color, background: Color, opacity: f32) -> Color {
    mix(background, color, opacity)
}
