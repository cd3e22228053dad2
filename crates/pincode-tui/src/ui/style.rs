//! Style overrides for the pad
//!
//! [`PadStyle`] is what a host or config file supplies: every field is
//! optional. [`ResolvedStyle`] fills the gaps from a [`Theme`] once, when a
//! screen is built, so drawing never has to chase fallbacks.

use std::str::FromStr;

use ratatui::style::Color;
use serde::{Deserialize, Serialize};

use super::Theme;

/// Default delete label
pub const DELETE_TEXT: &str = "delete";
/// Default delete icon
pub const DELETE_ICON: &str = "⌫";

/// Widest button, in columns
pub const MAX_BUTTON_WIDTH: u16 = 32;
/// Tallest button, in rows
pub const MAX_BUTTON_HEIGHT: u16 = 16;
/// Largest gap between buttons or indicators
pub const MAX_SPACING: u16 = 16;

/// Optional style overrides; colours are names or `#rrggbb`
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PadStyle {
    pub color_password: Option<String>,
    pub color_password_error: Option<String>,
    pub numbers_button_overlay_color: Option<String>,
    pub color_title: Option<String>,
    pub color_title_error: Option<String>,
    pub color_subtitle: Option<String>,
    pub color_subtitle_error: Option<String>,
    pub color_button_title: Option<String>,
    pub color_button_title_selected: Option<String>,
    pub delete_color_show_underlay: Option<String>,
    pub delete_color_hide_underlay: Option<String>,
    pub delete_icon: Option<String>,
    pub delete_text: Option<String>,
    pub delete_icon_disabled: bool,
    pub circle_empty: Option<char>,
    pub circle_full: Option<char>,
    pub circle_spacing: Option<u16>,
    pub button_width: Option<u16>,
    pub button_height: Option<u16>,
    pub column_spacing: Option<u16>,
    pub row_spacing: Option<u16>,
    pub button_borders: Option<bool>,
}

/// Style with every value decided
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ResolvedStyle {
    pub background: Color,
    pub button_background: Color,
    pub password: Color,
    pub password_error: Color,
    pub button_overlay: Color,
    pub title: Color,
    pub title_error: Color,
    pub subtitle: Color,
    pub subtitle_error: Color,
    pub button_title: Color,
    pub button_title_selected: Color,
    pub delete_shown: Color,
    pub delete_hidden: Color,
    pub delete_icon: Option<String>,
    pub delete_text: String,
    pub circle_empty: char,
    pub circle_full: char,
    pub circle_spacing: u16,
    pub button_width: u16,
    pub button_height: u16,
    pub column_spacing: u16,
    pub row_spacing: u16,
    pub button_borders: bool,
    pub border: Color,
}

impl ResolvedStyle {
    /// Resolve overrides against the theme
    pub fn resolve(style: &PadStyle, theme: &Theme) -> Self {
        let color = |value: &Option<String>, fallback: Color| match value {
            Some(raw) => parse_color(raw).unwrap_or_else(|| {
                tracing::warn!(color = %raw, "Unrecognised colour override, using default");
                fallback
            }),
            None => fallback,
        };

        let delete_icon = if style.delete_icon_disabled {
            None
        } else {
            Some(
                style
                    .delete_icon
                    .clone()
                    .unwrap_or_else(|| DELETE_ICON.to_string()),
            )
        };

        Self {
            background: theme.background,
            button_background: theme.button_background,
            password: color(&style.color_password, theme.password),
            password_error: color(&style.color_password_error, theme.password_error),
            button_overlay: color(&style.numbers_button_overlay_color, theme.button_overlay),
            title: color(&style.color_title, theme.title),
            title_error: color(&style.color_title_error, theme.title_error),
            subtitle: color(&style.color_subtitle, theme.subtitle),
            subtitle_error: color(&style.color_subtitle_error, theme.subtitle_error),
            button_title: color(&style.color_button_title, theme.button_title),
            button_title_selected: color(
                &style.color_button_title_selected,
                theme.button_title_selected,
            ),
            delete_shown: color(&style.delete_color_show_underlay, theme.delete_shown),
            delete_hidden: color(&style.delete_color_hide_underlay, theme.delete_hidden),
            delete_icon,
            delete_text: style
                .delete_text
                .clone()
                .unwrap_or_else(|| DELETE_TEXT.to_string()),
            circle_empty: style.circle_empty.unwrap_or('•'),
            circle_full: style.circle_full.unwrap_or('●'),
            circle_spacing: style.circle_spacing.unwrap_or(2).min(MAX_SPACING),
            button_width: style.button_width.unwrap_or(7).clamp(3, MAX_BUTTON_WIDTH),
            button_height: style.button_height.unwrap_or(3).clamp(1, MAX_BUTTON_HEIGHT),
            column_spacing: style.column_spacing.unwrap_or(2).min(MAX_SPACING),
            row_spacing: style.row_spacing.unwrap_or(0).min(MAX_SPACING),
            button_borders: style.button_borders.unwrap_or(true),
            border: theme.border,
        }
    }
}

impl Default for ResolvedStyle {
    fn default() -> Self {
        Self::resolve(&PadStyle::default(), &Theme::default())
    }
}

fn parse_color(raw: &str) -> Option<Color> {
    Color::from_str(raw.trim()).ok()
}
