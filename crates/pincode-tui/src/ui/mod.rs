//! UI rendering

pub mod components;
pub mod layout;
pub mod pad;
pub mod renderers;
pub mod screens;
pub mod style;
pub mod theme;

pub use theme::Theme;

use std::time::Instant;

use ratatui::prelude::*;
use ratatui::widgets::Paragraph;

use crate::app::{App, Screen};
use layout::{render_footer, PadLayout};

/// Main render function - delegates to appropriate screen
///
/// Returns the pad layout when a pad is on screen, for mouse hit-testing.
pub fn render(frame: &mut Frame, app: &App, now: Instant) -> Option<PadLayout> {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(0),    // Body
            Constraint::Length(1), // Status
            Constraint::Length(2), // Footer
        ])
        .split(frame.area());

    let layout = match app.state.screen {
        Screen::Choose | Screen::Confirm | Screen::Enter => {
            let view = app.state.pad.view(now);
            Some(pad::draw(frame, chunks[0], &view, &app.style, &app.renderers))
        }
        Screen::Unlocked => {
            screens::unlocked::draw(frame, chunks[0], app);
            None
        }
    };

    let status = app.state.status_message.as_deref().unwrap_or_default();
    frame.render_widget(
        Paragraph::new(status)
            .style(app.theme.text_muted().bg(app.theme.background))
            .alignment(Alignment::Center),
        chunks[1],
    );

    let hints: &[(&str, &str)] = match app.state.screen {
        Screen::Unlocked => &[("r", "Lock"), ("Esc", "Quit")],
        _ => &[("0-9", "Digit"), ("Backspace", "Delete"), ("Esc", "Quit")],
    };
    render_footer(frame, chunks[2], hints, &app.theme);

    layout
}
