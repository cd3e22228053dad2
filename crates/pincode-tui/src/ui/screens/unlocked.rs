//! Screen shown once the PIN is accepted

use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, Paragraph};

use crate::app::App;
use crate::ui::layout::centered_rect;

/// Draw the unlocked screen
pub fn draw(frame: &mut Frame, area: Rect, app: &App) {
    let theme = &app.theme;

    frame.render_widget(Block::default().style(theme.surface()), area);

    let dialog = centered_rect(50, 40, area);
    let block = Block::default()
        .title(" Unlocked ")
        .title_style(theme.success())
        .borders(Borders::ALL)
        .border_style(theme.border());

    let inner = block.inner(dialog);
    frame.render_widget(block, dialog);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .margin(1)
        .constraints([
            Constraint::Min(1),    // Spacer
            Constraint::Length(1), // Message
            Constraint::Length(1), // Attempts
            Constraint::Min(1),    // Spacer
        ])
        .split(inner);

    let message = Paragraph::new("✓ PIN accepted")
        .style(theme.success())
        .alignment(Alignment::Center);
    frame.render_widget(message, chunks[1]);

    let attempts = match app.state.failed_attempts {
        0 => "First try".to_string(),
        1 => "After 1 failed attempt".to_string(),
        n => format!("After {} failed attempts", n),
    };
    let attempts = Paragraph::new(attempts)
        .style(theme.text_muted())
        .alignment(Alignment::Center);
    frame.render_widget(attempts, chunks[2]);
}
