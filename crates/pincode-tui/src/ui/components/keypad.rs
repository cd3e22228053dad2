//! Numeric buttons

use ratatui::prelude::*;
use ratatui::widgets::{Block, BorderType, Borders, Paragraph};

use crate::ui::renderers::KeyCap;
use crate::ui::style::ResolvedStyle;
use crate::ui::theme::fade;

/// Draw one numeric button
pub fn draw_button(frame: &mut Frame, area: Rect, cap: &KeyCap, style: &ResolvedStyle) {
    if area.is_empty() {
        return;
    }

    let (fg, bg) = if cap.selected {
        (style.button_title_selected, style.button_overlay)
    } else {
        (style.button_title, style.button_background)
    };
    let surface = Style::default().bg(bg);

    let inner = if style.button_borders {
        let block = Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(fade(style.border, style.background, cap.opacity)))
            .style(surface);
        let inner = block.inner(area);
        frame.render_widget(block, area);
        inner
    } else {
        frame.render_widget(Block::default().style(surface), area);
        area
    };
    if inner.is_empty() {
        return;
    }

    let label_row = Rect::new(inner.x, inner.y + inner.height.saturating_sub(1) / 2, inner.width, 1);
    let label = Paragraph::new(cap.digit.to_string())
        .style(surface.fg(fade(fg, bg, cap.opacity)))
        .alignment(Alignment::Center);
    frame.render_widget(label, label_row);
}
