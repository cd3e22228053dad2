//! Delete button

use pincode_core::DeleteTint;
use ratatui::prelude::*;
use ratatui::widgets::Paragraph;

use crate::ui::renderers::DeleteCap;
use crate::ui::style::ResolvedStyle;
use crate::ui::theme::fade;

/// Draw the delete button: optional icon above its label
pub fn draw_delete(frame: &mut Frame, area: Rect, cap: &DeleteCap, style: &ResolvedStyle) {
    if area.is_empty() {
        return;
    }

    let tint = match cap.tint {
        DeleteTint::Shown => style.delete_shown,
        DeleteTint::Hidden => style.delete_hidden,
    };
    let text_style = Style::default()
        .fg(fade(tint, style.background, cap.opacity))
        .bg(style.background);

    let mut lines = Vec::with_capacity(2);
    if let Some(icon) = &style.delete_icon {
        lines.push(Line::from(icon.clone()));
    }
    lines.push(Line::from(style.delete_text.clone()));

    let height = (lines.len() as u16).min(area.height);
    let top = area.y + area.height.saturating_sub(height) / 2;
    let content = Paragraph::new(lines)
        .style(text_style)
        .alignment(Alignment::Center);
    frame.render_widget(content, Rect::new(area.x, top, area.width, height));
}
