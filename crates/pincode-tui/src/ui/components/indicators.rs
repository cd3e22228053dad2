//! Row of circles showing how many digits were entered

use pincode_core::ViewModel;
use ratatui::prelude::*;
use ratatui::widgets::Paragraph;
use unicode_width::UnicodeWidthChar;

use crate::ui::style::ResolvedStyle;
use crate::ui::theme::fade;

/// Opacity of an indicator that is not filled
const EMPTY_OPACITY: f32 = 0.5;

/// Columns the row is displaced by; the reference width is a third of the area
pub fn shake_columns(offset: f32, width: u16) -> i32 {
    (offset * f32::from(width) / 3.0).round() as i32
}

/// Draw the indicator row, displaced by the current shake offset
pub fn draw_indicators(frame: &mut Frame, area: Rect, view: &ViewModel, style: &ResolvedStyle) {
    if area.is_empty() || view.indicators.is_empty() {
        return;
    }

    let gap = " ".repeat(style.circle_spacing as usize);
    let mut spans = Vec::with_capacity(view.indicators.len() * 2);
    let mut width: u16 = 0;

    for (i, indicator) in view.indicators.iter().enumerate() {
        if i > 0 {
            spans.push(Span::styled(gap.clone(), Style::default().bg(style.background)));
            width = width.saturating_add(style.circle_spacing);
        }
        let glyph = if indicator.filled {
            style.circle_full
        } else {
            style.circle_empty
        };
        let color = if indicator.error {
            style.password_error
        } else {
            style.password
        };
        let opacity = if indicator.filled { 1.0 } else { EMPTY_OPACITY };
        spans.push(Span::styled(
            glyph.to_string(),
            Style::default()
                .fg(fade(color, style.background, opacity))
                .bg(style.background),
        ));
        width = width.saturating_add(glyph.width().unwrap_or(1) as u16);
    }

    let width = width.min(area.width);
    let centred = i32::from(area.x) + i32::from((area.width - width) / 2);
    let max_x = i32::from(area.x) + i32::from(area.width - width);
    let x = (centred + shake_columns(view.shake_offset, area.width)).clamp(i32::from(area.x), max_x);

    let row = Rect::new(x as u16, area.y, width, 1);
    frame.render_widget(Paragraph::new(Line::from(spans)), row);
}
