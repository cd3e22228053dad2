//! Title and subtitle

use pincode_core::ViewModel;
use ratatui::prelude::*;
use ratatui::widgets::Paragraph;

use crate::ui::style::ResolvedStyle;
use crate::ui::theme::{fade, mix};

/// Draw the title line
pub fn draw_title(frame: &mut Frame, area: Rect, view: &ViewModel, style: &ResolvedStyle) {
    let color = mix(style.title, style.title_error, view.error_mix);
    draw_line(frame, area, &view.title, color, view, style, Modifier::BOLD);
}

/// Draw the subtitle line
pub fn draw_subtitle(frame: &mut Frame, area: Rect, view: &ViewModel, style: &ResolvedStyle) {
    let color = mix(style.subtitle, style.subtitle_error, view.error_mix);
    draw_line(frame, area, &view.subtitle, color, view, style, Modifier::empty());
}

fn draw_line(
    frame: &mut Frame,
    area: Rect,
    text: &str,
    color: Color,
    view: &ViewModel,
    style: &ResolvedStyle,
    modifier: Modifier,
) {
    if area.is_empty() {
        return;
    }
    let opacity = view.title_opacity * view.content_opacity;
    let line = Paragraph::new(text.to_string())
        .style(
            Style::default()
                .fg(fade(color, style.background, opacity))
                .bg(style.background)
                .add_modifier(modifier),
        )
        .alignment(Alignment::Center);
    frame.render_widget(line, area);
}
