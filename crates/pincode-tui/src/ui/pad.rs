//! Pad composition: built-in or custom renderers for every part

use pincode_core::{Key, ViewModel};
use ratatui::prelude::*;
use ratatui::widgets::Block;

use super::components::{delete_button, indicators, keypad, title};
use super::layout::PadLayout;
use super::renderers::{DeleteCap, KeyCap, Renderers};
use super::style::ResolvedStyle;

/// Draw the pad into `area` and return where each key landed
pub fn draw(
    frame: &mut Frame,
    area: Rect,
    view: &ViewModel,
    style: &ResolvedStyle,
    renderers: &Renderers,
) -> PadLayout {
    frame.render_widget(Block::default().style(Style::default().bg(style.background)), area);
    let layout = PadLayout::compute(area, style);

    match &renderers.title {
        Some(render) => render(frame, layout.title, view),
        None => title::draw_title(frame, layout.title, view, style),
    }
    match &renderers.subtitle {
        Some(render) => render(frame, layout.subtitle, view),
        None => title::draw_subtitle(frame, layout.subtitle, view, style),
    }
    match &renderers.indicators {
        Some(render) => render(frame, layout.indicators, view),
        None => indicators::draw_indicators(frame, layout.indicators, view, style),
    }

    for (key, cell) in &layout.keys {
        if cell.is_empty() {
            continue;
        }
        match key {
            Key::Digit(digit) => {
                let cap = KeyCap {
                    digit: *digit,
                    selected: view.is_selected(*key),
                    enabled: view.keypad_enabled,
                    opacity: view.keypad_opacity,
                };
                match &renderers.button {
                    Some(render) => render(frame, *cell, &cap),
                    None => keypad::draw_button(frame, *cell, &cap, style),
                }
            }
            Key::Delete => {
                let cap = DeleteCap {
                    enabled: view.delete_enabled,
                    opacity: view.delete_opacity,
                    tint: view.delete_tint,
                };
                match &renderers.delete {
                    Some(render) => render(frame, *cell, &cap),
                    None => delete_button::draw_delete(frame, *cell, &cap, style),
                }
            }
        }
    }

    layout
}
