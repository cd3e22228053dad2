//! Layout helpers and the pad grid

use pincode_core::{Digit, Key, KEYPAD_ROWS};
use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, Paragraph};

use super::style::ResolvedStyle;
use super::Theme;

/// Rows used by title and subtitle
const TITLE_ROWS: u16 = 2;
/// Blank rows above and below the indicator row
const INDICATOR_MARGIN: u16 = 1;

/// Where each part of the pad lands inside an area
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PadLayout {
    pub title: Rect,
    pub subtitle: Rect,
    /// Full-width row; indicators are centred and shaken inside it
    pub indicators: Rect,
    /// Blank cell left of zero
    pub empty: Rect,
    /// Every key with its cell, digits 1-9 then 0 then delete
    pub keys: Vec<(Key, Rect)>,
}

impl PadLayout {
    /// Lay the pad out centred in `area`
    pub fn compute(area: Rect, style: &ResolvedStyle) -> Self {
        let (bw, bh) = (style.button_width, style.button_height);
        let (cs, rs) = (style.column_spacing, style.row_spacing);
        // Style values come from user config; keep every sum in range
        let grid_width = bw.saturating_mul(3).saturating_add(cs.saturating_mul(2));
        let grid_height = bh.saturating_mul(4).saturating_add(rs.saturating_mul(3));
        let total_height =
            (TITLE_ROWS + 1 + (2 * INDICATOR_MARGIN + 1)).saturating_add(grid_height);

        let top = area.y + area.height.saturating_sub(total_height) / 2;
        let row = |offset: u16| {
            Rect::new(area.x, top.saturating_add(offset), area.width, 1).intersection(area)
        };

        let title = row(0);
        let subtitle = row(1);
        let indicators = row(TITLE_ROWS + 1 + INDICATOR_MARGIN);

        let grid_x = area.x + area.width.saturating_sub(grid_width) / 2;
        let grid_y = top.saturating_add(TITLE_ROWS + 1 + 2 * INDICATOR_MARGIN + 1);
        let cell = |r: u16, c: u16| {
            let x = grid_x.saturating_add(c.saturating_mul(bw.saturating_add(cs)));
            let y = grid_y.saturating_add(r.saturating_mul(bh.saturating_add(rs)));
            Rect::new(x, y, bw, bh).intersection(area)
        };

        let mut keys = Vec::with_capacity(11);
        for (r, digits) in KEYPAD_ROWS.iter().enumerate() {
            for (c, value) in digits.iter().enumerate() {
                if let Ok(digit) = Digit::new(*value) {
                    keys.push((Key::Digit(digit), cell(r as u16, c as u16)));
                }
            }
        }
        keys.push((Key::Digit(Digit::ZERO), cell(3, 1)));
        keys.push((Key::Delete, cell(3, 2)));

        Self {
            title,
            subtitle,
            indicators,
            empty: cell(3, 0),
            keys,
        }
    }

    /// Key under a terminal cell
    pub fn key_at(&self, column: u16, row: u16) -> Option<Key> {
        self.keys
            .iter()
            .find(|(_, rect)| {
                column >= rect.x
                    && column < rect.x + rect.width
                    && row >= rect.y
                    && row < rect.y + rect.height
            })
            .map(|(key, _)| *key)
    }

    /// Cell of a key
    pub fn rect_of(&self, key: Key) -> Option<Rect> {
        self.keys.iter().find(|(k, _)| *k == key).map(|(_, r)| *r)
    }
}

/// Create a centered box for dialogs
pub fn centered_rect(percent_x: u16, percent_y: u16, area: Rect) -> Rect {
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(area);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
}

/// Render a standard footer with help hints
pub fn render_footer(frame: &mut Frame, area: Rect, hints: &[(&str, &str)], theme: &Theme) {
    let block = Block::default()
        .borders(Borders::TOP)
        .border_style(theme.border());

    let inner = block.inner(area);
    frame.render_widget(block, area);

    let hint_text: String = hints
        .iter()
        .map(|(key, action)| format!("[{}] {}", key, action))
        .collect::<Vec<_>>()
        .join("  ");

    let footer = Paragraph::new(hint_text)
        .style(theme.text_muted())
        .alignment(Alignment::Center);
    frame.render_widget(footer, inner);
}
