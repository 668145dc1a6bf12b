//! Key hint bar

use ratatui::prelude::*;
use ratatui::widgets::Widget;
use strum::IntoEnumIterator;

use rps_core::Move;

use crate::theme::Theme;

/// Widget listing the key bindings, one row for moves and one for controls
pub struct ControlsWidget<'a> {
    theme: &'a Theme,
}

impl<'a> ControlsWidget<'a> {
    pub fn new(theme: &'a Theme) -> Self {
        Self { theme }
    }

    fn move_hints() -> String {
        Move::iter()
            .map(|m| format!("[{}] {}", m.shortcut(), capitalize(&m.to_string())))
            .collect::<Vec<_>>()
            .join("   ")
    }
}

const CONTROL_HINTS: &str = "[n] Reset Scores   [c] Clear High Scores   [q] Quit";

fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

impl Widget for ControlsWidget<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let key_style = Style::default().fg(self.theme.text);
        let hint_style = Style::default().fg(self.theme.text_dim);
        let rows = [(Self::move_hints(), key_style), (CONTROL_HINTS.to_string(), hint_style)];

        for (row, (text, style)) in rows.iter().enumerate() {
            if row as u16 >= area.height {
                break;
            }
            let width = text.chars().count() as u16;
            let x = area.x + area.width.saturating_sub(width) / 2;
            buf.set_stringn(x, area.y + row as u16, text, area.width as usize, *style);
        }
    }
}
