//! Move icon widget

use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, Widget};

use rps_core::Move;

use crate::theme::Theme;

/// Width and height of the drawn art, without the frame
pub const ICON_WIDTH: u16 = 9;
pub const ICON_HEIGHT: u16 = 4;

/// ASCII art for a move
pub fn icon_art(m: Move) -> [&'static str; ICON_HEIGHT as usize] {
    match m {
        Move::Rock => [
            "   ___   ",
            "  /   \\  ",
            " |     | ",
            "  \\___/  ",
        ],
        Move::Paper => [
            "  _____  ",
            " |~~~~~| ",
            " |~~~~~| ",
            " |_____| ",
        ],
        Move::Scissors => [
            " O    /  ",
            "  \\  /   ",
            "  /  \\   ",
            " O    \\  ",
        ],
    }
}

/// Keeps the styled art for the last move shown, rebuilding only when the
/// move changes.
#[derive(Debug, Clone)]
pub struct IconCache {
    shown: Move,
    lines: Vec<Line<'static>>,
}

impl IconCache {
    pub fn new(initial: Move, theme: &Theme) -> Self {
        Self {
            shown: initial,
            lines: Self::build(initial, theme),
        }
    }

    /// Switch to `m`. Returns true if the art had to be rebuilt.
    pub fn show(&mut self, m: Move, theme: &Theme) -> bool {
        if m == self.shown {
            return false;
        }
        self.shown = m;
        self.lines = Self::build(m, theme);
        true
    }

    pub fn shown(&self) -> Move {
        self.shown
    }

    pub fn lines(&self) -> &[Line<'static>] {
        &self.lines
    }

    fn build(m: Move, theme: &Theme) -> Vec<Line<'static>> {
        let style = Style::default().fg(theme.icon_color(m));
        icon_art(m)
            .iter()
            .map(|row| Line::styled(*row, style))
            .collect()
    }
}

/// Framed icon with a caption, e.g. "You" or "Computer"
pub struct MoveIconWidget<'a> {
    icon: &'a IconCache,
    caption: &'a str,
    theme: &'a Theme,
}

impl<'a> MoveIconWidget<'a> {
    pub fn new(icon: &'a IconCache, caption: &'a str, theme: &'a Theme) -> Self {
        Self {
            icon,
            caption,
            theme,
        }
    }
}

impl Widget for MoveIconWidget<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = Block::default()
            .title(format!(" {} ", self.caption))
            .borders(Borders::ALL)
            .border_style(Style::default().fg(self.theme.accent));
        let inner = block.inner(area);
        block.render(area, buf);

        for (row, line) in self.icon.lines().iter().enumerate() {
            let y = inner.y + row as u16;
            if y >= inner.bottom() {
                break;
            }
            buf.set_line(inner.x, y, line, inner.width);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_art_dimensions() {
        for m in Move::ALL {
            for row in icon_art(m) {
                assert_eq!(row.chars().count(), ICON_WIDTH as usize, "{m}: {row:?}");
            }
        }
    }

    #[test]
    fn test_cache_rebuilds_only_on_change() {
        let theme = Theme::dark();
        let mut cache = IconCache::new(Move::Rock, &theme);
        assert!(!cache.show(Move::Rock, &theme));
        assert!(cache.show(Move::Paper, &theme));
        assert_eq!(cache.shown(), Move::Paper);
        assert!(!cache.show(Move::Paper, &theme));
        assert_eq!(cache.lines().len(), ICON_HEIGHT as usize);
    }
}
